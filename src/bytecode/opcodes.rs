//! Opcode constants for the instruction model.
//!
//! Only the opcodes the provider actually reasons about are defined: the six
//! typed returns the tail injection scans for, the invocation opcodes used by
//! injected and surrounding call sites, and a handful of common body opcodes.
//! Values follow the class-file specification.

/// Do nothing
pub const NOP: u8 = 0x00;
/// Push int constant 0
pub const ICONST_0: u8 = 0x03;
/// Push int constant 1
pub const ICONST_1: u8 = 0x04;
/// Load int from local variable
pub const ILOAD: u8 = 0x15;
/// Load reference from local variable
pub const ALOAD: u8 = 0x19;
/// Store reference into local variable
pub const ASTORE: u8 = 0x3A;
/// Branch always
pub const GOTO: u8 = 0xA7;
/// Return int from method
pub const IRETURN: u8 = 0xAC;
/// Return long from method
pub const LRETURN: u8 = 0xAD;
/// Return float from method
pub const FRETURN: u8 = 0xAE;
/// Return double from method
pub const DRETURN: u8 = 0xAF;
/// Return reference from method
pub const ARETURN: u8 = 0xB0;
/// Return void from method
pub const RETURN: u8 = 0xB1;
/// Invoke instance method, dispatch based on class
pub const INVOKEVIRTUAL: u8 = 0xB6;
/// Invoke class (static) method
pub const INVOKESTATIC: u8 = 0xB8;

/// Returns `true` if `opcode` is one of the six typed return opcodes.
#[must_use]
pub fn is_return(opcode: u8) -> bool {
    (IRETURN..=RETURN).contains(&opcode)
}
