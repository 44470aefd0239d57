//! Method descriptor parsing.
//!
//! A method descriptor has the form `(<parameter types>)<return type>`, e.g. `(I[J)V`.
//! The tail injection only needs the return type, and only to pick the matching return
//! opcode, so this module parses exactly that - it does not validate parameter lists.

use crate::{bytecode::opcodes, Error, Result};

/// Derive the return opcode for a method from its descriptor.
///
/// The opcode is computed from the declared return type rather than assumed, so the
/// injection keeps working if the target method's signature ever changes:
///
/// | Return type              | Opcode    |
/// |--------------------------|-----------|
/// | `V`                      | `RETURN`  |
/// | `I`, `Z`, `B`, `C`, `S`  | `IRETURN` |
/// | `J`                      | `LRETURN` |
/// | `F`                      | `FRETURN` |
/// | `D`                      | `DRETURN` |
/// | `L...;`, `[...`          | `ARETURN` |
///
/// ## Arguments
/// * 'desc' - The method descriptor, e.g. `"()V"` or `"(Ljava/lang/String;)I"`
///
/// # Errors
/// [`Error::MalformedDescriptor`] if the descriptor has no closing parenthesis or an
/// unrecognized return type.
///
/// # Example
/// ```rust
/// use cosmic_provider::bytecode::{opcodes, return_opcode};
///
/// assert_eq!(return_opcode("()V")?, opcodes::RETURN);
/// assert_eq!(return_opcode("(IJ)J")?, opcodes::LRETURN);
/// # Ok::<(), cosmic_provider::Error>(())
/// ```
pub fn return_opcode(desc: &str) -> Result<u8> {
    let Some((_, ret)) = desc.split_once(')') else {
        return Err(Error::MalformedDescriptor(desc.to_string()));
    };

    match ret.as_bytes().first() {
        Some(b'V') => Ok(opcodes::RETURN),
        Some(b'I' | b'Z' | b'B' | b'C' | b'S') => Ok(opcodes::IRETURN),
        Some(b'J') => Ok(opcodes::LRETURN),
        Some(b'F') => Ok(opcodes::FRETURN),
        Some(b'D') => Ok(opcodes::DRETURN),
        Some(b'L') if ret.ends_with(';') => Ok(opcodes::ARETURN),
        Some(b'[') => Ok(opcodes::ARETURN),
        _ => Err(Error::MalformedDescriptor(desc.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_returns() {
        assert_eq!(return_opcode("()V").unwrap(), opcodes::RETURN);
        assert_eq!(return_opcode("()I").unwrap(), opcodes::IRETURN);
        assert_eq!(return_opcode("()Z").unwrap(), opcodes::IRETURN);
        assert_eq!(return_opcode("()S").unwrap(), opcodes::IRETURN);
        assert_eq!(return_opcode("(F)J").unwrap(), opcodes::LRETURN);
        assert_eq!(return_opcode("()F").unwrap(), opcodes::FRETURN);
        assert_eq!(return_opcode("(Ljava/lang/String;)D").unwrap(), opcodes::DRETURN);
    }

    #[test]
    fn reference_returns() {
        assert_eq!(
            return_opcode("()Ljava/lang/String;").unwrap(),
            opcodes::ARETURN
        );
        assert_eq!(return_opcode("([Ljava/lang/String;)[I").unwrap(), opcodes::ARETURN);
        assert_eq!(return_opcode("()[[J").unwrap(), opcodes::ARETURN);
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            return_opcode("()"),
            Err(Error::MalformedDescriptor(_))
        ));
        assert!(matches!(
            return_opcode("V"),
            Err(Error::MalformedDescriptor(_))
        ));
        assert!(matches!(
            return_opcode("()Ljava/lang/String"),
            Err(Error::MalformedDescriptor(_))
        ));
        assert!(matches!(
            return_opcode("()Q"),
            Err(Error::MalformedDescriptor(_))
        ));
    }
}
