//! Mutable class tree, instruction model, and descriptor parsing.
//!
//! This module models a compiled class as the transformation phase sees it: a
//! [`ClassNode`] owning a list of [`MethodNode`]s, each holding an ordered [`InsnList`]
//! of [`Insn`] values. The transformer reads opcodes, inserts new instruction nodes
//! before selected positions, and hands the mutated tree back to the host's emitter.
//!
//! # Key Types
//! - [`ClassNode`] - A single class as a mutable tree
//! - [`MethodNode`] - A method definition with access flags, descriptor, and body
//! - [`Insn`] / [`InsnList`] - The instruction sequence inside a method body
//!
//! # Main Functions
//! - [`return_opcode`] - Derive the return opcode from a method descriptor
//!
//! # Example
//! ```rust
//! use cosmic_provider::bytecode::{opcodes, return_opcode, Insn, InsnList, MethodNode};
//!
//! let mut body = InsnList::new();
//! body.push(Insn::simple(opcodes::RETURN));
//!
//! let method = MethodNode::new("create", "()V", body);
//! assert_eq!(return_opcode(&method.desc)?, opcodes::RETURN);
//! # Ok::<(), cosmic_provider::Error>(())
//! ```

mod descriptor;
mod node;
pub mod opcodes;

pub use descriptor::return_opcode;
pub use node::{ClassAccess, ClassNode, Insn, InsnList, MethodAccess, MethodNode};
