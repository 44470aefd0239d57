//! Class, method, and instruction nodes.
//!
//! The node types form the mutable tree the transformer works on. A [`ClassNode`] is
//! borrowed from the host for the duration of a transformation callback and returned
//! through the emitter; nothing here touches the class-file binary form.

use bitflags::bitflags;

bitflags! {
    /// Class access and property flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClassAccess: u16 {
        /// Declared public; may be accessed from outside its package
        const PUBLIC = 0x0001;
        /// Declared final; no subclasses allowed
        const FINAL = 0x0010;
        /// Treat superclass methods specially when invoked
        const SUPER = 0x0020;
        /// Is an interface, not a class
        const INTERFACE = 0x0200;
        /// Declared abstract; must not be instantiated
        const ABSTRACT = 0x0400;
    }
}

bitflags! {
    /// Method access and property flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MethodAccess: u16 {
        /// Declared public; may be accessed from outside its package
        const PUBLIC = 0x0001;
        /// Declared private; accessible only within the defining class
        const PRIVATE = 0x0002;
        /// Declared protected; may be accessed within subclasses
        const PROTECTED = 0x0004;
        /// Declared static
        const STATIC = 0x0008;
        /// Declared final; must not be overridden
        const FINAL = 0x0010;
        /// Declared synchronized; invocation is wrapped by a monitor
        const SYNCHRONIZED = 0x0020;
        /// Declared native; implemented in a language other than the game's
        const NATIVE = 0x0100;
        /// Declared abstract; no implementation is provided
        const ABSTRACT = 0x0400;
    }
}

/// One instruction inside a method body.
///
/// Operands are carried per variant; the tail injection only distinguishes
/// operand-free instructions (where the returns live) from everything else,
/// but call and variable instructions are modeled so that realistic bodies
/// can be represented and so injected call sites have somewhere to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insn {
    /// An operand-free instruction, e.g. `nop` or any of the returns
    Simple {
        /// The instruction's opcode
        opcode: u8,
    },
    /// A method invocation instruction
    Method {
        /// The instruction's opcode, e.g. `INVOKESTATIC`
        opcode: u8,
        /// Internal (slash-form) name of the class owning the target method
        owner: String,
        /// Name of the target method
        name: String,
        /// Descriptor of the target method
        desc: String,
    },
    /// A local-variable load or store instruction
    Var {
        /// The instruction's opcode, e.g. `ALOAD`
        opcode: u8,
        /// Index of the local variable
        index: u16,
    },
}

impl Insn {
    /// Create an operand-free instruction.
    #[must_use]
    pub fn simple(opcode: u8) -> Insn {
        Insn::Simple { opcode }
    }

    /// Create a static-call instruction.
    ///
    /// ## Arguments
    /// * 'opcode' - The invocation opcode
    /// * 'owner'  - Internal name of the owning class
    /// * 'name'   - Target method name
    /// * 'desc'   - Target method descriptor
    #[must_use]
    pub fn method(opcode: u8, owner: &str, name: &str, desc: &str) -> Insn {
        Insn::Method {
            opcode,
            owner: owner.to_string(),
            name: name.to_string(),
            desc: desc.to_string(),
        }
    }

    /// The opcode of this instruction, regardless of variant.
    #[must_use]
    pub fn opcode(&self) -> u8 {
        match self {
            Insn::Simple { opcode } | Insn::Var { opcode, .. } | Insn::Method { opcode, .. } => {
                *opcode
            }
        }
    }
}

/// The ordered instruction sequence of a method body.
///
/// Supports the two operations transformation needs: forward iteration to find
/// an injection point, and insertion immediately before a chosen position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsnList {
    insns: Vec<Insn>,
}

impl InsnList {
    /// Create an empty instruction list.
    #[must_use]
    pub fn new() -> InsnList {
        InsnList { insns: Vec::new() }
    }

    /// Append an instruction at the end of the list.
    pub fn push(&mut self, insn: Insn) {
        self.insns.push(insn);
    }

    /// Insert an instruction immediately before the one at `index`.
    ///
    /// ## Arguments
    /// * 'index' - Position of the instruction to insert before (must be in range)
    /// * 'insn'  - The instruction to insert
    ///
    /// # Panics
    /// Panics if `index > len()`, matching `Vec::insert` semantics.
    pub fn insert_before(&mut self, index: usize, insn: Insn) {
        self.insns.insert(index, insn);
    }

    /// Number of instructions in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.insns.len()
    }

    /// Returns `true` if the list contains no instructions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.insns.is_empty()
    }

    /// The instruction at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Insn> {
        self.insns.get(index)
    }

    /// Iterate over the instructions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Insn> {
        self.insns.iter()
    }
}

impl<'a> IntoIterator for &'a InsnList {
    type Item = &'a Insn;
    type IntoIter = std::slice::Iter<'a, Insn>;

    fn into_iter(self) -> Self::IntoIter {
        self.insns.iter()
    }
}

impl FromIterator<Insn> for InsnList {
    fn from_iter<T: IntoIterator<Item = Insn>>(iter: T) -> InsnList {
        InsnList {
            insns: iter.into_iter().collect(),
        }
    }
}

/// A method definition inside a class node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNode {
    /// Access and property flags
    pub access: MethodAccess,
    /// Method name
    pub name: String,
    /// Method descriptor, e.g. `"()V"`
    pub desc: String,
    /// The method body's instruction sequence (empty for abstract/native methods)
    pub instructions: InsnList,
}

impl MethodNode {
    /// Create a public method node.
    ///
    /// ## Arguments
    /// * 'name'         - Method name
    /// * 'desc'         - Method descriptor
    /// * 'instructions' - The body's instruction sequence
    #[must_use]
    pub fn new(name: &str, desc: &str, instructions: InsnList) -> MethodNode {
        MethodNode {
            access: MethodAccess::PUBLIC,
            name: name.to_string(),
            desc: desc.to_string(),
            instructions,
        }
    }
}

/// A single class as a mutable tree of method definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    /// Internal (slash-form) name, e.g. `"finalforeach/cosmicreach/lwjgl3/Lwjgl3Launcher"`
    pub name: String,
    /// Access and property flags
    pub access: ClassAccess,
    /// The class's method definitions
    pub methods: Vec<MethodNode>,
}

impl ClassNode {
    /// Create a public class node with no methods.
    ///
    /// ## Arguments
    /// * 'name' - Internal (slash-form) class name
    #[must_use]
    pub fn new(name: &str) -> ClassNode {
        ClassNode {
            name: name.to_string(),
            access: ClassAccess::PUBLIC | ClassAccess::SUPER,
            methods: Vec::new(),
        }
    }

    /// The first method with the given name, if any.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&MethodNode> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Mutable access to the first method with the given name, if any.
    pub fn method_mut(&mut self, name: &str) -> Option<&mut MethodNode> {
        self.methods.iter_mut().find(|m| m.name == name)
    }
}
