//! Entrypoint transformation tests: namespace gating, tail injection placement,
//! and the fatal patch failure modes.

use std::path::{Path, PathBuf};

use cosmic_provider::{
    bytecode::{opcodes, ClassNode, Insn, InsnList, MethodNode},
    game::patch::{CrInitPatch, HOOKS_DESC, HOOKS_INTERNAL_NAME, HOOKS_METHOD},
    host::{Env, GamePatch, GameTransformer, Launcher},
    Error,
};

struct MockLauncher {
    entrypoint: String,
}

impl MockLauncher {
    fn new(entrypoint: &str) -> MockLauncher {
        MockLauncher {
            entrypoint: entrypoint.to_string(),
        }
    }
}

impl Launcher for MockLauncher {
    fn env_type(&self) -> Env {
        Env::Client
    }

    fn entrypoint(&self) -> &str {
        &self.entrypoint
    }

    fn set_valid_parent_class_path(&mut self, _paths: Vec<PathBuf>) {}

    fn add_to_class_path(&mut self, _path: &Path) {}
}

const ENTRYPOINT: &str = "finalforeach.cosmicreach.lwjgl3.Lwjgl3Launcher";
const ENTRYPOINT_INTERNAL: &str = "finalforeach/cosmicreach/lwjgl3/Lwjgl3Launcher";

fn launcher_class(create_body: Vec<Insn>) -> ClassNode {
    let mut class = ClassNode::new(ENTRYPOINT_INTERNAL);
    class.methods.push(MethodNode::new(
        "main",
        "([Ljava/lang/String;)V",
        vec![Insn::simple(opcodes::RETURN)].into_iter().collect(),
    ));
    class.methods.push(MethodNode::new(
        "create",
        "()V",
        create_body.into_iter().collect::<InsnList>(),
    ));
    class
}

fn hook_calls(class: &ClassNode, method: &str) -> usize {
    class
        .method(method)
        .unwrap()
        .instructions
        .iter()
        .filter(|insn| {
            matches!(
                insn,
                Insn::Method { opcode, owner, name, desc }
                    if *opcode == opcodes::INVOKESTATIC
                        && owner == HOOKS_INTERNAL_NAME
                        && name == HOOKS_METHOD
                        && desc == HOOKS_DESC
            )
        })
        .count()
}

fn run_patch(
    entrypoint: &str,
    class: Option<ClassNode>,
) -> (cosmic_provider::Result<()>, Vec<ClassNode>, usize) {
    let launcher = MockLauncher::new(entrypoint);
    let mut resolved = 0;
    let mut emitted: Vec<ClassNode> = Vec::new();

    let result = {
        let mut source = |_name: &str| -> cosmic_provider::Result<Option<ClassNode>> {
            resolved += 1;
            Ok(class.clone())
        };
        let mut emitter = |node: ClassNode| emitted.push(node);
        CrInitPatch.process(&launcher, &mut source, &mut emitter)
    };

    (result, emitted, resolved)
}

#[test]
fn injects_single_hook_call_before_sole_return() {
    let (result, emitted, _) = run_patch(
        ENTRYPOINT,
        Some(launcher_class(vec![Insn::simple(opcodes::RETURN)])),
    );

    result.unwrap();
    assert_eq!(emitted.len(), 1);

    let create = emitted[0].method("create").unwrap();
    assert_eq!(create.instructions.len(), 2);
    assert_eq!(hook_calls(&emitted[0], "create"), 1);
    assert_eq!(
        create.instructions.get(0).unwrap().opcode(),
        opcodes::INVOKESTATIC
    );
    assert_eq!(create.instructions.get(1).unwrap().opcode(), opcodes::RETURN);

    // Other methods are untouched.
    assert_eq!(hook_calls(&emitted[0], "main"), 0);
}

#[test]
fn hook_call_count_increases_by_exactly_one() {
    // The body already contains a hook call; the patch must add exactly one more.
    let body = vec![
        Insn::method(
            opcodes::INVOKESTATIC,
            HOOKS_INTERNAL_NAME,
            HOOKS_METHOD,
            HOOKS_DESC,
        ),
        Insn::simple(opcodes::NOP),
        Insn::simple(opcodes::RETURN),
    ];
    let original = launcher_class(body);
    let before = hook_calls(&original, "create");

    let (result, emitted, _) = run_patch(ENTRYPOINT, Some(original));

    result.unwrap();
    assert_eq!(hook_calls(&emitted[0], "create"), before + 1);
}

#[test]
fn injection_precedes_last_matching_return() {
    let body = vec![
        Insn::simple(opcodes::RETURN),
        Insn::Var {
            opcode: opcodes::ALOAD,
            index: 0,
        },
        Insn::method(opcodes::INVOKEVIRTUAL, "some/Owner", "dispose", "()V"),
        Insn::simple(opcodes::RETURN),
    ];

    let (result, emitted, _) = run_patch(ENTRYPOINT, Some(launcher_class(body)));

    result.unwrap();
    let create = emitted[0].method("create").unwrap();
    assert_eq!(create.instructions.len(), 5);
    // The first return is untouched; the call lands right before the last one.
    assert_eq!(create.instructions.get(0).unwrap().opcode(), opcodes::RETURN);
    assert_eq!(
        create.instructions.get(3).unwrap().opcode(),
        opcodes::INVOKESTATIC
    );
    assert_eq!(create.instructions.get(4).unwrap().opcode(), opcodes::RETURN);
}

#[test]
fn foreign_namespace_is_left_alone() {
    let (result, emitted, resolved) = run_patch(
        "com.example.SomethingElse",
        Some(launcher_class(vec![Insn::simple(opcodes::RETURN)])),
    );

    result.unwrap();
    assert!(emitted.is_empty());
    // The gate fires before any class is resolved.
    assert_eq!(resolved, 0);
}

#[test]
fn unresolvable_entrypoint_is_fatal() {
    let (result, emitted, resolved) = run_patch(ENTRYPOINT, None);

    assert!(matches!(result, Err(Error::MissingClass(class)) if class == ENTRYPOINT));
    assert!(emitted.is_empty());
    assert_eq!(resolved, 1);
}

#[test]
fn missing_create_is_fatal() {
    let mut class = ClassNode::new(ENTRYPOINT_INTERNAL);
    class.methods.push(MethodNode::new(
        "main",
        "([Ljava/lang/String;)V",
        vec![Insn::simple(opcodes::RETURN)].into_iter().collect(),
    ));

    let (result, emitted, _) = run_patch(ENTRYPOINT, Some(class));

    assert!(matches!(
        result,
        Err(Error::MissingMethod { method, class })
            if method == "create" && class == ENTRYPOINT
    ));
    assert!(emitted.is_empty());
}

#[test]
fn returnless_create_is_fatal() {
    let body = vec![Insn::simple(opcodes::NOP)];
    let (result, emitted, _) = run_patch(ENTRYPOINT, Some(launcher_class(body)));

    assert!(matches!(result, Err(Error::MissingReturn)));
    assert!(emitted.is_empty());
}

#[test]
fn transformer_routes_through_registered_patch() {
    let transformer = GameTransformer::new(vec![Box::new(CrInitPatch)]);
    let launcher = MockLauncher::new(ENTRYPOINT);
    let class = launcher_class(vec![Insn::simple(opcodes::RETURN)]);

    let mut emitted: Vec<ClassNode> = Vec::new();
    {
        let mut source = |_name: &str| -> cosmic_provider::Result<Option<ClassNode>> {
            Ok(Some(class.clone()))
        };
        let mut emitter = |node: ClassNode| emitted.push(node);
        transformer
            .process(&launcher, &mut source, &mut emitter)
            .unwrap();
    }

    assert_eq!(emitted.len(), 1);
    assert_eq!(hook_calls(&emitted[0], "create"), 1);
}
