//! The init patch.
//!
//! Injects a single static call to the mod hook at the tail of the game's
//! initialization routine. Inserting before a return (rather than at method
//! entry) guarantees the game's own initialization completed normally before
//! mod code runs, so mods may safely reference fully constructed game state.
//!
//! When multiple return paths exist, the injection targets the last return
//! whose opcode matches the method's declared return type. This is a known
//! simplification: the hook fires on one code path only. The target method
//! has exactly one return today.

use tracing::debug;

use crate::{
    bytecode::{opcodes, return_opcode, Insn, MethodNode},
    host::{ClassEmitter, ClassSource, GamePatch, Launcher},
    Error, Result,
};

/// Namespace gate: only entrypoints inside the game's package are patched.
///
/// This prevents accidental patching when the host reconfigures entrypoints.
pub const GAME_NAMESPACE: &str = "finalforeach.cosmicreach.";

/// Name of the post-construction initialization method the patch targets.
pub const INIT_METHOD: &str = "create";

/// Internal (slash-form) name of the class owning the injected hook.
pub const HOOKS_INTERNAL_NAME: &str = "cosmicprovider/hooks/CosmicHooks";

/// Name of the injected hook method.
pub const HOOKS_METHOD: &str = "init";

/// Descriptor of the injected hook method: static, nullary, void, so the call
/// site does not disturb the operand stack.
pub const HOOKS_DESC: &str = "()V";

/// Bytecode patch wiring the mod hook into the game's initialization routine.
///
/// Stateless and shared process-wide; safe to treat as an immutable value.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrInitPatch;

impl GamePatch for CrInitPatch {
    fn process(
        &self,
        launcher: &dyn Launcher,
        class_source: &mut ClassSource<'_>,
        class_emitter: &mut ClassEmitter<'_>,
    ) -> Result<()> {
        let entrypoint = launcher.entrypoint().to_string();

        if !entrypoint.starts_with(GAME_NAMESPACE) {
            return Ok(());
        }

        let Some(mut main_class) = class_source(&entrypoint)? else {
            return Err(Error::MissingClass(entrypoint));
        };

        let class_name = main_class.name.clone();
        let Some(init_method) = main_class.method_mut(INIT_METHOD) else {
            return Err(Error::MissingMethod {
                method: INIT_METHOD.to_string(),
                class: entrypoint,
            });
        };

        debug!(
            "Found \"{}\" method: {} -> {}",
            INIT_METHOD, entrypoint, class_name
        );
        debug!(
            "Patching \"{}\" method {}{}",
            INIT_METHOD, init_method.name, init_method.desc
        );

        inject_tail_insn(
            init_method,
            Insn::method(
                opcodes::INVOKESTATIC,
                HOOKS_INTERNAL_NAME,
                HOOKS_METHOD,
                HOOKS_DESC,
            ),
        )?;

        class_emitter(main_class);
        Ok(())
    }
}

/// Insert `injected` immediately before the last return instruction whose opcode
/// matches the method's declared return type.
///
/// The expected opcode is derived from the descriptor, never assumed, so the
/// injection keeps working if the target's signature ever changes. Only
/// operand-free instructions are considered return candidates.
///
/// ## Arguments
/// * 'method'   - The method to patch
/// * 'injected' - The instruction to insert
///
/// # Errors
/// [`Error::MissingReturn`] if no matching return exists;
/// [`Error::MalformedDescriptor`] if the method descriptor cannot be parsed.
fn inject_tail_insn(method: &mut MethodNode, injected: Insn) -> Result<()> {
    let expected = return_opcode(&method.desc)?;

    let mut target = None;
    for (index, insn) in method.instructions.iter().enumerate() {
        if let Insn::Simple { opcode } = insn {
            if *opcode == expected {
                target = Some(index);
            }
        }
    }

    let Some(index) = target else {
        return Err(Error::MissingReturn);
    };

    method.instructions.insert_before(index, injected);
    Ok(())
}
