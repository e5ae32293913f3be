use crate::error::DashboardError;
use crate::mvu::panel::{Deps, Msg, PanelModel, run_effect, update};

/// Feeds `msgs` through `update` and drains the resulting effects until the
/// model settles.
///
/// # Errors
///
/// Stops at the first failing effect and returns its error.
pub fn run_panel(
    model: &mut PanelModel,
    msgs: Vec<Msg>,
    deps: Deps<'_>,
) -> Result<(), DashboardError> {
    let mut effects = Vec::new();
    for msg in msgs {
        effects.extend(update(model, msg));
    }
    // Several inputs can each request a recompute; one pass over the final inputs is enough.
    effects.dedup();
    while let Some(effect) = effects.pop() {
        let msg = run_effect(effect, model, deps)?;
        effects.extend(update(model, msg));
    }
    Ok(())
}
