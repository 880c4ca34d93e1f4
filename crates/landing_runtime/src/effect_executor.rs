//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::LandingRuntimeContext;

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: LandingRuntimeContext) {
    create_effect(move |_| {
        runtime.effects.track();
        drain(runtime);
    });
}

/// Runs every queued effect in order and leaves the queue empty.
pub(crate) fn drain(runtime: LandingRuntimeContext) {
    let queued = runtime.effects.get_untracked();
    if queued.is_empty() {
        return;
    }

    // Clear the queue before running so effects that dispatch enqueue a fresh batch.
    runtime.effects.set(Vec::new());

    let host = runtime.host.get_value();
    for effect in queued {
        host.run_runtime_effect(runtime, effect);
    }
}
