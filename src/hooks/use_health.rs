use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::check_backend_health;

/// Outcome of the one-shot backend liveness probe.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BackendStatus {
    Checking,
    Online,
    Offline,
}

/// Probes the backend health endpoint once per mount.
///
/// A failed probe settles `Offline` and logs a warning; the pill it drives
/// is informational, so no error surface exists here.
#[hook]
pub fn use_backend_status() -> UseStateHandle<BackendStatus> {
    let state = use_state(|| BackendStatus::Checking);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let result = check_backend_health().await;
                if aborted_check.get() {
                    return;
                }

                match result {
                    Ok(()) => state.set(BackendStatus::Online),
                    Err(e) => {
                        gloo::console::warn!(format!("Health probe failed: {e}"));
                        state.set(BackendStatus::Offline);
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
