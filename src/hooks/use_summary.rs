use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{error::AppError, summary::ImpactSummary};
use crate::services::api::fetch_impact_summary;

/// Message shown when the summary cannot be loaded, whatever the cause.
/// Backend detail goes to the console log, never to the user.
pub const SUMMARY_ERROR_MESSAGE: &str = "Unable to load impact data.";

#[derive(Clone, PartialEq, Debug)]
pub enum SummaryState {
    Loading,
    Loaded(Rc<ImpactSummary>),
    Error(String),
}

impl SummaryState {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the summary if it is loaded
    pub fn data(&self) -> Option<&Rc<ImpactSummary>> {
        match self {
            Self::Loaded(summary) => Some(summary),
            _ => None,
        }
    }

    /// Settles a fetch outcome into a terminal state. Network errors, error
    /// statuses and parse failures all collapse into the same fixed message.
    pub fn from_fetch_result(result: Result<ImpactSummary, AppError>) -> Self {
        match result {
            Ok(summary) => Self::Loaded(Rc::new(summary)),
            Err(_) => Self::Error(SUMMARY_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Loads the impact summary once per mount.
///
/// The state starts as `Loading` and settles exactly once, to `Loaded` or
/// `Error`. If the component unmounts before the response arrives, the
/// aborted flag suppresses the late state write; the request itself is not
/// cancelled at the transport level.
#[hook]
pub fn use_impact_summary() -> UseStateHandle<SummaryState> {
    let state = use_state(|| SummaryState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let result = fetch_impact_summary().await;
                if aborted_check.get() {
                    return; // Unmounted while in flight, discard result
                }

                if let Err(e) = &result {
                    gloo::console::error!(format!("Impact summary fetch failed: {e}"));
                }
                state.set(SummaryState::from_fetch_result(result));
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
