use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{donation::Donations, error::AppError};
use crate::services::api::fetch_donations;

/// Fixed message for a failed donations fetch.
pub const DONATIONS_ERROR_MESSAGE: &str = "Unable to load recent donations.";

#[derive(Clone, PartialEq, Debug)]
pub enum DonationsState {
    Loading,
    Loaded(Rc<Donations>),
    Error(String),
}

impl DonationsState {
    /// Returns the donations if they are loaded
    pub fn data(&self) -> Option<&Rc<Donations>> {
        match self {
            Self::Loaded(donations) => Some(donations),
            _ => None,
        }
    }

    /// Settles a fetch outcome into a terminal state.
    pub fn from_fetch_result(result: Result<Donations, AppError>) -> Self {
        match result {
            Ok(donations) => Self::Loaded(Rc::new(donations)),
            Err(_) => Self::Error(DONATIONS_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Loads the donations feed once per mount, with the same settle-once and
/// unmount-guard contract as the summary loader.
#[hook]
pub fn use_donations() -> UseStateHandle<DonationsState> {
    let state = use_state(|| DonationsState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let result = fetch_donations().await;
                if aborted_check.get() {
                    return;
                }

                if let Err(e) = &result {
                    gloo::console::error!(format!("Donations fetch failed: {e}"));
                }
                state.set(DonationsState::from_fetch_result(result));
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
