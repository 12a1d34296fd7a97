use yew::prelude::*;

use crate::hooks::use_health::{BackendStatus, use_backend_status};

/// Pill indicating whether the backend answered the liveness probe.
#[function_component(BackendStatusPill)]
pub fn backend_status_pill() -> Html {
    let status = use_backend_status();

    let (modifier, label) = match *status {
        BackendStatus::Checking => ("checking", "Checking backend..."),
        BackendStatus::Online => ("online", "Live data from backend"),
        BackendStatus::Offline => ("offline", "Backend unavailable"),
    };

    html! {
        <div class={format!("status-pill {modifier}")}>
            <span class="status-dot" />
            {label}
        </div>
    }
}
