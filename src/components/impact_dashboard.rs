use yew::prelude::*;

use crate::components::donation_summary::DonationSummary;
use crate::hooks::use_summary::{SummaryState, use_impact_summary};

/// Impact overview section: drives the three metric cards off the summary
/// loader's state.
#[function_component(ImpactDashboard)]
pub fn impact_dashboard() -> Html {
    let state = use_impact_summary();

    match &*state {
        SummaryState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading impact data..."}</p>
            </div>
        },
        SummaryState::Error(msg) => html! {
            <div class="status error">
                <p>{msg}</p>
            </div>
        },
        SummaryState::Loaded(summary) => html! {
            <>
                <DonationSummary summary={summary.clone()} />
                <p class="helper-text">
                    {"This snapshot reflects the current "}
                    <span class="helper-highlight">{"donor support"}</span>
                    {" and "}
                    <span class="helper-highlight">{"active programs"}</span>
                    {" across the foundation's initiatives."}
                </p>
            </>
        },
    }
}
