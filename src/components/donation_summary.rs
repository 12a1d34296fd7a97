use std::rc::Rc;
use yew::prelude::*;

use crate::models::summary::ImpactSummary;

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub label: String,
    pub value: String,
    pub caption: String,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    html! {
        <div class="metric-card">
            <div class="metric-label">{&props.label}</div>
            <div class="metric-value">{&props.value}</div>
            <div class="metric-caption">{&props.caption}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DonationSummaryProps {
    pub summary: Rc<ImpactSummary>,
}

/// The three headline metric cards of the impact overview.
#[function_component(DonationSummary)]
pub fn donation_summary(props: &DonationSummaryProps) -> Html {
    let summary = &props.summary;

    html! {
        <div class="metrics-grid">
            <MetricCard
                label="Total Donations"
                value={summary.formatted_total()}
                caption="Combined support received across all active programs."
            />
            <MetricCard
                label="Number of Donations"
                value={summary.donation_count.to_string()}
                caption="Individual contributions recorded in the current dataset."
            />
            <MetricCard
                label="Active Programs"
                value={summary.active_programs.to_string()}
                caption="Ongoing initiatives currently serving communities."
            />
        </div>
    }
}
