use yew::prelude::*;

use crate::components::impact_dashboard::ImpactDashboard;
use crate::components::recent_donations::RecentDonations;
use crate::components::status_pill::BackendStatusPill;
use crate::components::theme_toggle::ThemeToggle;

/// Root component: page shell around the dashboard sections.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="app-container">
            <header class="shell-header">
                <div class="shell-heading">
                    <h1 class="shell-title">{"Foundation Portal"}</h1>
                    <p class="shell-subtitle">
                        {"Transparent impact overview for donors and stakeholders."}
                    </p>
                </div>
                <ThemeToggle />
            </header>

            <main class="shell-body">
                <section class="impact-section">
                    <div class="section-header">
                        <h2 class="section-title">{"Impact Dashboard"}</h2>
                        <BackendStatusPill />
                    </div>
                    <ImpactDashboard />
                </section>

                <section class="donations-section">
                    <h2 class="section-title">{"Recent Donations"}</h2>
                    <RecentDonations />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
