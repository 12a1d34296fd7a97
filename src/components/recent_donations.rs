use yew::prelude::*;

use crate::hooks::use_donations::{DonationsState, use_donations};
use crate::models::donation::Donation;

/// Feed of the latest recorded donations.
#[function_component(RecentDonations)]
pub fn recent_donations() -> Html {
    let state = use_donations();

    match &*state {
        DonationsState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading donations..."}</p>
            </div>
        },
        DonationsState::Error(msg) => html! {
            <div class="status error">
                <p>{msg}</p>
            </div>
        },
        DonationsState::Loaded(donations) if donations.is_empty() => html! {
            <p class="empty-feed">{"No donations recorded yet."}</p>
        },
        DonationsState::Loaded(donations) => html! {
            <ul class="donation-feed">
                {
                    donations.newest_first().iter().map(donation_row).collect::<Html>()
                }
            </ul>
        },
    }
}

fn donation_row(donation: &Donation) -> Html {
    html! {
        <li class="donation-row" key={donation.id}>
            <div class="donation-main">
                <span class="donation-donor">{donation.display_donor()}</span>
                <span class="donation-program">{&donation.program.name}</span>
            </div>
            <div class="donation-meta">
                <span class="donation-amount">{donation.formatted_amount()}</span>
                <span class="donation-date">{donation.formatted_date()}</span>
            </div>
        </li>
    }
}
