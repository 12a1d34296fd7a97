pub mod donation_summary;
pub mod impact_dashboard;
pub mod recent_donations;
pub mod status_pill;
pub mod theme_toggle;

pub use donation_summary::DonationSummary;
pub use status_pill::BackendStatusPill;
pub use theme_toggle::ThemeToggle;
