pub mod use_donations;
pub mod use_health;
pub mod use_summary;
pub mod use_theme;
