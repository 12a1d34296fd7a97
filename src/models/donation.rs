use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// Program a donation is attached to, as nested in the donations feed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProgramRef {
    pub id: u32,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

/// A single recorded donation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Donation {
    pub id: u32,
    pub program: ProgramRef,
    #[serde(deserialize_with = "deserialize_flexible_amount")]
    pub amount: f64,
    #[serde(default)]
    pub donor_name: String,
    pub created_at: DateTime<Utc>,
}

/// Custom deserializer for amounts the backend serializes either as a JSON
/// number or as a decimal string (`"500.00"`).
fn deserialize_flexible_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount '{text}'"))),
    }
}

impl Donation {
    /// Donor name for display; blank names are recorded as anonymous gifts.
    pub fn display_donor(&self) -> &str {
        if self.donor_name.trim().is_empty() {
            "Anonymous"
        } else {
            &self.donor_name
        }
    }

    pub fn formatted_amount(&self) -> String {
        format!("₹{:.2}", self.amount)
    }

    /// Donation date as shown in the feed, e.g. `04 Oct 2025`.
    pub fn formatted_date(&self) -> String {
        self.created_at.format("%d %b %Y").to_string()
    }
}

/// The donations feed as returned by the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Donations {
    data: Vec<Donation>,
}

impl Donations {
    pub fn new(data: Vec<Donation>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Donations ordered most recent first. The backend already orders the
    /// feed, but the ordering is re-established here rather than assumed.
    pub fn newest_first(&self) -> Vec<Donation> {
        let mut sorted = self.data.clone();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
    }

    pub fn total_amount(&self) -> f64 {
        self.data.iter().map(|d| d.amount).sum()
    }
}
