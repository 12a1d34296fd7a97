use serde::Deserialize;

/// Aggregate donation metrics returned by the impact summary endpoint.
///
/// The backend always sends all three fields together; a partial summary is
/// not a modeled state. Zero counts are valid values.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ImpactSummary {
    pub total_amount: f64,
    pub donation_count: u32,
    pub active_programs: u32,
}

impl ImpactSummary {
    /// Total amount formatted for the metric card, e.g. `₹1,25,000`.
    ///
    /// Amounts use the Indian digit grouping the backend reports in.
    /// Fractional paise are shown only when present.
    pub fn formatted_total(&self) -> String {
        let rupees = self.total_amount.trunc() as u64;
        let paise = (self.total_amount.fract() * 100.0).round() as u64;

        let grouped = group_indian(rupees);
        if paise == 0 {
            format!("₹{grouped}")
        } else {
            format!("₹{grouped}.{paise:02}")
        }
    }
}

/// Groups an integer amount in the Indian system: the last three digits,
/// then pairs (12,34,567).
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<String> = Vec::new();
    let head_bytes = head.as_bytes();
    let mut i = head_bytes.len();
    while i > 0 {
        let start = i.saturating_sub(2);
        groups.push(head[start..i].to_string());
        i = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(125_000), "1,25,000");
        assert_eq!(group_indian(12_34_567), "12,34,567");
    }

    #[test]
    fn test_formatted_total_whole() {
        let summary = ImpactSummary {
            total_amount: 125_000.0,
            donation_count: 342,
            active_programs: 7,
        };
        assert_eq!(summary.formatted_total(), "₹1,25,000");
    }

    #[test]
    fn test_formatted_total_with_paise() {
        let summary = ImpactSummary {
            total_amount: 1500.5,
            donation_count: 3,
            active_programs: 1,
        };
        assert_eq!(summary.formatted_total(), "₹1,500.50");
    }
}
