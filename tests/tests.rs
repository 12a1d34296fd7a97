#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use impact_portal::hooks::use_donations::{DONATIONS_ERROR_MESSAGE, DonationsState};
    use impact_portal::hooks::use_summary::{SUMMARY_ERROR_MESSAGE, SummaryState};
    use impact_portal::models::{
        donation::{Donation, Donations, ProgramRef},
        error::AppError,
        summary::ImpactSummary,
    };
    use std::rc::Rc;

    // Helper function to create the summary used across tests
    fn create_test_summary() -> ImpactSummary {
        ImpactSummary {
            total_amount: 125_000.0,
            donation_count: 342,
            active_programs: 7,
        }
    }

    fn create_test_donation(id: u32, donor: &str, hour: u32) -> Donation {
        Donation {
            id,
            program: ProgramRef {
                id: 1,
                name: "Clean Water".to_string(),
                category: "Infrastructure".to_string(),
                description: String::new(),
                is_active: true,
                start_date: None,
            },
            amount: 500.0,
            donor_name: donor.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 10, 4, hour, 0, 0).unwrap(),
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_not_found_display() {
        let error = AppError::NotFound("no such endpoint".to_string());
        assert_eq!(error.to_string(), "Not found: no such endpoint");
    }

    // ===== ImpactSummary Model Tests =====

    #[test]
    fn test_summary_deserialization() {
        let json = r#"{
            "total_amount": 125000,
            "donation_count": 342,
            "active_programs": 7
        }"#;

        let summary: ImpactSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary, create_test_summary());
    }

    #[test]
    fn test_summary_zero_counts_are_valid() {
        let json = r#"{
            "total_amount": 0,
            "donation_count": 0,
            "active_programs": 0
        }"#;

        let summary: ImpactSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.donation_count, 0);
        assert_eq!(summary.active_programs, 0);

        // Zeroes settle as a loaded summary, not a failure
        let state = SummaryState::from_fetch_result(Ok(summary));
        assert!(state.data().is_some());
    }

    #[test]
    fn test_summary_rejects_partial_payload() {
        let json = r#"{"total_amount": 125000, "donation_count": 342}"#;
        let result: Result<ImpactSummary, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_formatted_total() {
        assert_eq!(create_test_summary().formatted_total(), "₹1,25,000");
    }

    // ===== SummaryState Tests =====

    #[test]
    fn test_summary_state_settles_loaded_on_success() {
        let state = SummaryState::from_fetch_result(Ok(create_test_summary()));

        assert!(!state.is_loading());
        assert_eq!(state.data().unwrap().as_ref(), &create_test_summary());
    }

    #[test]
    fn test_summary_state_collapses_all_failures() {
        // Whatever went wrong, the user sees the same fixed message
        let failures = [
            AppError::ApiError("Network error: connection refused".to_string()),
            AppError::ApiError("Server error 500: boom".to_string()),
            AppError::ApiError("Failed to parse response: eof".to_string()),
            AppError::NotFound("Resource not found".to_string()),
            AppError::ConfigError("bad client".to_string()),
        ];

        for failure in failures {
            let state = SummaryState::from_fetch_result(Err(failure));
            assert_eq!(
                state,
                SummaryState::Error(SUMMARY_ERROR_MESSAGE.to_string())
            );
        }
    }

    #[test]
    fn test_summary_error_message_is_not_derived() {
        let state = SummaryState::from_fetch_result(Err(AppError::ApiError(
            "secret backend detail".to_string(),
        )));

        let SummaryState::Error(msg) = state else {
            panic!("expected error state");
        };
        assert_eq!(msg, "Unable to load impact data.");
        assert!(!msg.contains("secret"));
    }

    #[test]
    fn test_summary_state_data_extraction() {
        let summary = Rc::new(create_test_summary());
        let loaded = SummaryState::Loaded(summary.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &summary);

        let loading = SummaryState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let error = SummaryState::Error("Test error".to_string());
        assert!(error.data().is_none());
    }

    #[test]
    fn test_summary_state_equality() {
        assert_eq!(SummaryState::Loading, SummaryState::Loading);
        assert_eq!(
            SummaryState::Error("Test error".to_string()),
            SummaryState::Error("Test error".to_string())
        );

        let state1 = SummaryState::Loaded(Rc::new(create_test_summary()));
        let state2 = SummaryState::Loaded(Rc::new(create_test_summary()));
        assert_eq!(state1, state2);
        assert_ne!(state1, SummaryState::Loading);
    }

    // ===== Donation Model Tests =====

    #[test]
    fn test_donation_deserialization_numeric_amount() {
        let json = r#"{
            "id": 5,
            "program": {
                "id": 2,
                "name": "School Meals",
                "category": "Education",
                "description": "Daily meals for students",
                "is_active": true,
                "start_date": "2024-01-15"
            },
            "amount": 1200.5,
            "donor_name": "A. Rao",
            "created_at": "2025-10-04T09:15:00Z"
        }"#;

        let donation: Donation = serde_json::from_str(json).unwrap();
        assert_eq!(donation.amount, 1200.5);
        assert_eq!(donation.display_donor(), "A. Rao");
        assert_eq!(donation.program.category, "Education");
    }

    #[test]
    fn test_donation_string_amount() {
        // The backend serializer emits decimals as strings
        let json = r#"{
            "id": 6,
            "program": {
                "id": 2,
                "name": "School Meals",
                "category": "Education",
                "is_active": true
            },
            "amount": "750.00",
            "donor_name": "",
            "created_at": "2025-10-04T10:00:00Z"
        }"#;

        let donation: Donation = serde_json::from_str(json).unwrap();
        assert_eq!(donation.amount, 750.0);
        assert_eq!(donation.formatted_amount(), "₹750.00");
    }

    #[test]
    fn test_donation_anonymous_display() {
        let donation = create_test_donation(1, "", 9);
        assert_eq!(donation.display_donor(), "Anonymous");

        let named = create_test_donation(2, "S. Iyer", 10);
        assert_eq!(named.display_donor(), "S. Iyer");
    }

    #[test]
    fn test_donation_formatted_date() {
        let donation = create_test_donation(1, "S. Iyer", 9);
        assert_eq!(donation.formatted_date(), "04 Oct 2025");
    }

    // ===== Donations Feed Tests =====

    #[test]
    fn test_donations_newest_first() {
        let donations = Donations::new(vec![
            create_test_donation(1, "Early", 8),
            create_test_donation(2, "Late", 18),
            create_test_donation(3, "Middle", 12),
        ]);

        let ordered = donations.newest_first();
        assert_eq!(ordered[0].donor_name, "Late");
        assert_eq!(ordered[1].donor_name, "Middle");
        assert_eq!(ordered[2].donor_name, "Early");
    }

    #[test]
    fn test_donations_totals() {
        let donations = Donations::new(vec![
            create_test_donation(1, "A", 8),
            create_test_donation(2, "B", 9),
        ]);

        assert_eq!(donations.len(), 2);
        assert!(!donations.is_empty());
        assert_eq!(donations.total_amount(), 1000.0);

        let empty = Donations::new(vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.total_amount(), 0.0);
    }

    // ===== DonationsState Tests =====

    #[test]
    fn test_donations_state_settles() {
        let loaded = DonationsState::from_fetch_result(Ok(Donations::new(vec![
            create_test_donation(1, "A", 8),
        ])));
        assert_eq!(loaded.data().unwrap().len(), 1);

        let failed = DonationsState::from_fetch_result(Err(AppError::ApiError(
            "Server error 503: down".to_string(),
        )));
        assert_eq!(
            failed,
            DonationsState::Error(DONATIONS_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_donations_empty_feed_is_loaded() {
        // An empty feed settles loaded; absence of donations is not an error
        let state = DonationsState::from_fetch_result(Ok(Donations::new(vec![])));
        assert!(state.data().unwrap().is_empty());
    }
}
