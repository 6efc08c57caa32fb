use budget_planner_core::errors::CoreError;
use budget_planner_core::models::channel::{
    generate_new_channel, recalc_channel, AllocationType, BudgetChannel, BudgetFrequency,
    DEFAULT_CHANNEL_NAME,
};
use budget_planner_core::models::month::{MonthIndex, MONTHS_PER_YEAR};
use budget_planner_core::models::settings::Settings;
use budget_planner_core::models::state::BudgetState;
use std::collections::HashSet;
use std::sync::Arc;

fn equal_channel(frequency: BudgetFrequency, baseline: Option<f64>) -> BudgetChannel {
    BudgetChannel {
        frequency,
        baseline,
        ..generate_new_channel()
    }
}

fn manual_channel(month_breakdown: [f64; 12]) -> BudgetChannel {
    BudgetChannel {
        allocation_type: AllocationType::Manual,
        month_breakdown,
        ..generate_new_channel()
    }
}

// ═══════════════════════════════════════════════════════════════════
//  BudgetFrequency
// ═══════════════════════════════════════════════════════════════════

mod frequency {
    use super::*;

    #[test]
    fn divisors() {
        assert_eq!(BudgetFrequency::Annually.divisor(), 12.0);
        assert_eq!(BudgetFrequency::Quarterly.divisor(), 3.0);
        assert_eq!(BudgetFrequency::Monthly.divisor(), 1.0);
    }

    #[test]
    fn labels() {
        assert_eq!(BudgetFrequency::Annually.label(), "annual");
        assert_eq!(BudgetFrequency::Quarterly.label(), "quarterly");
        assert_eq!(BudgetFrequency::Monthly.label(), "monthly");
    }

    #[test]
    fn display() {
        assert_eq!(BudgetFrequency::Annually.to_string(), "Annually");
        assert_eq!(BudgetFrequency::Quarterly.to_string(), "Quarterly");
        assert_eq!(BudgetFrequency::Monthly.to_string(), "Monthly");
    }

    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_string(&BudgetFrequency::Quarterly).unwrap();
        assert_eq!(json, "\"Quarterly\"");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AllocationType
// ═══════════════════════════════════════════════════════════════════

mod allocation_type {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(AllocationType::Equal.to_string(), "Equal");
        assert_eq!(AllocationType::Manual.to_string(), "Manual");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  MonthIndex
// ═══════════════════════════════════════════════════════════════════

mod month_index {
    use super::*;

    #[test]
    fn accepts_zero_through_eleven() {
        for i in 0..MONTHS_PER_YEAR {
            assert_eq!(MonthIndex::new(i).unwrap().get(), i);
        }
    }

    #[test]
    fn rejects_twelve() {
        let err = MonthIndex::new(12).unwrap_err();
        assert!(matches!(err, CoreError::MonthOutOfRange(12)));
    }

    #[test]
    fn rejects_huge_index() {
        assert!(MonthIndex::new(usize::MAX).is_err());
    }

    #[test]
    fn short_names() {
        assert_eq!(MonthIndex::new(0).unwrap().short_name(), "Jan");
        assert_eq!(MonthIndex::new(8).unwrap().short_name(), "Sep");
        assert_eq!(MonthIndex::new(11).unwrap().short_name(), "Dec");
    }

    #[test]
    fn all_yields_twelve_in_order() {
        let all: Vec<usize> = MonthIndex::all().map(MonthIndex::get).collect();
        assert_eq!(all, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<MonthIndex>("3").is_ok());
        assert!(serde_json::from_str::<MonthIndex>("12").is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  generate_new_channel
// ═══════════════════════════════════════════════════════════════════

mod generate {
    use super::*;

    #[test]
    fn defaults() {
        let c = generate_new_channel();
        assert_eq!(c.name, DEFAULT_CHANNEL_NAME);
        assert_eq!(c.frequency, BudgetFrequency::Annually);
        assert_eq!(c.baseline, Some(0.0));
        assert_eq!(c.allocation_type, AllocationType::Equal);
        assert_eq!(c.month_breakdown, [0.0; 12]);
    }

    #[test]
    fn fresh_channel_is_consistent() {
        assert!(generate_new_channel().is_consistent());
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = (0..1000).map(|_| generate_new_channel().id).collect();
        assert_eq!(ids.len(), 1000);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  recalc_channel
// ═══════════════════════════════════════════════════════════════════

mod recalc {
    use super::*;

    // ── Equal ─────────────────────────────────────────────────────

    #[test]
    fn equal_annually_divides_by_twelve() {
        let c = recalc_channel(&equal_channel(BudgetFrequency::Annually, Some(1200.0)));
        assert_eq!(c.month_breakdown, [100.0; 12]);
    }

    #[test]
    fn equal_quarterly_divides_by_three() {
        let c = recalc_channel(&equal_channel(BudgetFrequency::Quarterly, Some(1200.0)));
        assert_eq!(c.month_breakdown, [400.0; 12]);
    }

    #[test]
    fn equal_monthly_copies_baseline() {
        let c = recalc_channel(&equal_channel(BudgetFrequency::Monthly, Some(250.0)));
        assert_eq!(c.month_breakdown, [250.0; 12]);
    }

    #[test]
    fn equal_with_missing_baseline_is_zero_but_stays_none() {
        let mut input = equal_channel(BudgetFrequency::Annually, None);
        input.month_breakdown = [7.0; 12];
        let c = recalc_channel(&input);
        assert_eq!(c.month_breakdown, [0.0; 12]);
        assert_eq!(c.baseline, None);
    }

    #[test]
    fn equal_leaves_baseline_untouched() {
        let c = recalc_channel(&equal_channel(BudgetFrequency::Quarterly, Some(900.0)));
        assert_eq!(c.baseline, Some(900.0));
    }

    // ── Manual ────────────────────────────────────────────────────

    #[test]
    fn manual_sums_breakdown() {
        let c = recalc_channel(&manual_channel([100.0; 12]));
        assert_eq!(c.baseline, Some(1200.0));
        assert_eq!(c.month_breakdown, [100.0; 12]);
    }

    #[test]
    fn manual_uneven_breakdown() {
        let mut months = [100.0; 12];
        months[0] = 500.0;
        let c = recalc_channel(&manual_channel(months));
        assert_eq!(c.baseline, Some(1600.0));
        assert_eq!(c.month_breakdown, months);
    }

    #[test]
    fn manual_preserves_frequency() {
        let mut input = manual_channel([1.0; 12]);
        input.frequency = BudgetFrequency::Quarterly;
        let c = recalc_channel(&input);
        assert_eq!(c.frequency, BudgetFrequency::Quarterly);
    }

    #[test]
    fn manual_overwrites_missing_baseline() {
        let mut input = manual_channel([0.0; 12]);
        input.baseline = None;
        assert_eq!(recalc_channel(&input).baseline, Some(0.0));
    }

    // ── Purity & idempotence ──────────────────────────────────────

    #[test]
    fn input_is_not_mutated() {
        let input = equal_channel(BudgetFrequency::Annually, Some(1200.0));
        let before = input.clone();
        let _ = recalc_channel(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn keeps_id_and_name() {
        let mut input = manual_channel([3.0; 12]);
        input.name = "Search ads".into();
        let c = recalc_channel(&input);
        assert_eq!(c.id, input.id);
        assert_eq!(c.name, "Search ads");
    }

    #[test]
    fn idempotent_equal() {
        let once = recalc_channel(&equal_channel(BudgetFrequency::Annually, Some(1000.0)));
        assert_eq!(recalc_channel(&once), once);
    }

    #[test]
    fn idempotent_manual() {
        let once = recalc_channel(&manual_channel([0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2]));
        assert_eq!(recalc_channel(&once), once);
    }

    #[test]
    fn non_round_division_is_consistent() {
        let c = recalc_channel(&equal_channel(BudgetFrequency::Annually, Some(1000.0)));
        assert!(c.is_consistent());
        assert_eq!(c.month_breakdown[0], 1000.0 / 12.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  BudgetChannel helpers
// ═══════════════════════════════════════════════════════════════════

mod channel_helpers {
    use super::*;

    #[test]
    fn effective_baseline_coerces_none() {
        assert_eq!(equal_channel(BudgetFrequency::Annually, None).effective_baseline(), 0.0);
        assert_eq!(equal_channel(BudgetFrequency::Annually, Some(5.0)).effective_baseline(), 5.0);
    }

    #[test]
    fn total_sums_months() {
        let mut months = [0.0; 12];
        months[3] = 40.0;
        months[11] = 2.0;
        assert_eq!(manual_channel(months).total(), 42.0);
    }

    #[test]
    fn month_budget_reads_entry() {
        let mut months = [0.0; 12];
        months[5] = 55.0;
        let c = manual_channel(months);
        assert_eq!(c.month_budget(MonthIndex::new(5).unwrap()), 55.0);
    }

    #[test]
    fn inconsistent_equal_detected() {
        let mut c = equal_channel(BudgetFrequency::Annually, Some(1200.0));
        c.month_breakdown = [99.0; 12];
        assert!(!c.is_consistent());
    }

    #[test]
    fn inconsistent_manual_detected() {
        let mut c = manual_channel([10.0; 12]);
        c.baseline = Some(1.0);
        assert!(!c.is_consistent());
    }

    #[test]
    fn negative_entry_detected() {
        let mut months = [10.0; 12];
        months[2] = -1.0;
        let c = recalc_channel(&manual_channel(months));
        assert!(!c.is_consistent());
    }

    #[test]
    fn serde_roundtrip_json() {
        let c = recalc_channel(&equal_channel(BudgetFrequency::Monthly, None));
        let json = serde_json::to_string(&c).unwrap();
        let back: BudgetChannel = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
        assert!(json.contains("\"baseline\":null"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    fn settings_2021() -> Settings {
        Settings {
            plan_year: 2021,
            currency_symbol: "$".into(),
        }
    }

    #[test]
    fn default_symbol_is_dollar() {
        assert_eq!(Settings::default().currency_symbol, "$");
    }

    #[test]
    fn default_year_is_plausible() {
        assert!(Settings::default().plan_year >= 2024);
    }

    #[test]
    fn month_label() {
        let s = settings_2021();
        assert_eq!(s.month_label(MonthIndex::new(0).unwrap()), "Jan 21");
        assert_eq!(s.month_label(MonthIndex::new(11).unwrap()), "Dec 21");
    }

    #[test]
    fn column_label_is_upper_case() {
        let s = settings_2021();
        assert_eq!(s.column_label(MonthIndex::new(1).unwrap()), "FEB 21");
    }

    #[test]
    fn two_digit_year_is_zero_padded() {
        let s = Settings {
            plan_year: 2005,
            ..settings_2021()
        };
        assert_eq!(s.month_label(MonthIndex::new(6).unwrap()), "Jul 05");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  BudgetState
// ═══════════════════════════════════════════════════════════════════

mod state {
    use super::*;

    #[test]
    fn new_is_empty() {
        let s = BudgetState::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn find_and_position() {
        let a = generate_new_channel();
        let b = generate_new_channel();
        let s = BudgetState {
            channels: vec![Arc::new(a.clone()), Arc::new(b.clone())],
        };
        assert_eq!(s.position(b.id), Some(1));
        assert_eq!(s.find(a.id).map(|c| c.id), Some(a.id));
        assert!(s.find(uuid::Uuid::new_v4()).is_none());
    }

    #[test]
    fn clone_shares_channels() {
        let s = BudgetState {
            channels: vec![Arc::new(generate_new_channel())],
        };
        let copy = s.clone();
        assert!(Arc::ptr_eq(&s.channels[0], &copy.channels[0]));
    }
}
