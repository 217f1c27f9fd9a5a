use agtech_carbon_tracker::num::round_to;
use agtech_carbon_tracker::{compute_footprint, compute_roi, PracticeRecord};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn record_strategy() -> impl Strategy<Value = PracticeRecord> {
    (-5000.0_f64..5000.0, 0.0_f64..100_000.0, 0.0_f64..5.0)
        .prop_map(|(impact, cost, roi)| PracticeRecord::new(impact, cost, roi))
}

fn records_strategy() -> impl Strategy<Value = Vec<PracticeRecord>> {
    proptest::collection::vec(record_strategy(), 0..40)
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn net_footprint_never_negative(records in records_strategy()) {
        let fp = compute_footprint(&records);
        prop_assert!(fp.net_footprint >= 0.0);
        prop_assert_eq!(
            fp.net_footprint,
            round_to(fp.total_emissions - fp.sequestration, 2).max(0.0)
        );
    }

    #[test]
    fn unchanged_emissions_mean_zero_reduction(
        positives in proptest::collection::vec(0.0_f64..100.0, 0..10)
    ) {
        let records: Vec<PracticeRecord> =
            positives.iter().map(|&i| PracticeRecord::new(i, 0.0, 0.0)).collect();
        let fp = compute_footprint(&records);
        prop_assert_eq!(fp.total_emissions, 5200.0);
        prop_assert_eq!(fp.reduction_percentage, 0.0);
    }

    #[test]
    fn emissions_never_rise(records in records_strategy()) {
        let fp = compute_footprint(&records);
        prop_assert!(fp.total_emissions <= 5200.0);
        prop_assert!(fp.sequestration >= 1850.0);
        prop_assert!(fp.reduction_percentage >= 0.0);
    }

    #[test]
    fn potential_increase_capped(records in records_strategy()) {
        let r = compute_roi(&records);
        prop_assert!(r.potential_increase >= 0.0);
        prop_assert!(r.potential_increase <= 60_000.0);
    }

    #[test]
    fn payback_at_least_one_year_when_costly(records in records_strategy()) {
        let r = compute_roi(&records);
        let total_cost: f64 = records.iter().map(|p| p.cost).sum();
        if total_cost > 0.0 {
            prop_assert!(r.payback_period >= 1.0);
        } else {
            prop_assert_eq!(r.payback_period, 2.0);
        }
    }
}

#[test]
fn documented_examples() {
    let fp = compute_footprint(&[PracticeRecord::new(-2.3, 15000.0, 0.18)]);
    assert_eq!(
        (fp.total_emissions, fp.sequestration, fp.net_footprint),
        (5197.7, 1850.92, 3346.78)
    );

    let r = compute_roi(&[
        PracticeRecord::new(0.0, 15000.0, 0.18),
        PracticeRecord::new(0.0, 5000.0, 0.20),
    ]);
    assert_eq!((r.roi, r.potential_increase, r.payback_period), (0.24, 13800.0, 1.4));

    let empty = compute_roi(&[]);
    assert_eq!((empty.roi, empty.potential_increase, empty.payback_period), (0.05, 0.0, 2.0));
}
