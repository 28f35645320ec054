use tracing::debug;

use super::numeric::MAX_HORIZON_MONTHS;
use super::projection::project_months;
use super::types::TargetSearchInput;

/// Smallest whole number of months after which the projection reaches `target_amount`.
///
/// Returns `None` when the target is still out of reach at [`MAX_HORIZON_MONTHS`].
pub fn estimate_months_to_target(input: &TargetSearchInput) -> Option<u32> {
    if input.target_amount <= input.initial_amount {
        return Some(0);
    }

    let reaches = |months: u32| {
        project_months(
            input.initial_amount,
            input.monthly_contribution,
            input.annual_rate,
            u64::from(months),
        )
        .final_balance
            >= input.target_amount
    };

    if !reaches(MAX_HORIZON_MONTHS) {
        debug!(
            target_amount = input.target_amount,
            horizon = MAX_HORIZON_MONTHS,
            "target unreachable within horizon"
        );
        return None;
    }

    // lo never reaches the target, hi always does.
    let mut lo = 0;
    let mut hi = MAX_HORIZON_MONTHS;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if reaches(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    debug!(target_amount = input.target_amount, months = hi, "target reached");
    Some(hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn sample_input() -> TargetSearchInput {
        TargetSearchInput {
            initial_amount: 10_000.0,
            monthly_contribution: 500.0,
            annual_rate: 6.0,
            target_amount: 100_000.0,
        }
    }

    fn balance_after(input: &TargetSearchInput, months: u32) -> f64 {
        project_months(
            input.initial_amount,
            input.monthly_contribution,
            input.annual_rate,
            u64::from(months),
        )
        .final_balance
    }

    #[test]
    fn target_at_or_below_initial_amount_needs_no_months() {
        let mut input = sample_input();
        input.target_amount = input.initial_amount;
        assert_eq!(estimate_months_to_target(&input), Some(0));

        input.target_amount = 0.0;
        assert_eq!(estimate_months_to_target(&input), Some(0));
    }

    #[test]
    fn zero_rate_target_is_exact_division() {
        let input = TargetSearchInput {
            initial_amount: 1_000.0,
            monthly_contribution: 100.0,
            annual_rate: 0.0,
            target_amount: 2_000.0,
        };
        assert_eq!(estimate_months_to_target(&input), Some(10));

        let input = TargetSearchInput {
            target_amount: 2_050.0,
            ..input
        };
        assert_eq!(estimate_months_to_target(&input), Some(11));
    }

    #[test]
    fn found_month_is_the_first_to_reach_target() {
        let input = sample_input();
        let months = estimate_months_to_target(&input).expect("reachable target");
        assert!(months > 0);
        assert!(balance_after(&input, months) >= input.target_amount);
        assert!(balance_after(&input, months - 1) < input.target_amount);
    }

    #[test]
    fn unreachable_target_returns_none() {
        let input = TargetSearchInput {
            initial_amount: 1_000.0,
            monthly_contribution: 0.0,
            annual_rate: 0.0,
            target_amount: 5_000.0,
        };
        assert_eq!(estimate_months_to_target(&input), None);
    }

    #[test]
    fn shrinking_balance_never_reaches_higher_target() {
        let input = TargetSearchInput {
            initial_amount: 50_000.0,
            monthly_contribution: 10.0,
            annual_rate: -5.0,
            target_amount: 60_000.0,
        };
        assert_eq!(estimate_months_to_target(&input), None);
    }

    #[test]
    fn target_reached_exactly_at_horizon_is_found() {
        let input = TargetSearchInput {
            initial_amount: 0.0,
            monthly_contribution: 1.0,
            annual_rate: 0.0,
            target_amount: MAX_HORIZON_MONTHS as f64,
        };
        assert_eq!(estimate_months_to_target(&input), Some(MAX_HORIZON_MONTHS));

        let input = TargetSearchInput {
            target_amount: MAX_HORIZON_MONTHS as f64 + 0.5,
            ..input
        };
        assert_eq!(estimate_months_to_target(&input), None);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_search_result_is_consistent_with_projection(
            initial in 0u32..200_000,
            monthly in 0u32..5_000,
            rate_bp in -2_000i32..2_000,
            target in 1u32..2_000_000
        ) {
            let input = TargetSearchInput {
                initial_amount: initial as f64,
                monthly_contribution: monthly as f64,
                annual_rate: rate_bp as f64 / 100.0,
                target_amount: target as f64,
            };
            match estimate_months_to_target(&input) {
                Some(0) => {
                    prop_assert!(input.target_amount <= input.initial_amount);
                }
                Some(months) => {
                    prop_assert!(months <= MAX_HORIZON_MONTHS);
                    prop_assert!(balance_after(&input, months) >= input.target_amount);
                    prop_assert!(balance_after(&input, months - 1) < input.target_amount);
                }
                None => {
                    prop_assert!(balance_after(&input, MAX_HORIZON_MONTHS) < input.target_amount);
                }
            }
        }

        #[test]
        fn prop_target_search_is_deterministic(
            initial in 0u32..200_000,
            monthly in 0u32..5_000,
            rate_bp in -2_000i32..2_000,
            target in 1u32..2_000_000
        ) {
            let input = TargetSearchInput {
                initial_amount: initial as f64,
                monthly_contribution: monthly as f64,
                annual_rate: rate_bp as f64 / 100.0,
                target_amount: target as f64,
            };
            prop_assert_eq!(
                estimate_months_to_target(&input),
                estimate_months_to_target(&input)
            );
        }
    }
}
