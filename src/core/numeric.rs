/// Upper bound, in months, for every iterative search or simulation in the engine.
/// Anything not reached within this horizon is reported as unreachable or capped.
pub const MAX_HORIZON_MONTHS: u32 = 1200;

/// Rates with a smaller magnitude are treated as zero so the annuity formula never divides by ~0.
pub const RATE_EPSILON: f64 = 1e-9;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Effective monthly rate for an annual percentage, `(1 + r)^(1/12) - 1`.
///
/// Annual rates at or below -100% saturate to a total loss (`-1.0`) rather than
/// producing NaN from a fractional power of a negative base.
pub fn effective_monthly_rate(annual_rate_pct: f64) -> f64 {
    let base = (1.0 + annual_rate_pct / 100.0).max(0.0);
    base.powf(1.0 / MONTHS_PER_YEAR as f64) - 1.0
}

pub fn is_zero_rate(rate: f64) -> bool {
    rate.abs() < RATE_EPSILON
}

/// `(1 + monthly_rate)^months`; overflows to `+inf` instead of wrapping for huge `months`.
pub fn growth_factor(monthly_rate: f64, months: u64) -> f64 {
    (1.0 + monthly_rate).powf(months as f64)
}

/// Whole months in `years`, wide enough for any `u32` year count.
pub fn months_in_years(years: u32) -> u64 {
    u64::from(years) * u64::from(MONTHS_PER_YEAR)
}

/// `amount * factor`, except that a zero amount stays zero even when `factor` is infinite.
pub fn scaled(amount: f64, factor: f64) -> f64 {
    if amount == 0.0 {
        return 0.0;
    }
    amount * factor
}

/// `numerator / denominator * 100`, or 0 when the denominator is zero or negative.
pub fn percent_of(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        return 0.0;
    }
    numerator / denominator * 100.0
}

pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    #[test]
    fn effective_monthly_rate_compounds_back_to_annual_rate() {
        let monthly = effective_monthly_rate(7.0);
        assert_approx(growth_factor(monthly, 12), 1.07, 1e-12);
    }

    #[test]
    fn effective_monthly_rate_is_zero_for_zero_annual_rate() {
        assert!(is_zero_rate(effective_monthly_rate(0.0)));
    }

    #[test]
    fn effective_monthly_rate_saturates_below_total_loss() {
        assert_approx(effective_monthly_rate(-100.0), -1.0, 1e-12);
        assert_approx(effective_monthly_rate(-250.0), -1.0, 1e-12);
        assert!(effective_monthly_rate(-250.0).is_finite());
    }

    #[test]
    fn growth_factor_handles_month_counts_beyond_i32() {
        let months = months_in_years(u32::MAX);
        assert!(months > i32::MAX as u64);
        assert_eq!(growth_factor(effective_monthly_rate(5.0), months), f64::INFINITY);
        assert_eq!(growth_factor(effective_monthly_rate(-5.0), months), 0.0);
        assert_eq!(growth_factor(0.0, months), 1.0);
    }

    #[test]
    fn scaled_keeps_zero_amount_finite() {
        assert_eq!(scaled(0.0, f64::INFINITY), 0.0);
        assert_eq!(scaled(2.0, f64::INFINITY), f64::INFINITY);
        assert_eq!(scaled(2.0, 1.5), 3.0);
    }

    #[test]
    fn percent_of_guards_non_positive_denominator() {
        assert_eq!(percent_of(500.0, 0.0), 0.0);
        assert_eq!(percent_of(500.0, -10.0), 0.0);
        assert_approx(percent_of(500.0, 2_000.0), 25.0, 1e-12);
    }

    #[test]
    fn ratio_or_zero_guards_zero_denominator() {
        assert_eq!(ratio_or_zero(10.0, 0.0), 0.0);
        assert_approx(ratio_or_zero(-10.0, 4.0), -2.5, 1e-12);
    }
}
