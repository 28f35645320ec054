use super::numeric::{effective_monthly_rate, growth_factor, is_zero_rate, months_in_years, scaled};
use super::types::{InvestmentProjectionInput, InvestmentProjectionResult, ProjectionYearPoint};

pub fn calculate_investment_projection(
    input: &InvestmentProjectionInput,
) -> InvestmentProjectionResult {
    project_months(
        input.initial_amount,
        input.monthly_contribution,
        input.annual_rate,
        months_in_years(input.years),
    )
}

/// Future value of a lump sum plus a level end-of-month contribution after `months`
/// of monthly compounding at the effective monthly equivalent of `annual_rate`.
pub fn project_months(
    initial_amount: f64,
    monthly_contribution: f64,
    annual_rate: f64,
    months: u64,
) -> InvestmentProjectionResult {
    let monthly_rate = effective_monthly_rate(annual_rate);
    let total_contributions = initial_amount + monthly_contribution * months as f64;

    let final_balance = if is_zero_rate(monthly_rate) {
        total_contributions
    } else {
        let growth = growth_factor(monthly_rate, months);
        scaled(initial_amount, growth) + scaled(monthly_contribution, (growth - 1.0) / monthly_rate)
    };

    InvestmentProjectionResult {
        final_balance,
        total_contributions,
        total_interest: final_balance - total_contributions,
    }
}

pub fn project_yearly_balances(input: &InvestmentProjectionInput) -> Vec<ProjectionYearPoint> {
    (1..=input.years)
        .map(|year| {
            let point = project_months(
                input.initial_amount,
                input.monthly_contribution,
                input.annual_rate,
                months_in_years(year),
            );
            ProjectionYearPoint {
                year,
                balance: point.final_balance,
                contributions: point.total_contributions,
                interest: point.total_interest,
            }
        })
        .collect()
}
