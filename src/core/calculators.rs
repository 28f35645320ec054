use tracing::debug;

use super::numeric::{
    MONTHS_PER_YEAR, effective_monthly_rate, growth_factor, is_zero_rate, months_in_years,
    percent_of, ratio_or_zero, scaled,
};
use super::projection::calculate_investment_projection;
use super::types::{
    BudgetInput, BudgetResult, ComparisonInput, ComparisonResult, EmergencyFundInput,
    EmergencyFundResult, HealthStatus, IncomeStability, RetirementPlanInput, RetirementPlanResult,
    RoiInput, RoiResult, Rule503020,
};

pub const NEEDS_TARGET_PCT: f64 = 50.0;
pub const WANTS_TARGET_PCT: f64 = 30.0;
pub const SAVINGS_TARGET_PCT: f64 = 20.0;
/// Percentage points a budget bucket may miss its target by before it counts as risk.
pub const BUDGET_RISK_MARGIN_PCT: f64 = 10.0;
/// Months of essential outflow (fixed expenses + debt payments) held as an emergency reserve.
pub const BUDGET_EMERGENCY_MONTHS: f64 = 6.0;

pub const BASE_EMERGENCY_MONTHS: u32 = 3;
pub const MAX_DEPENDENT_EMERGENCY_MONTHS: u32 = 3;
pub const MAX_EMERGENCY_MONTHS: u32 = 12;
pub const EMERGENCY_RISK_COVERAGE_FRACTION: f64 = 0.5;

pub fn calculate_retirement_plan(input: &RetirementPlanInput) -> RetirementPlanResult {
    let inflation_factor =
        (1.0 + input.inflation_rate / 100.0).powf(f64::from(input.years_to_retirement));
    let annual_need_at_retirement = scaled(
        input.monthly_expenses_today * MONTHS_PER_YEAR as f64,
        inflation_factor,
    );
    let target_capital = if input.withdrawal_rate > 0.0 {
        annual_need_at_retirement / (input.withdrawal_rate / 100.0)
    } else {
        0.0
    };

    let months = months_in_years(input.years_to_retirement);
    let monthly_rate = effective_monthly_rate(input.expected_return_rate);
    let growth = if is_zero_rate(monthly_rate) {
        1.0
    } else {
        growth_factor(monthly_rate, months)
    };
    let projected_capital_without_contributions = scaled(input.current_capital, growth);
    let shortfall = target_capital - projected_capital_without_contributions;

    // An unbounded target against unbounded growth has no meaningful shortfall.
    let funded = shortfall.is_nan() || shortfall <= 0.0;
    let required_monthly_contribution = if months == 0 || funded {
        0.0
    } else if is_zero_rate(monthly_rate) {
        shortfall / months as f64
    } else {
        shortfall * monthly_rate / (growth - 1.0)
    };

    debug!(
        target_capital,
        required_monthly_contribution,
        months,
        "retirement plan solved"
    );

    RetirementPlanResult {
        annual_need_at_retirement,
        target_capital,
        required_monthly_contribution: required_monthly_contribution.max(0.0),
        projected_capital_without_contributions,
        capital_gap: shortfall.max(0.0),
    }
}

pub fn calculate_roi(input: &RoiInput) -> RoiResult {
    let net_gain = input.current_value - input.initial_cost + input.additional_cash_flow;
    let roi = if input.initial_cost == 0.0 {
        0.0
    } else {
        net_gain / input.initial_cost * 100.0
    };

    let annualized_roi = if input.months == 0 {
        roi
    } else {
        // A loss beyond the whole cost saturates at -100% per year.
        let base = (1.0 + roi / 100.0).max(0.0);
        (base.powf(MONTHS_PER_YEAR as f64 / input.months as f64) - 1.0) * 100.0
    };

    RoiResult {
        net_gain,
        roi,
        annualized_roi,
    }
}

pub fn calculate_budget_summary(input: &BudgetInput) -> BudgetResult {
    let essentials = input.fixed_expenses + input.debt_payments;
    let total_expenses = essentials + input.variable_expenses;
    let free_cash_flow = input.income - total_expenses - input.investments;
    let savings_rate = percent_of(input.investments, input.income);

    let needs_pct = percent_of(essentials, input.income);
    let wants_pct = percent_of(input.variable_expenses, input.income);
    let savings_pct = savings_rate;

    BudgetResult {
        total_expenses,
        free_cash_flow,
        savings_rate,
        recommended_emergency_fund: BUDGET_EMERGENCY_MONTHS * essentials,
        rule_503020: Rule503020 {
            needs_pct,
            wants_pct,
            savings_pct,
            status: budget_status(needs_pct, wants_pct, savings_pct),
        },
    }
}

fn budget_status(needs_pct: f64, wants_pct: f64, savings_pct: f64) -> HealthStatus {
    if needs_pct <= NEEDS_TARGET_PCT
        && wants_pct <= WANTS_TARGET_PCT
        && savings_pct >= SAVINGS_TARGET_PCT
    {
        return HealthStatus::Good;
    }

    if needs_pct > NEEDS_TARGET_PCT + BUDGET_RISK_MARGIN_PCT
        || wants_pct > WANTS_TARGET_PCT + BUDGET_RISK_MARGIN_PCT
        || savings_pct < SAVINGS_TARGET_PCT - BUDGET_RISK_MARGIN_PCT
    {
        HealthStatus::Risk
    } else {
        HealthStatus::Attention
    }
}

pub fn compare_investments(input: &ComparisonInput) -> ComparisonResult {
    let result_a = calculate_investment_projection(&input.a);
    let result_b = calculate_investment_projection(&input.b);
    let delta = result_a.final_balance - result_b.final_balance;

    ComparisonResult {
        result_a,
        result_b,
        delta,
        delta_pct: ratio_or_zero(delta, result_b.final_balance) * 100.0,
    }
}

pub fn calculate_emergency_fund(input: &EmergencyFundInput) -> EmergencyFundResult {
    let recommended_months = (BASE_EMERGENCY_MONTHS
        + input.dependents.min(MAX_DEPENDENT_EMERGENCY_MONTHS)
        + stability_months(input.income_stability))
    .min(MAX_EMERGENCY_MONTHS);

    let monthly_outflow = input.monthly_expenses + input.monthly_debt_payments;
    let recommended_amount = recommended_months as f64 * monthly_outflow;
    let current_coverage = ratio_or_zero(input.current_fund, monthly_outflow);
    let gap = (recommended_amount - input.current_fund).max(0.0);

    let months = recommended_months as f64;
    let status = if current_coverage >= months {
        HealthStatus::Good
    } else if current_coverage < months * EMERGENCY_RISK_COVERAGE_FRACTION {
        HealthStatus::Risk
    } else {
        HealthStatus::Attention
    };

    EmergencyFundResult {
        recommended_months,
        recommended_amount,
        current_coverage,
        gap,
        status,
    }
}

fn stability_months(stability: IncomeStability) -> u32 {
    match stability {
        IncomeStability::Stable => 0,
        IncomeStability::Variable => 1,
        IncomeStability::Freelance => 2,
    }
}
