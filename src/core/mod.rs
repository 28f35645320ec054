mod calculators;
mod debt;
mod numeric;
mod projection;
mod solver;
mod types;

pub use calculators::{
    BASE_EMERGENCY_MONTHS, BUDGET_EMERGENCY_MONTHS, BUDGET_RISK_MARGIN_PCT,
    EMERGENCY_RISK_COVERAGE_FRACTION, MAX_DEPENDENT_EMERGENCY_MONTHS, MAX_EMERGENCY_MONTHS,
    NEEDS_TARGET_PCT, SAVINGS_TARGET_PCT, WANTS_TARGET_PCT, calculate_budget_summary,
    calculate_emergency_fund, calculate_retirement_plan, calculate_roi, compare_investments,
};
pub use debt::calculate_debt_payoff;
pub use numeric::{MAX_HORIZON_MONTHS, RATE_EPSILON, effective_monthly_rate};
pub use projection::{calculate_investment_projection, project_months, project_yearly_balances};
pub use solver::estimate_months_to_target;
pub use types::{
    BudgetInput, BudgetResult, ComparisonInput, ComparisonResult, DebtMilestone, DebtPayoffInput,
    DebtPayoffResult, DebtRecord, EmergencyFundInput, EmergencyFundResult, HealthStatus,
    IncomeStability, InvestmentProjectionInput, InvestmentProjectionResult, ProjectionYearPoint,
    RetirementPlanInput, RetirementPlanResult, RoiInput, RoiResult, Rule503020, TargetSearchInput,
};
