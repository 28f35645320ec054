use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Good,
    Attention,
    Risk,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IncomeStability {
    Stable,
    Variable,
    Freelance,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentProjectionInput {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    pub annual_rate: f64,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentProjectionResult {
    pub final_balance: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionYearPoint {
    pub year: u32,
    pub balance: f64,
    pub contributions: f64,
    pub interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSearchInput {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    pub annual_rate: f64,
    pub target_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetirementPlanInput {
    pub monthly_expenses_today: f64,
    pub years_to_retirement: u32,
    pub inflation_rate: f64,
    pub withdrawal_rate: f64,
    pub current_capital: f64,
    pub expected_return_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementPlanResult {
    pub annual_need_at_retirement: f64,
    pub target_capital: f64,
    pub required_monthly_contribution: f64,
    pub projected_capital_without_contributions: f64,
    pub capital_gap: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiInput {
    pub initial_cost: f64,
    pub current_value: f64,
    pub additional_cash_flow: f64,
    pub months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    pub net_gain: f64,
    pub roi: f64,
    pub annualized_roi: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetInput {
    pub income: f64,
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
    pub debt_payments: f64,
    pub investments: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule503020 {
    pub needs_pct: f64,
    pub wants_pct: f64,
    pub savings_pct: f64,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResult {
    pub total_expenses: f64,
    pub free_cash_flow: f64,
    pub savings_rate: f64,
    pub recommended_emergency_fund: f64,
    #[serde(rename = "rule503020")]
    pub rule_503020: Rule503020,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonInput {
    pub a: InvestmentProjectionInput,
    pub b: InvestmentProjectionInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub result_a: InvestmentProjectionResult,
    pub result_b: InvestmentProjectionResult,
    pub delta: f64,
    pub delta_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmergencyFundInput {
    pub monthly_expenses: f64,
    pub monthly_debt_payments: f64,
    pub current_fund: f64,
    pub dependents: u32,
    pub income_stability: IncomeStability,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyFundResult {
    pub recommended_months: u32,
    pub recommended_amount: f64,
    pub current_coverage: f64,
    pub gap: f64,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebtRecord {
    pub name: String,
    pub balance: f64,
    pub interest_rate: f64,
    pub minimum_payment: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebtPayoffInput {
    pub debts: Vec<DebtRecord>,
    pub extra_monthly_payment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtMilestone {
    pub name: String,
    pub month: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoffResult {
    pub total_debt: f64,
    pub total_minimum_payments: f64,
    pub months_to_payoff: u32,
    pub total_interest_paid: f64,
    pub months_with_extra: u32,
    pub total_interest_with_extra: f64,
    pub interest_saved: f64,
    pub minimum_only_capped: bool,
    pub with_extra_capped: bool,
    pub payoff_order_with_extra: Vec<DebtMilestone>,
}
