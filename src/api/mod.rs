use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::core::{
    BudgetInput, ComparisonInput, DebtPayoffInput, DebtRecord, EmergencyFundInput,
    IncomeStability, InvestmentProjectionInput, InvestmentProjectionResult, MAX_HORIZON_MONTHS,
    ProjectionYearPoint, RetirementPlanInput, RoiInput, TargetSearchInput,
    calculate_budget_summary, calculate_debt_payoff, calculate_emergency_fund,
    calculate_investment_projection, calculate_retirement_plan, calculate_roi,
    compare_investments, estimate_months_to_target, project_yearly_balances,
};

const MAX_YEARS: i64 = (MAX_HORIZON_MONTHS / 12) as i64;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("{field} {message}")]
    Validation { field: String, message: String },

    #[error("Failed to serialize result: {0}")]
    Serialize(serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Calculator {
    #[serde(alias = "investmentProjection", alias = "investment_projection")]
    Projection,
    #[serde(alias = "yearlyProjection", alias = "yearly_projection")]
    YearlyProjection,
    #[serde(alias = "monthsToTarget", alias = "months_to_target")]
    Target,
    #[serde(alias = "retirementPlan", alias = "retirement_plan")]
    Retirement,
    Roi,
    #[serde(alias = "budgetSummary", alias = "budget_summary")]
    Budget,
    #[serde(alias = "compare")]
    Comparison,
    #[serde(alias = "emergencyFund", alias = "emergency_fund")]
    EmergencyFund,
    #[serde(alias = "debtPayoff", alias = "debt_payoff")]
    DebtPayoff,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiIncomeStability {
    Stable,
    Variable,
    #[serde(alias = "self-employed", alias = "selfEmployed")]
    Freelance,
}

impl From<ApiIncomeStability> for IncomeStability {
    fn from(value: ApiIncomeStability) -> Self {
        match value {
            ApiIncomeStability::Stable => IncomeStability::Stable,
            ApiIncomeStability::Variable => IncomeStability::Variable,
            ApiIncomeStability::Freelance => IncomeStability::Freelance,
        }
    }
}

/// Calculator name plus its payload, for callers that send both in one document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalculationRequest {
    calculator: Calculator,
    #[serde(default)]
    input: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectionPayload {
    initial_amount: Option<f64>,
    monthly_contribution: Option<f64>,
    annual_rate: Option<f64>,
    years: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TargetPayload {
    initial_amount: Option<f64>,
    monthly_contribution: Option<f64>,
    annual_rate: Option<f64>,
    target_amount: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RetirementPayload {
    monthly_expenses_today: Option<f64>,
    years_to_retirement: Option<i64>,
    inflation_rate: Option<f64>,
    withdrawal_rate: Option<f64>,
    current_capital: Option<f64>,
    expected_return_rate: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RoiPayload {
    initial_cost: Option<f64>,
    current_value: Option<f64>,
    additional_cash_flow: Option<f64>,
    months: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct BudgetPayload {
    income: Option<f64>,
    fixed_expenses: Option<f64>,
    variable_expenses: Option<f64>,
    debt_payments: Option<f64>,
    investments: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ComparisonPayload {
    a: ProjectionPayload,
    b: ProjectionPayload,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct EmergencyFundPayload {
    monthly_expenses: Option<f64>,
    monthly_debt_payments: Option<f64>,
    current_fund: Option<f64>,
    dependents: Option<i64>,
    income_stability: Option<ApiIncomeStability>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DebtPayload {
    name: Option<String>,
    balance: Option<f64>,
    interest_rate: Option<f64>,
    minimum_payment: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DebtPayoffPayload {
    debts: Vec<DebtPayload>,
    extra_monthly_payment: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TargetResponse {
    months_to_target: Option<u32>,
    reachable: bool,
    horizon_months: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct YearlyProjectionResponse {
    summary: InvestmentProjectionResult,
    years: Vec<ProjectionYearPoint>,
}

/// Runs `calculator` on a JSON payload and returns the JSON result.
/// Missing payload fields fall back to the calculator's defaults.
pub fn evaluate_json(calculator: Calculator, json: &str) -> Result<Value, ApiError> {
    let payload = if json.trim().is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str::<Value>(json)?
    };
    evaluate_value(calculator, payload)
}

/// Like [`evaluate_json`], but the document names its own calculator:
/// `{"calculator": "debt-payoff", "input": {...}}`.
pub fn evaluate_request_json(json: &str) -> Result<Value, ApiError> {
    let request = serde_json::from_str::<CalculationRequest>(json)?;
    let payload = request
        .input
        .unwrap_or_else(|| Value::Object(Default::default()));
    evaluate_value(request.calculator, payload)
}

fn evaluate_value(calculator: Calculator, payload: Value) -> Result<Value, ApiError> {
    debug!(?calculator, "evaluating calculator request");
    match calculator {
        Calculator::Projection => {
            let input = projection_input(serde_json::from_value(payload)?, "")?;
            to_json(&calculate_investment_projection(&input))
        }
        Calculator::YearlyProjection => {
            let input = projection_input(serde_json::from_value(payload)?, "")?;
            to_json(&YearlyProjectionResponse {
                summary: calculate_investment_projection(&input),
                years: project_yearly_balances(&input),
            })
        }
        Calculator::Target => {
            let input = target_input(serde_json::from_value(payload)?)?;
            let months_to_target = estimate_months_to_target(&input);
            to_json(&TargetResponse {
                months_to_target,
                reachable: months_to_target.is_some(),
                horizon_months: MAX_HORIZON_MONTHS,
            })
        }
        Calculator::Retirement => {
            let input = retirement_input(serde_json::from_value(payload)?)?;
            to_json(&calculate_retirement_plan(&input))
        }
        Calculator::Roi => {
            let input = roi_input(serde_json::from_value(payload)?)?;
            to_json(&calculate_roi(&input))
        }
        Calculator::Budget => {
            let input = budget_input(serde_json::from_value(payload)?)?;
            to_json(&calculate_budget_summary(&input))
        }
        Calculator::Comparison => {
            let payload: ComparisonPayload = serde_json::from_value(payload)?;
            let input = ComparisonInput {
                a: projection_input(payload.a, "a.")?,
                b: projection_input(payload.b, "b.")?,
            };
            to_json(&compare_investments(&input))
        }
        Calculator::EmergencyFund => {
            let input = emergency_fund_input(serde_json::from_value(payload)?)?;
            to_json(&calculate_emergency_fund(&input))
        }
        Calculator::DebtPayoff => {
            let input = debt_payoff_input(serde_json::from_value(payload)?)?;
            to_json(&calculate_debt_payoff(&input))
        }
    }
}

fn to_json<T: Serialize>(result: &T) -> Result<Value, ApiError> {
    serde_json::to_value(result).map_err(ApiError::Serialize)
}

fn projection_input(
    payload: ProjectionPayload,
    prefix: &str,
) -> Result<InvestmentProjectionInput, ApiError> {
    Ok(InvestmentProjectionInput {
        initial_amount: non_negative(
            &format!("{prefix}initialAmount"),
            payload.initial_amount.unwrap_or(10_000.0),
        )?,
        monthly_contribution: non_negative(
            &format!("{prefix}monthlyContribution"),
            payload.monthly_contribution.unwrap_or(250.0),
        )?,
        annual_rate: rate(
            &format!("{prefix}annualRate"),
            payload.annual_rate.unwrap_or(7.0),
        )?,
        years: whole_years(&format!("{prefix}years"), payload.years.unwrap_or(20))?,
    })
}

fn target_input(payload: TargetPayload) -> Result<TargetSearchInput, ApiError> {
    Ok(TargetSearchInput {
        initial_amount: non_negative("initialAmount", payload.initial_amount.unwrap_or(10_000.0))?,
        monthly_contribution: non_negative(
            "monthlyContribution",
            payload.monthly_contribution.unwrap_or(250.0),
        )?,
        annual_rate: rate("annualRate", payload.annual_rate.unwrap_or(7.0))?,
        target_amount: non_negative("targetAmount", payload.target_amount.unwrap_or(100_000.0))?,
    })
}

fn retirement_input(payload: RetirementPayload) -> Result<RetirementPlanInput, ApiError> {
    Ok(RetirementPlanInput {
        monthly_expenses_today: positive(
            "monthlyExpensesToday",
            payload.monthly_expenses_today.unwrap_or(3_000.0),
        )?,
        years_to_retirement: whole_years(
            "yearsToRetirement",
            payload.years_to_retirement.unwrap_or(25),
        )?,
        inflation_rate: rate("inflationRate", payload.inflation_rate.unwrap_or(2.5))?,
        withdrawal_rate: positive("withdrawalRate", payload.withdrawal_rate.unwrap_or(4.0))?,
        current_capital: non_negative("currentCapital", payload.current_capital.unwrap_or(0.0))?,
        expected_return_rate: rate(
            "expectedReturnRate",
            payload.expected_return_rate.unwrap_or(6.0),
        )?,
    })
}

fn roi_input(payload: RoiPayload) -> Result<RoiInput, ApiError> {
    let months = payload.months.unwrap_or(12);
    if months <= 0 || months > MAX_HORIZON_MONTHS as i64 {
        return Err(ApiError::validation(
            "months",
            format!("must be between 1 and {MAX_HORIZON_MONTHS}"),
        ));
    }

    Ok(RoiInput {
        initial_cost: non_negative("initialCost", payload.initial_cost.unwrap_or(0.0))?,
        current_value: finite("currentValue", payload.current_value.unwrap_or(0.0))?,
        additional_cash_flow: finite(
            "additionalCashFlow",
            payload.additional_cash_flow.unwrap_or(0.0),
        )?,
        months: months as u32,
    })
}

fn budget_input(payload: BudgetPayload) -> Result<BudgetInput, ApiError> {
    let Some(income) = payload.income else {
        return Err(ApiError::validation("income", "is required"));
    };

    Ok(BudgetInput {
        income: positive("income", income)?,
        fixed_expenses: non_negative("fixedExpenses", payload.fixed_expenses.unwrap_or(0.0))?,
        variable_expenses: non_negative(
            "variableExpenses",
            payload.variable_expenses.unwrap_or(0.0),
        )?,
        debt_payments: non_negative("debtPayments", payload.debt_payments.unwrap_or(0.0))?,
        investments: non_negative("investments", payload.investments.unwrap_or(0.0))?,
    })
}

fn emergency_fund_input(payload: EmergencyFundPayload) -> Result<EmergencyFundInput, ApiError> {
    let dependents = payload.dependents.unwrap_or(0);
    if dependents < 0 {
        return Err(ApiError::validation("dependents", "must be >= 0"));
    }

    Ok(EmergencyFundInput {
        monthly_expenses: non_negative(
            "monthlyExpenses",
            payload.monthly_expenses.unwrap_or(0.0),
        )?,
        monthly_debt_payments: non_negative(
            "monthlyDebtPayments",
            payload.monthly_debt_payments.unwrap_or(0.0),
        )?,
        current_fund: non_negative("currentFund", payload.current_fund.unwrap_or(0.0))?,
        dependents: dependents.min(u32::MAX as i64) as u32,
        income_stability: payload
            .income_stability
            .unwrap_or(ApiIncomeStability::Stable)
            .into(),
    })
}

fn debt_payoff_input(payload: DebtPayoffPayload) -> Result<DebtPayoffInput, ApiError> {
    if payload.debts.is_empty() {
        return Err(ApiError::validation("debts", "must contain at least one debt"));
    }

    let mut debts = Vec::with_capacity(payload.debts.len());
    for (idx, debt) in payload.debts.into_iter().enumerate() {
        let field = |name: &str| format!("debts[{idx}].{name}");
        let Some(balance) = debt.balance else {
            return Err(ApiError::validation(field("balance"), "is required"));
        };
        let Some(minimum_payment) = debt.minimum_payment else {
            return Err(ApiError::validation(field("minimumPayment"), "is required"));
        };

        debts.push(DebtRecord {
            name: debt.name.unwrap_or_else(|| format!("Debt {}", idx + 1)),
            balance: positive(&field("balance"), balance)?,
            interest_rate: non_negative(&field("interestRate"), debt.interest_rate.unwrap_or(0.0))?,
            minimum_payment: positive(&field("minimumPayment"), minimum_payment)?,
        });
    }

    Ok(DebtPayoffInput {
        debts,
        extra_monthly_payment: non_negative(
            "extraMonthlyPayment",
            payload.extra_monthly_payment.unwrap_or(0.0),
        )?,
    })
}

fn finite(field: &str, value: f64) -> Result<f64, ApiError> {
    if !value.is_finite() {
        return Err(ApiError::validation(field, "must be a finite number"));
    }
    Ok(value)
}

fn non_negative(field: &str, value: f64) -> Result<f64, ApiError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ApiError::validation(field, "must be >= 0"));
    }
    Ok(value)
}

fn positive(field: &str, value: f64) -> Result<f64, ApiError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ApiError::validation(field, "must be > 0"));
    }
    Ok(value)
}

fn rate(field: &str, value: f64) -> Result<f64, ApiError> {
    if !value.is_finite() || value <= -100.0 {
        return Err(ApiError::validation(field, "must be > -100"));
    }
    Ok(value)
}

fn whole_years(field: &str, value: i64) -> Result<u32, ApiError> {
    if !(0..=MAX_YEARS).contains(&value) {
        return Err(ApiError::validation(
            field,
            format!("must be between 0 and {MAX_YEARS}"),
        ));
    }
    Ok(value as u32)
}
