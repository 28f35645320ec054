use tracing::{debug, warn};

use super::numeric::{MAX_HORIZON_MONTHS, MONTHS_PER_YEAR};
use super::types::{DebtMilestone, DebtPayoffInput, DebtPayoffResult, DebtRecord};

/// Balances at or below this are treated as cleared.
const CLEARED_BALANCE_EPSILON: f64 = 1e-9;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum PaymentStrategy {
    MinimumOnly,
    Avalanche,
}

#[derive(Debug)]
struct DebtState<'a> {
    name: &'a str,
    balance: f64,
    annual_rate: f64,
    monthly_rate: f64,
    minimum_payment: f64,
    active: bool,
}

impl<'a> DebtState<'a> {
    fn new(record: &'a DebtRecord) -> Self {
        Self {
            name: &record.name,
            balance: record.balance,
            annual_rate: record.interest_rate,
            monthly_rate: record.interest_rate / 100.0 / MONTHS_PER_YEAR as f64,
            minimum_payment: record.minimum_payment,
            active: true,
        }
    }

    /// Pays up to `amount`, never below zero; returns what was applied.
    fn pay(&mut self, amount: f64) -> f64 {
        let applied = amount.min(self.balance).max(0.0);
        self.balance -= applied;
        applied
    }
}

#[derive(Debug, Clone)]
struct ScenarioOutcome {
    months: u32,
    total_interest: f64,
    capped: bool,
    milestones: Vec<DebtMilestone>,
}

pub fn calculate_debt_payoff(input: &DebtPayoffInput) -> DebtPayoffResult {
    let total_debt: f64 = input.debts.iter().map(|d| d.balance).sum();
    let total_minimum_payments: f64 = input.debts.iter().map(|d| d.minimum_payment).sum();

    let minimum_only = simulate_scenario(&input.debts, PaymentStrategy::MinimumOnly, 0.0);
    // No extra payment means no avalanche; both figures come from the minimum-only schedule.
    let with_extra = if input.extra_monthly_payment > 0.0 {
        simulate_scenario(
            &input.debts,
            PaymentStrategy::Avalanche,
            input.extra_monthly_payment,
        )
    } else {
        minimum_only.clone()
    };

    DebtPayoffResult {
        total_debt,
        total_minimum_payments,
        months_to_payoff: minimum_only.months,
        total_interest_paid: minimum_only.total_interest,
        months_with_extra: with_extra.months,
        total_interest_with_extra: with_extra.total_interest,
        interest_saved: minimum_only.total_interest - with_extra.total_interest,
        minimum_only_capped: minimum_only.capped,
        with_extra_capped: with_extra.capped,
        payoff_order_with_extra: with_extra.milestones,
    }
}

fn simulate_scenario(
    debts: &[DebtRecord],
    strategy: PaymentStrategy,
    extra_monthly_payment: f64,
) -> ScenarioOutcome {
    let mut states: Vec<DebtState<'_>> = debts.iter().map(DebtState::new).collect();
    let mut month = 0;
    let mut total_interest = 0.0;
    let mut freed_minimums = 0.0;
    let mut milestones = Vec::with_capacity(states.len());

    while states.iter().any(|d| d.active) && month < MAX_HORIZON_MONTHS {
        month += 1;

        for debt in states.iter_mut().filter(|d| d.active) {
            let interest = debt.balance * debt.monthly_rate;
            debt.balance += interest;
            total_interest += interest;
        }

        for debt in states.iter_mut().filter(|d| d.active) {
            let minimum = debt.minimum_payment;
            debt.pay(minimum);
        }

        if strategy == PaymentStrategy::Avalanche {
            // What the top-rate debt cannot absorb moves down to the next one.
            let mut pool = extra_monthly_payment + freed_minimums;
            while pool > 0.0 {
                let Some(target) = avalanche_target(&states) else {
                    break;
                };
                pool -= states[target].pay(pool);
            }
        }

        for debt in states.iter_mut().filter(|d| d.active) {
            if debt.balance <= CLEARED_BALANCE_EPSILON {
                debt.balance = 0.0;
                debt.active = false;
                freed_minimums += debt.minimum_payment;
                milestones.push(DebtMilestone {
                    name: debt.name.to_string(),
                    month,
                });
            }
        }
    }

    let capped = states.iter().any(|d| d.active);
    if capped {
        warn!(
            ?strategy,
            months = month,
            remaining = states.iter().filter(|d| d.active).count(),
            "debt payoff did not converge within the simulation horizon"
        );
    } else {
        debug!(?strategy, months = month, total_interest, "debt payoff simulated");
    }

    ScenarioOutcome {
        months: month,
        total_interest,
        capped,
        milestones,
    }
}

/// Index of the still-owing debt with the highest rate; earlier entries win ties.
fn avalanche_target(states: &[DebtState<'_>]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, debt) in states.iter().enumerate() {
        if !debt.active || debt.balance <= CLEARED_BALANCE_EPSILON {
            continue;
        }
        match best {
            Some(current) if states[current].annual_rate >= debt.annual_rate => {}
            _ => best = Some(idx),
        }
    }
    best
}
