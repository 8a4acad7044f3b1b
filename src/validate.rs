use std::collections::HashSet;

use crate::decimal::{Money, Rate};
use crate::errors::{PlanError, Result};
use crate::types::{Debt, PlanInput};

/// reject malformed debt records before they reach the engine
pub fn validate_debt(debt: &Debt) -> Result<()> {
    if debt.name.trim().is_empty() {
        return Err(PlanError::MissingDebtName { id: debt.id });
    }
    if debt.balance.is_negative() {
        return Err(PlanError::InvalidBalance {
            name: debt.name.clone(),
            balance: debt.balance,
        });
    }
    if debt.apr < Rate::ZERO || debt.apr > Rate::ONE {
        return Err(PlanError::InvalidApr {
            name: debt.name.clone(),
            apr: debt.apr,
        });
    }
    if debt.min_payment.is_negative() {
        return Err(PlanError::InvalidMinimumPayment {
            name: debt.name.clone(),
            amount: debt.min_payment,
        });
    }
    if let Some(day) = debt.due_day {
        if !(1..=31).contains(&day) {
            return Err(PlanError::InvalidDueDay {
                name: debt.name.clone(),
                day,
            });
        }
    }
    Ok(())
}

/// full boundary check; the engine assumes input that passed here
pub fn validate_plan(input: &PlanInput) -> Result<()> {
    if input.debts.is_empty() {
        return Err(PlanError::NoDebts);
    }

    let mut seen = HashSet::new();
    for debt in &input.debts {
        validate_debt(debt)?;
        if !seen.insert(debt.id) {
            return Err(PlanError::DuplicateDebtId { id: debt.id });
        }
    }

    if input.paycheck_amount <= Money::ZERO {
        return Err(PlanError::InvalidPaycheckAmount {
            amount: input.paycheck_amount,
        });
    }

    if let Some(priority) = &input.custom_priority {
        for id in priority {
            if !seen.contains(id) {
                return Err(PlanError::UnknownPriorityDebt { id: *id });
            }
        }
    }

    Ok(())
}
