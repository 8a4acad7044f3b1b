use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::types::DebtId;

/// validation failures raised at the boundary before the engine runs;
/// the engine itself is total over validated input
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("plan requires at least one debt")]
    NoDebts,

    #[error("debt {id} has no name")]
    MissingDebtName { id: DebtId },

    #[error("invalid balance for {name}: {balance}")]
    InvalidBalance { name: String, balance: Money },

    #[error("invalid apr for {name}: {apr} (expected 0% to 100%)")]
    InvalidApr { name: String, apr: Rate },

    #[error("invalid minimum payment for {name}: {amount}")]
    InvalidMinimumPayment { name: String, amount: Money },

    #[error("invalid due day for {name}: {day} (expected 1 to 31)")]
    InvalidDueDay { name: String, day: u8 },

    #[error("invalid paycheck amount: {amount}")]
    InvalidPaycheckAmount { amount: Money },

    #[error("duplicate debt id: {id}")]
    DuplicateDebtId { id: DebtId },

    #[error("custom priority references unknown debt: {id}")]
    UnknownPriorityDebt { id: DebtId },
}

pub type Result<T> = std::result::Result<T, PlanError>;
