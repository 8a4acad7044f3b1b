pub mod decimal;
pub mod errors;
pub mod paycheck;
pub mod planner;
pub mod strategy;
pub mod types;
pub mod validate;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{PlanError, Result};
pub use paycheck::{next_payday, per_paycheck_minimums, period_interest, PayFrequency};
pub use planner::{full_schedule, next_move, plan_summary};
pub use strategy::Strategy;
pub use types::{
    Debt, DebtId, DebtKind, NextMove, PaymentAllocation, PlanInput, PlanSummary, ScheduleEntry,
};
pub use validate::{validate_debt, validate_plan};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
