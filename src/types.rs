use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::paycheck::PayFrequency;
use crate::strategy::Strategy;

/// unique identifier for a debt
pub type DebtId = Uuid;

/// debt categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtKind {
    CreditCard,
    Loan,
    Mortgage,
    Other,
}

/// a named, interest-bearing liability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: DebtId,
    pub name: String,
    pub balance: Money,
    /// annual rate as a decimal fraction of principal, 0 to 1
    pub apr: Rate,
    /// minimum required payment per billing month
    pub min_payment: Money,
    /// day of month the payment is due
    pub due_day: Option<u8>,
    pub kind: Option<DebtKind>,
}

impl Debt {
    /// create a debt with a fresh id
    pub fn new(name: impl Into<String>, balance: Money, apr: Rate, min_payment: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance,
            apr,
            min_payment,
            due_day: None,
            kind: None,
        }
    }

    /// a debt at or below zero is paid off and receives no allocation
    pub fn is_active(&self) -> bool {
        self.balance > Money::ZERO
    }
}

/// immutable configuration for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    pub debts: Vec<Debt>,
    pub strategy: Strategy,
    /// debt ordering used by the custom strategy
    pub custom_priority: Option<Vec<DebtId>>,
    /// cash available for debt payments each pay period
    pub paycheck_amount: Money,
    pub pay_frequency: PayFrequency,
    /// anchor date for period stepping
    pub start_date: NaiveDate,
}

/// money assigned to one debt in one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAllocation {
    pub debt_id: DebtId,
    pub amount: Money,
}

/// one simulated pay period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub paycheck_date: NaiveDate,
    pub allocations: Vec<PaymentAllocation>,
    /// cash disbursed this period, the sum of allocations
    pub total: Money,
    /// post-period balances, floored at zero
    pub remaining_balances: BTreeMap<DebtId, Money>,
    /// interest added to each active balance this period
    pub interest_accrued: BTreeMap<DebtId, Money>,
}

/// aggregate figures over an entire schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub projected_debt_free_date: NaiveDate,
    pub interest_saved_vs_minimums_only: Money,
    pub total_interest_paid: Money,
    pub months_to_payoff: u32,
    pub total_debt_amount: Money,
}

impl PlanSummary {
    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// single user-facing recommendation for the upcoming payday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextMove {
    pub date: NaiveDate,
    pub payments: Vec<PaymentAllocation>,
    pub headline: String,
    /// strategy that produced the recommendation
    pub rationale: Strategy,
    pub projected_debt_free_date: NaiveDate,
    pub interest_saved_vs_minimums_only: Money,
    pub total_interest_paid: Money,
    pub months_to_payoff: u32,
}

impl NextMove {
    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_debt() -> Debt {
        let mut debt = Debt::new(
            "Visa",
            Money::from_major(1_200),
            Rate::from_decimal(dec!(0.22)),
            Money::from_major(35),
        );
        debt.due_day = Some(15);
        debt.kind = Some(DebtKind::CreditCard);
        debt
    }

    #[test]
    fn test_debt_ids_are_unique() {
        let a = Debt::new("A", Money::ZERO, Rate::ZERO, Money::ZERO);
        let b = Debt::new("B", Money::ZERO, Rate::ZERO, Money::ZERO);
        assert_ne!(a.id, b.id);
        assert!(!a.is_active());
    }

    #[test]
    fn test_plan_input_json_round_trip() {
        let debt = sample_debt();
        let input = PlanInput {
            custom_priority: Some(vec![debt.id]),
            debts: vec![debt],
            strategy: Strategy::Custom,
            paycheck_amount: Money::from_major(300),
            pay_frequency: PayFrequency::Biweekly,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };

        let json = serde_json::to_string(&input).unwrap();
        let back: PlanInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn test_schedule_entry_json_round_trip() {
        let debt = sample_debt();
        let entry = ScheduleEntry {
            paycheck_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            allocations: vec![PaymentAllocation {
                debt_id: debt.id,
                amount: Money::from_str_exact("51.92").unwrap(),
            }],
            total: Money::from_str_exact("51.92").unwrap(),
            remaining_balances: BTreeMap::from([(debt.id, Money::from_major(1_150))]),
            interest_accrued: BTreeMap::from([(debt.id, Money::from_str_exact("10.15").unwrap())]),
        };

        let json = serde_json::to_string(&entry).unwrap();
        let back: ScheduleEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = PlanSummary {
            projected_debt_free_date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            interest_saved_vs_minimums_only: Money::from_str_exact("412.77").unwrap(),
            total_interest_paid: Money::from_str_exact("188.20").unwrap(),
            months_to_payoff: 15,
            total_debt_amount: Money::from_major(2_500),
        };

        let json = summary.to_json_pretty().unwrap();
        assert!(json.contains("projected_debt_free_date"));
        assert!(json.contains("2025-06-05"));
    }
}
