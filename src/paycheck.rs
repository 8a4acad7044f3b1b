use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{Debt, DebtId};

/// cadence of recurring paychecks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayFrequency {
    Weekly,
    Biweekly,
    Monthly,
}

impl Default for PayFrequency {
    fn default() -> Self {
        PayFrequency::Biweekly
    }
}

impl PayFrequency {
    /// parse a frequency token; unrecognized input falls back to biweekly
    /// instead of failing, keeping the boundary total
    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "weekly" => PayFrequency::Weekly,
            "biweekly" => PayFrequency::Biweekly,
            "monthly" => PayFrequency::Monthly,
            _ => PayFrequency::default(),
        }
    }

    /// fraction of a billing month covered by one pay period
    pub fn monthly_factor(&self) -> Decimal {
        match self {
            PayFrequency::Weekly => dec!(12) / dec!(52),
            PayFrequency::Biweekly => dec!(12) / dec!(26),
            PayFrequency::Monthly => Decimal::ONE,
        }
    }

    /// days advanced per period; monthly uses a fixed 30-day approximation
    /// rather than calendar-month arithmetic
    pub fn period_days(&self) -> i64 {
        match self {
            PayFrequency::Weekly => 7,
            PayFrequency::Biweekly => 14,
            PayFrequency::Monthly => 30,
        }
    }
}

/// simple interest added to a balance over one pay period; non-compounding
/// within the period, compounding across periods once added to the balance
pub fn period_interest(balance: Money, apr: Rate, frequency: PayFrequency) -> Money {
    let monthly = balance.as_decimal() * apr.monthly_rate().as_decimal();
    Money::from_decimal(monthly * frequency.monthly_factor())
}

/// each debt's monthly minimum payment scaled to the pay cadence
pub fn per_paycheck_minimums(debts: &[Debt], frequency: PayFrequency) -> BTreeMap<DebtId, Money> {
    let factor = frequency.monthly_factor();
    debts
        .iter()
        .map(|debt| (debt.id, debt.min_payment * factor))
        .collect()
}

/// first payday on or after the start date: the start date itself while it
/// is still ahead, otherwise stepped forward until strictly after today
pub fn next_payday(
    start_date: NaiveDate,
    frequency: PayFrequency,
    time: &SafeTimeProvider,
) -> NaiveDate {
    let today = time.now().date_naive();
    if start_date > today {
        return start_date;
    }

    let step = Duration::days(frequency.period_days());
    let mut payday = start_date;
    while payday <= today {
        payday += step;
    }
    payday
}
