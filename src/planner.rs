use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use hourglass_rs::SafeTimeProvider;

use crate::decimal::Money;
use crate::paycheck::{next_payday, per_paycheck_minimums, period_interest};
use crate::types::{
    Debt, DebtId, NextMove, PaymentAllocation, PlanInput, PlanSummary, ScheduleEntry,
};

/// iteration ceiling, roughly ten years of biweekly paychecks; halts plans
/// whose payments never outrun accruing interest
const MAX_PERIODS: usize = 520;

/// simulate successive pay periods until every balance settles at or below
/// one cent, or the iteration ceiling is reached
///
/// operates on an owned working copy of the debts; the caller's records are
/// never mutated. degenerate inputs (no active debts, non-positive paycheck
/// amount) yield an empty schedule rather than an error.
pub fn full_schedule(input: &PlanInput) -> Vec<ScheduleEntry> {
    let mut schedule = Vec::new();
    if input.paycheck_amount <= Money::ZERO {
        return schedule;
    }

    let mut working: Vec<Debt> = input.debts.clone();
    let minimums = per_paycheck_minimums(&working, input.pay_frequency);
    let step = Duration::days(input.pay_frequency.period_days());
    let custom = input.custom_priority.as_deref();

    let mut paycheck_date = input.start_date;
    let mut periods = 0;

    while periods < MAX_PERIODS && working.iter().any(|d| d.balance > Money::CENT) {
        periods += 1;

        let mut pool = input.paycheck_amount;
        let mut allocations: Vec<PaymentAllocation> = Vec::new();
        let mut interest_accrued = BTreeMap::new();

        // accrue interest on active balances
        for debt in working.iter_mut() {
            if debt.is_active() {
                let interest = period_interest(debt.balance, debt.apr, input.pay_frequency);
                debt.balance += interest;
                interest_accrued.insert(debt.id, interest);
            }
        }

        // cover minimums in input order while the pool lasts
        for debt in working.iter_mut() {
            if !debt.is_active() {
                continue;
            }
            let due = minimums
                .get(&debt.id)
                .copied()
                .unwrap_or(Money::ZERO)
                .min(pool)
                .min(debt.balance);
            if due > Money::ZERO {
                allocations.push(PaymentAllocation {
                    debt_id: debt.id,
                    amount: due,
                });
                debt.balance -= due;
                pool -= due;
            }
        }

        // surplus goes to the strategy target, re-ranked on post-minimum
        // balances because the top debt shifts as balances shrink
        if pool > Money::ZERO {
            let target_id = input
                .strategy
                .choose_target(&working, custom)
                .map(|debt| debt.id);
            if let Some(target_id) = target_id {
                if let Some(target) = working.iter_mut().find(|d| d.id == target_id) {
                    let extra = pool.min(target.balance);
                    target.balance -= extra;
                    pool -= extra;
                    merge_allocation(&mut allocations, target_id, extra);
                }
            }
        }

        let remaining_balances: BTreeMap<DebtId, Money> = working
            .iter()
            .map(|d| (d.id, d.balance.max(Money::ZERO)))
            .collect();
        let total = allocations
            .iter()
            .fold(Money::ZERO, |acc, a| acc + a.amount);

        schedule.push(ScheduleEntry {
            paycheck_date,
            allocations,
            total,
            remaining_balances,
            interest_accrued,
        });

        paycheck_date += step;
    }

    schedule
}

/// aggregate a schedule into summary figures, computing the schedule first
/// when none is supplied
///
/// interest saved is measured against a minimum-only baseline: a second,
/// independent simulation whose paycheck amount is exactly the sum of the
/// per-paycheck minimums. the two runs share no state so each stays
/// independently checkable.
pub fn plan_summary(input: &PlanInput, schedule: Option<&[ScheduleEntry]>) -> PlanSummary {
    let computed;
    let schedule = match schedule {
        Some(entries) => entries,
        None => {
            computed = full_schedule(input);
            computed.as_slice()
        }
    };

    let total_debt_amount = input
        .debts
        .iter()
        .fold(Money::ZERO, |acc, d| acc + d.balance);

    let last = match schedule.last() {
        Some(entry) => entry,
        // degenerate input: nothing simulated, nothing saved
        None => {
            return PlanSummary {
                projected_debt_free_date: input.start_date,
                interest_saved_vs_minimums_only: Money::ZERO,
                total_interest_paid: Money::ZERO,
                months_to_payoff: 0,
                total_debt_amount,
            };
        }
    };

    let total_interest_paid = total_interest(schedule);
    let projected_debt_free_date = last.paycheck_date;
    let months_to_payoff = whole_months_between(input.start_date, projected_debt_free_date).max(1);

    let minimum_only_interest = total_interest(&minimum_only_schedule(input));
    let interest_saved_vs_minimums_only =
        (minimum_only_interest - total_interest_paid).max(Money::ZERO);

    PlanSummary {
        projected_debt_free_date,
        interest_saved_vs_minimums_only,
        total_interest_paid,
        months_to_payoff,
        total_debt_amount,
    }
}

/// one-shot recommendation for the upcoming payday: minimums then surplus
/// to the target, computed against the caller's balances without accrual,
/// with projections from the full simulation attached
pub fn next_move(input: &PlanInput, time: &SafeTimeProvider) -> NextMove {
    let payday = next_payday(input.start_date, input.pay_frequency, time);
    let minimums = per_paycheck_minimums(&input.debts, input.pay_frequency);
    let custom = input.custom_priority.as_deref();

    let mut pool = input.paycheck_amount;
    let mut payments: Vec<PaymentAllocation> = Vec::new();

    for debt in &input.debts {
        if !debt.is_active() {
            continue;
        }
        let due = minimums
            .get(&debt.id)
            .copied()
            .unwrap_or(Money::ZERO)
            .min(pool)
            .min(debt.balance);
        if due > Money::ZERO {
            payments.push(PaymentAllocation {
                debt_id: debt.id,
                amount: due,
            });
            pool -= due;
        }
    }

    let target = input.strategy.choose_target(&input.debts, custom);
    if let Some(target) = target {
        if pool > Money::ZERO {
            let already = payments
                .iter()
                .find(|a| a.debt_id == target.id)
                .map(|a| a.amount)
                .unwrap_or(Money::ZERO);
            let extra = pool.min(target.balance - already);
            if extra > Money::ZERO {
                merge_allocation(&mut payments, target.id, extra);
            }
        }
    }

    let schedule = full_schedule(input);
    let summary = plan_summary(input, Some(&schedule));

    let target_payment =
        target.and_then(|debt| payments.iter().find(|a| a.debt_id == debt.id).map(|a| (debt, a)));
    let headline = match target_payment {
        Some((debt, allocation)) => format!(
            "Pay ${:.2} to {} ({})",
            allocation.amount.round_dp(2),
            debt.name,
            input.strategy.label()
        ),
        None => "All debts paid off!".to_string(),
    };

    NextMove {
        date: payday,
        payments,
        headline,
        rationale: input.strategy,
        projected_debt_free_date: summary.projected_debt_free_date,
        interest_saved_vs_minimums_only: summary.interest_saved_vs_minimums_only,
        total_interest_paid: summary.total_interest_paid,
        months_to_payoff: summary.months_to_payoff,
    }
}

fn merge_allocation(allocations: &mut Vec<PaymentAllocation>, debt_id: DebtId, amount: Money) {
    match allocations.iter_mut().find(|a| a.debt_id == debt_id) {
        Some(existing) => existing.amount += amount,
        None => allocations.push(PaymentAllocation { debt_id, amount }),
    }
}

fn total_interest(schedule: &[ScheduleEntry]) -> Money {
    schedule
        .iter()
        .flat_map(|entry| entry.interest_accrued.values())
        .fold(Money::ZERO, |acc, interest| acc + *interest)
}

fn minimum_only_schedule(input: &PlanInput) -> Vec<ScheduleEntry> {
    let budget = per_paycheck_minimums(&input.debts, input.pay_frequency)
        .values()
        .fold(Money::ZERO, |acc, minimum| acc + *minimum);
    let baseline = PlanInput {
        paycheck_amount: budget,
        ..input.clone()
    };
    full_schedule(&baseline)
}

fn whole_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}
