use serde::{Deserialize, Serialize};

use crate::types::{Debt, DebtId};

/// payoff strategies, a closed set so target selection stays exhaustive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// highest APR first, minimizing total interest
    Avalanche,
    /// smallest balance first, for early wins
    Snowball,
    /// caller-supplied debt ordering
    Custom,
}

impl Strategy {
    /// active debts ranked by payoff priority; ties keep input order
    pub fn rank<'a>(&self, debts: &'a [Debt], custom_priority: Option<&[DebtId]>) -> Vec<&'a Debt> {
        let mut active: Vec<&Debt> = debts.iter().filter(|d| d.is_active()).collect();

        match self {
            Strategy::Avalanche => active.sort_by(|a, b| b.apr.cmp(&a.apr)),
            Strategy::Snowball => active.sort_by(|a, b| a.balance.cmp(&b.balance)),
            Strategy::Custom => {
                // debts missing from the priority list sort after every
                // listed debt, keeping their relative order; with no list
                // the input order stands
                if let Some(priority) = custom_priority {
                    active.sort_by_key(|d| position_or_last(priority, d.id));
                }
            }
        }

        active
    }

    /// the single debt that receives surplus cash this period, re-evaluated
    /// every period because relative ranks shift as balances shrink
    pub fn choose_target<'a>(
        &self,
        debts: &'a [Debt],
        custom_priority: Option<&[DebtId]>,
    ) -> Option<&'a Debt> {
        self.rank(debts, custom_priority).into_iter().next()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Avalanche => "Highest Interest First",
            Strategy::Snowball => "Smallest Balance First",
            Strategy::Custom => "Custom Priority",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Avalanche => {
                "Pay minimums on all debts, then attack the highest APR debt \
                 with all extra funds to minimize total interest paid."
            }
            Strategy::Snowball => {
                "Pay minimums on all debts, then attack the smallest balance \
                 debt first for psychological wins and momentum."
            }
            Strategy::Custom => {
                "Pay debts in your custom order based on your personal \
                 priorities and circumstances."
            }
        }
    }
}

fn position_or_last(priority: &[DebtId], id: DebtId) -> usize {
    priority.iter().position(|p| *p == id).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn debt(name: &str, balance: i64, apr: Decimal) -> Debt {
        Debt::new(
            name,
            Money::from_major(balance),
            Rate::from_decimal(apr),
            Money::from_major(25),
        )
    }

    fn names(ranked: &[&Debt]) -> Vec<String> {
        ranked.iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn test_avalanche_ranks_by_descending_apr() {
        let debts = vec![
            debt("low", 100, dec!(0.05)),
            debt("high", 100, dec!(0.29)),
            debt("mid", 100, dec!(0.12)),
        ];
        let ranked = Strategy::Avalanche.rank(&debts, None);
        assert_eq!(names(&ranked), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_avalanche_ties_keep_input_order() {
        let debts = vec![
            debt("first", 900, dec!(0.20)),
            debt("second", 100, dec!(0.20)),
            debt("third", 500, dec!(0.20)),
        ];
        let ranked = Strategy::Avalanche.rank(&debts, None);
        assert_eq!(names(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_snowball_ranks_by_ascending_balance() {
        let debts = vec![
            debt("big", 5_000, dec!(0.30)),
            debt("small", 200, dec!(0.05)),
            debt("mid", 1_000, dec!(0.15)),
        ];
        let ranked = Strategy::Snowball.rank(&debts, None);
        assert_eq!(names(&ranked), vec!["small", "mid", "big"]);
    }

    #[test]
    fn test_snowball_ties_keep_input_order() {
        let debts = vec![
            debt("first", 750, dec!(0.10)),
            debt("second", 750, dec!(0.25)),
        ];
        let ranked = Strategy::Snowball.rank(&debts, None);
        assert_eq!(names(&ranked), vec!["first", "second"]);
    }

    #[test]
    fn test_paid_off_debts_are_excluded() {
        let debts = vec![
            debt("paid", 0, dec!(0.30)),
            debt("active", 400, dec!(0.10)),
        ];
        let ranked = Strategy::Avalanche.rank(&debts, None);
        assert_eq!(names(&ranked), vec!["active"]);

        let all_paid = vec![debt("a", 0, dec!(0.10)), debt("b", 0, dec!(0.20))];
        assert!(Strategy::Avalanche.choose_target(&all_paid, None).is_none());
    }

    #[test]
    fn test_custom_order_follows_priority_list() {
        let debts = vec![
            debt("a", 100, dec!(0.10)),
            debt("b", 200, dec!(0.20)),
            debt("c", 300, dec!(0.30)),
        ];
        let priority = vec![debts[2].id, debts[0].id, debts[1].id];
        let ranked = Strategy::Custom.rank(&debts, Some(&priority));
        assert_eq!(names(&ranked), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_custom_omitted_debts_sort_after_listed_in_input_order() {
        let debts = vec![
            debt("a", 100, dec!(0.10)),
            debt("b", 200, dec!(0.20)),
            debt("c", 300, dec!(0.30)),
            debt("d", 400, dec!(0.40)),
        ];
        // only c is listed; a, b, d trail in their original relative order
        let priority = vec![debts[2].id];
        let ranked = Strategy::Custom.rank(&debts, Some(&priority));
        assert_eq!(names(&ranked), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_custom_without_priority_keeps_input_order() {
        let debts = vec![
            debt("first", 900, dec!(0.10)),
            debt("second", 100, dec!(0.30)),
        ];
        let ranked = Strategy::Custom.rank(&debts, None);
        assert_eq!(names(&ranked), vec!["first", "second"]);
    }

    #[test]
    fn test_choose_target_is_top_of_ranking() {
        let debts = vec![
            debt("low", 100, dec!(0.05)),
            debt("high", 2_000, dec!(0.29)),
        ];
        let target = Strategy::Avalanche.choose_target(&debts, None).unwrap();
        assert_eq!(target.name, "high");

        let target = Strategy::Snowball.choose_target(&debts, None).unwrap();
        assert_eq!(target.name, "low");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Strategy::Avalanche.label(), "Highest Interest First");
        assert_eq!(Strategy::Snowball.label(), "Smallest Balance First");
        assert_eq!(Strategy::Custom.label(), "Custom Priority");
        assert!(Strategy::Avalanche.description().contains("highest APR"));
    }
}
