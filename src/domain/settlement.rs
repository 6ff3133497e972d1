//! Even-split settlement.
//!
//! Every participant owes the same share of the total. Whoever paid more than
//! the share is a creditor, whoever paid less is a debtor, and debtors are
//! matched against creditors greedily:
//!
//! ```text
//! Paid:      A 30, B 10, C 0      (total 40, share 13.33)
//! Balances:  A +16.67, B -3.33, C -13.33
//!
//! Transfers:
//!   C pays A 13.33
//!   B pays A 3.33
//! ```
//!
//! The greedy largest-debt-to-largest-credit matching usually yields the
//! fewest transfers but is not guaranteed to be minimal for every
//! distribution of balances.

use super::money::Money;
use super::participant::{Participant, ParticipantRecord};
use rust_decimal_macros::dec;

/// Balances within this distance of zero are already settled.
pub const SETTLED_TOLERANCE: Money = Money(dec!(0.0001));

/// Transfers at or below this amount are never emitted; they are left over
/// from the rounded `total / n` division. A balance closer to zero than this
/// is also considered paid off.
pub const MIN_TRANSFER: Money = Money(dec!(0.01));

/// What a participant is owed (positive) or owes (negative).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberBalance {
    pub name: String,
    pub balance: Money,
}

/// A directed payment from a debtor to a creditor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settlement {
    pub total: Money,
    pub per_person_share: Money,
    pub transfers: Vec<Transfer>,
}

/// Settlement calculation service
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Calculates the transfers that settle an even split of `participants`.
    pub fn calculate(participants: &[Participant]) -> Settlement {
        Self::settle(
            participants
                .iter()
                .map(|p| (p.name.as_str(), p.amount_paid))
                .collect(),
        )
    }

    /// Same as [`SettlementCalculator::calculate`] for unvalidated rows.
    /// Amounts that do not parse count as zero.
    pub fn calculate_records(records: &[ParticipantRecord]) -> Settlement {
        Self::settle(
            records
                .iter()
                .map(|r| (r.name.as_str(), r.amount_paid()))
                .collect(),
        )
    }

    /// Per-participant balance against the even share, in input order.
    pub fn balances(participants: &[Participant]) -> Vec<MemberBalance> {
        let paid: Vec<(&str, Money)> = participants
            .iter()
            .map(|p| (p.name.as_str(), p.amount_paid))
            .collect();
        let total: Money = paid.iter().map(|(_, amount)| *amount).sum();
        compute_balances(&paid, total.split(paid.len()))
    }

    fn settle(paid: Vec<(&str, Money)>) -> Settlement {
        if paid.is_empty() {
            return Settlement::default();
        }

        let total: Money = paid.iter().map(|(_, amount)| *amount).sum();
        let per_person_share = total.split(paid.len());
        let balances = compute_balances(&paid, per_person_share);

        Settlement {
            total,
            per_person_share,
            transfers: match_transfers(balances),
        }
    }
}

fn compute_balances(paid: &[(&str, Money)], share: Money) -> Vec<MemberBalance> {
    paid.iter()
        .map(|(name, amount)| MemberBalance {
            name: (*name).to_string(),
            balance: *amount - share,
        })
        .collect()
}

fn match_transfers(balances: Vec<MemberBalance>) -> Vec<Transfer> {
    let (mut creditors, mut debtors): (Vec<MemberBalance>, Vec<MemberBalance>) = balances
        .into_iter()
        .filter(|b| b.balance.abs() > SETTLED_TOLERANCE)
        .partition(|b| b.balance > Money::ZERO);

    // Stable sorts: equal balances keep input order.
    creditors.sort_by(|a, b| b.balance.cmp(&a.balance));
    debtors.sort_by(|a, b| a.balance.cmp(&b.balance));

    let mut transfers = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];

        let amount = creditor.balance.min(-debtor.balance);
        if amount > MIN_TRANSFER {
            transfers.push(Transfer {
                from: debtor.name.clone(),
                to: creditor.name.clone(),
                amount,
            });
        }

        debtor.balance += amount;
        creditor.balance -= amount;

        if debtor.balance.abs() < MIN_TRANSFER {
            i += 1;
        }
        if creditor.balance.abs() < MIN_TRANSFER {
            j += 1;
        }
    }

    transfers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::participant::{ParticipantId, ParticipantName};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn group(paid: &[(&str, Decimal)]) -> Vec<Participant> {
        paid.iter()
            .enumerate()
            .map(|(idx, (name, amount))| {
                Participant::new(
                    ParticipantId(idx as u32 + 1),
                    ParticipantName::truncated(name),
                    Money::new(*amount),
                )
            })
            .collect()
    }

    fn transfer(from: &str, to: &str, amount: Money) -> Transfer {
        Transfer {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        }
    }

    #[test]
    fn test_empty_group_is_degenerate() {
        let settlement = SettlementCalculator::calculate(&[]);
        assert_eq!(settlement.total, Money::ZERO);
        assert_eq!(settlement.per_person_share, Money::ZERO);
        assert!(settlement.transfers.is_empty());
    }

    #[test]
    fn test_three_way_split() {
        let participants = group(&[("A", dec!(30)), ("B", dec!(10)), ("C", dec!(0))]);
        let settlement = SettlementCalculator::calculate(&participants);

        assert_eq!(settlement.total, Money::new(dec!(40)));
        assert_eq!(settlement.per_person_share.round_to_cents(), Money::new(dec!(13.33)));

        let rounded: Vec<Transfer> = settlement
            .transfers
            .iter()
            .map(|t| transfer(&t.from, &t.to, t.amount.round_to_cents()))
            .collect();
        assert_eq!(
            rounded,
            vec![
                transfer("C", "A", Money::new(dec!(13.33))),
                transfer("B", "A", Money::new(dec!(3.33))),
            ]
        );
    }

    #[test]
    fn test_transfers_zero_every_balance() {
        let participants = group(&[("A", dec!(30)), ("B", dec!(10)), ("C", dec!(0))]);
        let settlement = SettlementCalculator::calculate(&participants);

        let mut balances = SettlementCalculator::balances(&participants);
        for t in &settlement.transfers {
            for b in balances.iter_mut() {
                if b.name == t.from {
                    b.balance += t.amount;
                }
                if b.name == t.to {
                    b.balance -= t.amount;
                }
            }
        }
        for b in balances {
            assert!(b.balance.abs() < MIN_TRANSFER, "{} left with {}", b.name, b.balance);
        }
    }

    #[test]
    fn test_equal_payments_need_no_transfers() {
        let participants = group(&[("A", dec!(25)), ("B", dec!(25)), ("C", dec!(25))]);
        let settlement = SettlementCalculator::calculate(&participants);
        assert_eq!(settlement.per_person_share, Money::new(dec!(25)));
        assert!(settlement.transfers.is_empty());
    }

    #[test]
    fn test_near_equal_payments_are_settled() {
        let participants = group(&[("A", dec!(10.00)), ("B", dec!(10.01))]);
        let settlement = SettlementCalculator::calculate(&participants);
        assert!(settlement.transfers.is_empty());
    }

    #[test]
    fn test_single_participant_needs_no_transfers() {
        let participants = group(&[("A", dec!(99))]);
        let settlement = SettlementCalculator::calculate(&participants);
        assert_eq!(settlement.total, Money::new(dec!(99)));
        assert_eq!(settlement.per_person_share, Money::new(dec!(99)));
        assert!(settlement.transfers.is_empty());
    }

    #[test]
    fn test_one_payer_covers_everyone() {
        let participants = group(&[
            ("A", dec!(0)),
            ("B", dec!(100)),
            ("C", dec!(0)),
            ("D", dec!(0)),
        ]);
        let settlement = SettlementCalculator::calculate(&participants);

        assert_eq!(
            settlement.transfers,
            vec![
                transfer("A", "B", Money::new(dec!(25))),
                transfer("C", "B", Money::new(dec!(25))),
                transfer("D", "B", Money::new(dec!(25))),
            ]
        );
    }

    #[test]
    fn test_largest_debt_is_matched_with_largest_credit() {
        let participants = group(&[
            ("A", dec!(50)),
            ("B", dec!(0)),
            ("C", dec!(10)),
            ("D", dec!(20)),
        ]);
        // share 20: A +30, B -20, C -10, D settled
        let settlement = SettlementCalculator::calculate(&participants);
        assert_eq!(
            settlement.transfers,
            vec![
                transfer("B", "A", Money::new(dec!(20))),
                transfer("C", "A", Money::new(dec!(10))),
            ]
        );
    }

    #[test]
    fn test_debtor_split_across_creditors() {
        let participants = group(&[("A", dec!(40)), ("B", dec!(35)), ("C", dec!(0))]);
        // share 25: A +15, B +10, C -25
        let settlement = SettlementCalculator::calculate(&participants);
        assert_eq!(
            settlement.transfers,
            vec![
                transfer("C", "A", Money::new(dec!(15))),
                transfer("C", "B", Money::new(dec!(10))),
            ]
        );
    }

    #[test]
    fn test_balances_sum_to_zero() {
        let participants = group(&[("A", dec!(10)), ("B", dec!(20)), ("C", dec!(0.07))]);
        let sum: Money = SettlementCalculator::balances(&participants)
            .iter()
            .map(|b| b.balance)
            .sum();
        assert!(sum.abs() < Money::new(dec!(0.001)));
    }

    #[test]
    fn test_records_with_invalid_amounts_count_as_zero() {
        let records = vec![
            ParticipantRecord::new("A", "30"),
            ParticipantRecord::new("B", "ten"),
            ParticipantRecord::new("C", ""),
        ];
        let settlement = SettlementCalculator::calculate_records(&records);
        assert_eq!(settlement.total, Money::new(dec!(30)));
        assert_eq!(settlement.per_person_share, Money::new(dec!(10)));
        assert_eq!(settlement.transfers.len(), 2);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let participants = group(&[("A", dec!(12.5)), ("B", dec!(7)), ("C", dec!(3.3))]);
        assert_eq!(
            SettlementCalculator::calculate(&participants),
            SettlementCalculator::calculate(&participants)
        );
    }
}
