//! S6 — statistics rollup (`spec.md` §4.6).
//!
//! Segment-level rollup runs once per parsed bet; round-level rollup sums
//! across every non-erroring bet in the round. Both are pure aggregation
//! over already-computed totals, no re-derivation.

use std::collections::HashMap;

use crate::parser::model::{BetTypeStat, LotteryBetInfo, LotteryType, ParsedBet, RoundStatistics, SegmentStatistics};

/// `{amount, groups, count=1}` per `(lottery, bet type)` present in this
/// segment, plus segment-wide totals.
pub fn segment_statistics(lotteries: &HashMap<LotteryType, LotteryBetInfo>) -> SegmentStatistics {
    let mut stats = SegmentStatistics::default();
    for (&lottery, info) in lotteries {
        let lottery_entry = stats.lottery_bet_type_stats.entry(lottery).or_default();
        for (&bet_type, detail) in &info.bet_types {
            let stat = BetTypeStat {
                amount: detail.total_amount,
                groups: detail.total_groups,
                count: 1,
            };
            lottery_entry.entry(bet_type).or_default().add(stat);
            stats.total_amount += stat.amount;
            stats.total_groups += stat.groups;
        }
    }
    stats
}

/// Round totals summed over every non-erroring parsed bet (`spec.md` §4.6,
/// §8 invariant 5 — independently re-derivable from `parsed_bets` for
/// property testing).
pub fn round_statistics(parsed_bets: &[ParsedBet]) -> RoundStatistics {
    let mut stats = RoundStatistics::default();
    for bet in parsed_bets.iter().filter(|b| !b.has_error) {
        stats.total_amount += bet.statistics.total_amount;
        stats.total_groups += bet.statistics.total_groups;
        stats.total_bets += 1;

        for (&lottery, bet_types) in &bet.statistics.lottery_bet_type_stats {
            let lottery_entry = stats.lottery_bet_type_stats.entry(lottery).or_default();
            let lottery_total = stats.lottery_totals.entry(lottery).or_default();
            for (&bet_type, stat) in bet_types {
                lottery_entry.entry(bet_type).or_default().add(*stat);
                lottery_total.add(*stat);
                stats.bet_type_totals.entry(bet_type).or_default().add(*stat);
            }
        }
    }
    stats
}
