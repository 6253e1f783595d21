use super::{context::Context, state::ScanState};
use coinscan_challenges::coin_banks::ScheduleEntry;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The bank scanned at least one new coin.
    Collected { entry: ScheduleEntry, value: u64 },
    /// Activation days were spent but every offered coin was already collected.
    Exhausted,
    /// Activation would leave no scan day. Nothing was changed.
    OutOfTime,
}

/// Activates `bank_id` and claims its best uncollected coins up to capacity.
pub fn commit(ctx: &Context, state: &mut ScanState, bank_id: usize) -> CommitOutcome {
    let bank = ctx.bank(bank_id);
    let scan_days = match bank.scan_days_after(state.elapsed(), ctx.num_days()) {
        Some(days) => days,
        None => return CommitOutcome::OutOfTime,
    };
    state.activate(bank_id, bank.activation_days);

    let capacity = bank.scan_capacity(scan_days);
    let mut coin_ids = Vec::with_capacity(capacity);
    let mut value = 0u64;
    for &coin in ctx.ranked_coins(bank_id) {
        if coin_ids.len() == capacity {
            break;
        }
        if state.collect(coin) {
            coin_ids.push(coin);
            value += ctx.coin_value(coin) as u64;
        }
    }

    debug!(
        "bank {} ready on day {}: {} coins worth {}",
        bank_id,
        state.elapsed(),
        coin_ids.len(),
        value
    );
    if coin_ids.is_empty() {
        CommitOutcome::Exhausted
    } else {
        CommitOutcome::Collected {
            entry: ScheduleEntry { bank_id, coin_ids },
            value,
        }
    }
}
