use super::{context::Context, state::ScanState};

/// Coins `bank_id` could still scan if it were activated now, or 0 when activation would
/// leave no scan day.
pub fn capacity(ctx: &Context, bank_id: usize, elapsed: u32) -> usize {
    let bank = ctx.bank(bank_id);
    match bank.scan_days_after(elapsed, ctx.num_days()) {
        Some(scan_days) => bank.scan_capacity(scan_days),
        None => 0,
    }
}

/// Summed value of the best uncollected coins that fit in the bank's capacity.
/// Collected coins are skipped and do not use up capacity.
pub fn potential_value(ctx: &Context, bank_id: usize, state: &ScanState) -> u64 {
    let capacity = capacity(ctx, bank_id, state.elapsed());
    ctx.ranked_coins(bank_id)
        .iter()
        .filter(|&&coin| !state.is_collected(coin))
        .take(capacity)
        .map(|&coin| ctx.coin_value(coin) as u64)
        .sum()
}

/// Value density of activating `bank_id` now: potential value per activation day.
pub fn score(ctx: &Context, bank_id: usize, state: &ScanState) -> f64 {
    let value = potential_value(ctx, bank_id, state);
    if value == 0 {
        0.0
    } else {
        value as f64 / ctx.bank(bank_id).activation_days as f64
    }
}
