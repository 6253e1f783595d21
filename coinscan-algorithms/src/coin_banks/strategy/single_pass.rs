use super::{schedule, Outcome, Picker};
use crate::coin_banks::{
    config::Config, context::Context, selector::LazySelector, state::ScanState,
};
use logging_timer::time;

impl Picker for LazySelector {
    fn next_bank(&mut self, ctx: &Context, state: &ScanState) -> Option<usize> {
        self.select(ctx, state).map(|candidate| candidate.bank_id)
    }
}

/// Deterministic lazy greedy: always commits the bank with the highest current density.
#[time]
pub fn solve(ctx: &Context, config: &Config) -> Outcome {
    let mut selector = LazySelector::new(ctx, &ctx.fresh_state(), config.epsilon, None);
    schedule(ctx, &mut selector)
}
