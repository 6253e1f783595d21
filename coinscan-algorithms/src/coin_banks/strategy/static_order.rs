use super::{schedule, Outcome, Picker};
use crate::coin_banks::{context::Context, scoring::score, state::ScanState};
use logging_timer::time;

/// Banks ranked once by their day-0 score and never re-ranked.
pub struct StaticOrder {
    order: std::vec::IntoIter<usize>,
}

impl StaticOrder {
    pub fn new(ctx: &Context) -> Self {
        let state = ctx.fresh_state();
        let mut scored: Vec<(usize, f64)> = (0..ctx.num_banks())
            .map(|bank_id| (bank_id, score(ctx, bank_id, &state)))
            .filter(|&(_, s)| s > 0.0)
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        Self {
            order: scored
                .into_iter()
                .map(|(bank_id, _)| bank_id)
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl Picker for StaticOrder {
    fn next_bank(&mut self, ctx: &Context, state: &ScanState) -> Option<usize> {
        self.order
            .by_ref()
            .find(|&bank_id| score(ctx, bank_id, state) > 0.0)
    }
}

#[time]
pub fn solve(ctx: &Context) -> Outcome {
    schedule(ctx, &mut StaticOrder::new(ctx))
}
