use super::{schedule, Outcome, Picker};
use crate::coin_banks::{
    commit::commit, config::Config, context::Context, scoring::score, state::ScanState,
};
use logging_timer::time;

/// Ranks banks by their own density plus a decaying estimate of the best follow-up chain.
///
/// Follow-ups are explored on cloned states, so evaluating never touches the run's state.
pub struct Lookahead {
    max_depth: usize,
    width: Option<usize>,
}

impl Lookahead {
    pub fn new(max_depth: usize, width: Option<usize>) -> Self {
        Self { max_depth, width }
    }

    /// Unactivated banks with a positive score, best first, cut to the configured width.
    fn frontier(&self, ctx: &Context, state: &ScanState) -> Vec<(usize, f64)> {
        let mut frontier: Vec<(usize, f64)> = (0..ctx.num_banks())
            .filter(|&bank_id| !state.is_activated(bank_id))
            .map(|bank_id| (bank_id, score(ctx, bank_id, state)))
            .filter(|&(_, s)| s > 0.0)
            .collect();
        frontier.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        if let Some(width) = self.width {
            frontier.truncate(width);
        }
        frontier
    }

    /// `immediate` plus the best continuation after committing `bank_id`, weighted by
    /// `1 / (level + 1)` where `level` is the continuation's distance from the root.
    pub fn evaluate(
        &self,
        ctx: &Context,
        state: &ScanState,
        bank_id: usize,
        immediate: f64,
        depth: usize,
    ) -> f64 {
        if depth >= self.max_depth {
            return immediate;
        }
        let mut branch = state.clone();
        commit(ctx, &mut branch, bank_id);

        let continuation = self
            .frontier(ctx, &branch)
            .into_iter()
            .map(|(next, s)| self.evaluate(ctx, &branch, next, s, depth + 1))
            .fold(0.0, f64::max);
        let level = depth + 1;
        immediate + continuation / (level + 1) as f64
    }
}

impl Picker for Lookahead {
    fn next_bank(&mut self, ctx: &Context, state: &ScanState) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (bank_id, immediate) in self.frontier(ctx, state) {
            let value = self.evaluate(ctx, state, bank_id, immediate, 0);
            if best.map_or(true, |(_, b)| value > b) {
                best = Some((bank_id, value));
            }
        }
        best.map(|(bank_id, _)| bank_id)
    }
}

#[time]
pub fn solve(ctx: &Context, config: &Config) -> Outcome {
    let mut lookahead = Lookahead::new(config.lookahead_depth, config.lookahead_width);
    schedule(ctx, &mut lookahead)
}
