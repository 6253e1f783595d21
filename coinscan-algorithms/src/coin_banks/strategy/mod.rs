pub mod lookahead;
pub mod multi_start;
pub mod single_pass;
pub mod static_order;

use super::{
    commit::{commit, CommitOutcome},
    config::{Config, Strategy},
    context::Context,
    state::ScanState,
};
use anyhow::Result;
use coinscan_challenges::coin_banks::Solution;
use log::debug;

/// Chooses the next bank to commit. Strategies differ only in this choice.
pub trait Picker {
    /// Returns an unactivated bank with a positive score, or `None` to end the run.
    fn next_bank(&mut self, ctx: &Context, state: &ScanState) -> Option<usize>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub solution: Solution,
    pub total_value: u64,
}

/// Runs one schedule from a fresh state: pick, commit, repeat until the picker gives up
/// or the day budget is spent.
pub fn schedule<P: Picker>(ctx: &Context, picker: &mut P) -> Outcome {
    let mut state = ctx.fresh_state();
    let mut outcome = Outcome::default();
    let mut wasted_days = 0u32;

    while state.elapsed() < ctx.num_days() {
        let bank_id = match picker.next_bank(ctx, &state) {
            Some(bank_id) => bank_id,
            None => break,
        };
        match commit(ctx, &mut state, bank_id) {
            CommitOutcome::Collected { entry, value } => {
                outcome.total_value += value;
                outcome.solution.entries.push(entry);
            }
            CommitOutcome::Exhausted => wasted_days += ctx.bank(bank_id).activation_days,
            CommitOutcome::OutOfTime => break,
        }
    }

    debug!(
        "schedule finished on day {} with {} entries worth {} ({} days spent on empty banks)",
        state.elapsed(),
        outcome.solution.entries.len(),
        outcome.total_value,
        wasted_days
    );
    outcome
}

pub fn run(
    ctx: &Context,
    config: &Config,
    save_solution: Option<&dyn Fn(&Solution) -> Result<()>>,
) -> Result<Outcome> {
    match config.strategy {
        Strategy::SinglePass => Ok(single_pass::solve(ctx, config)),
        Strategy::MultiStart => multi_start::solve(ctx, config, save_solution),
        Strategy::Lookahead => Ok(lookahead::solve(ctx, config)),
        Strategy::Static => Ok(static_order::solve(ctx)),
    }
}
