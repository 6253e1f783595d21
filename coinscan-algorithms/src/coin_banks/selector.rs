use super::{context::Context, scoring::score, state::ScanState};
use rand::{rngs::SmallRng, Rng};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A bank together with the score it had when last computed.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub bank_id: usize,
    pub score: f64,
    /// Only compared between exactly equal scores.
    pub tiebreak: u64,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then(self.tiebreak.cmp(&other.tiebreak))
            .then(other.bank_id.cmp(&self.bank_id))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Candidate {}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

/// Max-heap of banks keyed by possibly stale scores.
///
/// Scores never increase as days pass and coins get collected, so a cached score is an
/// upper bound. `select` refreshes the top entry and only trusts it once it still beats
/// the next cached score.
pub struct LazySelector {
    heap: BinaryHeap<Candidate>,
    epsilon: f64,
    tiebreaks: Option<SmallRng>,
    refreshes: usize,
}

impl LazySelector {
    /// Scores every bank against `state`. Banks that cannot contribute are left out.
    pub fn new(
        ctx: &Context,
        state: &ScanState,
        epsilon: f64,
        mut tiebreaks: Option<SmallRng>,
    ) -> Self {
        let mut heap = BinaryHeap::with_capacity(ctx.num_banks());
        for bank_id in 0..ctx.num_banks() {
            if state.is_activated(bank_id) {
                continue;
            }
            let score = score(ctx, bank_id, state);
            if score > 0.0 {
                heap.push(Candidate {
                    bank_id,
                    score,
                    tiebreak: draw(&mut tiebreaks),
                });
            }
        }
        Self {
            heap,
            epsilon,
            tiebreaks,
            refreshes: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of score recomputations performed by `select` so far.
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    /// Removes and returns the bank with the highest current score, or `None` when no
    /// bank can contribute anymore.
    pub fn select(&mut self, ctx: &Context, state: &ScanState) -> Option<Candidate> {
        while let Some(mut best) = self.heap.pop() {
            best.score = score(ctx, best.bank_id, state);
            self.refreshes += 1;
            if best.score <= 0.0 {
                continue;
            }
            best.tiebreak = draw(&mut self.tiebreaks);
            match self.heap.peek().map(|next| next.score) {
                Some(next_score) if best.score + self.epsilon < next_score => self.heap.push(best),
                _ => return Some(best),
            }
        }
        None
    }
}

fn draw(tiebreaks: &mut Option<SmallRng>) -> u64 {
    tiebreaks.as_mut().map_or(0, |rng| rng.gen())
}
