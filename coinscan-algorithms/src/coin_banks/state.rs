/// Mutable progress of a single run: elapsed days, collected coins and activated banks.
///
/// Cloning yields an independent snapshot, which is how lookahead explores branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanState {
    elapsed: u32,
    collected: Vec<bool>,
    activated: Vec<bool>,
}

impl ScanState {
    pub fn new(num_coins: usize, num_banks: usize) -> Self {
        Self {
            elapsed: 0,
            collected: vec![false; num_coins],
            activated: vec![false; num_banks],
        }
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn is_collected(&self, coin_id: usize) -> bool {
        self.collected[coin_id]
    }

    pub fn is_activated(&self, bank_id: usize) -> bool {
        self.activated[bank_id]
    }

    pub fn activate(&mut self, bank_id: usize, activation_days: u32) {
        self.activated[bank_id] = true;
        self.elapsed = self.elapsed.saturating_add(activation_days);
    }

    /// Marks a coin as collected. Returns `false` if it already was.
    pub fn collect(&mut self, coin_id: usize) -> bool {
        !std::mem::replace(&mut self.collected[coin_id], true)
    }
}
