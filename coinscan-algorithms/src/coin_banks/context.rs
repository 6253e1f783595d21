use super::{ranking::RankedBanks, state::ScanState};
use coinscan_challenges::coin_banks::{Bank, Challenge};

/// Read-only view of an instance shared by every scoring and commit call of a solve.
pub struct Context<'a> {
    challenge: &'a Challenge,
    ranked: RankedBanks,
}

impl<'a> Context<'a> {
    pub fn new(challenge: &'a Challenge) -> Self {
        Self {
            challenge,
            ranked: RankedBanks::new(challenge),
        }
    }

    pub fn challenge(&self) -> &'a Challenge {
        self.challenge
    }

    pub fn bank(&self, bank_id: usize) -> &'a Bank {
        &self.challenge.banks[bank_id]
    }

    pub fn ranked_coins(&self, bank_id: usize) -> &[usize] {
        self.ranked.coins(bank_id)
    }

    pub fn coin_value(&self, coin_id: usize) -> u32 {
        self.challenge.coin_values[coin_id]
    }

    pub fn num_days(&self) -> u32 {
        self.challenge.num_days
    }

    pub fn num_banks(&self) -> usize {
        self.challenge.num_banks()
    }

    pub fn fresh_state(&self) -> ScanState {
        ScanState::new(self.challenge.num_coins(), self.challenge.num_banks())
    }
}
