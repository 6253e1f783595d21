mod text;

use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};
use std::collections::HashSet;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Difficulty {
    pub num_coins: usize,
    pub num_banks: usize,
    pub num_days: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    pub activation_days: u32,
    pub scans_per_day: u32,
    pub coin_ids: Vec<usize>,
}

impl Bank {
    /// Days left for scanning once an activation starting at `elapsed` has finished.
    /// Returns `None` unless at least one full scan day remains.
    pub fn scan_days_after(&self, elapsed: u32, num_days: u32) -> Option<u32> {
        let ready = elapsed as u64 + self.activation_days as u64;
        if ready < num_days as u64 {
            Some(num_days - ready as u32)
        } else {
            None
        }
    }

    /// Number of coins this bank can hand over in `scan_days` days.
    pub fn scan_capacity(&self, scan_days: u32) -> usize {
        let raw = self.scans_per_day as u64 * scan_days as u64;
        raw.min(self.coin_ids.len() as u64) as usize
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleEntry {
    pub bank_id: usize,
    pub coin_ids: Vec<usize>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub entries: Vec<ScheduleEntry>,
}

impl Solution {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn num_collected(&self) -> usize {
        self.entries.iter().map(|e| e.coin_ids.len()).sum()
    }
}

impl TryFrom<Map<String, Value>> for Solution {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub num_days: u32,
    pub coin_values: Vec<u32>,
    pub banks: Vec<Bank>,
}

impl Challenge {
    pub fn new(num_days: u32, coin_values: Vec<u32>, banks: Vec<Bank>) -> Result<Self> {
        let challenge = Self {
            num_days,
            coin_values,
            banks,
        };
        challenge.validate()?;
        Ok(challenge)
    }

    pub fn validate(&self) -> Result<()> {
        let num_coins = self.num_coins();
        for (bank_id, bank) in self.banks.iter().enumerate() {
            if bank.activation_days == 0 {
                return Err(anyhow!("Bank ({}) has an activation of 0 days", bank_id));
            }
            let mut seen = HashSet::with_capacity(bank.coin_ids.len());
            for &coin in &bank.coin_ids {
                if coin >= num_coins {
                    return Err(anyhow!(
                        "Bank ({}) offers coin ({}) which is out of bounds",
                        bank_id,
                        coin
                    ));
                }
                if !seen.insert(coin) {
                    return Err(anyhow!("Bank ({}) offers coin ({}) twice", bank_id, coin));
                }
            }
        }
        Ok(())
    }

    pub fn num_coins(&self) -> usize {
        self.coin_values.len()
    }

    pub fn num_banks(&self) -> usize {
        self.banks.len()
    }

    pub fn bank(&self, bank_id: usize) -> Result<&Bank> {
        self.banks
            .get(bank_id)
            .ok_or_else(|| anyhow!("Bank ({}) is out of bounds", bank_id))
    }

    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let num_coins = difficulty.num_coins;

        let coin_values: Vec<u32> = (0..num_coins).map(|_| rng.gen_range(1..=1000)).collect();

        let max_activation = (difficulty.num_days / 10).max(1);
        let max_offered = num_coins.min(100);

        // Partial Fisher-Yates over a shared pool so each bank gets distinct coins
        let mut pool: Vec<usize> = (0..num_coins).collect();
        let mut banks = Vec::with_capacity(difficulty.num_banks);
        for _ in 0..difficulty.num_banks {
            let num_offered = if max_offered == 0 {
                0
            } else {
                rng.gen_range(1..=max_offered)
            };
            for j in 0..num_offered {
                let idx = rng.gen_range(j..pool.len());
                pool.swap(j, idx);
            }
            banks.push(Bank {
                activation_days: rng.gen_range(1..=max_activation),
                scans_per_day: rng.gen_range(1..=10),
                coin_ids: pool[..num_offered].to_vec(),
            });
        }

        Self::new(difficulty.num_days, coin_values, banks)
    }

    /// Strictly checks a schedule and returns the value it collects.
    pub fn evaluate_total_value(&self, solution: &Solution) -> Result<u64> {
        let mut scheduled = HashSet::with_capacity(solution.entries.len());
        let mut collected = vec![false; self.num_coins()];
        let mut elapsed = 0u32;
        let mut total_value = 0u64;

        for (i, entry) in solution.entries.iter().enumerate() {
            let bank = self.bank(entry.bank_id)?;
            if !scheduled.insert(entry.bank_id) {
                return Err(anyhow!(
                    "Entry {}: bank ({}) is scheduled more than once",
                    i,
                    entry.bank_id
                ));
            }
            let scan_days = bank.scan_days_after(elapsed, self.num_days).ok_or_else(|| {
                anyhow!(
                    "Entry {}: bank ({}) finishes activation on day {} but only {} days are available",
                    i,
                    entry.bank_id,
                    elapsed as u64 + bank.activation_days as u64,
                    self.num_days
                )
            })?;
            elapsed += bank.activation_days;

            let capacity = bank.scan_capacity(scan_days);
            if entry.coin_ids.len() > capacity {
                return Err(anyhow!(
                    "Entry {}: bank ({}) collects {} coins but can only scan {}",
                    i,
                    entry.bank_id,
                    entry.coin_ids.len(),
                    capacity
                ));
            }

            let offered: HashSet<usize> = bank.coin_ids.iter().cloned().collect();
            for &coin in &entry.coin_ids {
                if coin >= self.num_coins() {
                    return Err(anyhow!("Coin ({}) is out of bounds", coin));
                }
                if !offered.contains(&coin) {
                    return Err(anyhow!(
                        "Entry {}: coin ({}) is not offered by bank ({})",
                        i,
                        coin,
                        entry.bank_id
                    ));
                }
                if collected[coin] {
                    return Err(anyhow!("Coin ({}) is collected more than once", coin));
                }
                collected[coin] = true;
                total_value += self.coin_values[coin] as u64;
            }
        }

        Ok(total_value)
    }

    /// Replays a schedule from scratch and returns the value it actually realizes.
    ///
    /// Unlike [`Challenge::evaluate_total_value`] this is lenient: replay stops at the first
    /// bank whose activation leaves no scan day, coins that were already collected are
    /// skipped and each entry is truncated to its bank's capacity.
    pub fn simulate_total_value(&self, solution: &Solution) -> Result<u64> {
        let mut collected = vec![false; self.num_coins()];
        let mut elapsed = 0u32;
        let mut total_value = 0u64;

        for entry in &solution.entries {
            let bank = self.bank(entry.bank_id)?;
            let scan_days = match bank.scan_days_after(elapsed, self.num_days) {
                Some(days) => days,
                None => break,
            };
            elapsed += bank.activation_days;

            let capacity = bank.scan_capacity(scan_days);
            let mut taken = 0;
            for &coin in &entry.coin_ids {
                if taken == capacity {
                    break;
                }
                let seen = collected
                    .get_mut(coin)
                    .ok_or_else(|| anyhow!("Coin ({}) is out of bounds", coin))?;
                if !*seen {
                    *seen = true;
                    total_value += self.coin_values[coin] as u64;
                    taken += 1;
                }
            }
        }

        Ok(total_value)
    }
}
