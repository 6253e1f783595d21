use coinscan_challenges::coin_banks::Challenge;

/// Coin lists of every bank, ordered by descending value. Computed once per instance.
#[derive(Debug, Clone)]
pub struct RankedBanks {
    coins: Vec<Vec<usize>>,
}

impl RankedBanks {
    pub fn new(challenge: &Challenge) -> Self {
        let coins = challenge
            .banks
            .iter()
            .map(|bank| rank_coins(&bank.coin_ids, &challenge.coin_values))
            .collect();
        Self { coins }
    }

    pub fn coins(&self, bank_id: usize) -> &[usize] {
        &self.coins[bank_id]
    }
}

/// Sorts coin ids by descending value, ties by ascending id.
pub fn rank_coins(coin_ids: &[usize], coin_values: &[u32]) -> Vec<usize> {
    let mut ranked = coin_ids.to_vec();
    ranked.sort_unstable_by(|&a, &b| coin_values[b].cmp(&coin_values[a]).then(a.cmp(&b)));
    ranked
}
