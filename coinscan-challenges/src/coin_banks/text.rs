use super::{Bank, Challenge, ScheduleEntry, Solution};
use anyhow::{anyhow, Result};
use std::str::FromStr;

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            consumed: 0,
        }
    }

    fn next<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let token = self
            .inner
            .next()
            .ok_or_else(|| anyhow!("Unexpected end of input while reading {}", what))?;
        self.consumed += 1;
        token.parse::<T>().map_err(|_| {
            anyhow!(
                "Token {} ('{}') is not a valid {}",
                self.consumed,
                token,
                what
            )
        })
    }

    fn finish(mut self) -> Result<()> {
        match self.inner.next() {
            Some(token) => Err(anyhow!(
                "Unexpected trailing token {} ('{}')",
                self.consumed + 1,
                token
            )),
            None => Ok(()),
        }
    }
}

impl Challenge {
    /// Parses an instance:
    ///
    /// ```text
    /// <num_coins> <num_banks> <num_days>
    /// <coin values...>
    /// <num_offered> <activation_days> <scans_per_day>   (once per bank)
    /// <coin ids...>
    /// ```
    pub fn from_text(text: &str) -> Result<Self> {
        let mut tokens = Tokens::new(text);
        let num_coins: usize = tokens.next("coin count")?;
        let num_banks: usize = tokens.next("bank count")?;
        let num_days: u32 = tokens.next("day count")?;

        let coin_values = (0..num_coins)
            .map(|_| tokens.next::<u32>("coin value"))
            .collect::<Result<Vec<_>>>()?;

        // Counts come from untrusted input, so nothing is reserved up front
        let mut banks = Vec::new();
        for _ in 0..num_banks {
            let num_offered: usize = tokens.next("offered coin count")?;
            let activation_days: u32 = tokens.next("activation days")?;
            let scans_per_day: u32 = tokens.next("scans per day")?;
            let coin_ids = (0..num_offered)
                .map(|_| tokens.next::<usize>("coin id"))
                .collect::<Result<Vec<_>>>()?;
            banks.push(Bank {
                activation_days,
                scans_per_day,
                coin_ids,
            });
        }
        tokens.finish()?;

        Self::new(num_days, coin_values, banks)
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!(
                "{} {} {}",
                self.num_coins(),
                self.num_banks(),
                self.num_days
            ),
            join(&self.coin_values),
        ];
        for bank in &self.banks {
            lines.push(format!(
                "{} {} {}",
                bank.coin_ids.len(),
                bank.activation_days,
                bank.scans_per_day
            ));
            lines.push(join(&bank.coin_ids));
        }
        to_lines(lines)
    }
}

impl Solution {
    pub fn from_text(text: &str) -> Result<Self> {
        let mut tokens = Tokens::new(text);
        let num_entries: usize = tokens.next("entry count")?;
        let mut entries = Vec::new();
        for _ in 0..num_entries {
            let bank_id: usize = tokens.next("bank id")?;
            let num_collected: usize = tokens.next("collected coin count")?;
            let coin_ids = (0..num_collected)
                .map(|_| tokens.next::<usize>("coin id"))
                .collect::<Result<Vec<_>>>()?;
            entries.push(ScheduleEntry { bank_id, coin_ids });
        }
        tokens.finish()?;
        Ok(Self { entries })
    }

    /// Submission layout: entry count, then per entry `<bank_id> <count>` and the coin ids.
    pub fn to_text(&self) -> String {
        let mut lines = vec![self.entries.len().to_string()];
        for entry in &self.entries {
            lines.push(format!("{} {}", entry.bank_id, entry.coin_ids.len()));
            lines.push(join(&entry.coin_ids));
        }
        to_lines(lines)
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn to_lines(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
