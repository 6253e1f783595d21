pub mod commit;
pub mod config;
pub mod context;
pub mod ranking;
pub mod scoring;
pub mod selector;
pub mod state;
pub mod strategy;

pub use config::{Config, Strategy};
pub use context::Context;
pub use strategy::Outcome;

use anyhow::Result;
use coinscan_challenges::coin_banks::*;
use serde_json::{Map, Value};

/// Schedules `challenge` with the given configuration.
pub fn solve(challenge: &Challenge, config: &Config) -> Result<Outcome> {
    let ctx = Context::new(challenge);
    strategy::run(&ctx, config, None)
}

pub fn solve_challenge(
    challenge: &Challenge,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let config = Config::initialize(hyperparameters)?;
    let ctx = Context::new(challenge);
    let outcome = strategy::run(&ctx, &config, Some(save_solution))?;
    save_solution(&outcome.solution)
}

pub fn help() {
    println!("Coin bank scheduler: lazy greedy over bank value density");
    println!("");
    println!("HYPERPARAMETERS (json object, all optional):");
    println!("  strategy         \"multi_start\" (default), \"single_pass\", \"lookahead\" or \"static\"");
    println!("  runs             multi_start restarts (default 10)");
    println!("  seed             master seed of the tie-break streams (default 42)");
    println!("  lookahead_depth  speculative levels explored by lookahead (default 2)");
    println!("  lookahead_width  banks explored per level, null for all (default null)");
    println!("  epsilon          tolerance when validating a refreshed score (default 1e-8)");
    println!("");
    println!("EXAMPLE:");
    println!("  {{\"strategy\": \"lookahead\", \"lookahead_depth\": 1, \"lookahead_width\": 8}}");
}
