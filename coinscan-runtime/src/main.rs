use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use coinscan_algorithms::coin_banks as algorithm;
use coinscan_challenges::coin_banks::{Challenge, Difficulty, Solution};
use log::info;
use serde_json::{Map, Value};
use std::{cell::RefCell, fs, io::Read, path::PathBuf};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("coinscan-runtime")
        .about("Schedules bank activations to collect the most valuable coins")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Computes a schedule for an instance")
                .arg(
                    arg!(<INSTANCE> "Path to an instance file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--hyperparameters [HYPERPARAMETERS] "Hyperparameters json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the schedule will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--json "Write the schedule as json instead of the submission format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Verifies a schedule and prints the value it collects")
                .arg(
                    arg!(<INSTANCE> "Path to an instance file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<SOLUTION> "Path to a schedule file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a random instance")
                .arg(arg!(--coins <COINS> "Number of coins").value_parser(clap::value_parser!(usize)))
                .arg(arg!(--banks <BANKS> "Number of banks").value_parser(clap::value_parser!(usize)))
                .arg(arg!(--days <DAYS> "Day budget").value_parser(clap::value_parser!(u32)))
                .arg(
                    arg!(--seed [SEED] "Seed of the generator")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the instance will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(Command::new("describe").about("Describes the solver hyperparameters"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<PathBuf>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("hyperparameters").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("json"),
        ),
        Some(("verify", sub_m)) => verify(
            sub_m.get_one::<PathBuf>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        Some(("generate", sub_m)) => generate(
            *sub_m.get_one::<usize>("coins").unwrap(),
            *sub_m.get_one::<usize>("banks").unwrap(),
            *sub_m.get_one::<u32>("days").unwrap(),
            *sub_m.get_one::<u64>("seed").unwrap(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("describe", _)) => {
            algorithm::help();
            Ok(())
        }
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn solve(
    instance_path: PathBuf,
    hyperparameters: Option<String>,
    output_path: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let challenge = load_instance(&instance_path)?;
    let hyperparameters = match hyperparameters {
        Some(h) => Some(load_hyperparameters(&h)?),
        None => None,
    };
    info!(
        "loaded {}: {} coins, {} banks, {} days",
        instance_path.display(),
        challenge.num_coins(),
        challenge.num_banks(),
        challenge.num_days
    );

    let solution = RefCell::new(Solution::new());
    let save_solution_fn = |s: &Solution| -> Result<()> {
        *solution.borrow_mut() = s.clone();
        Ok(())
    };
    algorithm::solve_challenge(&challenge, &save_solution_fn, &hyperparameters)?;
    let solution = solution.into_inner();

    let total_value = challenge.evaluate_total_value(&solution)?;
    info!(
        "schedule activates {} banks and collects {} coins worth {}",
        solution.entries.len(),
        solution.num_collected(),
        total_value
    );

    let output = if json {
        serde_json::to_string(&solution)?
    } else {
        solution.to_text()
    };
    match output_path {
        Some(path) => fs::write(&path, output)
            .map_err(|e| anyhow!("Failed to write schedule to {}: {}", path.display(), e)),
        None => {
            print!("{}", output);
            Ok(())
        }
    }
}

pub fn verify(instance_path: PathBuf, solution_path: String) -> Result<()> {
    let challenge = load_instance(&instance_path)?;
    let solution = load_solution(&solution_path)?;
    let total_value = challenge
        .evaluate_total_value(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    println!("Solution is valid. Total value: {}", total_value);
    Ok(())
}

pub fn generate(
    num_coins: usize,
    num_banks: usize,
    num_days: u32,
    seed: u64,
    output_path: Option<PathBuf>,
) -> Result<()> {
    let mut seed_bytes = [0u8; 32];
    seed_bytes[..8].copy_from_slice(&seed.to_le_bytes());
    let difficulty = Difficulty {
        num_coins,
        num_banks,
        num_days,
    };
    let challenge = Challenge::generate_instance(&seed_bytes, &difficulty)?;
    let output = challenge.to_text();
    match output_path {
        Some(path) => fs::write(&path, output)
            .map_err(|e| anyhow!("Failed to write instance to {}: {}", path.display(), e)),
        None => {
            print!("{}", output);
            Ok(())
        }
    }
}

fn load_instance(path: &PathBuf) -> Result<Challenge> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read instance file {}: {}", path.display(), e))?;
    Challenge::from_text(&text)
        .map_err(|e| anyhow!("Failed to parse instance {}: {}", path.display(), e))
}

fn load_solution(solution: &str) -> Result<Solution> {
    let text = if solution == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read solution from stdin: {}", e))?;
        buffer
    } else {
        fs::read_to_string(solution)
            .map_err(|e| anyhow!("Failed to read solution file {}: {}", solution, e))?
    };

    if solution.ends_with(".json") {
        serde_json::from_str::<Solution>(&text).map_err(|e| anyhow!("Failed to parse solution: {}", e))
    } else {
        Solution::from_text(&text).map_err(|e| anyhow!("Failed to parse solution: {}", e))
    }
}

fn load_hyperparameters(hyperparameters: &str) -> Result<Map<String, Value>> {
    let hyperparameters = if hyperparameters.ends_with(".json") {
        fs::read_to_string(hyperparameters).map_err(|e| {
            anyhow!(
                "Failed to read hyperparameters file {}: {}",
                hyperparameters,
                e
            )
        })?
    } else {
        hyperparameters.to_string()
    };

    serde_json::from_str::<Map<String, Value>>(&hyperparameters)
        .map_err(|e| anyhow!("Failed to parse hyperparameters: {}", e))
}
