use std::path::PathBuf;

use anyhow::Result;
use clap::{arg, ArgMatches, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use u_shiftopt::config::SearchConfig;
use u_shiftopt::heuristic::Heuristic;
use u_shiftopt::search::{self, parse_mode_and_heuristic, SearchOutcome, Strategy};

fn cli() -> Command {
    Command::new("u-shiftopt")
        .about("Generates a random shift schedule and optimizes it")
        .after_help("Examples:\n  u-shiftopt --hill 3\n  u-shiftopt --anneal 1\n  u-shiftopt 2 --anneal --seed 42")
        .arg(arg!(<MODE> "Search type: --hill or --anneal").allow_hyphen_values(true))
        .arg(arg!(<HEURISTIC> "Heuristic id: 1, 2, or 3").allow_hyphen_values(true))
        .arg(
            arg!(--seed [SEED] "Seed for schedule generation and search")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--days [DAYS] "Number of days (default: random in 10..=50)")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--workers [WORKERS] "Number of workers (default: random, at least 4)")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--config [CONFIG] "Path to a TOML configuration file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive("u_shiftopt=info".parse()?)
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}

fn main() {
    let mut cmd = cli();
    let matches = cmd.get_matches_mut();

    let mode = matches.get_one::<String>("MODE").map(String::as_str).unwrap_or_default();
    let id = matches.get_one::<String>("HEURISTIC").map(String::as_str).unwrap_or_default();
    let (strategy, heuristic) = match parse_mode_and_heuristic(mode, id) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", cmd.render_usage());
            std::process::exit(2);
        }
    };

    if let Err(e) = init_tracing().and_then(|()| optimize(&matches, strategy, heuristic)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<SearchConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => SearchConfig::from_toml_file(path)?,
        None => SearchConfig::default(),
    };
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    if let Some(&days) = matches.get_one::<usize>("days") {
        config.schedule.days = Some(days);
    }
    if let Some(&workers) = matches.get_one::<usize>("workers") {
        config.schedule.workers = Some(workers);
    }
    config.validate()?;
    Ok(config)
}

fn optimize(
    matches: &ArgMatches,
    strategy: Strategy,
    heuristic: Heuristic,
) -> Result<()> {
    let config = load_config(matches)?;
    let engine_seed = match strategy {
        Strategy::Climb => config.climb.seed,
        Strategy::Anneal => config.anneal.seed,
    };
    let mut rng = match config.engine_seed(engine_seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let schedule = config.schedule.generate(&mut rng)?;
    println!(
        "Created schedule with {} days and {} workers.",
        schedule.num_days(),
        schedule.num_workers()
    );
    println!("initial schedule:\n{schedule}");

    let outcome = search::run(strategy, heuristic, schedule, &config, &mut rng)?;
    report(&outcome);
    Ok(())
}

fn report(outcome: &SearchOutcome) {
    println!("--------- {} / heuristic {} ---------", outcome.strategy, outcome.heuristic);
    println!("initial fitness: {}", outcome.initial_fitness);
    println!("final fitness: {}", outcome.final_fitness);
    if let Some(best) = outcome.best_fitness {
        println!("all time best fitness: {best}");
    }
    println!("evaluations: {}", outcome.evaluations);
    println!("optimized schedule:\n{}", outcome.schedule);
}
