//! Gold Hunt benchmark CLI.
//!
//! Times the search passes over one shared coin field.
//!
//! Usage:
//!   cargo run --bin goldhunt -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin goldhunt                          # defaults, all passes
//!   cargo run --bin goldhunt -- -n 2000000 -r 0.1     # the book-sized field
//!   cargo run --bin goldhunt -- --seed 42 --pass parallel

use std::env;
use std::fs;
use wargame::goldhunt::{run_benchmark, BenchConfig, SearchPass};

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'goldhunt --help' for usage.");
            std::process::exit(1);
        }
    };

    println!("GOLD HUNT BENCHMARK");
    println!("===================");
    println!();
    println!("Configuration:");
    println!("  Coins:          {}", config.field_coins);
    println!("  Field radius:   {}", config.field_radius);
    println!("  Search radius:  {}", config.search_radius);
    println!("  Workers:        {}", config.workers);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_benchmark(&config);
    println!("{}", report.to_text());

    if !report.passes_agree() {
        eprintln!("WARNING: passes disagree on the coin counts!");
        std::process::exit(1);
    }

    if args.iter().any(|a| a == "--json") {
        match report.to_json() {
            Ok(json) => {
                let filename = format!(
                    "goldhunt_report_{}.json",
                    chrono::Utc::now().format("%Y%m%d_%H%M%S")
                );
                match fs::write(&filename, json) {
                    Ok(()) => println!("Report saved to {}", filename),
                    Err(e) => eprintln!("Could not write {}: {}", filename, e),
                }
            }
            Err(e) => eprintln!("Could not serialize report: {}", e),
        }
    }
}

fn parse_args(args: &[String]) -> Result<BenchConfig, String> {
    let mut config = BenchConfig::default();
    let mut pass_choice: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--coins" => {
                config.field_coins = parse_value(args, &mut i, "coins")?;
            }
            "-r" | "--search-radius" => {
                config.search_radius = parse_value(args, &mut i, "search radius")?;
            }
            "--field-radius" => {
                config.field_radius = parse_value(args, &mut i, "field radius")?;
            }
            "--seed" => {
                config.seed = Some(parse_value(args, &mut i, "seed")?);
            }
            "-w" | "--workers" => {
                config.workers = parse_value(args, &mut i, "workers")?;
            }
            "--pass" => {
                i += 1;
                pass_choice = Some(
                    args.get(i)
                        .ok_or_else(|| "Missing value for --pass".to_string())?
                        .as_str(),
                );
            }
            "--json" => {}
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    config.passes = match pass_choice {
        None | Some("all") => vec![
            SearchPass::Scan,
            SearchPass::SquaredDistance,
            SearchPass::Parallel {
                workers: config.workers,
            },
        ],
        Some("scan") => vec![SearchPass::Scan],
        Some("squared") => vec![SearchPass::SquaredDistance],
        Some("parallel") => vec![SearchPass::Parallel {
            workers: config.workers,
        }],
        Some(other) => {
            return Err(format!(
                "Unknown pass '{}'. Expected scan, squared, parallel or all.",
                other
            ))
        }
    };

    Ok(config)
}

fn parse_value<T: std::str::FromStr>(
    args: &[String],
    i: &mut usize,
    what: &str,
) -> Result<T, String> {
    *i += 1;
    args.get(*i)
        .ok_or_else(|| format!("Missing value for {}", what))?
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", what, args[*i]))
}

fn print_usage() {
    println!("Gold Hunt benchmark\n");
    println!("Usage: goldhunt [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --coins <N>          Coins in the field (default 5000)");
    println!("  -r, --search-radius <R>  Search circle radius (default 1.0)");
    println!("      --field-radius <R>   Field radius (default 10.0)");
    println!("      --seed <SEED>        Seed the field for reproducibility");
    println!("  -w, --workers <N>        Threads for the parallel pass (default 4)");
    println!("      --pass <PASS>        scan | squared | parallel | all (default all)");
    println!("      --json               Also write a JSON report file");
}
