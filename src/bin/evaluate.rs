use sanpo::evaluation::{default_scenarios, format_report, run_scenario, ScenarioResult};
use sanpo::models::RouteType;
use sanpo::services::route_generator::RouteSynthesizer;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_RUNS: usize = 20;

fn print_help() {
    eprintln!(
        "\
Usage: evaluate [OPTIONS]

Options:
  --scenario=FILTER     Only run scenarios whose name contains FILTER
  --type=TYPE           Only evaluate one route type (loop, out-and-back, random)
  --runs=N              Routes generated per scenario and type (default: 20)
  --json                Output results as JSON
  --help                Show this help message"
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (less verbose for eval)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sanpo=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI args
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let scenario_filter = args.iter().find_map(|a| a.strip_prefix("--scenario="));
    let runs: usize = args
        .iter()
        .find_map(|a| a.strip_prefix("--runs="))
        .and_then(|s| s.parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_RUNS);
    let route_types: Vec<RouteType> = match args.iter().find_map(|a| a.strip_prefix("--type=")) {
        Some(name) => vec![name.parse::<RouteType>()?],
        None => RouteType::ALL.to_vec(),
    };
    let json_output = args.iter().any(|a| a == "--json");

    let synthesizer = RouteSynthesizer::new();

    let results: Vec<ScenarioResult> = default_scenarios()
        .iter()
        .filter(|s| scenario_filter.map_or(true, |f| s.name.contains(f)))
        .flat_map(|s| {
            tracing::info!("Running scenario {} ({} runs)", s.name, runs);
            run_scenario(&synthesizer, s, &route_types, runs)
        })
        .collect();

    if results.is_empty() {
        return Err("No scenarios matched".into());
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", format_report(&results));
    }

    Ok(())
}
