use log::{error, info};
use quotecast_exchange::{ConsoleSink, ExchangeConfig};
use quotecast_runner::{Bootstrap, BootstrapConfig, Scenario};
use std::sync::Arc;

fn print_help() {
    eprintln!(
        r#"Quotecast - price-change notifier demo

USAGE:
    quotecast [OPTIONS]

OPTIONS:
    --config <PATH>     Load exchange configuration from JSON file
    --scenario <PATH>   Replay steps from a JSON scenario instead of the demo
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Run the built-in demo
    quotecast

    # Run with a larger exchange and JSON output
    quotecast --config quotecast.json
"#
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut scenario_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            "--scenario" | "-s" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --scenario requires a path argument");
                    std::process::exit(1);
                }
                scenario_path = Some(args[i].clone());
            }
            other => {
                eprintln!("Error: unknown argument '{}'", other);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let exchange_config = match config_path {
        Some(path) => {
            info!("Loading configuration from {}", path);
            ExchangeConfig::from_file(&path)?
        }
        None => ExchangeConfig::default(),
    };

    let scenario = match scenario_path {
        Some(path) => {
            info!("Loading scenario from {}", path);
            Scenario::from_json(&std::fs::read_to_string(&path)?)?
        }
        None => Scenario::demo(),
    };

    let sink = Arc::new(ConsoleSink::stdout(exchange_config.sink_format));
    let mut bootstrap = Bootstrap::with_config(BootstrapConfig::with_exchange(exchange_config), sink)?;

    let report = scenario.run(&mut bootstrap.exchange)?;
    for publish in &report.publishes {
        for failure in &publish.failures {
            error!("{}", failure);
        }
    }

    info!(
        "Done: {} publishes, {} notifications, {} failures, last quote {} @ {}",
        report.publishes.len(),
        report.total_delivered(),
        report.total_failures(),
        bootstrap.exchange.last_topic(),
        bootstrap.exchange.last_price()
    );

    Ok(())
}
