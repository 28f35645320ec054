use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use fincalc::api::{ApiError, Calculator, evaluate_json, evaluate_request_json};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "fincalc",
    about = "Personal-finance calculators: projection, retirement, ROI, budget, emergency fund, debt payoff"
)]
struct Cli {
    #[arg(
        value_enum,
        help = "Calculator to run; when omitted the payload must name it in a \"calculator\" field"
    )]
    calculator: Option<Calculator>,
    #[arg(long, help = "JSON payload file; reads stdin when omitted")]
    input: Option<PathBuf>,
    #[arg(long, default_value_t = false, help = "Pretty-print the JSON result")]
    pretty: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ApiError> {
    let body = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let result = match cli.calculator {
        Some(calculator) => evaluate_json(calculator, &body)?,
        None => evaluate_request_json(&body)?,
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .map_err(ApiError::Serialize)?;
    println!("{rendered}");
    Ok(())
}
