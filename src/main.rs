use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use liquidacion_engine::api::{AppState, create_router};
use liquidacion_engine::calculation::SettlementCalculator;
use liquidacion_engine::config::{CalculatorConfig, ConfigLoader};
use liquidacion_engine::models::SettlementInput;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Labor settlement calculator.
#[derive(Debug, Parser)]
struct Cli {
    /// YAML file holding the tax unit value. Defaults to the built-in value.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the HTTP API.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: String,
    },
    /// Compute one settlement and print the breakdown.
    Calculate {
        /// Monthly base salary.
        #[arg(long, allow_hyphen_values = true)]
        base_salary: Decimal,
        /// Employment start date (DD/MM/YYYY).
        #[arg(long)]
        start_date: String,
        /// Last vacation date (DD/MM/YYYY).
        #[arg(long)]
        last_vacation_date: String,
        /// Accrued vacation days.
        #[arg(long, allow_hyphen_values = true)]
        accrued_days: i64,
        /// Reason for leaving.
        #[arg(long, default_value = "")]
        exit_reason: String,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// Honours `RUST_LOG` when set and falls back to `info`. Logs go to stderr
/// so the `calculate` output stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<CalculatorConfig> {
    match path {
        Some(path) => Ok(ConfigLoader::load(path)
            .with_context(|| format!("loading {}", path.display()))?
            .config()),
        None => Ok(CalculatorConfig::default()),
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let calculator = SettlementCalculator::new(load_config(cli.config.as_ref())?);

    match cli.command {
        Command::Serve { bind } => {
            let listener = tokio::net::TcpListener::bind(&bind)
                .await
                .with_context(|| format!("binding {}", bind))?;
            info!(
                address = %bind,
                tax_unit_value = %calculator.tax_unit_value(),
                "Settlement API listening"
            );
            axum::serve(listener, create_router(AppState::new(calculator))).await?;
        }
        Command::Calculate {
            base_salary,
            start_date,
            last_vacation_date,
            accrued_days,
            exit_reason,
        } => {
            let input = SettlementInput {
                exit_reason,
                base_salary,
                employment_start_date: start_date,
                last_vacation_date,
                accrued_vacation_days: accrued_days,
            };
            let result = calculator.compute_all(&input)?;
            println!("{}", result);
        }
    }

    Ok(())
}
