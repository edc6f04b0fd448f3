use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

use super::config::*;
use amount_converter::{AmountConverter, ConversionRequest, Fraction};
use shared::format::NumberLocale;

#[derive(Parser)]
#[clap(version, long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[clap(
        short,
        long,
        env = "P2PSATS_CONFIG",
        default_value = "p2psats.yml",
        value_name = "FILE"
    )]
    config: PathBuf,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Converts a fiat amount into the satoshis received
    Convert {
        /// Fraction of the amount kept as fee, within [0, 1)
        #[clap(short, long)]
        fee: Decimal,
        /// Percentage points added to the rate
        #[clap(short, long, default_value_t = Decimal::ZERO, allow_hyphen_values = true)]
        premium: Decimal,
        /// Fraction of the amount reserved for routing, within [0, 1)
        #[clap(short, long, default_value_t = Decimal::ZERO)]
        routing_budget: Decimal,
        /// Fiat price of one whole coin, defaults to the configured rate
        #[clap(long)]
        rate: Option<Decimal>,
        /// Digit grouping of the output (en-us, en-eu, en-in, en-by)
        #[clap(short, long, value_name = "LOCALE")]
        locale: Option<NumberLocale>,
        /// Fiat amount to convert
        #[clap(allow_hyphen_values = true)]
        amount: Decimal,
    },
    /// Converts every request listed in a yaml or json file
    Batch {
        /// Digit grouping of the output (en-us, en-eu, en-in, en-by)
        #[clap(short, long, value_name = "LOCALE")]
        locale: Option<NumberLocale>,
        file: PathBuf,
    },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_path(&cli.config)?;
    crate::tracing::init_tracer(&config.tracing)?;

    match cli.command {
        Command::Convert {
            fee,
            premium,
            routing_budget,
            rate,
            locale,
            amount,
        } => {
            let request = ConversionRequest::new(amount, Fraction::try_from(fee)?)
                .with_premium(premium)
                .with_routing_budget(Fraction::try_from(routing_budget)?)
                .with_rate(rate.unwrap_or(config.converter.rate));
            let converter = AmountConverter::new(locale.unwrap_or(config.converter.locale));
            println!("{}", convert_cmd(&converter, &request)?);
        }
        Command::Batch { locale, file } => {
            let converter = AmountConverter::new(locale.unwrap_or(config.converter.locale));
            for line in batch_cmd(&converter, file)? {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn convert_cmd(
    converter: &AmountConverter,
    request: &ConversionRequest,
) -> anyhow::Result<String> {
    converter
        .display_sats(request)
        .with_context(|| format!("Couldn't convert {}", request.amount))
}

fn batch_cmd(converter: &AmountConverter, file: impl AsRef<Path>) -> anyhow::Result<Vec<String>> {
    let contents = std::fs::read_to_string(file).context("Couldn't read batch file")?;
    let requests = parse_batch(&contents)?;
    tracing::info!(requests = requests.len(), "converting batch");
    Ok(requests
        .iter()
        .map(|request| match converter.display_sats(request) {
            Ok(sats) => sats,
            Err(e) => format!("error: {e}"),
        })
        .collect())
}

fn parse_batch(contents: &str) -> anyhow::Result<Vec<ConversionRequest>> {
    serde_yaml::from_str(contents).context("Couldn't parse batch file")
}
