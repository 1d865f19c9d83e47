/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::process;

use clap::Parser;
use rust_decimal::Decimal;
use serde::Serialize;

use unitconv::{
    KnownUnitId, Quantity, RoundingPolicy, RoundingStrategy, UnitError,
};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Unit Converter
///
/// Converts an amount between built-in units.
struct Args {
    /// The amount to convert.
    amount: Option<Decimal>,
    /// The unit to convert from (eg. kilometer).
    from: Option<KnownUnitId>,
    /// The unit to convert to (eg. mile).
    to: Option<KnownUnitId>,
    /// Round the result to this number of decimal digits.
    #[clap(long)]
    round_digits: Option<u32>,
    /// The rounding strategy to use with --round-digits.
    #[clap(long, default_value = "nearest")]
    rounding: RoundingStrategy,
    /// Output a JSON representation of the result.
    #[clap(long, short)]
    json: bool,
    /// List the built-in units and exit.
    #[clap(long)]
    list: bool,
    /// Increase verbosity. Every additional v increases the verbosity
    /// by one stage.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[derive(Serialize)]
struct Output {
    value: Decimal,
    unit: KnownUnitId,
}

impl Args {
    fn init_logger(&self) {
        if let Err(e) = simplelog::TermLogger::init(
            match self.verbosity {
                0 => simplelog::LevelFilter::Warn,
                1 => simplelog::LevelFilter::Debug,
                2.. => simplelog::LevelFilter::Trace,
            },
            simplelog::ConfigBuilder::new().build(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ) {
            eprintln!("Error: failed to initialize logging: {}", e);
            process::exit(1);
        }
    }

    fn rounding_policy(&self) -> Result<Option<RoundingPolicy>, UnitError> {
        match self.round_digits {
            None => Ok(None),
            Some(digits) => match self.rounding {
                RoundingStrategy::Nearest => {
                    RoundingPolicy::nearest(digits, 5).map(Some)
                }
                strategy => {
                    RoundingPolicy::with_digits(strategy, digits).map(Some)
                }
            },
        }
    }
}

fn list_units() {
    for id in KnownUnitId::all() {
        let unit = id.unit();
        println!(
            "{:<24} {:<8} {}",
            id,
            unit.symbol().unwrap_or("-"),
            id.system().name()
        );
    }
}

fn run(args: &Args) -> Result<(), UnitError> {
    let (amount, from, to) = match (args.amount, args.from, args.to) {
        (Some(amount), Some(from), Some(to)) => (amount, from, to),
        _ => {
            return Err(UnitError::InvalidArgument(String::from(
                "expected an amount, a source unit and a target unit",
            )))
        }
    };

    let quantity = Quantity::new(amount, from.try_unit()?);
    let mut result = quantity.convert_to(&to.try_unit()?)?;
    if let Some(policy) = args.rounding_policy()? {
        result = result.round(&policy)?;
    }
    log::debug!("{} = {}", quantity, result);

    match args.json {
        true => println!(
            "{}",
            serde_json::to_string(&Output {
                value: result.amount(),
                unit: to,
            })
            .expect("serialization failed!?")
        ),
        false => println!("{}", result),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    args.init_logger();

    if args.list {
        list_units();
        return;
    }

    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        process::exit(1)
    }
}
