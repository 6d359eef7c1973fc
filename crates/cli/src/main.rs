use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

use animgeom::rational::{RoundingRule, DEFAULT_MAX_DENOMINATOR, DEFAULT_TOLERANCE};

mod commands;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Exercise the rational, animation, and geometry kernel on JSON data")]
struct Cmd {
    /// Maximum log level written to stderr
    #[arg(long, global = true, default_value_t = tracing::Level::INFO)]
    log_level: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Approximate a real number by a bounded-denominator rational
    Approx {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(long, default_value_t = DEFAULT_MAX_DENOMINATOR)]
        max_denominator: i64,
        #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,
    },
    /// Round a rational ("p/q" or an integer) to an integer
    Round {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long, value_enum, default_value_t = Rule::NearestAway)]
        rule: Rule,
    },
    /// Evaluate an Animation<f64> JSON file at the given times
    Sample {
        #[arg(long)]
        input: PathBuf,
        /// Query times as "p/q" or integers
        #[arg(long, num_args = 1.., required = true, allow_hyphen_values = true)]
        at: Vec<String>,
        /// Write JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Even-odd containment of a point in a JSON outline of path segments
    Contains {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Rule {
    TowardZero,
    AwayFromZero,
    Down,
    Up,
    NearestAway,
    NearestEven,
}

impl From<Rule> for RoundingRule {
    fn from(r: Rule) -> Self {
        match r {
            Rule::TowardZero => RoundingRule::TowardZero,
            Rule::AwayFromZero => RoundingRule::AwayFromZero,
            Rule::Down => RoundingRule::Down,
            Rule::Up => RoundingRule::Up,
            Rule::NearestAway => RoundingRule::ToNearestOrAwayFromZero,
            Rule::NearestEven => RoundingRule::ToNearestOrEven,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Approx {
            value,
            max_denominator,
            tolerance,
        } => {
            let r = commands::approx(value, max_denominator, tolerance)?;
            println!("{r}");
        }
        Action::Round { value, rule } => {
            let r = commands::round(&value, rule.into())?;
            println!("{r}");
        }
        Action::Sample { input, at, out } => {
            let samples = commands::sample(&input, &at)?;
            commands::emit_json(&samples, out.as_deref())?;
        }
        Action::Contains { input, x, y } => {
            let inside = commands::contains(&input, x, y)?;
            println!("{inside}");
        }
    }
    Ok(())
}
