//! Command implementations for the energy dashboard CLI.
//!
//! Each subcommand loads a snapshot CSV, applies the filter flags and
//! prints one dashboard view as a text table or as JSON.

use clap::{Args, Subcommand, ValueEnum};
use energy_data::FilterCriteria;

pub mod snapshot;
pub mod views;

/// Output encoding for every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Snapshot location and output format shared by all subcommands.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Path to the energy dataset CSV
    #[arg(short = 'i', long)]
    pub input: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Filter selection; an omitted flag matches everything.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Only include this country (exact, case-sensitive)
    #[arg(long)]
    pub country: Option<String>,

    /// Only include this year
    #[arg(long)]
    pub year: Option<i32>,

    /// Only include records with consumption at or below this many TWh
    #[arg(long = "max-energy")]
    pub max_energy: Option<f64>,
}

impl From<&FilterArgs> for FilterCriteria {
    fn from(args: &FilterArgs) -> Self {
        FilterCriteria {
            country: args.country.clone(),
            year: args.year,
            max_value: args.max_energy,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Month-of-year means of every metric
    Monthly {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Total, lowest/highest month and percentage change for one metric
    Summary {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        filters: FilterArgs,

        /// Metric key (e.g. consumption, per_capita) or dataset column name
        #[arg(short = 'm', long, default_value = "consumption")]
        metric: String,
    },

    /// Consumption totals per country
    Countries {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Bubble map scales, legend and placed bubbles
    Bubbles {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Countries and years available in the snapshot
    Filters {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Consumption vs generation series (the max-energy flag is ignored)
    Compare {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Every dashboard chart, caption and card
    Report {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        filters: FilterArgs,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let output = match command {
        Command::Monthly { input, filters } => {
            let records = snapshot::load_snapshot(&input.input)?;
            views::monthly(&records, &(&filters).into(), input.format)?
        }
        Command::Summary {
            input,
            filters,
            metric,
        } => {
            let records = snapshot::load_snapshot(&input.input)?;
            views::summary(&records, &(&filters).into(), &metric, input.format)?
        }
        Command::Countries { input, filters } => {
            let records = snapshot::load_snapshot(&input.input)?;
            views::countries(&records, &(&filters).into(), input.format)?
        }
        Command::Bubbles { input, filters } => {
            let records = snapshot::load_snapshot(&input.input)?;
            views::bubble_map(&records, &(&filters).into(), input.format)?
        }
        Command::Filters { input } => {
            let records = snapshot::load_snapshot(&input.input)?;
            views::filters(&records, input.format)?
        }
        Command::Compare { input, filters } => {
            let records = snapshot::load_snapshot(&input.input)?;
            views::compare(&records, &(&filters).into(), input.format)?
        }
        Command::Report { input, filters } => {
            let records = snapshot::load_snapshot(&input.input)?;
            views::report(&records, &(&filters).into(), input.format)?
        }
    };
    println!("{output}");
    Ok(())
}
