use clap::{Args, Parser, Subcommand};

use calc_core::calculations::{BreakEvenInput, Calculation};
use calc_core::NumericInput;

use crate::pages::Page;

/// Break-even point calculator
#[derive(Parser, Debug)]
#[command(name = "breakeven")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'breakeven' without arguments for interactive mode.")]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log filter directives (overrides -v)
    #[arg(long = "log", env = "BREAKEVEN_LOG", global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// The three figures every calculation starts from, as typed.
///
/// Values are kept as text so that an unparseable entry reaches the
/// calculator as an invalid input rather than a clap error.
#[derive(Args, Debug, Clone)]
pub struct CostArgs {
    /// Total fixed costs for the period
    #[arg(short = 'f', long, allow_hyphen_values = true)]
    pub fixed_costs: String,

    /// Selling price per unit
    #[arg(short = 'p', long = "price", allow_hyphen_values = true)]
    pub selling_price: String,

    /// Variable costs per unit
    #[arg(short = 'c', long, allow_hyphen_values = true)]
    pub variable_costs: String,
}

impl CostArgs {
    pub fn to_input(&self) -> BreakEvenInput {
        BreakEvenInput::from_text(&self.fixed_costs, &self.selling_price, &self.variable_costs)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate the break-even point in units and revenue
    Calc {
        #[command(flatten)]
        costs: CostArgs,
    },

    /// Units and revenue needed to reach a profit goal
    Target {
        #[command(flatten)]
        costs: CostArgs,

        /// Desired profit on top of covering fixed costs
        #[arg(short = 't', long, allow_hyphen_values = true)]
        profit: String,
    },

    /// Revenue, costs and profit at a given sales volume
    Project {
        #[command(flatten)]
        costs: CostArgs,

        /// Units sold in the period
        #[arg(short = 'u', long)]
        units: u64,
    },

    /// Show an information page
    Page {
        #[arg(value_enum)]
        page: Page,
    },

    /// Prompt for values and calculate repeatedly
    Interactive,
}

impl Commands {
    /// The calculation this command asks for, if it is one.
    pub fn calculation(&self) -> Option<Calculation> {
        match self {
            Commands::Calc { costs } => Some(Calculation::BreakEven {
                input: costs.to_input(),
            }),
            Commands::Target { costs, profit } => Some(Calculation::TargetProfit {
                input: costs.to_input(),
                target_profit: NumericInput::parse(profit),
            }),
            Commands::Project { costs, units } => Some(Calculation::ProfitAtVolume {
                input: costs.to_input(),
                units_sold: *units,
            }),
            Commands::Page { .. } | Commands::Interactive => None,
        }
    }
}
