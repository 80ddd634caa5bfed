use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::roster::AllocationMode;
use crate::services::form::{parse_amount, parse_headcount, parse_mode};

#[derive(Parser)]
#[command(author, version, about = "Simulate the distribution of a profit-sharing bonus (PPV)")]
pub struct CliArgs {
    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    /// JSON file holding the current simulation
    #[arg(short, long, global = true)]
    pub data_file: Option<String>,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Step 1: enter the last three yearly revenues and the bonus amount
    Entreprise {
        /// Revenue of each of the last three years
        #[arg(
            short = 'r',
            long = "chiffre-affaires",
            num_args = 3,
            required = true,
            value_parser = parse_amount
        )]
        chiffres_affaires: Vec<f64>,
        /// Total bonus amount to distribute
        #[arg(short, long, value_parser = parse_amount)]
        montant_ppv: f64,
    },
    /// Step 2: enter the headcount, allocation mode and employee figures
    Employes {
        /// Number of employees
        #[arg(short, long, value_parser = parse_headcount)]
        effectif: usize,
        /// Allocation mode: uniforme, salaire or temps_travail
        #[arg(short = 'p', long, value_parser = parse_mode)]
        mode_partage: AllocationMode,
        /// Average salary (uniforme and temps_travail modes)
        #[arg(short, long, value_parser = parse_amount)]
        salaire_moyen: Option<f64>,
        /// Salary of one employee, repeated in roster order (salaire mode)
        #[arg(long = "salaire", value_parser = parse_amount)]
        salaires: Vec<f64>,
        /// Work time of one employee in percent, repeated in roster order (temps_travail mode)
        #[arg(short, long = "temps-travail", value_parser = parse_amount)]
        temps_travail: Vec<f64>,
    },
    /// Step 3: compute and display the allocation
    Synthese {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
        /// Optional PNG bar chart of the allocation
        #[arg(long)]
        chart: Option<String>,
    },
    /// Show which wizard step the current simulation has reached
    Status,
    /// Discard the current simulation
    Reset,
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
