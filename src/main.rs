use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::debug;

use ppv::commands::base_commands::{CliArgs, Commands};
use ppv::commands::employes_cmd::employes_command;
use ppv::commands::entreprise_cmd::entreprise_command;
use ppv::commands::session_cmd::{reset_command, status_command};
use ppv::commands::synthese_cmd::synthese_command;
use ppv::logging::init_logging;
use ppv::services::config::PpvConfig;
use ppv::services::session_store::JsonFileRepository;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    if let Commands::Completions { shell } = args.command {
        let mut command = CliArgs::command();
        let name = command.get_name().to_string();
        generate(shell, &mut command, name, &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match PpvConfig::load(args.config.as_deref(), args.data_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(data_file = %config.data_file, "using session file");
    let repository = JsonFileRepository::new(&config.data_file);

    match args.command {
        cmd @ Commands::Entreprise { .. } => entreprise_command(cmd, &repository),
        cmd @ Commands::Employes { .. } => employes_command(cmd, &repository),
        cmd @ Commands::Synthese { .. } => synthese_command(cmd, &repository),
        Commands::Status => status_command(&repository),
        Commands::Reset => reset_command(&repository),
        Commands::Completions { .. } => ExitCode::SUCCESS,
    }
}
