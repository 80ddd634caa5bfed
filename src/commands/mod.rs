pub mod base_commands;
pub mod employes_cmd;
pub mod entreprise_cmd;
pub mod report_format;
pub mod session_cmd;
pub mod synthese_cmd;
