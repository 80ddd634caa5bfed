pub mod allocation;
pub mod allocation_chart;
pub mod config;
pub mod form;
pub mod intake;
pub mod session_json;
pub mod session_store;
pub mod workflow;
