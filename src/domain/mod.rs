pub mod company;
pub mod roster;
pub mod session;
pub mod simulation;
