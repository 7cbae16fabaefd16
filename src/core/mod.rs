pub mod commands;
pub mod env;
