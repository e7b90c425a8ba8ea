pub mod config;
pub mod name;
