pub mod churn;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod observability;
pub mod utils;
