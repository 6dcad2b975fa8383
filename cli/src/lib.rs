pub mod args;
pub mod infra;
