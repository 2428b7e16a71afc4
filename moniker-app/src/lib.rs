//! The `moniker` tool: presentation logic of the rename wallet screen, plus a
//! command-line front end that drives it.

pub mod analytics;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod tools;
pub mod view_model;
pub mod wallet;
