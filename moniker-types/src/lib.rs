//! Shared type definitions for Moniker: wallet addresses, wallet display
//! names, the rename screen's view state, and analytics actions.

pub mod analytics;
pub mod error;
pub mod name;
pub mod primitives;
pub mod view;
