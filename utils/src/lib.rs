//! Shared utilities for the stakewell workspace.

pub mod logging;
