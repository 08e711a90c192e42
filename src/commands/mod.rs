//! CLI commands

pub mod copy;
