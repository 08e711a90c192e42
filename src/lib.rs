//! # depcopy - copy table files with their includes
//!
//! Copies a set of files into a destination directory together with every
//! file they pull in through `include` directives, as used by braille
//! translation tables. Files may also `assign` names that later lines
//! reference as `\{name}`; assignments are visible in included files but
//! never leak back into the file that included them.

// Module declarations
pub mod commands;
pub mod config;
pub mod executor;
pub mod filter;
pub mod plan;
pub mod resolver;
pub mod types;

// Re-export commonly used types
pub use config::{Cli, Config};
pub use plan::{build_plan, CopyPlan, PlanAction};
pub use resolver::{resolve, resolve_root};
pub use types::{DepcopyError, Scope};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
