//! Include resolution for table files
//!
//! Files are scanned line by line. Each line first has its `\{name}`
//! placeholders expanded, then is checked for an `assign` or `include`
//! directive. Included files are resolved relative to the including file.

pub mod directive;
pub mod substitute;
pub mod walk;

pub use directive::Directive;
pub use substitute::substitute;
pub use walk::{resolve, resolve_root};
