//! Recursive include walk

use super::directive::Directive;
use super::substitute::substitute;
use crate::types::{DepcopyError, Result, Scope};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the transitive includes of a root file, starting from an empty scope.
pub fn resolve_root(path: &Path) -> Result<Vec<PathBuf>> {
    resolve(path, &Scope::new())
}

/// Return every file reachable from `path` through `include` directives.
///
/// The result is a pre-order listing: each included file comes right before
/// the files it includes itself. `path` is not part of the result and
/// duplicates are kept.
///
/// `inherited` is the scope in effect where `path` was included. The walk
/// works on its own copy, and every nested include gets a copy of the scope
/// as it stands at that line, so assignments flow down into included files
/// but never back up.
///
/// Include paths are joined onto the directory that contains `path`.
///
/// # Errors
/// * `Read` if `path` or any included file cannot be opened or read
/// * `UndefinedSubstitution` / `SubstitutionLimit` from placeholder expansion
/// * `MissingUnassign` when unassigning a name that is not bound
pub fn resolve(path: &Path, inherited: &Scope) -> Result<Vec<PathBuf>> {
    let mut scope = inherited.clone();
    let mut deps = Vec::new();
    let directory = path.parent().unwrap_or_else(|| Path::new(""));

    let read_error = |source| DepcopyError::Read {
        path: path.to_path_buf(),
        source,
    };

    // Closed on drop, including the early returns below
    let reader = BufReader::new(File::open(path).map_err(read_error)?);

    for raw in reader.lines() {
        let raw = raw.map_err(read_error)?;
        let line = substitute(&scope, raw.trim_end(), path)?;

        match Directive::parse(&line) {
            Directive::Assign { name, value } => {
                debug!(
                    event = "resolver.assign",
                    file = %path.display(),
                    name,
                    value
                );
                scope.assign(name, value);
            }
            Directive::Unassign { name } => {
                debug!(event = "resolver.unassign", file = %path.display(), name);
                if scope.unassign(name).is_none() {
                    return Err(DepcopyError::MissingUnassign {
                        name: name.to_string(),
                        path: path.to_path_buf(),
                    });
                }
            }
            Directive::Include { path: included } => {
                let child = directory.join(included);
                debug!(
                    event = "resolver.include",
                    file = %path.display(),
                    include = %child.display()
                );
                let nested = resolve(&child, &scope)?;
                deps.push(child);
                deps.extend(nested);
            }
            Directive::Inert => {}
        }
    }

    Ok(deps)
}
