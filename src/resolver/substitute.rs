//! `\{name}` placeholder expansion

use crate::types::{DepcopyError, Result, Scope};
use regex::Regex;
use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

/// How deep placeholder values may nest inside other values.
///
/// Text from the original line has depth 0; a value inserted for a
/// placeholder gets one more than the deepest text that placeholder was
/// made of. Only a self-referential chain of values can exceed this.
pub const MAX_EXPANSION_DEPTH: usize = 128;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\\{([a-zA-Z0-9]+)\}").expect("placeholder pattern is valid"));

/// Byte range of the line produced by one replacement
#[derive(Debug, Clone, Copy)]
struct Expansion {
    start: usize,
    end: usize,
    depth: usize,
}

/// Expand every `\{name}` placeholder in `line` using `scope`.
///
/// The leftmost placeholder is replaced first and the line is rescanned, so
/// values may themselves contain placeholders. `path` is only used for
/// error reporting.
///
/// # Errors
/// * `UndefinedSubstitution` if a placeholder names an unbound identifier
/// * `SubstitutionLimit` if values nest deeper than [`MAX_EXPANSION_DEPTH`]
pub fn substitute(scope: &Scope, line: &str, path: &Path) -> Result<String> {
    let mut line = line.to_string();
    let mut expansions: Vec<Expansion> = Vec::new();

    loop {
        let Some(caps) = PLACEHOLDER_RE.captures(&line) else {
            return Ok(line);
        };
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            return Ok(line);
        };

        let value = scope
            .get(name.as_str())
            .ok_or_else(|| DepcopyError::UndefinedSubstitution {
                line: line.clone(),
                path: path.to_path_buf(),
            })?;

        let range = whole.range();
        let depth = expansions
            .iter()
            .filter(|e| e.start < range.end && range.start < e.end)
            .map(|e| e.depth)
            .max()
            .unwrap_or(0)
            + 1;
        if depth > MAX_EXPANSION_DEPTH {
            return Err(DepcopyError::SubstitutionLimit {
                line,
                path: path.to_path_buf(),
            });
        }

        expansions = shift_expansions(expansions, range.clone(), value.len());
        if !value.is_empty() {
            expansions.push(Expansion {
                start: range.start,
                end: range.start + value.len(),
                depth,
            });
        }
        line.replace_range(range, value);
    }
}

/// Re-map recorded expansions after `replaced` is swapped for `inserted` bytes.
///
/// Parts covered by the replaced placeholder are dropped; parts after it move.
fn shift_expansions(
    expansions: Vec<Expansion>,
    replaced: Range<usize>,
    inserted: usize,
) -> Vec<Expansion> {
    let moved = |pos: usize| pos - replaced.end + replaced.start + inserted;
    let mut shifted = Vec::with_capacity(expansions.len() + 1);

    for e in expansions {
        if e.start < replaced.start {
            shifted.push(Expansion {
                end: e.end.min(replaced.start),
                ..e
            });
        }
        if e.end > replaced.end {
            shifted.push(Expansion {
                start: moved(e.start.max(replaced.end)),
                end: moved(e.end),
                depth: e.depth,
            });
        }
    }
    shifted
}

/// Whether `line` still contains a placeholder
pub fn has_placeholder(line: &str) -> bool {
    PLACEHOLDER_RE.is_match(line)
}
