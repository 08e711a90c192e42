//! Directive line classification

use regex::Regex;
use std::sync::LazyLock;

static ASSIGN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*assign\s+([^#\s]+)(?:\s+([^#\s]+))?").expect("assign pattern is valid")
});

static INCLUDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*include\s+([^#\s]+)").expect("include pattern is valid"));

/// What a single (already substituted) line asks the resolver to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `assign <name> <value>`
    Assign { name: &'a str, value: &'a str },

    /// `assign <name>` with no value
    Unassign { name: &'a str },

    /// `include <path>`, path as written in the file
    Include { path: &'a str },

    /// Anything else, including malformed directives
    Inert,
}

impl<'a> Directive<'a> {
    /// Classify a line. Assignment is tested before include.
    pub fn parse(line: &'a str) -> Self {
        if let Some(caps) = ASSIGN_RE.captures(line) {
            if let Some(name) = caps.get(1) {
                return match caps.get(2) {
                    Some(value) => Directive::Assign {
                        name: name.as_str(),
                        value: value.as_str(),
                    },
                    None => Directive::Unassign {
                        name: name.as_str(),
                    },
                };
            }
        }

        if let Some(path) = INCLUDE_RE.captures(line).and_then(|caps| caps.get(1)) {
            return Directive::Include {
                path: path.as_str(),
            };
        }

        Directive::Inert
    }

    pub fn is_inert(&self) -> bool {
        matches!(self, Directive::Inert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_with_value() {
        assert_eq!(
            Directive::parse("assign lang en-us"),
            Directive::Assign {
                name: "lang",
                value: "en-us"
            }
        );
    }

    #[test]
    fn test_assign_leading_whitespace_and_trailing_comment() {
        assert_eq!(
            Directive::parse("   assign dots 8 # eight dot mode"),
            Directive::Assign {
                name: "dots",
                value: "8"
            }
        );
    }

    #[test]
    fn test_assign_stops_at_hash() {
        assert_eq!(
            Directive::parse("assign x#comment"),
            Directive::Unassign { name: "x" }
        );
        assert_eq!(
            Directive::parse("assign x 1#2"),
            Directive::Assign {
                name: "x",
                value: "1"
            }
        );
    }

    #[test]
    fn test_unassign() {
        assert_eq!(
            Directive::parse("assign lang"),
            Directive::Unassign { name: "lang" }
        );
    }

    #[test]
    fn test_assign_extra_words_ignored() {
        assert_eq!(
            Directive::parse("assign a b c"),
            Directive::Assign {
                name: "a",
                value: "b"
            }
        );
    }

    #[test]
    fn test_include() {
        assert_eq!(
            Directive::parse("include sub/b.txt"),
            Directive::Include { path: "sub/b.txt" }
        );
        assert_eq!(
            Directive::parse("\tinclude chardefs.cti # letters"),
            Directive::Include {
                path: "chardefs.cti"
            }
        );
    }

    #[test]
    fn test_tab_separated_assign() {
        assert_eq!(
            Directive::parse("assign x\t1"),
            Directive::Assign {
                name: "x",
                value: "1"
            }
        );
        assert_eq!(
            Directive::parse("assign\tx\t# no value"),
            Directive::Unassign { name: "x" }
        );
    }

    #[test]
    fn test_include_path_ends_at_tab() {
        assert_eq!(
            Directive::parse("include child.cti\t# letters"),
            Directive::Include { path: "child.cti" }
        );
        assert_eq!(
            Directive::parse("include a.cti\tb.cti"),
            Directive::Include { path: "a.cti" }
        );
    }

    #[test]
    fn test_malformed_directives_are_inert() {
        assert!(Directive::parse("assign").is_inert());
        assert!(Directive::parse("assign ").is_inert());
        assert!(Directive::parse("include").is_inert());
        assert!(Directive::parse("include #nothing").is_inert());
        assert!(Directive::parse("# include foo.ctb").is_inert());
        assert!(Directive::parse("includefoo.ctb").is_inert());
        assert!(Directive::parse("").is_inert());
    }

    #[test]
    fn test_directive_must_start_line() {
        assert!(Directive::parse("sign include foo").is_inert());
        assert!(Directive::parse("x assign a b").is_inert());
    }
}
