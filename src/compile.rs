//! Compilation of pattern strings into [`Pattern`] values.

use std::mem;

use crate::pattern::{Entry, Group, Pattern};

impl Pattern {
    /// Compile the given pattern string.
    ///
    /// The pattern must be non-empty, contain only lowercase letters and the
    /// metacharacters `|`, `*`, `(`, and `)`, and have balanced parentheses;
    /// otherwise an [`Error`] describing the problem is returned and no
    /// `Pattern` is produced.
    pub fn compile(pattern: &str) -> Result<Pattern, Error> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        // Only the final count matters; a `)` may precede its `(`.
        let mut parens = 0_i32;
        for ch in pattern.chars() {
            match ch {
                'a'..='z' | '|' | '*' => {}
                '(' => parens += 1,
                ')' => parens -= 1,
                _ => return Err(Error::IllegalCharacter(ch)),
            }
        }
        if parens != 0 {
            return Err(Error::UnbalancedParentheses);
        }

        // All-ASCII after validation, so byte indices are character indices.
        let bytes = pattern.as_bytes();
        let len = bytes.len();
        let mut groups = Vec::new();
        let mut current = Group::default();
        let mut cursor = 0;
        loop {
            // A run of consecutive `(` collapses into a single group
            // boundary; nesting is not modeled.
            while cursor < len && bytes[cursor] == b'(' {
                cursor += 1;
            }
            let start = cursor;
            while cursor < len && bytes[cursor].is_ascii_lowercase() {
                cursor += 1;
            }
            if cursor == start {
                // No further literal run; any remaining input is discarded.
                break;
            }
            let mut entry = Entry {
                value: pattern[start..cursor].to_owned(),
                repeatable: false,
            };
            if cursor < len && bytes[cursor] == b'*' {
                entry.repeatable = true;
                cursor += 1;
            }
            if cursor + 1 < len && bytes[cursor] == b')' && bytes[cursor + 1] == b'*' {
                current.repeatable = true;
            }
            current.alternatives.push(entry);
            if cursor >= len {
                break;
            }
            match bytes[cursor] {
                // Another alternative of the same group.
                b'|' => cursor += 1,
                // Closes the group. A `*` left dangling after the `)` ends
                // the scan on the next iteration.
                b')' => {
                    groups.push(mem::take(&mut current));
                    cursor += 1;
                }
                // `(` or a letter: closes the group and starts the next one
                // without consuming anything.
                _ => groups.push(mem::take(&mut current)),
            }
        }
        groups.push(current);

        groups.retain(|group| !group.alternatives.is_empty());
        for group in &mut groups {
            // A lone repeatable literal makes the group itself repeatable.
            if let [entry] = group.alternatives.as_slice() {
                if entry.repeatable {
                    group.repeatable = true;
                }
            }
        }
        Ok(Pattern { groups })
    }
}

/// An error encountered while compiling a pattern.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The pattern was empty.
    #[error("empty pattern")]
    EmptyPattern,
    /// The pattern contained a character outside `a`-`z`, `|`, `*`, `(`, `)`.
    #[error("illegal character {0:?} in pattern")]
    IllegalCharacter(char),
    /// The pattern's parentheses were not balanced.
    #[error("unbalanced parentheses in pattern")]
    UnbalancedParentheses,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(value: &str, repeatable: bool) -> Entry {
        Entry {
            value: value.to_owned(),
            repeatable,
        }
    }

    #[test]
    fn empty_pattern() {
        assert_eq!(Pattern::compile(""), Err(Error::EmptyPattern));
    }

    #[test]
    fn illegal_digit() {
        assert_eq!(Pattern::compile("a1b"), Err(Error::IllegalCharacter('1')));
    }

    #[test]
    fn illegal_uppercase() {
        assert_eq!(Pattern::compile("aAb"), Err(Error::IllegalCharacter('A')));
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(Pattern::compile("a(b"), Err(Error::UnbalancedParentheses));
        assert_eq!(Pattern::compile("((("), Err(Error::UnbalancedParentheses));
    }

    #[test]
    fn close_before_open_counts_as_balanced() {
        // Only the final count is checked.
        let pattern = Pattern::compile("a)b(").unwrap();
        assert_eq!(
            pattern.groups(),
            &[
                Group {
                    alternatives: vec![entry("a", false)],
                    repeatable: false,
                },
                Group {
                    alternatives: vec![entry("b", false)],
                    repeatable: false,
                },
            ],
        );
    }

    #[test]
    fn literals_and_alternation() {
        let pattern = Pattern::compile("a(b*|c)d").unwrap();
        assert_eq!(
            pattern.groups(),
            &[
                Group {
                    alternatives: vec![entry("a", false)],
                    repeatable: false,
                },
                Group {
                    alternatives: vec![entry("b", true), entry("c", false)],
                    repeatable: false,
                },
                Group {
                    alternatives: vec![entry("d", false)],
                    repeatable: false,
                },
            ],
        );
    }

    #[test]
    fn lone_repeatable_literal_makes_group_repeatable() {
        let pattern = Pattern::compile("a*b").unwrap();
        assert_eq!(
            pattern.groups(),
            &[
                Group {
                    alternatives: vec![entry("a", true)],
                    repeatable: true,
                },
                Group {
                    alternatives: vec![entry("b", false)],
                    repeatable: false,
                },
            ],
        );
    }

    #[test]
    fn repeatable_group_keeps_its_flag() {
        let pattern = Pattern::compile("(ab)*").unwrap();
        assert_eq!(
            pattern.groups(),
            &[Group {
                alternatives: vec![entry("ab", false)],
                repeatable: true,
            }],
        );
    }

    #[test]
    fn nested_parentheses_flatten() {
        assert_eq!(Pattern::compile("((ab))"), Pattern::compile("(ab)"));
        assert_eq!(Pattern::compile("((ab))").unwrap().groups().len(), 1);
    }

    #[test]
    fn dangling_star_ends_the_scan() {
        // The `*` after `)` is not consumed with the group, so no literal
        // run can be extracted on the next iteration and `c` is dropped.
        assert_eq!(Pattern::compile("(ab)*c"), Pattern::compile("(ab)*"));
    }

    #[test]
    fn compilation_is_deterministic() {
        assert_eq!(Pattern::compile("a(b*|c)d"), Pattern::compile("a(b*|c)d"));
    }
}
