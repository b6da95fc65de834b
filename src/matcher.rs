//! Greedy, non-backtracking matching of strings against a compiled
//! [`Pattern`].

use std::collections::VecDeque;

use crate::pattern::{Group, Pattern};

impl Pattern {
    /// Returns whether `text` matches this pattern.
    ///
    /// Groups are consumed strictly left to right. Within a group the first
    /// alternative that matches a prefix of the remaining text wins, and a
    /// repeatable alternative always consumes the longest run it can; neither
    /// choice is ever reconsidered, so this can reject strings a backtracking
    /// engine would accept.
    ///
    /// The match succeeds as soon as the text is fully consumed, even if
    /// mandatory groups remain unprocessed.
    pub fn matches(&self, text: &str) -> bool {
        // Work on a private copy of the groups, so the compiled pattern can
        // be reused and shared across calls.
        let mut queue: VecDeque<Group> = self.groups.iter().cloned().collect();
        let mut rest = text;
        while let Some(group) = queue.front() {
            if rest.is_empty() {
                break;
            }
            let mut consumed = false;
            for entry in &group.alternatives {
                if entry.repeatable {
                    // Longest run of one-or-more consecutive occurrences.
                    let mut len = 0;
                    while rest[len..].starts_with(&entry.value) {
                        len += entry.value.len();
                    }
                    if len > 0 {
                        rest = &rest[len..];
                        consumed = true;
                        break;
                    }
                } else if let Some(tail) = rest.strip_prefix(&entry.value) {
                    rest = tail;
                    consumed = true;
                    break;
                }
            }
            if group.repeatable {
                // Zero-or-more: stay at the front after a hit, move on
                // otherwise.
                if !consumed {
                    queue.pop_front();
                }
            } else if consumed {
                queue.pop_front();
            } else {
                return false;
            }
        }
        rest.is_empty()
    }
}
