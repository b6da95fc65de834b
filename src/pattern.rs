//! The compiled representation of a pattern.

/// One literal alternative within a [`Group`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    /// A non-empty run of lowercase letters.
    pub value: String,
    /// If `true`, the literal may occur one or more consecutive times at a
    /// match site; otherwise it must occur exactly once.
    pub repeatable: bool,
}

/// One sequential position in a [`Pattern`], holding alternative literals.
///
/// Alternatives are tried in declaration order. A compiled `Group` always
/// holds at least one [`Entry`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Group {
    pub alternatives: Vec<Entry>,
    /// If `true`, the group as a whole may be matched zero or more times;
    /// otherwise it is mandatory.
    pub repeatable: bool,
}

/// A compiled pattern: an ordered sequence of [`Group`]s, consumed left to
/// right.
///
/// A `Pattern` is immutable once compiled and can be shared read-only across
/// any number of [`matches`](Pattern::matches) calls, including concurrent
/// ones; each call works on its own copy of the group list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pattern {
    pub(crate) groups: Vec<Group>,
}

impl Pattern {
    /// Returns the compiled groups in match order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
}
