//! Widget identity: `WidgetId` and the monotonic `IdAllocator`.
//!
//! Every mounted widget gets an id of the form `id_<n>`. The same string is
//! used as the element `id` attribute in the published markup, so the remote
//! surface can address any node directly.

use std::collections::HashSet;
use std::fmt;

/// Unique identifier for a mounted widget. Copy, lightweight (u64).
///
/// Displays as `id_<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Prefix used in the textual form.
    pub const PREFIX: &'static str = "id_";

    /// Build an id from its raw counter value.
    pub const fn from_raw(n: u64) -> Self {
        Self(n)
    }

    /// The raw counter value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Parse the textual `id_<n>` form. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        s.strip_prefix(Self::PREFIX)?.parse().ok().map(Self)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

// ---------------------------------------------------------------------------
// IdAllocator
// ---------------------------------------------------------------------------

/// Issues strictly increasing widget ids. Ids are never reused, even after the
/// widget they named has been deleted; only [`reset`](Self::reset) rewinds.
#[derive(Debug, Default)]
pub struct IdAllocator {
    counter: u64,
    issued: HashSet<WidgetId>,
}

impl IdAllocator {
    /// Create an allocator whose first id is `id_1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh id.
    pub fn next(&mut self) -> WidgetId {
        self.counter += 1;
        let id = WidgetId(self.counter);
        self.issued.insert(id);
        id
    }

    /// Whether `id` has been issued since the last reset.
    pub fn was_issued(&self, id: WidgetId) -> bool {
        self.issued.contains(&id)
    }

    /// Number of ids issued since the last reset.
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    /// Forget all issued ids. Only valid at full framework teardown.
    pub fn reset(&mut self) {
        self.issued.clear();
        self.counter = 0;
    }
}
