/// An offset/limit window over the insertion-ordered log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u64,
    /// `None` returns every entry after `skip`.
    pub limit: Option<u64>,
}

impl Page {
    /// Limit applied when the caller does not provide one.
    pub const DEFAULT_LIMIT: u64 = 100;

    pub fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit: Some(limit),
        }
    }

    pub fn unbounded(skip: u64) -> Self {
        Self { skip, limit: None }
    }

    /// Applies the window to an already ordered sequence.
    ///
    /// Used by backends that keep entries in memory; SQL backends push the
    /// window down as `LIMIT`/`OFFSET`.
    pub fn apply<I: IntoIterator>(&self, items: I) -> impl Iterator<Item = I::Item> {
        let skip = usize::try_from(self.skip).unwrap_or(usize::MAX);
        let limit = self
            .limit
            .map_or(usize::MAX, |limit| usize::try_from(limit).unwrap_or(usize::MAX));

        items.into_iter().skip(skip).take(limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_LIMIT)
    }
}
