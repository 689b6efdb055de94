//! Command history with a browse cursor.

/// Append-only list of submitted lines plus the position used by Up/Down.
///
/// The browse index lives in `[0, len]`; `len` means "not browsing", which
/// corresponds to an empty input line.
///
/// # Example
///
/// ```
/// use termquill::shell::history::History;
///
/// let mut history = History::new();
/// history.push("ls");
/// history.push("cat notes.txt");
///
/// assert_eq!(history.previous(), Some("cat notes.txt"));
/// assert_eq!(history.previous(), Some("ls"));
/// assert_eq!(history.next(), Some("cat notes.txt"));
/// assert_eq!(history.next(), Some(""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `line` and stops browsing.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.index = self.entries.len();
    }

    /// Moves to the next older entry, stopping at the oldest.
    ///
    /// Returns `None` when there is no history at all.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.index = self.index.saturating_sub(1);
        self.entries.get(self.index).map(|s| s.as_str())
    }

    /// Moves to the next newer entry. Moving past the newest yields `""`.
    ///
    /// Returns `None` when there is no history at all.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.index = (self.index + 1).min(self.entries.len());
        Some(self.entries.get(self.index).map(|s| s.as_str()).unwrap_or(""))
    }

    /// Stops browsing without changing the entries.
    pub fn reset_browse(&mut self) {
        self.index = self.entries.len();
    }

    pub fn browse_index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
