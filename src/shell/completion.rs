//! Tab-completion helpers.
//!
//! The pieces here are pure: splitting the text before the caret into a
//! completion context, filtering candidates by prefix, reducing matches to a
//! common prefix and laying matches out in columns. The shell glues them to
//! its registry in [`Shell::complete`](super::state::Shell::complete).

/// What the text before the caret is asking to complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionContext {
    /// Still typing the command name.
    Command { partial: String },
    /// Typing an argument of `command`.
    Argument {
        command: String,
        /// Words between the command and the current word.
        args: Vec<String>,
        /// The word being completed; empty after trailing whitespace.
        current: String,
    },
}

impl CompletionContext {
    /// Classifies `before_caret`, ignoring leading whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use termquill::shell::completion::CompletionContext;
    ///
    /// assert_eq!(
    ///     CompletionContext::parse("  ec"),
    ///     CompletionContext::Command { partial: "ec".to_string() }
    /// );
    /// assert_eq!(
    ///     CompletionContext::parse("theme set "),
    ///     CompletionContext::Argument {
    ///         command: "theme".to_string(),
    ///         args: vec!["set".to_string()],
    ///         current: String::new(),
    ///     }
    /// );
    /// ```
    pub fn parse(before_caret: &str) -> Self {
        let text = before_caret.trim_start();
        if !text.contains(char::is_whitespace) {
            return Self::Command {
                partial: text.to_string(),
            };
        }

        let mut tokens: Vec<String> = text.split_whitespace().map(|s| s.to_string()).collect();
        let current = if text.ends_with(char::is_whitespace) {
            String::new()
        } else {
            tokens.pop().unwrap_or_default()
        };
        let command = if tokens.is_empty() {
            String::new()
        } else {
            tokens.remove(0)
        };

        Self::Argument {
            command,
            args: tokens,
            current,
        }
    }
}

/// Keeps the candidates whose lower-cased form starts with the lower-cased
/// `partial`. An empty partial keeps everything.
pub fn find_matches(candidates: &[String], partial: &str) -> Vec<String> {
    let partial = partial.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().starts_with(&partial))
        .cloned()
        .collect()
}

/// Longest prefix shared by all matches, compared without case.
///
/// The returned text keeps the case of the first match.
///
/// # Examples
///
/// ```
/// use termquill::shell::completion::common_prefix;
///
/// let matches = vec!["Theme".to_string(), "thesis".to_string()];
/// assert_eq!(common_prefix(&matches), "The");
/// assert_eq!(common_prefix(&[]), "");
/// ```
pub fn common_prefix(matches: &[String]) -> String {
    let Some((first, rest)) = matches.split_first() else {
        return String::new();
    };

    let mut prefix: Vec<char> = first.chars().collect();
    for other in rest {
        let shared = prefix
            .iter()
            .zip(other.chars())
            .take_while(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
            .count();
        prefix.truncate(shared);
    }
    prefix.into_iter().collect()
}

/// Lays `matches` out in rows of `columns` entries, each padded to `width`.
///
/// Trailing spaces are trimmed from every row.
pub fn format_columns(matches: &[String], columns: usize, width: usize) -> Vec<String> {
    matches
        .chunks(columns.max(1))
        .map(|row| {
            let line: String = row
                .iter()
                .map(|entry| format!("{:<width$}", entry, width = width))
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}
