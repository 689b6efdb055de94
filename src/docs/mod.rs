//! Manual pages for shell commands.
//!
//! The [`DocRegistry`] maps a command name to a [`DocPage`] with static help
//! text. It is only consumed by the `man` command; the `help` listing reads
//! the command registry directly.
//!
//! # Example
//!
//! ```
//! use termquill::docs::DocRegistry;
//!
//! let docs = DocRegistry::with_builtin_pages();
//! let page = docs.lookup("ECHO").unwrap();
//! assert_eq!(page.usage, "echo [text...]");
//! ```

pub mod pages;

use std::collections::BTreeMap;

/// Documentation for a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPage {
    /// Command name.
    pub name: String,
    /// One-line description used in listings.
    pub brief: String,
    /// Command syntax, e.g. `edit [filename]`.
    pub usage: String,
    /// Short description paragraph.
    pub description: String,
    /// Full documentation shown by `man -v`.
    pub detailed: String,
    /// Usage examples.
    pub examples: Vec<String>,
}

impl DocPage {
    pub fn new(
        name: impl Into<String>,
        brief: impl Into<String>,
        usage: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            brief: brief.into(),
            usage: usage.into(),
            description: description.into(),
            detailed: String::new(),
            examples: Vec::new(),
        }
    }

    pub fn with_detailed(mut self, detailed: impl Into<String>) -> Self {
        self.detailed = detailed.into();
        self
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }
}

/// Case-insensitive registry of [`DocPage`]s.
#[derive(Debug, Clone, Default)]
pub struct DocRegistry {
    pages: BTreeMap<String, DocPage>,
}

impl DocRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the pages for every built-in command.
    pub fn with_builtin_pages() -> Self {
        let mut registry = Self::new();
        for page in pages::builtin_pages() {
            registry.register(page);
        }
        registry
    }

    /// Adds `page`, replacing any page with the same (case-insensitive) name.
    pub fn register(&mut self, page: DocPage) {
        self.pages.insert(page.name.to_lowercase(), page);
    }

    /// Looks up a page by command name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&DocPage> {
        self.pages.get(&name.to_lowercase())
    }

    /// Returns all pages sorted by name.
    pub fn pages(&self) -> impl Iterator<Item = &DocPage> {
        self.pages.values()
    }

    /// Returns the sorted list of documented command names.
    pub fn names(&self) -> Vec<String> {
        self.pages.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut docs = DocRegistry::new();
        docs.register(DocPage::new("Greet", "say hi", "greet", "Says hi."));
        assert!(docs.lookup("greet").is_some());
        assert!(docs.lookup("GREET").is_some());
        assert!(docs.lookup("other").is_none());
    }

    #[test]
    fn test_names_are_sorted() {
        let mut docs = DocRegistry::new();
        docs.register(DocPage::new("zeta", "", "", ""));
        docs.register(DocPage::new("alpha", "", "", ""));
        assert_eq!(docs.names(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_builtin_pages_cover_editor_aliases() {
        let docs = DocRegistry::with_builtin_pages();
        for name in ["edit", "vim", "vi", "man", "ls", "cat", "rm"] {
            assert!(docs.lookup(name).is_some(), "missing page for {}", name);
        }
    }
}
