//! Command registry.
//!
//! Commands are keyed by their lower-cased name and kept in registration
//! order, which is the order `help` lists them in and the order command-name
//! completion offers them in. Registering a name twice replaces the earlier
//! entry in place.

use std::rc::Rc;

use indexmap::IndexMap;

use super::state::Shell;

/// Runs a command. Arguments exclude the command name itself.
pub type CommandHandler = Rc<dyn Fn(&[String], &mut Shell) -> anyhow::Result<()>>;

/// Returns argument candidates for a command: `(args, current_word, shell)`.
///
/// `args` holds the words typed between the command name and the word being
/// completed. Filtering by the current word is done by the caller.
pub type CompletionProvider = Rc<dyn Fn(&[String], &str, &Shell) -> Vec<String>>;

/// A registered command.
#[derive(Clone)]
pub struct CommandEntry {
    name: String,
    description: String,
    handler: CommandHandler,
    completion: Option<CompletionProvider>,
}

impl CommandEntry {
    pub fn new<H>(name: impl Into<String>, description: impl Into<String>, handler: H) -> Self
    where
        H: Fn(&[String], &mut Shell) -> anyhow::Result<()> + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            handler: Rc::new(handler),
            completion: None,
        }
    }

    /// Attaches an argument completion provider.
    pub fn with_completion<C>(mut self, completion: C) -> Self
    where
        C: Fn(&[String], &str, &Shell) -> Vec<String> + 'static,
    {
        self.completion = Some(Rc::new(completion));
        self
    }

    /// Name as registered, with its original case.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn handler(&self) -> CommandHandler {
        Rc::clone(&self.handler)
    }

    pub fn completion(&self) -> Option<CompletionProvider> {
        self.completion.clone()
    }
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("completion", &self.completion.is_some())
            .finish()
    }
}

/// Ordered, case-insensitive map from command name to [`CommandEntry`].
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: IndexMap<String, CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry`. A command with the same lower-cased name is replaced.
    pub fn register(&mut self, entry: CommandEntry) {
        let key = entry.name.to_lowercase();
        if self.commands.contains_key(&key) {
            tracing::debug!(command = %key, "replacing registered command");
        }
        self.commands.insert(key, entry);
    }

    /// Looks up a command by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_lowercase())
    }

    /// Returns the registry keys (lower-cased names) in registration order.
    pub fn names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    /// Iterates over the entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &[String], _: &mut Shell) -> anyhow::Result<()> {
        Ok(())
    }

    #[test]
    fn test_keys_are_lowercased_and_display_keeps_case() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("Greet", "say hello", noop));

        assert!(registry.contains("greet"));
        assert!(registry.contains("GREET"));
        assert_eq!(registry.names(), vec!["greet"]);
        assert_eq!(registry.get("greet").unwrap().name(), "Greet");
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let mut registry = CommandRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry.register(CommandEntry::new(name, "", noop));
        }
        assert_eq!(registry.names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("x", "first", noop));
        registry.register(CommandEntry::new("X", "second", noop));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("x").unwrap().description(), "second");
    }
}
