//! Shell state and command dispatch.
//!
//! [`Shell`] owns everything the console needs between keystrokes: the
//! command registry, history, prompt line, transcript, file storage, and the
//! hosted [`Editor`]. The host loop turns key presses into calls on it and
//! renders it after every event.
//!
//! # Example
//!
//! ```
//! use termquill::shell::state::Shell;
//! use termquill::storage::MemoryStorage;
//!
//! let mut shell = Shell::new(Box::new(MemoryStorage::new()));
//! shell.register_command("greet", "Say hello", |args, shell| {
//!     shell.print(&format!("hello {}", args.join(" ")));
//!     Ok(())
//! });
//!
//! shell.submit("GREET world");
//! assert!(shell.transcript().contains("> GREET world"));
//! assert!(shell.transcript().contains("hello world"));
//! assert_eq!(shell.history().entries(), &["GREET world"]);
//! ```

use super::completion::{common_prefix, find_matches, format_columns, CompletionContext};
use super::history::History;
use super::input_line::InputLine;
use super::registry::{CommandEntry, CommandRegistry};
use super::transcript::{LineStyle, OutputSink, Transcript, DEFAULT_SCROLLBACK};
use crate::editor::state::{Editor, EditorOutcome};
use crate::input::keys::EditorEvent;
use crate::storage::FileStorage;
use crate::theme;

/// Continuation run when the user confirms a pending question.
pub type Confirmation = Box<dyn FnOnce(&mut Shell) -> anyhow::Result<()>>;

struct PendingConfirmation {
    on_confirm: Confirmation,
    cancel_message: String,
}

/// Tunables taken from the configuration file and command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    /// Name of the active built-in theme.
    pub theme: String,
    /// Maximum number of transcript lines kept.
    pub scrollback_limit: usize,
    /// Entries per row when listing completion matches.
    pub completion_columns: usize,
    /// Padded width of each listed match.
    pub completion_column_width: usize,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            theme: theme::DEFAULT_THEME.to_string(),
            scrollback_limit: DEFAULT_SCROLLBACK,
            completion_columns: 4,
            completion_column_width: 20,
        }
    }
}

/// The interactive console.
pub struct Shell {
    registry: CommandRegistry,
    history: History,
    input: InputLine,
    transcript: Transcript,
    storage: Box<dyn FileStorage>,
    editor: Editor,
    settings: ShellSettings,
    input_enabled: bool,
    should_quit: bool,
    pending_theme: Option<String>,
    pending_confirmation: Option<PendingConfirmation>,
}

impl Shell {
    /// Creates a shell with no commands and default settings.
    pub fn new(storage: Box<dyn FileStorage>) -> Self {
        Self::with_settings(storage, ShellSettings::default())
    }

    pub fn with_settings(storage: Box<dyn FileStorage>, settings: ShellSettings) -> Self {
        Self {
            registry: CommandRegistry::new(),
            history: History::new(),
            input: InputLine::new(),
            transcript: Transcript::with_limit(settings.scrollback_limit),
            storage,
            editor: Editor::new(),
            settings,
            input_enabled: true,
            should_quit: false,
            pending_theme: None,
            pending_confirmation: None,
        }
    }

    // ---- registration ----

    /// Registers a command without argument completion.
    pub fn register_command<H>(&mut self, name: &str, description: &str, handler: H)
    where
        H: Fn(&[String], &mut Shell) -> anyhow::Result<()> + 'static,
    {
        self.registry
            .register(CommandEntry::new(name, description, handler));
    }

    /// Registers a command whose arguments complete from `completion`.
    pub fn register_command_with_completion<H, C>(
        &mut self,
        name: &str,
        description: &str,
        handler: H,
        completion: C,
    ) where
        H: Fn(&[String], &mut Shell) -> anyhow::Result<()> + 'static,
        C: Fn(&[String], &str, &Shell) -> Vec<String> + 'static,
    {
        self.registry
            .register(CommandEntry::new(name, description, handler).with_completion(completion));
    }

    /// Registers a prebuilt entry.
    pub fn register(&mut self, entry: CommandEntry) {
        self.registry.register(entry);
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    // ---- output ----

    pub fn print(&mut self, text: &str) {
        self.transcript.append_line(text, LineStyle::Normal);
    }

    pub fn print_styled(&mut self, text: &str, style: LineStyle) {
        self.transcript.append_line(text, style);
    }

    pub fn print_error(&mut self, text: &str) {
        self.transcript.append_line(text, LineStyle::Error);
    }

    pub fn print_hint(&mut self, text: &str) {
        self.transcript.append_line(text, LineStyle::Hint);
    }

    pub fn print_header(&mut self, text: &str) {
        self.transcript.append_line(text, LineStyle::Header);
    }

    /// Prints an empty line.
    pub fn blank_line(&mut self) {
        self.transcript.append_line("", LineStyle::Normal);
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    // ---- accessors ----

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputLine {
        &mut self.input
    }

    pub fn storage(&self) -> &dyn FileStorage {
        self.storage.as_ref()
    }

    pub fn storage_mut(&mut self) -> &mut dyn FileStorage {
        self.storage.as_mut()
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    /// Returns true if the program should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Asks the host loop to exit after the current event.
    pub fn request_exit(&mut self) {
        tracing::info!("exit requested");
        self.should_quit = true;
    }

    // ---- input focus ----

    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn disable_input(&mut self) {
        self.input_enabled = false;
    }

    pub fn enable_input(&mut self) {
        self.input_enabled = true;
    }

    // ---- themes ----

    /// Name of the active theme.
    pub fn theme_name(&self) -> &str {
        &self.settings.theme
    }

    /// Switches to a built-in theme. Returns false for an unknown name.
    ///
    /// The UI picks the change up through [`take_pending_theme`](Self::take_pending_theme).
    pub fn set_theme(&mut self, name: &str) -> bool {
        let Some(found) = theme::get_builtin_theme(name) else {
            return false;
        };
        tracing::info!(theme = %found.name, "theme changed");
        self.settings.theme = found.name.clone();
        self.pending_theme = Some(found.name);
        true
    }

    /// Takes the pending theme change, if any.
    pub fn take_pending_theme(&mut self) -> Option<String> {
        self.pending_theme.take()
    }

    // ---- confirmation ----

    /// Asks a yes/no question. The next submitted line answers it: `y` or
    /// `yes` runs `on_confirm`, anything else prints `cancel_message`.
    pub fn confirm<F>(&mut self, question: &str, cancel_message: &str, on_confirm: F)
    where
        F: FnOnce(&mut Shell) -> anyhow::Result<()> + 'static,
    {
        self.print_styled(&format!("{} (y/N)", question), LineStyle::Hint);
        self.pending_confirmation = Some(PendingConfirmation {
            on_confirm: Box::new(on_confirm),
            cancel_message: cancel_message.to_string(),
        });
    }

    /// Returns true while a confirmation question is waiting for an answer.
    pub fn is_awaiting_confirmation(&self) -> bool {
        self.pending_confirmation.is_some()
    }

    fn answer_confirmation(&mut self, pending: PendingConfirmation, answer: &str) {
        let answer = answer.trim().to_lowercase();
        if answer == "y" || answer == "yes" {
            if let Err(e) = (pending.on_confirm)(self) {
                tracing::warn!(error = %e, "confirmed action failed");
                self.print_error(&format!("Error executing command: {}", e));
            }
        } else {
            self.print_hint(&pending.cancel_message);
        }
    }

    // ---- dispatch ----

    /// Submits the current prompt line.
    pub fn submit_input(&mut self) {
        let line = self.input.take();
        self.submit(&line);
    }

    /// Processes one raw input line: echo, record, dispatch.
    pub fn submit(&mut self, raw: &str) {
        self.print_styled(&format!("> {}", raw), LineStyle::Echo);

        if let Some(pending) = self.pending_confirmation.take() {
            self.answer_confirmation(pending, raw);
            self.input.clear();
            return;
        }

        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            self.history.push(trimmed);
        }
        self.execute(trimmed);
        self.input.clear();
    }

    /// Runs `line` as a command without echoing it or touching history.
    fn execute(&mut self, line: &str) {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return;
        };
        let name = first.to_lowercase();
        let args: Vec<String> = tokens.map(|s| s.to_string()).collect();

        let Some(handler) = self.registry.get(&name).map(|entry| entry.handler()) else {
            tracing::debug!(command = %name, "command not found");
            self.print_error(&format!("Command not found: {}", name));
            self.print_hint("Type \"help\" for a list of available commands.");
            return;
        };

        tracing::debug!(command = %name, args = args.len(), "dispatching command");
        if let Err(e) = handler(&args, self) {
            tracing::warn!(command = %name, error = %e, "command failed");
            self.print_error(&format!("Error executing command: {}", e));
        }
    }

    // ---- history ----

    /// Replaces the prompt with the next older history entry.
    pub fn history_previous(&mut self) {
        if let Some(entry) = self.history.previous() {
            let entry = entry.to_string();
            self.input.set(entry);
        }
    }

    /// Replaces the prompt with the next newer history entry, or clears it.
    pub fn history_next(&mut self) {
        if let Some(entry) = self.history.next() {
            let entry = entry.to_string();
            self.input.set(entry);
        }
    }

    // ---- completion ----

    /// Completes the word before the caret.
    pub fn complete(&mut self) {
        if !self.input_enabled {
            return;
        }

        let context = CompletionContext::parse(self.input.before_caret());
        let after = self.input.after_caret().to_string();

        let (candidates, partial) = match &context {
            CompletionContext::Command { partial } => (self.registry.names(), partial.clone()),
            CompletionContext::Argument {
                command,
                args,
                current,
            } => {
                let Some(provider) = self.registry.get(command).and_then(|e| e.completion())
                else {
                    return;
                };
                (provider(args.as_slice(), current.as_str(), self), current.clone())
            }
        };

        let matches = find_matches(&candidates, &partial);
        match matches.len() {
            0 => {}
            1 => {
                let completed = format!("{} ", completion_head(&context, &matches[0]));
                self.input.set_with_caret(
                    format!("{}{}", completed, after),
                    completed.chars().count(),
                );
            }
            _ => {
                let prefix = common_prefix(&matches);
                if prefix.chars().count() > partial.chars().count() {
                    let completed = completion_head(&context, &prefix);
                    self.input.set_with_caret(
                        format!("{}{}", completed, after),
                        completed.chars().count(),
                    );
                }
                self.show_matches(&matches);
            }
        }
    }

    fn show_matches(&mut self, matches: &[String]) {
        let rows = format_columns(
            matches,
            self.settings.completion_columns,
            self.settings.completion_column_width,
        );
        self.print_hint("");
        for row in rows {
            self.print_hint(&row);
        }
        self.print_hint("");
    }

    // ---- editor ----

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn is_editor_active(&self) -> bool {
        self.editor.is_active()
    }

    /// Opens the editor on `filename` and takes input away from the prompt.
    pub fn open_editor(&mut self, filename: Option<&str>) {
        self.editor.open(filename, self.storage.as_ref());
        self.disable_input();
    }

    /// Feeds one event to the editor, giving input back to the prompt when the
    /// session closes.
    pub fn handle_editor_event(&mut self, event: &EditorEvent) -> EditorOutcome {
        let outcome = self.editor.handle_event(event, self.storage.as_mut());
        if outcome == EditorOutcome::Closed {
            self.enable_input();
        }
        outcome
    }

    // ---- prompt keys ----

    /// Abandons the current line (Ctrl-C).
    pub fn cancel_line(&mut self) {
        let line = self.input.take();
        self.print_styled(&format!("> {}^C", line), LineStyle::Echo);
        self.history.reset_browse();
        if let Some(pending) = self.pending_confirmation.take() {
            self.print_hint(&pending.cancel_message);
        }
    }
}

/// Builds the field text that replaces everything before the caret.
fn completion_head(context: &CompletionContext, word: &str) -> String {
    match context {
        CompletionContext::Command { .. } => word.to_string(),
        CompletionContext::Argument { command, args, .. } => {
            let mut parts: Vec<&str> = Vec::with_capacity(args.len() + 2);
            parts.push(command);
            parts.extend(args.iter().map(|s| s.as_str()));
            parts.push(word);
            parts.join(" ")
        }
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("registry", &self.registry)
            .field("history", &self.history)
            .field("input", &self.input)
            .field("editor", &self.editor)
            .field("settings", &self.settings)
            .field("input_enabled", &self.input_enabled)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn shell() -> Shell {
        Shell::new(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_unknown_command_prints_error_and_hint() {
        let mut shell = shell();
        shell.submit("frobnicate");
        assert!(shell.transcript().contains("Command not found: frobnicate"));
        assert!(shell
            .transcript()
            .contains("Type \"help\" for a list of available commands."));
        assert_eq!(shell.history().len(), 1);
    }

    #[test]
    fn test_execute_dispatches_without_echo_or_history() {
        let mut shell = shell();
        shell.register_command("ping", "", |_, shell| {
            shell.print("pong");
            Ok(())
        });
        shell.execute("PING");
        assert_eq!(shell.transcript().texts(), vec!["pong"]);
        assert!(shell.history().is_empty());
    }

    #[test]
    fn test_blank_line_is_echoed_but_not_recorded() {
        let mut shell = shell();
        shell.submit("   ");
        assert!(shell.transcript().contains(">    "));
        assert!(shell.history().is_empty());
    }

    #[test]
    fn test_handler_error_is_reported() {
        let mut shell = shell();
        shell.register_command("boom", "fails", |_, _| anyhow::bail!("kaboom"));
        shell.submit("boom");
        assert!(shell.transcript().contains("Error executing command: kaboom"));
        assert!(shell.registry().contains("boom"));
    }

    #[test]
    fn test_dispatch_is_exact() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut shell = shell();
        for name in ["n1", "n2"] {
            let calls = Rc::clone(&calls);
            shell.register_command(name, "", move |_, _| {
                calls.borrow_mut().push(name);
                Ok(())
            });
        }
        shell.submit("N1");
        assert_eq!(*calls.borrow(), vec!["n1"]);
    }

    #[test]
    fn test_confirmation_yes_runs_continuation() {
        let mut shell = shell();
        shell.confirm("Proceed?", "Cancelled.", |shell| {
            shell.print("done");
            Ok(())
        });
        assert!(shell.is_awaiting_confirmation());
        shell.submit("YES");
        assert!(shell.transcript().contains("done"));
        assert!(!shell.is_awaiting_confirmation());
        assert!(shell.history().is_empty());
    }

    #[test]
    fn test_confirmation_other_answer_cancels() {
        let mut shell = shell();
        shell.confirm("Proceed?", "Cancelled.", |shell| {
            shell.print("done");
            Ok(())
        });
        shell.submit("n");
        assert!(shell.transcript().contains("Cancelled."));
        assert!(!shell.transcript().contains("done"));
    }

    #[test]
    fn test_cancel_line_echoes_caret_c() {
        let mut shell = shell();
        shell.input_mut().set("half typed");
        shell.cancel_line();
        assert!(shell.transcript().contains("> half typed^C"));
        assert!(shell.input().is_empty());
    }

    #[test]
    fn test_completion_keeps_text_after_caret() {
        let mut shell = shell();
        shell.register_command("echo", "", |_, _| Ok(()));
        shell.input_mut().set("ec world");
        for _ in 0.." world".len() {
            shell.input_mut().move_left();
        }
        shell.complete();
        assert_eq!(shell.input().text(), "echo  world");
        assert_eq!(shell.input().caret(), 5);
    }

    #[test]
    fn test_set_theme_rejects_unknown() {
        let mut shell = shell();
        assert!(!shell.set_theme("no-such-theme"));
        assert_eq!(shell.take_pending_theme(), None);
        assert!(shell.set_theme("amber"));
        assert_eq!(shell.theme_name(), "amber");
        assert_eq!(shell.take_pending_theme().as_deref(), Some("amber"));
    }
}
