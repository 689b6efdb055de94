//! Built-in commands.
//!
//! [`register_builtin_commands`] installs the command set the console starts
//! with. Each command has a page in [`DocRegistry::with_builtin_pages`], which
//! is handed to `man` here.

use std::rc::Rc;

use super::state::Shell;
use crate::docs::{DocPage, DocRegistry};
use crate::storage::format_file_size;
use crate::theme;

/// Width `help` pads command names to.
const HELP_NAME_WIDTH: usize = 15;
/// Width `ls -l` pads file names to.
const LS_NAME_WIDTH: usize = 30;
/// Width `man` pads page names to in its listing.
const MAN_NAME_WIDTH: usize = 20;
/// Column `man` wraps paragraphs at.
const WRAP_WIDTH: usize = 80;

/// Registers every built-in command on `shell`.
///
/// # Example
///
/// ```
/// use termquill::docs::DocRegistry;
/// use termquill::shell::{commands::register_builtin_commands, state::Shell};
/// use termquill::storage::MemoryStorage;
///
/// let mut shell = Shell::new(Box::new(MemoryStorage::new()));
/// register_builtin_commands(&mut shell, DocRegistry::with_builtin_pages());
///
/// shell.submit("echo hello   world");
/// assert!(shell.transcript().contains("hello world"));
/// ```
pub fn register_builtin_commands(shell: &mut Shell, docs: DocRegistry) {
    register_core_commands(shell);
    register_file_commands(shell);
    register_editor_commands(shell);
    register_man_command(shell, Rc::new(docs));
    register_theme_command(shell);
    register_sysinfo_command(shell);
}

/// Prints the startup banner.
pub fn print_welcome(shell: &mut Shell) {
    let version = format!("TERMQUILL v{}", env!("CARGO_PKG_VERSION"));
    let inner = 59;
    shell.blank_line();
    shell.print_header(&format!("╔{}╗", "═".repeat(inner)));
    shell.print_header(&format!("║{:^inner$}║", version, inner = inner));
    shell.print_header(&format!(
        "║{:^inner$}║",
        "A console with a built-in modal editor",
        inner = inner
    ));
    shell.print_header(&format!("╚{}╝", "═".repeat(inner)));
    shell.blank_line();
    shell.print("Type \"help\" to see available commands.");
    shell.blank_line();
}

fn file_names(shell: &Shell) -> Vec<String> {
    shell.storage().list().unwrap_or_default()
}

fn section(shell: &mut Shell, title: &str) {
    shell.blank_line();
    shell.print_header(title);
    shell.print_header(&"=".repeat(title.chars().count()));
    shell.blank_line();
}

fn register_core_commands(shell: &mut Shell) {
    shell.register_command_with_completion(
        "help",
        "Display available commands",
        |_, shell| {
            section(shell, "Available Commands:");
            let lines: Vec<String> = shell
                .registry()
                .entries()
                .map(|cmd| {
                    format!(
                        "  {:<width$}{}",
                        cmd.name(),
                        cmd.description(),
                        width = HELP_NAME_WIDTH
                    )
                })
                .collect();
            for line in lines {
                shell.print(&line);
            }
            shell.blank_line();
            Ok(())
        },
        |_, _, shell| shell.registry().names(),
    );

    shell.register_command("clear", "Clear the terminal screen", |_, shell| {
        shell.clear_transcript();
        Ok(())
    });

    shell.register_command("history", "Show command history", |_, shell| {
        if shell.history().is_empty() {
            shell.print_hint("No command history.");
            return Ok(());
        }
        section(shell, "Command History:");
        let lines: Vec<String> = shell
            .history()
            .entries()
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{:>4}  {}", i + 1, cmd))
            .collect();
        for line in lines {
            shell.print(&line);
        }
        shell.blank_line();
        Ok(())
    });

    shell.register_command("echo", "Echo text to the terminal", |args, shell| {
        shell.print(&args.join(" "));
        Ok(())
    });

    shell.register_command("exit", "Leave the console", |_, shell| {
        shell.print_hint("Goodbye.");
        shell.request_exit();
        Ok(())
    });
}

fn register_file_commands(shell: &mut Shell) {
    shell.register_command("ls", "List files and commands", |args, shell| {
        let long = args.iter().any(|a| a == "-l");
        let files = shell.storage().list()?;

        shell.blank_line();
        if files.is_empty() {
            shell.print_hint("No files found.");
            shell.print_hint("Create files using: edit <filename>");
        } else {
            shell.print_header("Files:");
            for name in files {
                if long {
                    let size = shell.storage().size(&name).unwrap_or(0);
                    shell.print(&format!(
                        "  {:<width$}{}",
                        name,
                        format_file_size(size),
                        width = LS_NAME_WIDTH
                    ));
                } else {
                    shell.print(&format!("  {}", name));
                }
            }
        }
        shell.blank_line();
        shell.print_header("Commands:");
        shell.print_hint("  Type \"help\" to see all available commands");
        shell.print_hint("  Type \"man <command>\" for detailed help");
        shell.blank_line();
        Ok(())
    });

    shell.register_command_with_completion(
        "cat",
        "Display file contents",
        |args, shell| {
            let Some(name) = args.first() else {
                shell.print_error("Usage: cat <filename>");
                shell.print_hint("Display the contents of a file.");
                return Ok(());
            };

            let Some(content) = shell.storage().load(name)? else {
                shell.print_error(&format!("cat: {}: No such file", name));
                shell.print_hint("Use \"ls\" to see available files.");
                return Ok(());
            };

            if content.is_empty() {
                shell.print_hint("[Empty file]");
                return Ok(());
            }
            shell.blank_line();
            shell.print(&content);
            shell.blank_line();
            Ok(())
        },
        |_, _, shell| file_names(shell),
    );

    shell.register_command_with_completion(
        "rm",
        "Remove files",
        |args, shell| {
            if args.is_empty() {
                shell.print_error("Usage: rm [-f] <filename>");
                shell.print_hint("Remove a stored file.");
                shell.print_hint("  -f    Force removal without confirmation");
                return Ok(());
            }

            let force = args[0] == "-f";
            let target = if force { args.get(1) } else { args.first() };
            let Some(name) = target.cloned() else {
                shell.print_error("Usage: rm [-f] <filename>");
                return Ok(());
            };

            if !shell.storage().exists(&name) {
                shell.print_error(&format!("rm: {}: No such file", name));
                shell.print_hint("Use \"ls\" to see available files.");
                return Ok(());
            }

            if force {
                remove_file(shell, &name)
            } else {
                let question = format!("Delete '{}'?", name);
                shell.confirm(&question, "Deletion cancelled.", move |shell| {
                    remove_file(shell, &name)
                });
                Ok(())
            }
        },
        |_, _, shell| file_names(shell),
    );
}

fn remove_file(shell: &mut Shell, name: &str) -> anyhow::Result<()> {
    if shell.storage_mut().delete(name)? {
        shell.print(&format!("Removed '{}'", name));
    } else {
        shell.print_error(&format!("Failed to remove '{}'", name));
    }
    Ok(())
}

fn register_editor_commands(shell: &mut Shell) {
    let open = |args: &[String], shell: &mut Shell| -> anyhow::Result<()> {
        shell.open_editor(args.first().map(|s| s.as_str()));
        Ok(())
    };
    shell.register_command_with_completion("edit", "Open text editor", open, |_, _, shell| {
        file_names(shell)
    });
    shell.register_command_with_completion("vim", "Alias for edit", open, |_, _, shell| {
        file_names(shell)
    });
    shell.register_command_with_completion("vi", "Alias for edit", open, |_, _, shell| {
        file_names(shell)
    });
}

fn register_man_command(shell: &mut Shell, docs: Rc<DocRegistry>) {
    let completion_docs = Rc::clone(&docs);
    shell.register_command_with_completion(
        "man",
        "Display manual pages for commands",
        move |args, shell| {
            if args.is_empty() {
                show_page_list(shell, &docs);
                return Ok(());
            }

            let verbose = args[0] == "-v";
            let target = if verbose { args.get(1) } else { args.first() };
            let Some(name) = target else {
                shell.print_error("Usage: man [-v] <command>");
                shell.print_hint("Try \"man\" to list all available manual pages.");
                return Ok(());
            };

            match docs.lookup(name) {
                Some(page) => show_page(shell, page, verbose),
                None => {
                    shell.print_error(&format!("No manual entry for {}", name));
                    shell.print_hint("Try \"man\" to see available manual pages.");
                }
            }
            Ok(())
        },
        move |_, _, _| completion_docs.names(),
    );
}

fn show_page_list(shell: &mut Shell, docs: &DocRegistry) {
    if docs.pages().next().is_none() {
        shell.print_hint("No manual pages available.");
        return;
    }

    section(shell, "Available Manual Pages");
    shell.print("Usage: man <command>        Show brief help");
    shell.print("       man -v <command>     Show detailed help");
    shell.blank_line();
    for page in docs.pages() {
        shell.print(&format!(
            "  {:<width$}{}",
            page.name,
            page.brief,
            width = MAN_NAME_WIDTH
        ));
    }
    shell.blank_line();
}

fn show_page(shell: &mut Shell, page: &DocPage, verbose: bool) {
    shell.blank_line();
    shell.print_header("NAME");
    shell.print(&format!("    {} - {}", page.name, page.brief));
    shell.blank_line();

    shell.print_header("USAGE");
    shell.print(&format!("    {}", page.usage));
    shell.blank_line();

    shell.print_header("DESCRIPTION");
    for line in wrap_text(&page.description, 4) {
        shell.print(&line);
    }
    shell.blank_line();

    if verbose && !page.detailed.is_empty() {
        shell.print_header("DETAILED INFORMATION");
        for line in wrap_text(&page.detailed, 4) {
            shell.print(&line);
        }
        shell.blank_line();
    }

    if !page.examples.is_empty() {
        shell.print_header("EXAMPLES");
        for example in &page.examples {
            shell.print(&format!("    {}", example));
        }
        shell.blank_line();
    }

    if !verbose {
        shell.print_hint(&format!("For more details, use: man -v {}", page.name));
        shell.blank_line();
    }
}

/// Word-wraps `text` at [`WRAP_WIDTH`], indenting every line by `indent`.
///
/// Explicit newlines start new paragraphs. Lines that start with whitespace
/// are kept as they are so preformatted tables survive.
fn wrap_text(text: &str, indent: usize) -> Vec<String> {
    let pad = " ".repeat(indent);
    let mut lines = Vec::new();

    for (i, paragraph) in text.split('\n').enumerate() {
        if paragraph.trim().is_empty() {
            if i > 0 {
                lines.push(String::new());
            }
            continue;
        }
        if paragraph.starts_with(char::is_whitespace) {
            lines.push(format!("{}{}", pad, paragraph));
            continue;
        }

        let mut current = pad.clone();
        for word in paragraph.split_whitespace() {
            let len = current.chars().count();
            if len > indent && len + 1 + word.chars().count() > WRAP_WIDTH {
                lines.push(std::mem::replace(&mut current, pad.clone()));
            }
            if current.chars().count() > indent {
                current.push(' ');
            }
            current.push_str(word);
        }
        if current.chars().count() > indent {
            lines.push(current);
        }
    }
    lines
}

fn register_theme_command(shell: &mut Shell) {
    shell.register_command_with_completion(
        "theme",
        "Manage terminal themes",
        |args, shell| {
            let Some(subcommand) = args.first().map(|s| s.to_lowercase()) else {
                section(shell, "Theme Manager");
                shell.print("Usage:");
                shell.print("  theme list         - List all available themes");
                shell.print("  theme current      - Show current theme");
                shell.print("  theme set <name>   - Switch to a theme");
                shell.blank_line();
                return Ok(());
            };

            match subcommand.as_str() {
                "list" => {
                    section(shell, "Available Themes");
                    let current = shell.theme_name().to_string();
                    for name in theme::list_builtin_themes() {
                        let Some(t) = theme::get_builtin_theme(name) else {
                            continue;
                        };
                        let marker = if t.name == current { " (current)" } else { "" };
                        shell.print(&format!(
                            "  {:<16}{:<20}{}",
                            t.name, t.display_name, marker
                        ));
                    }
                    shell.blank_line();
                    shell.print_hint("Use \"theme set <name>\" to switch themes.");
                    shell.blank_line();
                }
                "current" => {
                    let name = shell.theme_name().to_string();
                    match theme::get_builtin_theme(&name) {
                        Some(t) => shell.print(&format!("Current theme: {}", t.display_name)),
                        None => shell.print_error("Error: Current theme not found"),
                    }
                }
                "set" => {
                    let Some(name) = args.get(1) else {
                        shell.print_error("Error: Theme name required");
                        shell.print_hint("Usage: theme set <name>");
                        return Ok(());
                    };
                    if shell.set_theme(&name.to_lowercase()) {
                        let display = theme::get_builtin_theme(shell.theme_name())
                            .map(|t| t.display_name)
                            .unwrap_or_default();
                        shell.print_hint(&format!("Theme changed to: {}", display));
                    } else {
                        shell.print_error(&format!("Error: Theme '{}' not found", name));
                        shell.print_hint("Use \"theme list\" to see available themes.");
                    }
                }
                other => {
                    shell.print_error(&format!("Unknown subcommand: {}", other));
                    shell.print_hint("Type \"theme\" for usage.");
                }
            }
            Ok(())
        },
        |args, _, _| match args {
            [] => vec!["list".into(), "current".into(), "set".into()],
            [sub] if sub.eq_ignore_ascii_case("set") => theme::list_builtin_themes()
                .into_iter()
                .map(String::from)
                .collect(),
            _ => Vec::new(),
        },
    );
}

fn register_sysinfo_command(shell: &mut Shell) {
    shell.register_command("sysinfo", "Display system information", |_, shell| {
        let rows = [
            ("OS", std::env::consts::OS.to_string()),
            ("Architecture", std::env::consts::ARCH.to_string()),
            ("Family", std::env::consts::FAMILY.to_string()),
            ("Process ID", std::process::id().to_string()),
            ("Version", env!("CARGO_PKG_VERSION").to_string()),
            ("Storage", shell.storage().location()),
            ("Theme", shell.theme_name().to_string()),
            ("Commands", shell.registry().len().to_string()),
        ];
        section(shell, "System Information");
        for (label, value) in rows {
            shell.print(&format!("{:<16}{}", format!("{}:", label), value));
        }
        shell.blank_line();
        Ok(())
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_breaks_long_paragraphs() {
        let text = "word ".repeat(30);
        let lines = wrap_text(text.trim(), 4);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.starts_with("    word"));
            assert!(line.chars().count() <= WRAP_WIDTH);
        }
    }

    #[test]
    fn test_wrap_text_keeps_indented_lines() {
        let lines = wrap_text("Keys:\n  h / l    move", 4);
        assert_eq!(lines, vec!["    Keys:", "      h / l    move"]);
    }

    #[test]
    fn test_wrap_text_blank_paragraph() {
        let lines = wrap_text("one\n\ntwo", 2);
        assert_eq!(lines, vec!["  one", "", "  two"]);
    }
}
