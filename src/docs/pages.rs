//! Built-in manual pages.

use super::DocPage;

const EDITOR_DETAILED: &str = "\
The editor is modal. It opens in NORMAL mode, where keys move the cursor:
  h / l    move left / right
  j / k    move down / up
  i        switch to INSERT mode
  :        open the command line

In INSERT mode typed characters are inserted at the cursor. Enter splits the
line, Backspace deletes the previous character or joins with the line above.
Escape returns to NORMAL mode.

Command line:
  :w [file]    write the buffer (optionally under a new name)
  :q           quit, refused while there are unsaved changes
  :wq [file]   write, then quit
  :q!          quit and discard changes";

fn editor_page(name: &str, brief: &str) -> DocPage {
    DocPage::new(
        name,
        brief,
        format!("{} [filename]", name),
        "Open the vim-style text editor, loading the file if it exists.",
    )
    .with_detailed(EDITOR_DETAILED)
    .with_examples([format!("{} notes.txt", name), name.to_string()])
}

/// Returns the pages for every command registered by
/// [`register_builtin_commands`](crate::shell::commands::register_builtin_commands).
pub fn builtin_pages() -> Vec<DocPage> {
    vec![
        DocPage::new(
            "help",
            "Display available commands",
            "help",
            "List every registered command with its description.",
        )
        .with_detailed("Commands are listed in the order they were registered. Use \"man <command>\" for details on a single command."),
        DocPage::new(
            "clear",
            "Clear the terminal screen",
            "clear",
            "Remove all output from the screen. History is kept.",
        )
        .with_detailed("Ctrl-L does the same from the prompt."),
        DocPage::new(
            "history",
            "Show command history",
            "history",
            "Print every command entered in this session, numbered from 1.",
        )
        .with_detailed("Up and Down at the prompt walk through the same list. Empty lines are never recorded."),
        DocPage::new(
            "echo",
            "Echo text to the terminal",
            "echo [text...]",
            "Print the arguments separated by single spaces.",
        )
        .with_examples(["echo hello world"]),
        DocPage::new("exit", "Leave the console", "exit", "Quit TermQuill.")
            .with_detailed("Ctrl-D on an empty prompt does the same."),
        DocPage::new(
            "ls",
            "List files and commands",
            "ls [-l]",
            "List stored files. With -l, show each file's size.",
        )
        .with_examples(["ls", "ls -l"]),
        DocPage::new(
            "cat",
            "Display file contents",
            "cat <filename>",
            "Print the contents of a stored file.",
        )
        .with_examples(["cat notes.txt"]),
        DocPage::new(
            "rm",
            "Remove files",
            "rm [-f] <filename>",
            "Delete a stored file. Asks for confirmation unless -f is given.",
        )
        .with_detailed("Answer y or yes to the confirmation prompt to delete the file; any other answer cancels.")
        .with_examples(["rm old.txt", "rm -f old.txt"]),
        editor_page("edit", "Open text editor"),
        editor_page("vim", "Alias for edit"),
        editor_page("vi", "Alias for edit"),
        DocPage::new(
            "man",
            "Display manual pages for commands",
            "man [-v] [command]",
            "Show the manual page for a command, or list all pages.",
        )
        .with_detailed("Without arguments every documented command is listed. -v adds the detailed text and examples.")
        .with_examples(["man", "man edit", "man -v edit"]),
        DocPage::new(
            "theme",
            "Manage terminal themes",
            "theme [list | current | set <name>]",
            "List, show or switch the color theme.",
        )
        .with_examples(["theme list", "theme set amber"]),
        DocPage::new(
            "sysinfo",
            "Display system information",
            "sysinfo",
            "Print details about the host system and this console.",
        ),
    ]
}
