use termion::event::{Event, Key, MouseButton, MouseEvent};
use termquill::editor::mode::EditorMode;
use termquill::input::keys::{map_editor_key, map_shell_key, EditorEvent, ShellEvent};
use termquill::input::route_event;
use termquill::shell::Shell;
use termquill::storage::{FileStorage, MemoryStorage};

fn key(k: Key) -> Event {
    Event::Key(k)
}

fn type_keys(shell: &mut Shell, text: &str) {
    for c in text.chars() {
        route_event(key(Key::Char(c)), shell);
    }
}

#[test]
fn test_arrow_keys_move_in_normal_mode() {
    assert_eq!(
        map_editor_key(key(Key::Down), &EditorMode::Normal),
        EditorEvent::MoveDown
    );
    assert_eq!(
        map_editor_key(key(Key::Left), &EditorMode::Normal),
        EditorEvent::MoveLeft
    );
}

#[test]
fn test_insert_mode_keys() {
    assert_eq!(
        map_editor_key(key(Key::Char('j')), &EditorMode::Insert),
        EditorEvent::InsertCharacter('j')
    );
    assert_eq!(
        map_editor_key(key(Key::Char('\n')), &EditorMode::Insert),
        EditorEvent::InsertEnter
    );
    assert_eq!(
        map_editor_key(key(Key::Esc), &EditorMode::Insert),
        EditorEvent::ExitMode
    );
}

#[test]
fn test_command_line_keys() {
    assert_eq!(
        map_editor_key(key(Key::Char('\n')), &EditorMode::CommandLine),
        EditorEvent::ExecuteCommand
    );
    assert_eq!(
        map_editor_key(key(Key::Backspace), &EditorMode::CommandLine),
        EditorEvent::CommandBackspace
    );
}

#[test]
fn test_mouse_events_are_ignored() {
    let click = Event::Mouse(MouseEvent::Press(MouseButton::Left, 1, 1));
    assert_eq!(map_shell_key(click.clone()), ShellEvent::Unknown);
    assert_eq!(
        map_editor_key(click, &EditorMode::Normal),
        EditorEvent::Unknown
    );
}

#[test]
fn test_shell_line_editing_keys() {
    assert_eq!(map_shell_key(key(Key::Ctrl('a'))), ShellEvent::CursorHome);
    assert_eq!(map_shell_key(key(Key::Ctrl('e'))), ShellEvent::CursorEnd);
    assert_eq!(map_shell_key(key(Key::Ctrl('c'))), ShellEvent::CancelLine);
    assert_eq!(map_shell_key(key(Key::Ctrl('l'))), ShellEvent::ClearScreen);
    assert_eq!(map_shell_key(key(Key::Ctrl('x'))), ShellEvent::Unknown);
}

#[test]
fn test_caret_editing_through_keys() {
    let mut shell = Shell::new(Box::new(MemoryStorage::new()));
    type_keys(&mut shell, "helo");
    route_event(key(Key::Left), &mut shell);
    type_keys(&mut shell, "l");
    assert_eq!(shell.input().text(), "hello");
    assert_eq!(shell.input().caret(), 4);

    route_event(key(Key::End), &mut shell);
    route_event(key(Key::Backspace), &mut shell);
    assert_eq!(shell.input().text(), "hell");
}

#[test]
fn test_ctrl_c_abandons_line() {
    let mut shell = Shell::new(Box::new(MemoryStorage::new()));
    type_keys(&mut shell, "half typed");
    route_event(key(Key::Ctrl('c')), &mut shell);

    assert!(shell.input().is_empty());
    assert!(shell.transcript().contains("> half typed^C"));
    assert!(shell.history().is_empty());
}

#[test]
fn test_keys_go_to_editor_while_open() {
    let mut shell = Shell::new(Box::new(MemoryStorage::new()));
    shell.open_editor(Some("k.txt"));

    type_keys(&mut shell, "iok");
    route_event(key(Key::Esc), &mut shell);
    assert!(shell.input().is_empty());

    type_keys(&mut shell, ":wq\n");
    assert!(!shell.is_editor_active());
    assert!(shell.is_input_enabled());
    assert_eq!(shell.storage().load("k.txt").unwrap().as_deref(), Some("ok"));
}

#[test]
fn test_tab_completes_from_keyboard() {
    let mut shell = Shell::new(Box::new(MemoryStorage::new()));
    shell.register_command("sysinfo", "", |_, _| Ok(()));
    type_keys(&mut shell, "sy\t");
    assert_eq!(shell.input().text(), "sysinfo ");
}
