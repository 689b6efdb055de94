use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use termquill::config::Config;
use termquill::docs::DocRegistry;
use termquill::input::InputHandler;
use termquill::shell::commands::{print_welcome, register_builtin_commands};
use termquill::shell::Shell;
use termquill::storage::{DirStorage, FileStorage, MemoryStorage};
use termquill::theme::{get_builtin_theme, Theme};
use termquill::ui::UI;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "TERMQUILL_LOG";

/// TermQuill - a terminal console with a built-in vim-style editor
#[derive(Parser)]
#[command(name = "termquill")]
#[command(version)]
#[command(about = "A terminal console with a built-in vim-style editor", long_about = None)]
struct Cli {
    /// File to open in the editor at startup
    file: Option<String>,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// Directory holding stored files (overrides the config file)
    #[arg(long, value_name = "DIR")]
    storage_dir: Option<PathBuf>,

    /// Keep files in memory only; nothing is written to disk
    #[arg(long)]
    ephemeral: bool,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// Without this, panic messages would be hidden or garbled by raw mode and the
/// alternate screen.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(info = %panic_info, "panic");

        // Use stderr to avoid interfering with stdout
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

/// Installs a file logger. Logging never goes to the terminal, which is in raw mode.
///
/// The returned guard must be kept alive to flush buffered records on exit.
fn configure_logging(config: &Config) -> Option<WorkerGuard> {
    let log_path = Config::log_path()?;
    let log_dir = log_path.parent()?;
    std::fs::create_dir_all(log_dir).ok()?;
    let file_name = log_path.file_name()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}

/// Picks the storage backend. Falls back to memory when the directory is unusable.
fn open_storage(cli: &Cli, config: &Config) -> (Box<dyn FileStorage>, Option<String>) {
    if cli.ephemeral {
        return (Box::new(MemoryStorage::new()), None);
    }

    let Some(dir) = cli.storage_dir.clone().or_else(|| config.storage_path()) else {
        return (
            Box::new(MemoryStorage::new()),
            Some("No data directory found; files are kept in memory only.".to_string()),
        );
    };

    match DirStorage::open(&dir) {
        Ok(storage) => (Box::new(storage), None),
        Err(e) => {
            tracing::error!(dir = %dir.display(), error = %e, "cannot open storage directory");
            (
                Box::new(MemoryStorage::new()),
                Some(format!("Cannot use {}: {}; files are kept in memory only.", dir.display(), e)),
            )
        }
    }
}

fn resolve_theme(cli: &Cli, config: &Config) -> (Theme, Option<String>) {
    let name = cli.theme.as_deref().unwrap_or(&config.theme);
    match get_builtin_theme(name) {
        Some(theme) => (theme, None),
        None => (
            Theme::default(),
            Some(format!("Theme '{}' not found, using {}", name, Theme::default().name)),
        ),
    }
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    let mut config = Config::load();
    let _log_guard = configure_logging(&config);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "startup");

    let (theme, theme_warning) = resolve_theme(&cli, &config);
    let (storage, storage_warning) = open_storage(&cli, &config);

    let mut settings = config.shell_settings();
    settings.theme = theme.name.clone();
    let mut shell = Shell::with_settings(storage, settings);
    register_builtin_commands(&mut shell, DocRegistry::with_builtin_pages());

    if config.show_welcome {
        print_welcome(&mut shell);
    }
    for warning in [theme_warning, storage_warning].into_iter().flatten() {
        shell.print_error(&warning);
    }
    if let Some(file) = cli.file.as_deref() {
        shell.open_editor(Some(file));
    }

    let mut ui = UI::new(theme);
    let mut input_handler = if io::stdin().is_terminal() {
        InputHandler::new()
    } else {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin is not a terminal")?
    };

    // Setup terminal
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    let result = run_event_loop(
        &mut terminal,
        &mut ui,
        &mut input_handler,
        &mut shell,
        &mut config,
    );

    // Raw mode and the alternate screen are undone by their Drop guards
    terminal.show_cursor()?;
    terminal.backend_mut().flush()?;

    tracing::info!("shutdown");
    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &mut UI,
    input_handler: &mut InputHandler,
    shell: &mut Shell,
    config: &mut Config,
) -> Result<()> {
    loop {
        if let Some(theme_name) = shell.take_pending_theme() {
            if ui.set_theme(&theme_name) {
                config.theme = theme_name;
                if let Err(e) = config.save() {
                    tracing::warn!(error = %e, "failed to persist theme");
                }
            }
        }

        ui.render(terminal, shell)?;

        match input_handler.poll_event(Duration::from_millis(100))? {
            Some(event) => {
                if input_handler.handle_event(event, shell)? {
                    break;
                }
            }
            None => break,
        }
    }

    Ok(())
}
