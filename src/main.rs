use multistate::cli::{parse_args, CliCommand, DemoOptions, USAGE, VERSION};
use multistate::config::MultiStateConfig;
use multistate::demo::{DemoApp, KeyOutcome};
use multistate::saved_state::SavedStateStore;
use multistate::terminal::{setup_panic_hook, TerminalSession};
use multistate::ui::{render_multistate, render_status_line};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Redraw at least this often so fades can finish.
const TICK_RATE: Duration = Duration::from_millis(50);

/// Install a file-backed subscriber when `MULTISTATE_LOG` names a path.
///
/// Stdout belongs to the TUI, so there is no console logging.
fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("MULTISTATE_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(&path).wrap_err_with(|| format!("creating log file {}", path))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("multistate=debug")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(options: &DemoOptions) -> Result<MultiStateConfig> {
    match &options.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("reading config {}", path.display()))?;
            Ok(MultiStateConfig::from_json(&json)?)
        }
        None => Ok(MultiStateConfig::default()),
    }
}

fn run(options: DemoOptions) -> Result<()> {
    let config = load_config(&options)?;
    let mut app = DemoApp::new(&config)?;

    let store = options.state_file.map(SavedStateStore::new);
    if let Some(store) = &store {
        if app.restore_from(store) {
            tracing::info!(path = %store.path().display(), "Restored saved state");
        }
    }

    setup_panic_hook();
    let mut session = TerminalSession::new()?;

    loop {
        let now = Instant::now();
        app.tick(now);
        session.terminal().draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(frame.area());
            render_multistate(frame, chunks[0], app.view(), now);
            render_status_line(frame, chunks[1], app.view());
        })?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let outcome = match key.code {
                KeyCode::Char(c) => app.handle_key(c),
                KeyCode::Esc => KeyOutcome::Quit,
                _ => KeyOutcome::Continue,
            };
            if outcome == KeyOutcome::Quit {
                break;
            }
        }
    }

    session.restore();

    if let Some(store) = &store {
        app.save_to(store)?;
        tracing::info!(path = %store.path().display(), "Saved state");
    }
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    match parse_args(std::env::args())? {
        CliCommand::Version => {
            println!("multistate-demo {}", VERSION);
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliCommand::Run(options) => {
            init_logging()?;
            run(options)
        }
    }
}
