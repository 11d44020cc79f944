//! storefront — a searchable product catalog for the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  outcome   ┌──────────┐  draw()  ┌──────────┐
//! │ fetch.rs │ ─────────► │  app.rs  │ ───────► │  ui.rs   │
//! │  (task)  │ (oneshot)  │ (state)  │          │ (render) │
//! └──────────┘            └──────────┘          └──────────┘
//!                           ▲      │
//!      handle_key_event()   │      │ visible_products()
//!                      ┌──────────┐ ┌───────────┐
//!                      │ input.rs │ │ filter.rs │
//!                      └──────────┘ └───────────┘
//! ```
//!
//! * **`source/`** — the `CatalogSource` trait, the `Product` type, the fetch
//!   error taxonomy, and the HTTP/JSON implementation.
//! * **`fetch`** — runs the one catalog request on a tokio task and owns the
//!   abort handle for it.
//! * **`app`** — owns all component state (status, catalog, query, selection).
//! * **`filter`** — derives the visible products from catalog + query.
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations.
//! * **`config`** / **`logging`** — command line and file logging.
//! * **`main`** — wires everything together: parse args, set up the terminal,
//!   and run the event loop.

mod app;
mod config;
mod fetch;
mod filter;
mod input;
mod logging;
mod source;
#[cfg(test)]
mod test_support;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use app::App;
use config::Cli;
use source::HttpSource;

/// How long the event loop waits for input before redrawing.
const TICK_RATE: Duration = Duration::from_millis(100);

// ---------------------------------------------------------------------------
// RAII terminal guard — idiomatic cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.  Without this, a panic inside the event loop would leave
/// raw mode enabled and the alternate screen active.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;
    install_panic_hook();

    let source = HttpSource::new(&cli.endpoint).context("building HTTP client")?;

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;

    // -- mount: the one fetch starts here ------------------------------------
    let mut app = App::mount(source);

    // -- main event loop -----------------------------------------------------
    // Each iteration:
    //   1. Apply the fetch outcome if it has arrived.
    //   2. Render the UI.
    //   3. Poll for keyboard input (non-blocking, up to TICK_RATE).
    loop {
        app.poll_fetch();

        let size = guard.terminal.size()?;
        app.resize(size.width);
        guard.terminal.draw(|f| ui::draw(&app, f))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key);
            }
        }

        if app.quit {
            break;
        }
    }

    // Teardown: dropping the app aborts a fetch that is still in flight.
    drop(app);
    info!("shutting down");

    // `guard` is dropped here, restoring the terminal.
    Ok(())
}
