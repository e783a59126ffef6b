mod app;
mod input;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pokedex_api::{LocalePreference, PokedexClient};
use ratatui::prelude::*;

use self::app::BrowseApp;

use crate::error::PkdxError;

pub async fn run(
    client: PokedexClient,
    locales: LocalePreference,
    show_errors: bool,
) -> Result<(), PkdxError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = BrowseApp::new(client, locales, show_errors);
    app.set_width(terminal.size()?.width);
    app.activate_listing();

    let result = run_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut BrowseApp,
) -> Result<(), PkdxError> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Poll with a timeout so fetch results are picked up between keys
        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            input::handle_event(app, event);
        }

        app.poll_responses();

        if app.should_quit {
            break;
        }

        tokio::task::yield_now().await;
    }

    Ok(())
}
