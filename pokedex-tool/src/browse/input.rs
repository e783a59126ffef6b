use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use super::app::{BrowseApp, Screen};

pub fn handle_event(app: &mut BrowseApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Resize(width, _) => app.set_width(width),
        _ => {}
    }
}

fn handle_key(app: &mut BrowseApp, key: KeyEvent) {
    match app.screen {
        Screen::Listing => handle_listing_key(app, key),
        Screen::Detail { .. } => handle_detail_key(app, key),
    }
}

fn handle_listing_key(app: &mut BrowseApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Enter => app.open_selected(),
        KeyCode::Left => app.move_left(),
        KeyCode::Right => app.move_right(),
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut BrowseApp, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.go_back(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pokedex_api::{ItemSummary, LocalePreference, PokedexClient, ViewState};

    fn press(app: &mut BrowseApp, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn app() -> BrowseApp {
        let mut app = BrowseApp::new(
            PokedexClient::with_base_url("http://127.0.0.1:9"),
            LocalePreference::default(),
            false,
        );
        app.listing = ViewState::Loaded(
            ["bulbasaur", "ivysaur", "venusaur"]
                .iter()
                .enumerate()
                .map(|(i, name)| ItemSummary {
                    name: name.to_string(),
                    url: format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1),
                })
                .collect(),
        );
        app
    }

    #[test]
    fn test_resize_updates_columns() {
        let mut app = app();
        handle_event(&mut app, Event::Resize(100, 40));
        assert_eq!(app.columns, 3);
    }

    #[test]
    fn test_listing_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected, 2);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected, 1);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_enter_then_back() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.screen,
            Screen::Detail {
                identifier: "ivysaur".to_string()
            }
        );

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.screen, Screen::Listing);
        assert!(!app.should_quit);
    }
}
