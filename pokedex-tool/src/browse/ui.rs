use pokedex_api::{palette, ColorToken, DetailViewModel, ItemSummary, ViewState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::{BrowseApp, Screen};
use crate::display::{bar_cells, capitalize, padded_stat, summary_label};

const LOADING_TEXT: &str = "Cargando...";
const CARD_HEIGHT: u16 = 3;
/// Label and value columns in front of a stat bar.
const STAT_LABEL_WIDTH: u16 = 24;

fn rgb(token: ColorToken) -> Color {
    let (r, g, b) = token.rgb;
    Color::Rgb(r, g, b)
}

pub fn render(frame: &mut Frame, app: &BrowseApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Screen
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match app.screen {
        Screen::Listing => render_listing(frame, app, chunks[1]),
        Screen::Detail { .. } => render_detail(frame, app, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &BrowseApp, area: Rect) {
    let title = match &app.screen {
        Screen::Listing => "PokeApi".to_string(),
        Screen::Detail { identifier } => format!("PokeApi - {}", capitalize(identifier)),
    };

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

    frame.render_widget(header, area);
}

/// Paragraph shown while a screen has nothing to render. Failures look the
/// same as loading unless `show_errors` is set.
fn placeholder<T>(state: &ViewState<T>, show_errors: bool) -> Option<Paragraph<'static>> {
    let text = match state {
        ViewState::Loaded(_) => return None,
        ViewState::Failed(kind) if show_errors => format!("Error: {}", kind),
        ViewState::Loading | ViewState::Failed(_) => LOADING_TEXT.to_string(),
    };
    Some(Paragraph::new(text).alignment(Alignment::Center))
}

fn render_listing(frame: &mut Frame, app: &BrowseApp, area: Rect) {
    if let Some(paragraph) = placeholder(&app.listing, app.show_errors) {
        frame.render_widget(paragraph, area);
        return;
    }
    let Some(items) = app.listing.loaded() else {
        return;
    };

    let columns = app.columns.max(1);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = app.selected / columns;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (offset, row_area) in row_areas.iter().enumerate() {
        let row = first_row + offset;
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (column, cell) in cells.iter().enumerate() {
            let index = row * columns + column;
            if let Some(summary) = items.get(index) {
                render_card(frame, summary, index, index == app.selected, *cell);
            }
        }
    }
}

fn render_card(frame: &mut Frame, summary: &ItemSummary, index: usize, selected: bool, area: Rect) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let card = Paragraph::new(summary_label(summary, index))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    frame.render_widget(card, area);
}

fn render_detail(frame: &mut Frame, app: &BrowseApp, area: Rect) {
    if let Some(paragraph) = placeholder(&app.detail, app.show_errors) {
        frame.render_widget(paragraph, area);
        return;
    }
    let Some(view) = app.detail.loaded() else {
        return;
    };

    let accent = rgb(view.primary_color());
    let title = format!(" {} {} ", capitalize(&view.record.name), view.display_number());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            title,
            Style::default().fg(Color::White).bg(accent).add_modifier(Modifier::BOLD),
        ));

    let track = area.width.saturating_sub(STAT_LABEL_WIDTH + 2);
    let paragraph = Paragraph::new(detail_text(view, track))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn detail_text(view: &DetailViewModel, track: u16) -> Text<'static> {
    let record = &view.record;
    let accent = rgb(view.primary_color());
    let heading = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = Vec::new();

    let mut badges: Vec<Span> = Vec::new();
    for slot in &record.types {
        badges.push(Span::styled(
            format!(" {} ", capitalize(&slot.kind.name)),
            Style::default()
                .fg(Color::White)
                .bg(rgb(palette::badge_color(&slot.kind.name))),
        ));
        badges.push(Span::raw(" "));
    }
    lines.push(Line::from(badges).alignment(Alignment::Center));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("About", heading)));
    let moves: Vec<String> = view
        .key_moves()
        .iter()
        .map(|m| capitalize(&m.action.name))
        .collect();
    lines.push(Line::from(format!(
        "Weight: {} kg   Height: {} m   Moves: {}",
        record.weight,
        view.height_m(),
        moves.join(", ")
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        view.description.clone(),
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Base Stats", heading)));
    for stat in &record.stats {
        let filled = bar_cells(stat.base_stat, track);
        let empty = track.saturating_sub(filled);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<16} {:>3}    ", capitalize(&stat.stat.name), padded_stat(stat.base_stat)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " ".repeat(filled as usize),
                Style::default().bg(rgb(palette::GREEN_400)),
            ),
            Span::styled(" ".repeat(empty as usize), Style::default().bg(Color::DarkGray)),
        ]));
    }

    Text::from(lines)
}

fn render_status_bar(frame: &mut Frame, app: &BrowseApp, area: Rect) {
    let status = match app.screen {
        Screen::Listing => "←/→/↑/↓: Move  Enter: Open  q/Esc: Quit",
        Screen::Detail { .. } => "Esc/b: Back  ↑/↓: Scroll  q: Quit",
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_api::{
        ErrorKind, ItemRecord, LocalePreference, MoveSlot, NamedResource, PokedexClient, Sprites,
        StatSlot, TypeSlot,
    };
    use ratatui::{backend::TestBackend, Terminal};

    fn named(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: String::new(),
        }
    }

    fn app() -> BrowseApp {
        BrowseApp::new(
            PokedexClient::with_base_url("http://127.0.0.1:9"),
            LocalePreference::default(),
            false,
        )
    }

    fn draw(app: &BrowseApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_failed_listing_looks_like_loading() {
        let mut app = app();
        app.listing = ViewState::Failed(ErrorKind::Network);
        let screen = draw(&app);
        assert!(screen.contains(LOADING_TEXT));
        assert!(!screen.contains("Error"));

        app.show_errors = true;
        let screen = draw(&app);
        assert!(screen.contains("Error: network error"));
    }

    #[test]
    fn test_listing_cards() {
        let mut app = app();
        app.columns = 2;
        app.listing = ViewState::Loaded(vec![
            ItemSummary {
                name: "bulbasaur".to_string(),
                url: "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
            },
            ItemSummary {
                name: "ivysaur".to_string(),
                url: "https://pokeapi.co/api/v2/pokemon/2/".to_string(),
            },
        ]);

        let screen = draw(&app);
        assert!(screen.contains("#001 Bulbasaur"));
        assert!(screen.contains("#002 Ivysaur"));
    }

    #[test]
    fn test_detail_screen() {
        let mut app = app();
        app.screen = Screen::Detail {
            identifier: "pikachu".to_string(),
        };
        app.detail = ViewState::Loaded(DetailViewModel {
            record: ItemRecord {
                id: 25,
                name: "pikachu".to_string(),
                types: vec![TypeSlot {
                    slot: 1,
                    kind: named("electric"),
                }],
                weight: 60,
                height: 4,
                moves: vec![
                    MoveSlot { action: named("mega-punch") },
                    MoveSlot { action: named("pay-day") },
                ],
                stats: vec![StatSlot {
                    base_stat: 90,
                    stat: named("speed"),
                }],
                species: named("pikachu"),
                sprites: Sprites::default(),
            },
            description: "A mouse Pokemon.".to_string(),
        });

        let screen = draw(&app);
        assert!(screen.contains("Pikachu #025"));
        assert!(screen.contains("Electric"));
        assert!(screen.contains("Height: 0.4 m"));
        assert!(screen.contains("Mega-punch, Pay-day"));
        assert!(screen.contains("A mouse Pokemon."));
        assert!(screen.contains("Speed"));
    }
}
