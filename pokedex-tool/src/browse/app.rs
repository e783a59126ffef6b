use pokedex_api::{
    DetailViewModel, ErrorKind, ItemSummary, LocalePreference, PokedexClient, PokedexError,
    ViewState,
};
use tokio::sync::oneshot;
use tracing::{error, info};

type Pending<T> = Option<oneshot::Receiver<Result<T, PokedexError>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Listing,
    Detail { identifier: String },
}

/// Grid column count for a terminal width.
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..60 => 1,
        60..90 => 2,
        90..120 => 3,
        _ => 4,
    }
}

pub struct BrowseApp {
    pub screen: Screen,
    pub should_quit: bool,
    pub client: PokedexClient,
    pub locales: LocalePreference,
    pub show_errors: bool,
    pub listing: ViewState<Vec<ItemSummary>>,
    pub detail: ViewState<DetailViewModel>,
    pub selected: usize,
    pub columns: usize,
    pub detail_scroll: u16,
    listing_rx: Pending<Vec<ItemSummary>>,
    detail_rx: Pending<DetailViewModel>,
}

impl BrowseApp {
    pub fn new(client: PokedexClient, locales: LocalePreference, show_errors: bool) -> Self {
        Self {
            screen: Screen::Listing,
            should_quit: false,
            client,
            locales,
            show_errors,
            listing: ViewState::Loading,
            detail: ViewState::Loading,
            selected: 0,
            columns: 1,
            detail_scroll: 0,
            listing_rx: None,
            detail_rx: None,
        }
    }

    /// Starts a fresh listing fetch. Called each time the listing is shown.
    pub fn activate_listing(&mut self) {
        let (tx, rx) = oneshot::channel();
        let client = self.client.clone();

        tokio::spawn(async move {
            let result = client.fetch_listing().await;
            let _ = tx.send(result);
        });

        self.screen = Screen::Listing;
        self.listing = ViewState::Loading;
        self.listing_rx = Some(rx);
    }

    /// Opens the detail screen for the selected card.
    pub fn open_selected(&mut self) {
        let Some(summary) = self
            .listing
            .loaded()
            .and_then(|items| items.get(self.selected))
        else {
            return;
        };
        let identifier = summary.name.clone();

        let (tx, rx) = oneshot::channel();
        let client = self.client.clone();
        let locales = self.locales.clone();
        let request_identifier = identifier.clone();

        tokio::spawn(async move {
            let result = client
                .resolve_detail_with(&request_identifier, &locales)
                .await;
            let _ = tx.send(result);
        });

        info!(%identifier, "Opening detail");
        self.screen = Screen::Detail { identifier };
        self.detail = ViewState::Loading;
        self.detail_scroll = 0;
        self.detail_rx = Some(rx);
    }

    /// Leaves the detail screen. A pending detail result is dropped.
    pub fn go_back(&mut self) {
        if self.screen == Screen::Listing {
            return;
        }
        self.detail_rx = None;
        self.detail = ViewState::Loading;
        self.activate_listing();
    }

    pub fn poll_responses(&mut self) {
        if let Some(state) = poll_pending(&mut self.listing_rx, "listing") {
            self.listing = state;
            self.clamp_selection();
        }
        if let Some(state) = poll_pending(&mut self.detail_rx, "detail") {
            self.detail = state;
        }
    }

    pub fn set_width(&mut self, width: u16) {
        self.columns = columns_for_width(width);
    }

    fn item_count(&self) -> usize {
        self.listing.loaded().map_or(0, Vec::len)
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.item_count().saturating_sub(1));
    }

    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.selected + 1 < self.item_count() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + self.columns < self.item_count() {
            self.selected += self.columns;
        }
    }

    pub fn scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }
}

/// Takes a finished result off the channel. Failures are logged here.
fn poll_pending<T>(pending: &mut Pending<T>, flow: &str) -> Option<ViewState<T>> {
    let rx = pending.as_mut()?;
    let state = match rx.try_recv() {
        Ok(Ok(value)) => ViewState::Loaded(value),
        Ok(Err(e)) => {
            error!(flow, error = %e, "Fetch failed");
            ViewState::Failed(e.kind())
        }
        Err(oneshot::error::TryRecvError::Empty) => return None,
        Err(oneshot::error::TryRecvError::Closed) => {
            error!(flow, "Fetch task ended without a result");
            ViewState::Failed(ErrorKind::Network)
        }
    };
    *pending = None;
    Some(state)
}
