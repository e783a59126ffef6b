//! Client for the PokeAPI creature catalog.
//!
//! Two flows are provided:
//! - **Listing**: one request to the catalog endpoint, first page only
//! - **Detail**: the item record, then its species record, combined into a
//!   [`DetailViewModel`] with a locale-selected description
//!
//! # Example
//!
//! ```ignore
//! use pokedex_api::PokedexClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = PokedexClient::new();
//!
//!     for summary in client.fetch_listing().await.unwrap() {
//!         println!("{}", summary.name);
//!     }
//!
//!     let detail = client.resolve_detail("pikachu").await.unwrap();
//!     println!("{} {}", detail.display_number(), detail.description);
//! }
//! ```

mod client;
mod description;
mod error;
pub mod palette;
mod types;
mod view;

pub use client::{PokedexClient, DEFAULT_BASE_URL};
pub use description::{
    flatten_flavor_text, select_description, LocalePreference, FALLBACK_LOCALE,
    PLACEHOLDER_DESCRIPTION, PRIMARY_LOCALE,
};
pub use error::{ErrorKind, PokedexError};
pub use palette::ColorToken;
pub use types::{
    Artwork, CatalogPage, FlavorTextEntry, ItemRecord, ItemSummary, MoveSlot, NamedResource,
    OtherSprites, SpeciesRecord, Sprites, StatSlot, TypeSlot,
};
pub use view::{
    height_in_metres, key_moves, stat_bar_percent, DetailViewModel, ViewState, KEY_MOVE_COUNT,
    STAT_BAR_SCALE,
};
