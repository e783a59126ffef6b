use std::fmt;

use pokedex_api::{DetailViewModel, ItemSummary, LocalePreference, PokedexClient};
use tracing::error;

use crate::display::{bar_cells, capitalize, padded_stat, summary_label};
use crate::error::PkdxError;

const BAR_TRACK: u16 = 30;

/// Plain-text rendering of the catalog listing, one card per line.
pub struct ListingReport<'a>(pub &'a [ItemSummary]);

impl fmt::Display for ListingReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, summary) in self.0.iter().enumerate() {
            writeln!(f, "{}", summary_label(summary, index))?;
        }
        Ok(())
    }
}

/// Plain-text rendering of the detail view.
pub struct DetailReport<'a>(pub &'a DetailViewModel);

impl fmt::Display for DetailReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let record = &view.record;

        writeln!(f, "{} {}", capitalize(&record.name), view.display_number())?;

        let types: Vec<String> = record.types.iter().map(|t| capitalize(&t.kind.name)).collect();
        writeln!(f, "Types: {} ({})", types.join(", "), view.primary_color().name)?;

        if let Some(url) = record.artwork_url() {
            writeln!(f, "Artwork: {}", url)?;
        }

        writeln!(f)?;
        writeln!(f, "About")?;
        writeln!(f, "  Weight: {} kg", record.weight)?;
        writeln!(f, "  Height: {} m", view.height_m())?;
        let moves: Vec<String> = view
            .key_moves()
            .iter()
            .map(|m| capitalize(&m.action.name))
            .collect();
        writeln!(f, "  Moves:  {}", moves.join(", "))?;
        writeln!(f)?;
        writeln!(f, "{}", view.description)?;

        writeln!(f)?;
        writeln!(f, "Base Stats")?;
        for stat in &record.stats {
            let filled = bar_cells(stat.base_stat, BAR_TRACK);
            let empty = BAR_TRACK.saturating_sub(filled);
            writeln!(
                f,
                "  {:<16} {} {}{}",
                capitalize(&stat.stat.name),
                padded_stat(stat.base_stat),
                "█".repeat(filled as usize),
                "·".repeat(empty as usize),
            )?;
        }

        Ok(())
    }
}

/// Fetches the listing for `pkdx list`. Failures are logged before returning.
pub async fn listing_report(client: &PokedexClient) -> Result<String, PkdxError> {
    let listing = client.fetch_listing().await.inspect_err(|e| {
        error!(error = %e, "Listing fetch failed");
    })?;
    Ok(ListingReport(&listing).to_string())
}

/// Resolves one item for `pkdx show`. Failures are logged before returning.
pub async fn detail_report(
    client: &PokedexClient,
    identifier: &str,
    locales: &LocalePreference,
) -> Result<String, PkdxError> {
    let view = client
        .resolve_detail_with(identifier, locales)
        .await
        .inspect_err(|e| error!(%identifier, error = %e, "Detail fetch failed"))?;
    Ok(DetailReport(&view).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_api::{
        ItemRecord, MoveSlot, NamedResource, PokedexError, Sprites, StatSlot, TypeSlot,
    };

    fn named(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: String::new(),
        }
    }

    fn pikachu() -> DetailViewModel {
        DetailViewModel {
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
                    MoveSlot { action: named("thunder-punch") },
                ],
                stats: vec![StatSlot {
                    base_stat: 90,
                    stat: named("speed"),
                }],
                species: named("pikachu"),
                sprites: Sprites::default(),
            },
            description: "A mouse Pokémon.".to_string(),
        }
    }

    #[test]
    fn test_format_detail() {
        let text = DetailReport(&pikachu()).to_string();

        assert!(text.starts_with("Pikachu #025\n"));
        assert!(text.contains("Types: Electric (yellow-400)"));
        assert!(text.contains("Weight: 60 kg"));
        assert!(text.contains("Height: 0.4 m"));
        assert!(text.contains("Moves:  Mega-punch, Pay-day\n"));
        assert!(!text.contains("Thunder-punch"));
        assert!(text.contains("A mouse Pokémon."));
        assert!(text.contains(&format!("Speed            090 {}{}", "█".repeat(18), "·".repeat(12))));
    }

    #[test]
    fn test_format_listing() {
        let listing = vec![
            ItemSummary {
                name: "bulbasaur".to_string(),
                url: "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
            },
            ItemSummary {
                name: "ivysaur".to_string(),
                url: "https://pokeapi.co/api/v2/pokemon/2/".to_string(),
            },
        ];
        assert_eq!(
            ListingReport(&listing).to_string(),
            "#001 Bulbasaur\n#002 Ivysaur\n"
        );
        assert_eq!(ListingReport(&[]).to_string(), "");
    }

    #[tokio::test]
    async fn test_detail_report_wraps_api_error() {
        let client = PokedexClient::with_base_url("http://127.0.0.1:9");
        let err = detail_report(&client, "  ", &LocalePreference::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PkdxError::Pokedex(PokedexError::InvalidIdentifier(_))
        ));
    }

    #[tokio::test]
    async fn test_listing_report_wraps_api_error() {
        let client = PokedexClient::with_base_url("not a url");
        let err = listing_report(&client).await.unwrap_err();
        assert!(matches!(err, PkdxError::Pokedex(PokedexError::InvalidBaseUrl(_))));
        assert!(err.to_string().starts_with("Pokedex error: Invalid base URL"));
    }
}
