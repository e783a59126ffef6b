use serde::Deserialize;

/// A `{name, url}` pair, the API's generic reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One catalog entry. `url` points at the full record.
pub type ItemSummary = NamedResource;

impl NamedResource {
    /// Numeric id taken from the last path segment of `url`.
    pub fn id(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}

/// Body of the catalog list call. Only the first page is ever used.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<ItemSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub action: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

/// Full record of one catalog item.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    pub id: u32,
    pub name: String,
    pub types: Vec<TypeSlot>,
    /// Hectograms as reported by the API.
    pub weight: u32,
    /// Decimetres as reported by the API.
    pub height: u32,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    pub species: NamedResource,
    #[serde(default)]
    pub sprites: Sprites,
}

impl ItemRecord {
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(|t| t.kind.name.as_str())
    }

    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites.other.official_artwork.front_default.as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// Secondary record holding the localized descriptions of an item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeciesRecord {
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}
