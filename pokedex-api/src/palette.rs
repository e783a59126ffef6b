//! Type colors, keyed by type name.

/// A named palette color with its RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToken {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

impl ColorToken {
    const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self { name, rgb: (r, g, b) }
    }
}

pub const GREEN_500: ColorToken = ColorToken::new("green-500", 0x22, 0xc5, 0x5e);
pub const RED_500: ColorToken = ColorToken::new("red-500", 0xef, 0x44, 0x44);
pub const BLUE_500: ColorToken = ColorToken::new("blue-500", 0x3b, 0x82, 0xf6);
pub const LIME_500: ColorToken = ColorToken::new("lime-500", 0x84, 0xcc, 0x16);
pub const PURPLE_500: ColorToken = ColorToken::new("purple-500", 0xa8, 0x55, 0xf7);
pub const YELLOW_400: ColorToken = ColorToken::new("yellow-400", 0xfa, 0xcc, 0x15);
pub const GRAY_400: ColorToken = ColorToken::new("gray-400", 0x9c, 0xa3, 0xaf);
pub const AMBER_700: ColorToken = ColorToken::new("amber-700", 0xb4, 0x53, 0x09);
pub const PINK_400: ColorToken = ColorToken::new("pink-400", 0xf4, 0x72, 0xb6);
pub const PINK_600: ColorToken = ColorToken::new("pink-600", 0xdb, 0x27, 0x77);
pub const ORANGE_700: ColorToken = ColorToken::new("orange-700", 0xc2, 0x41, 0x0c);
pub const YELLOW_700: ColorToken = ColorToken::new("yellow-700", 0xa1, 0x62, 0x07);
pub const INDIGO_700: ColorToken = ColorToken::new("indigo-700", 0x43, 0x38, 0xca);
pub const CYAN_300: ColorToken = ColorToken::new("cyan-300", 0x67, 0xe8, 0xf9);
pub const INDIGO_900: ColorToken = ColorToken::new("indigo-900", 0x31, 0x2e, 0x81);
pub const GRAY_500: ColorToken = ColorToken::new("gray-500", 0x6b, 0x72, 0x80);
pub const ZINC_800: ColorToken = ColorToken::new("zinc-800", 0x27, 0x27, 0x2a);
pub const SKY_400: ColorToken = ColorToken::new("sky-400", 0x38, 0xbd, 0xf8);
/// Fill of every stat bar.
pub const GREEN_400: ColorToken = ColorToken::new("green-400", 0x4a, 0xde, 0x80);

pub const DEFAULT_PRIMARY: ColorToken = GRAY_500;
pub const DEFAULT_BADGE: ColorToken = GRAY_400;

pub fn type_color(type_name: &str) -> Option<ColorToken> {
    let color = match type_name {
        "grass" => GREEN_500,
        "fire" => RED_500,
        "water" => BLUE_500,
        "bug" => LIME_500,
        "poison" => PURPLE_500,
        "electric" => YELLOW_400,
        "normal" => GRAY_400,
        "ground" => AMBER_700,
        "fairy" => PINK_400,
        "psychic" => PINK_600,
        "fighting" => ORANGE_700,
        "rock" => YELLOW_700,
        "ghost" => INDIGO_700,
        "ice" => CYAN_300,
        "dragon" => INDIGO_900,
        "steel" => GRAY_500,
        "dark" => ZINC_800,
        "flying" => SKY_400,
        _ => return None,
    };
    Some(color)
}

/// Header and heading color for an item whose first type is `type_name`.
pub fn primary_color(type_name: Option<&str>) -> ColorToken {
    type_name.and_then(type_color).unwrap_or(DEFAULT_PRIMARY)
}

/// Color of a single type badge.
pub fn badge_color(type_name: &str) -> ColorToken {
    type_color(type_name).unwrap_or(DEFAULT_BADGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(type_color("electric"), Some(YELLOW_400));
        assert_eq!(type_color("grass"), Some(GREEN_500));
        assert_eq!(type_color("dark"), Some(ZINC_800));
    }

    #[test]
    fn test_unknown_type_defaults() {
        assert_eq!(type_color("stellar"), None);
        assert_eq!(primary_color(Some("stellar")), GRAY_500);
        assert_eq!(primary_color(None), GRAY_500);
        assert_eq!(badge_color("stellar"), GRAY_400);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(type_color("Fire"), None);
    }
}
