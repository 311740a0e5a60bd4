//! Size variants and the style table they index.

use serde::{Deserialize, Serialize};

use super::EdgeInsets;

/// Numeric font weight, 100 (thin) to 900 (black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const SEMIBOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Preset sizes for sized components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeVariant {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeVariant {
    pub const ALL: [SizeVariant; 3] = [Self::Small, Self::Medium, Self::Large];

    fn row(self) -> usize {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
        }
    }

    /// Style attributes for this size.
    pub fn style(self) -> StyleAttributes {
        STYLE_TABLE[self.row()]
    }
}

/// Visual parameters derived from a [`SizeVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleAttributes {
    pub padding: EdgeInsets,
    pub corner_radius: f32,
    pub font_size: f32,
    pub font_weight: FontWeight,
}

/// One row per [`SizeVariant`], in declaration order.
const STYLE_TABLE: [StyleAttributes; 3] = [
    StyleAttributes {
        padding: EdgeInsets::symmetric(12.0, 6.0),
        corner_radius: 6.0,
        font_size: 12.0,
        font_weight: FontWeight::MEDIUM,
    },
    StyleAttributes {
        padding: EdgeInsets::symmetric(16.0, 10.0),
        corner_radius: 8.0,
        font_size: 14.0,
        font_weight: FontWeight::SEMIBOLD,
    },
    StyleAttributes {
        padding: EdgeInsets::symmetric(24.0, 14.0),
        corner_radius: 12.0,
        font_size: 16.0,
        font_weight: FontWeight::SEMIBOLD,
    },
];

/// Looks up the style attributes for a size variant.
pub fn resolve(variant: SizeVariant) -> StyleAttributes {
    variant.style()
}

/// Resolves one attribute: explicit override, then derived value, then fallback.
pub fn pick<T>(explicit: Option<T>, derived: Option<T>, fallback: T) -> T {
    explicit.or(derived).unwrap_or(fallback)
}
