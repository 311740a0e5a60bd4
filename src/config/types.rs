use serde::Deserialize;
use std::fmt;

/// Token overrides read from `tokens.toml`.
///
/// Every table and every field is optional; anything missing falls back to the
/// built-in token tables.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub colors: ColorsConfig,
    #[serde(default)]
    pub sizes: SizesConfig,
    #[serde(default)]
    pub typography: TypographyConfig,
    #[serde(default)]
    pub breakpoints: BreakpointsConfig,
}

/// Color palette in hex format (#RRGGBB or #RRGGBBAA)
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ColorsConfig {
    /// Brand color, default button fill
    #[serde(default = "default_primary")]
    pub primary: String,
    /// Text on primary fills
    #[serde(default = "default_on_primary")]
    pub on_primary: String,
    /// Secondary button fill
    #[serde(default = "default_secondary")]
    pub secondary: String,
    /// Destructive actions
    #[serde(default = "default_danger")]
    pub danger: String,
    /// Confirmations
    #[serde(default = "default_success")]
    pub success: String,
    /// Card background
    #[serde(default = "default_surface")]
    pub surface: String,
    /// Page background
    #[serde(default = "default_background")]
    pub background: String,
    /// Primary text color
    #[serde(default = "default_text")]
    pub text: String,
    /// Secondary text color
    #[serde(default = "default_text_muted")]
    pub text_muted: String,
    /// Divider rule color
    #[serde(default = "default_divider")]
    pub divider: String,
    /// Card drop shadow color (with alpha)
    #[serde(default = "default_shadow")]
    pub shadow: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            on_primary: default_on_primary(),
            secondary: default_secondary(),
            danger: default_danger(),
            success: default_success(),
            surface: default_surface(),
            background: default_background(),
            text: default_text(),
            text_muted: default_text_muted(),
            divider: default_divider(),
            shadow: default_shadow(),
        }
    }
}

impl ColorsConfig {
    fn entries(&self) -> [(&'static str, &str); 11] {
        [
            ("primary", self.primary.as_str()),
            ("on_primary", self.on_primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("danger", self.danger.as_str()),
            ("success", self.success.as_str()),
            ("surface", self.surface.as_str()),
            ("background", self.background.as_str()),
            ("text", self.text.as_str()),
            ("text_muted", self.text_muted.as_str()),
            ("divider", self.divider.as_str()),
            ("shadow", self.shadow.as_str()),
        ]
    }
}

fn default_primary() -> String {
    "#2563eb".to_string()
}

fn default_on_primary() -> String {
    "#ffffff".to_string()
}

fn default_secondary() -> String {
    "#64748b".to_string()
}

fn default_danger() -> String {
    "#dc2626".to_string()
}

fn default_success() -> String {
    "#16a34a".to_string()
}

fn default_surface() -> String {
    "#ffffff".to_string()
}

fn default_background() -> String {
    "#f8fafc".to_string()
}

fn default_text() -> String {
    "#0f172a".to_string()
}

fn default_text_muted() -> String {
    "#64748b".to_string()
}

fn default_divider() -> String {
    "#e2e8f0".to_string()
}

fn default_shadow() -> String {
    "#0000001a".to_string()
}

/// Shared dimensions in logical pixels
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SizesConfig {
    /// Card corner radius when the card sets none
    #[serde(default = "default_radius_large")]
    pub radius_large: f32,
    /// Inset around card content when the card sets none
    #[serde(default = "default_card_padding")]
    pub card_padding: f32,
    /// Card elevation when the card sets none
    #[serde(default = "default_elevation")]
    pub elevation: f32,
    /// Edge length of the button loading spinner
    #[serde(default = "default_spinner_size")]
    pub spinner_size: f32,
    /// Stroke width of the button loading spinner
    #[serde(default = "default_spinner_stroke")]
    pub spinner_stroke: f32,
    #[serde(default = "default_divider_height")]
    pub divider_height: f32,
    #[serde(default = "default_divider_thickness")]
    pub divider_thickness: f32,
}

impl Default for SizesConfig {
    fn default() -> Self {
        Self {
            radius_large: default_radius_large(),
            card_padding: default_card_padding(),
            elevation: default_elevation(),
            spinner_size: default_spinner_size(),
            spinner_stroke: default_spinner_stroke(),
            divider_height: default_divider_height(),
            divider_thickness: default_divider_thickness(),
        }
    }
}

fn default_radius_large() -> f32 {
    12.0
}

fn default_card_padding() -> f32 {
    16.0
}

fn default_elevation() -> f32 {
    2.0
}

fn default_spinner_size() -> f32 {
    16.0
}

fn default_spinner_stroke() -> f32 {
    2.0
}

fn default_divider_height() -> f32 {
    16.0
}

fn default_divider_thickness() -> f32 {
    1.0
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TypographyConfig {
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Body text size; heading sizes scale from it
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
        }
    }
}

fn default_font_family() -> String {
    "Inter".to_string()
}

fn default_font_size() -> f32 {
    14.0
}

/// Viewport widths at which responsive gaps switch tier
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BreakpointsConfig {
    #[serde(default = "default_tablet")]
    pub tablet: f32,
    #[serde(default = "default_desktop")]
    pub desktop: f32,
}

impl Default for BreakpointsConfig {
    fn default() -> Self {
        Self {
            tablet: default_tablet(),
            desktop: default_desktop(),
        }
    }
}

fn default_tablet() -> f32 {
    600.0
}

fn default_desktop() -> f32 {
    1024.0
}

/// A problem found while validating a config.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    /// Dotted key path, e.g. `colors.primary`
    pub path: String,
    pub message: String,
    /// Errors make the loader discard the file; warnings are only reported.
    pub is_error: bool,
}

impl ConfigIssue {
    fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{} at {}: {}", level, self.path, self.message)
    }
}

impl Config {
    /// Checks the config for values the components cannot use.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (name, value) in self.colors.entries() {
            if parse_hex_color(value).is_none() {
                issues.push(ConfigIssue::error(
                    format!("colors.{}", name),
                    format!("invalid color '{}', expected #RRGGBB or #RRGGBBAA", value),
                ));
            }
        }

        let sizes = &self.sizes;
        let positive = [
            ("sizes.spinner_size", sizes.spinner_size),
            ("sizes.spinner_stroke", sizes.spinner_stroke),
            ("sizes.divider_thickness", sizes.divider_thickness),
            ("typography.font_size", self.typography.font_size),
        ];
        for (path, value) in positive {
            if !(value > 0.0) {
                issues.push(ConfigIssue::error(path, format!("must be > 0, got {}", value)));
            }
        }

        let non_negative = [
            ("sizes.radius_large", sizes.radius_large),
            ("sizes.card_padding", sizes.card_padding),
            ("sizes.elevation", sizes.elevation),
            ("sizes.divider_height", sizes.divider_height),
        ];
        for (path, value) in non_negative {
            if !(value >= 0.0) {
                issues.push(ConfigIssue::error(path, format!("must be >= 0, got {}", value)));
            }
        }

        if sizes.divider_height < sizes.divider_thickness {
            issues.push(ConfigIssue::warning(
                "sizes.divider_height",
                "smaller than divider_thickness; the rule will overflow its box",
            ));
        }

        if self.typography.font_family.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "typography.font_family",
                "empty font family; the host default will be used",
            ));
        }

        let bp = &self.breakpoints;
        if !(bp.tablet > 0.0) {
            issues.push(ConfigIssue::error(
                "breakpoints.tablet",
                format!("must be > 0, got {}", bp.tablet),
            ));
        }
        if !(bp.tablet < bp.desktop) {
            issues.push(ConfigIssue::error(
                "breakpoints",
                format!(
                    "tablet ({}) must be smaller than desktop ({})",
                    bp.tablet, bp.desktop
                ),
            ));
        }

        issues
    }
}

/// Parse a hex color string into RGBA components (0.0-1.0)
pub fn parse_hex_color(hex: &str) -> Option<(f32, f32, f32, f32)> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| -> Option<f32> {
        Some(u8::from_str_radix(hex.get(i..i + 2)?, 16).ok()? as f32 / 255.0)
    };

    match hex.len() {
        6 => Some((channel(0)?, channel(2)?, channel(4)?, 1.0)),
        8 => Some((channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}
