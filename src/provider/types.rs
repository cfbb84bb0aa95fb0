//! Concept domain types and provider errors.
//!
//! The structured brief is parsed strictly: unknown, missing, or mistyped
//! fields are a [`ProviderError`], never a partially filled concept. The
//! provider either hands back a fully populated brief or fails.

use serde::Deserialize;

/// Errors produced by concept provider operations.
///
/// The `Display` text doubles as the user-facing message shown on the trend
/// screen, so variants keep their wording short and free of internals.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the provider failed in transport.
    #[error("provider request failed: {0}")]
    Request(String),

    /// The provider returned a non-success HTTP status.
    #[error("provider returned status {status}")]
    Status { status: u16, body: String },

    /// A provider response body could not be deserialized.
    #[error("provider response parse failed: {0}")]
    Parse(String),

    /// The trend request produced no usable topic text.
    #[error("provider returned an empty topic")]
    EmptyTopic,

    /// The structured brief deserialized but violated the content contract.
    #[error("concept brief is incomplete: {0}")]
    IncompleteBrief(String),

    /// The logo request returned zero images.
    #[error("logo generation returned no images")]
    NoImages,
}

/// A single color swatch in the brand palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteColor {
    pub name: String,
    pub hex: String,
}

/// Typography recommendation for the brand.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub description: String,
}

/// Visual identity for the generated concept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct BrandIdentity {
    pub style: String,
    pub color_palette: Vec<PaletteColor>,
    pub typography: Typography,
}

/// The generated SaaS business brief.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ConceptBrief {
    pub name: String,
    pub motive: String,
    pub brand_identity: BrandIdentity,
    pub brief: String,
}

impl ConceptBrief {
    /// Fail-closed content validation on top of the serde shape check.
    ///
    /// Every field must be non-empty and palette entries must carry a
    /// `#rrggbb` color, otherwise the whole brief is rejected.
    pub fn validate(&self) -> Result<(), ProviderError> {
        fn require(field: &str, value: &str) -> Result<(), ProviderError> {
            if value.trim().is_empty() {
                return Err(ProviderError::IncompleteBrief(format!("empty field: {field}")));
            }
            Ok(())
        }

        require("name", &self.name)?;
        require("motive", &self.motive)?;
        require("brief", &self.brief)?;
        require("brandIdentity.style", &self.brand_identity.style)?;
        require(
            "brandIdentity.typography.fontFamily",
            &self.brand_identity.typography.font_family,
        )?;
        require(
            "brandIdentity.typography.description",
            &self.brand_identity.typography.description,
        )?;

        if self.brand_identity.color_palette.is_empty() {
            return Err(ProviderError::IncompleteBrief(
                "empty field: brandIdentity.colorPalette".to_string(),
            ));
        }
        for color in &self.brand_identity.color_palette {
            require("colorPalette.name", &color.name)?;
            if !is_hex_color(&color.hex) {
                return Err(ProviderError::IncompleteBrief(format!(
                    "malformed hex color: {:?}",
                    color.hex
                )));
            }
        }
        Ok(())
    }
}

fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// A fully generated concept: the brief plus its logo image.
///
/// Constructed only from a successful generation call, so the logo bytes are
/// always present alongside the brief.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptResult {
    pub brief: ConceptBrief,
    pub logo_png: Vec<u8>,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn brief_json() -> &'static str {
        r##"{
            "name": "Fintra",
            "motive": "Money, understood.",
            "brandIdentity": {
                "style": "Minimalist and Modern",
                "colorPalette": [
                    {"name": "Primary Blue", "hex": "#1d4ed8"},
                    {"name": "Slate", "hex": "#334155"}
                ],
                "typography": {
                    "fontFamily": "Inter",
                    "description": "Clean geometric sans-serif."
                }
            },
            "brief": "A personal finance tracker that explains itself."
        }"##
    }

    #[test]
    fn parses_complete_brief() {
        let brief: ConceptBrief = serde_json::from_str(brief_json()).unwrap();
        assert_eq!(brief.name, "Fintra");
        assert_eq!(brief.brand_identity.color_palette.len(), 2);
        assert_eq!(brief.brand_identity.typography.font_family, "Inter");
        brief.validate().unwrap();
    }

    #[test]
    fn rejects_missing_field() {
        let json = r#"{"name": "Fintra", "motive": "m", "brief": "b"}"#;
        assert!(serde_json::from_str::<ConceptBrief>(json).is_err());
    }

    #[test]
    fn rejects_unknown_field() {
        let json = brief_json().replacen("\"name\"", "\"advert\": \"buy now\", \"name\"", 1);
        assert!(serde_json::from_str::<ConceptBrief>(&json).is_err());
    }

    #[test]
    fn rejects_mistyped_palette() {
        let json = brief_json().replace(
            r##"{"name": "Primary Blue", "hex": "#1d4ed8"}"##,
            r##""#1d4ed8""##,
        );
        assert!(serde_json::from_str::<ConceptBrief>(&json).is_err());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let mut brief: ConceptBrief = serde_json::from_str(brief_json()).unwrap();
        brief.name = "  ".to_string();
        assert!(matches!(brief.validate(), Err(ProviderError::IncompleteBrief(_))));
    }

    #[test]
    fn validate_rejects_bad_hex() {
        let mut brief: ConceptBrief = serde_json::from_str(brief_json()).unwrap();
        brief.brand_identity.color_palette[0].hex = "1d4ed8".to_string();
        assert!(brief.validate().is_err());
        brief.brand_identity.color_palette[0].hex = "#1d4e".to_string();
        assert!(brief.validate().is_err());
        brief.brand_identity.color_palette[0].hex = "#1d4ed8".to_string();
        assert!(brief.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_palette() {
        let mut brief: ConceptBrief = serde_json::from_str(brief_json()).unwrap();
        brief.brand_identity.color_palette.clear();
        assert!(brief.validate().is_err());
    }
}
