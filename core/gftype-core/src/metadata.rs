//! Description-file parsing and the font record model

use std::collections::BTreeMap;

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::axes::axis_spec;

/// Weight used when a `fonts { ... }` block carries no parseable weight.
/// Kept in the record verbatim; the declaration emitter skips it.
pub const WEIGHT_SENTINEL: i32 = -1;

/// Style of one static variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "italic")]
    Italic,
    /// Sentinel for a variant block whose style did not match.
    #[serde(rename = "")]
    Unknown,
}

/// One declared (style, weight) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub style: Style,
    pub weight: i32,
}

/// Inclusive vendor-declared bounds of one variation axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Everything we remember about one font family. Built once per family
/// directory with a valid description file, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontRecord {
    pub name: String,
    pub variants: Vec<Variant>,
    #[serde(rename = "hasNormal")]
    pub has_normal: bool,
    #[serde(rename = "hasItalic")]
    pub has_italic: bool,
    pub axes: BTreeMap<String, AxisRange>,
}

impl FontRecord {
    /// The declared weight-axis range, if the family is variable in weight.
    pub fn weight_axis(&self) -> Option<&AxisRange> {
        self.axes.get(crate::axes::WEIGHT_AXIS)
    }
}

/// Pattern-match extractor for the brace-delimited description schema.
///
/// The schema is flat (no nested braces inside `fonts` or `axes` blocks),
/// so `[^}]*` spans are a complete grammar for it.
pub struct MetadataParser {
    name_re: Regex,
    fonts_re: Regex,
    style_re: Regex,
    weight_re: Regex,
    axes_re: Regex,
    tag_re: Regex,
    min_re: Regex,
    max_re: Regex,
}

impl MetadataParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            name_re: compile(r#"name\s*:\s*"([A-Za-z0-9_ ]+)""#)?,
            fonts_re: compile(r"fonts\s*\{[^}]*\}")?,
            style_re: compile(r#"style\s*:\s*"(normal|italic)""#)?,
            weight_re: compile(r"weight\s*:\s*([0-9]+)\b")?,
            axes_re: compile(r"axes\s*\{[^}]*\}")?,
            tag_re: compile(r#"tag\s*:\s*"([A-Za-z]{3,4})""#)?,
            min_re: compile(r"min_value\s*:\s*(-?[0-9]+(?:\.[0-9]+)?)")?,
            max_re: compile(r"max_value\s*:\s*(-?[0-9]+(?:\.[0-9]+)?)")?,
        })
    }

    /// Extract one [`FontRecord`] from description-file text. `origin` is
    /// the human-readable source (e.g. `roboto/METADATA.pb`) used in
    /// errors and diagnostics.
    ///
    /// A missing name or a complete absence of `fonts` blocks is fatal;
    /// missing `axes` blocks simply mean the family is not variable.
    pub fn parse(&self, text: &str, origin: &str) -> Result<FontRecord> {
        let name = self
            .name_re
            .captures(text)
            .map(|c| c[1].to_string())
            .ok_or_else(|| anyhow!("{origin} does not contain a name"))?;

        let variants: Vec<Variant> = self
            .fonts_re
            .find_iter(text)
            .map(|block| self.parse_variant(block.as_str(), origin))
            .collect();
        if variants.is_empty() {
            return Err(anyhow!("{origin} does not contain variants"));
        }

        let mut axes = BTreeMap::new();
        for block in self.axes_re.find_iter(text) {
            if let Some((tag, range)) = self.parse_axis(block.as_str(), origin) {
                axes.insert(tag, range);
            }
        }

        let has_normal = variants.iter().any(|v| v.style == Style::Normal);
        let has_italic = variants.iter().any(|v| v.style == Style::Italic);

        Ok(FontRecord {
            name,
            variants,
            has_normal,
            has_italic,
            axes,
        })
    }

    fn parse_variant(&self, block: &str, origin: &str) -> Variant {
        let style = match self.style_re.captures(block).map(|c| c[1].to_string()) {
            Some(s) if s == "normal" => Style::Normal,
            Some(_) => Style::Italic,
            None => Style::Unknown,
        };

        let weight = self
            .weight_re
            .captures(block)
            .and_then(|c| c[1].parse().ok())
            .unwrap_or(WEIGHT_SENTINEL);

        if style == Style::Unknown || weight == WEIGHT_SENTINEL {
            log::debug!("{origin}: variant block with unmatched style/weight, keeping sentinel");
        }

        Variant { style, weight }
    }

    fn parse_axis(&self, block: &str, origin: &str) -> Option<(String, AxisRange)> {
        let tag = match self.tag_re.captures(block) {
            Some(c) => c[1].to_string(),
            None => {
                log::warn!("{origin}: axes block without a tag, dropping");
                return None;
            }
        };

        if axis_spec(&tag).is_none() {
            log::warn!("{origin}: unrecognized axis tag {tag:?}, dropping");
            return None;
        }

        let min = self.min_re.captures(block).and_then(|c| c[1].parse().ok());
        let max = self.max_re.captures(block).and_then(|c| c[1].parse().ok());
        match (min, max) {
            (Some(min), Some(max)) => Some((tag, AxisRange { min, max })),
            _ => {
                log::warn!("{origin}: axis {tag} is missing min_value/max_value, dropping");
                None
            }
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).with_context(|| format!("compiling pattern {pattern}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn parser() -> MetadataParser {
        MetadataParser::new().expect("parser")
    }

    #[test]
    fn extracts_name_variants_and_flags() {
        let text = indoc! {r#"
            name: "Roboto"
            designer: "Christian Robertson"
            fonts {
              style: "normal"
              weight: 400
            }
            fonts {
              style: "italic"
              weight: 400
            }
        "#};

        let record = parser().parse(text, "roboto/METADATA.pb").expect("parse");

        assert_eq!(record.name, "Roboto");
        assert_eq!(
            record.variants,
            vec![
                Variant { style: Style::Normal, weight: 400 },
                Variant { style: Style::Italic, weight: 400 },
            ]
        );
        assert!(record.has_normal);
        assert!(record.has_italic);
        assert!(record.axes.is_empty());
    }

    #[test]
    fn missing_name_is_fatal() {
        let text = r#"fonts { style: "normal" weight: 400 }"#;
        let err = parser().parse(text, "x/METADATA.pb").unwrap_err();
        assert!(err.to_string().contains("does not contain a name"));
    }

    #[test]
    fn missing_variants_is_fatal() {
        let text = r#"name: "Ghost""#;
        let err = parser().parse(text, "ghost/METADATA.pb").unwrap_err();
        assert!(err.to_string().contains("does not contain variants"));
    }

    #[test]
    fn unmatched_style_and_weight_keep_sentinels() {
        let text = indoc! {r#"
            name: "Odd"
            fonts {
              style: "oblique"
              weight: heavy
            }
        "#};

        let record = parser().parse(text, "odd/METADATA.pb").expect("parse");

        assert_eq!(
            record.variants,
            vec![Variant { style: Style::Unknown, weight: WEIGHT_SENTINEL }]
        );
        assert!(!record.has_normal);
        assert!(!record.has_italic);
    }

    #[test]
    fn recognized_axes_are_collected() {
        let text = indoc! {r#"
            name: "Flexible"
            fonts {
              style: "normal"
              weight: 400
            }
            axes {
              tag: "wght"
              min_value: 100.0
              max_value: 900.0
            }
            axes {
              tag: "slnt"
              min_value: -10.0
              max_value: 0.0
            }
        "#};

        let record = parser().parse(text, "flexible/METADATA.pb").expect("parse");

        assert_eq!(record.axes.len(), 2);
        assert_eq!(record.axes["wght"], AxisRange { min: 100.0, max: 900.0 });
        assert_eq!(record.axes["slnt"], AxisRange { min: -10.0, max: 0.0 });
        assert_eq!(record.weight_axis(), Some(&AxisRange { min: 100.0, max: 900.0 }));
    }

    #[test]
    fn unrecognized_axis_is_dropped_but_others_survive() {
        let text = indoc! {r#"
            name: "Mixed"
            fonts {
              style: "normal"
              weight: 400
            }
            axes {
              tag: "ZZZZ"
              min_value: 0.0
              max_value: 10.0
            }
            axes {
              tag: "opsz"
              min_value: 8.0
              max_value: 144.0
            }
        "#};

        let record = parser().parse(text, "mixed/METADATA.pb").expect("parse");

        assert_eq!(record.axes.len(), 1);
        assert!(record.axes.contains_key("opsz"));
    }

    #[test]
    fn axis_without_bounds_is_dropped() {
        let text = indoc! {r#"
            name: "Partial"
            fonts {
              style: "normal"
              weight: 400
            }
            axes {
              tag: "wdth"
              min_value: 75.0
            }
        "#};

        let record = parser().parse(text, "partial/METADATA.pb").expect("parse");
        assert!(record.axes.is_empty());
    }

    #[test]
    fn style_serializes_to_schema_strings() {
        let json = serde_json::to_string(&Variant { style: Style::Unknown, weight: -1 })
            .expect("serialize");
        assert_eq!(json, r#"{"style":"","weight":-1}"#);
    }
}
