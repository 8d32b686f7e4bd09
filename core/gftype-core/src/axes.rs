//! The closed registry of recognized variation-axis tags
//!
//! Variation axes are the secret dials hidden inside variable fonts:
//! 3-4 letter codes that let one font file stretch, slant and thicken
//! itself on demand. Google Fonts only ships a known set of them, so we
//! keep a fixed table here rather than trusting whatever a description
//! file claims. Anything outside the table is reported and dropped.

/// How a recognized axis is interpreted and rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpec {
    /// The registered (lowercase) or vendor (uppercase) tag.
    pub tag: &'static str,
    /// Declared bounds are divided by this before rendering. Axes whose
    /// natural granularity is hundredths carry 100 here.
    pub scale: f64,
    /// Whether the axis permits negative bounds. Signed axes render their
    /// absolute bounds bracketed so the sign stays visible in the type.
    pub signed: bool,
}

/// The weight axis gets special treatment: it feeds the semantic weight
/// classification instead of the per-font axis union.
pub const WEIGHT_AXIS: &str = "wght";

/// Every axis tag gftype recognizes. Registered axes first, vendor axes
/// after, matching the set used across the Google Fonts collection.
pub const RECOGNIZED_AXES: &[AxisSpec] = &[
    AxisSpec { tag: "wght", scale: 1.0, signed: false },
    AxisSpec { tag: "wdth", scale: 1.0, signed: false },
    AxisSpec { tag: "opsz", scale: 1.0, signed: false },
    AxisSpec { tag: "slnt", scale: 1.0, signed: true },
    AxisSpec { tag: "ital", scale: 100.0, signed: false },
    AxisSpec { tag: "GRAD", scale: 1.0, signed: true },
    AxisSpec { tag: "CASL", scale: 1.0, signed: false },
    AxisSpec { tag: "CRSV", scale: 1.0, signed: false },
    AxisSpec { tag: "FILL", scale: 1.0, signed: false },
    AxisSpec { tag: "MONO", scale: 1.0, signed: false },
    AxisSpec { tag: "SOFT", scale: 1.0, signed: false },
    AxisSpec { tag: "WONK", scale: 1.0, signed: false },
    AxisSpec { tag: "XOPQ", scale: 1.0, signed: false },
    AxisSpec { tag: "XTRA", scale: 1.0, signed: false },
    AxisSpec { tag: "YOPQ", scale: 1.0, signed: false },
    AxisSpec { tag: "YTAS", scale: 1.0, signed: false },
    AxisSpec { tag: "YTDE", scale: 1.0, signed: true },
    AxisSpec { tag: "YTFI", scale: 1.0, signed: false },
    AxisSpec { tag: "YTLC", scale: 1.0, signed: false },
    AxisSpec { tag: "YTUC", scale: 1.0, signed: false },
];

/// Look up a tag in the registry. `None` means the tag is unrecognized
/// and the caller should report and drop it.
pub fn axis_spec(tag: &str) -> Option<&'static AxisSpec> {
    RECOGNIZED_AXES.iter().find(|spec| spec.tag == tag)
}

#[cfg(test)]
mod tests {
    use super::{axis_spec, WEIGHT_AXIS};

    #[test]
    fn recognizes_registered_and_vendor_tags() {
        assert!(axis_spec("wght").is_some());
        assert!(axis_spec("opsz").is_some());
        assert!(axis_spec("CASL").is_some());
        assert!(axis_spec("XXXX").is_none());
        assert!(axis_spec("").is_none());
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!(axis_spec("WGHT").is_none());
        assert!(axis_spec("casl").is_none());
    }

    #[test]
    fn slant_is_signed_and_ital_scales() {
        let slnt = axis_spec("slnt").expect("slnt");
        assert!(slnt.signed);

        let ital = axis_spec("ital").expect("ital");
        assert_eq!(ital.scale, 100.0);
    }

    #[test]
    fn weight_axis_is_in_registry() {
        assert!(axis_spec(WEIGHT_AXIS).is_some());
    }
}
