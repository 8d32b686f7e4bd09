//! TypeScript declaration rendering
//!
//! Turns the scanned records into a declaration module: one name union,
//! one weight union and one axis union per font, and two lookup tables
//! tying font names to their unions. Axis values that a type system
//! cannot truly bound are carried by a `Clamped<Min, Max>` template
//! parameter so the legal range stays visible at the use site.

use crate::axes::{axis_spec, AxisSpec, WEIGHT_AXIS};
use crate::metadata::{AxisRange, FontRecord, WEIGHT_SENTINEL};
use crate::weights::semantic_weights;

const PREAMBLE: &str = "\
// Generated by gftype. Do not edit by hand.

/** Numeric axis parameter; Min/Max document the inclusive vendor bounds. */
type Clamped<Min extends number, Max extends number> = number;
";

/// Render the full declaration module for the given records.
pub fn render_declarations(records: &[FontRecord]) -> String {
    let mut out = String::from(PREAMBLE);
    out.push('\n');
    out.push_str(&render_name_union(records));

    for record in records {
        out.push('\n');
        out.push_str(&render_weight_union(record));
        out.push_str(&render_axis_union(record));
    }

    out.push('\n');
    out.push_str(&render_lookup(records, "GFontWeights", "WeightOf"));
    out.push('\n');
    out.push_str(&render_lookup(records, "GFontAxes", "AxisOf"));
    out
}

/// Union of every font name, five per line.
fn render_name_union(records: &[FontRecord]) -> String {
    if records.is_empty() {
        return "export type GFontName = never;\n".to_string();
    }

    let names: Vec<String> = records.iter().map(|r| quote(&r.name)).collect();
    let lines: Vec<String> = names.chunks(5).map(|chunk| chunk.join(" | ")).collect();
    format!("export type GFontName =\n  {};\n", lines.join(" |\n  "))
}

fn render_weight_union(record: &FontRecord) -> String {
    let mut members: Vec<String> = semantic_weights(record).iter().map(|n| quote(n)).collect();

    let mut seen: Vec<i32> = Vec::new();
    for variant in &record.variants {
        if variant.weight == WEIGHT_SENTINEL {
            log::debug!("{}: skipping sentinel weight in declarations", record.name);
            continue;
        }
        if seen.contains(&variant.weight) {
            continue;
        }
        seen.push(variant.weight);
        members.push(quote(&variant.weight.to_string()));
    }

    if let Some(range) = record.weight_axis() {
        if let Some(spec) = axis_spec(WEIGHT_AXIS) {
            if let Some((lo, hi)) = scaled_bounds(range, spec, &record.name) {
                members.push(format!("`wght${{Clamped<{lo}, {hi}>}}`"));
            }
        }
    }

    format!("type WeightOf{} = {};\n", sanitize(&record.name), union_of(&members))
}

fn render_axis_union(record: &FontRecord) -> String {
    let mut members: Vec<String> = Vec::new();
    if record.has_normal {
        members.push(quote("normal"));
    }
    if record.has_italic {
        members.push(quote("italic"));
    }

    for (tag, range) in &record.axes {
        if tag == WEIGHT_AXIS {
            continue;
        }
        let spec = match axis_spec(tag) {
            Some(spec) => spec,
            None => {
                log::warn!("{}: unrecognized axis tag {tag:?} in record, skipping", record.name);
                continue;
            }
        };
        if let Some(rendered) = render_axis_expr(spec, range, &record.name) {
            members.push(rendered);
        }
    }

    format!("type AxisOf{} = {};\n", sanitize(&record.name), union_of(&members))
}

/// One tag-specific template expression, or `None` for a degenerate range.
fn render_axis_expr(spec: &AxisSpec, range: &AxisRange, name: &str) -> Option<String> {
    let (lo, hi) = scaled_bounds(range, spec, name)?;
    let tag = spec.tag;

    if spec.signed {
        let (a, b) = (lo.abs(), hi.abs());
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        Some(format!("`{tag}[${{Clamped<{a}, {b}>}}]`"))
    } else {
        Some(format!("`{tag}${{Clamped<{lo}, {hi}>}}`"))
    }
}

/// Floor the declared bounds after applying the axis scale. A range that
/// collapses to a single value is reported and dropped.
fn scaled_bounds(range: &AxisRange, spec: &AxisSpec, name: &str) -> Option<(i64, i64)> {
    let lo = (range.min / spec.scale).floor() as i64;
    let hi = (range.max / spec.scale).floor() as i64;
    if lo == hi {
        log::warn!(
            "{name}: degenerate {} range {}..{}, omitting from declarations",
            spec.tag,
            range.min,
            range.max
        );
        return None;
    }
    Some((lo, hi))
}

fn render_lookup(records: &[FontRecord], type_name: &str, prefix: &str) -> String {
    let mut out = format!("export type {type_name} = {{\n");
    for record in records {
        out.push_str(&format!(
            "  {}: {}{};\n",
            quote(&record.name),
            prefix,
            sanitize(&record.name)
        ));
    }
    out.push_str("};\n");
    out
}

fn union_of(members: &[String]) -> String {
    if members.is_empty() {
        "never".to_string()
    } else {
        members.join(" | ")
    }
}

fn quote(value: &str) -> String {
    format!("'{value}'")
}

/// Font names become identifier fragments by collapsing whitespace to `_`.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}
