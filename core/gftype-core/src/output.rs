//! JSON rendering and atomic file writing

use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tempfile::NamedTempFile;

use crate::metadata::FontRecord;

/// Render the record list as prettified JSON.
pub fn render_json(records: &[FontRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records as prettified JSON to any writer.
pub fn write_json_pretty(records: &[FontRecord], mut w: impl Write) -> Result<()> {
    w.write_all(render_json(records)?.as_bytes())?;
    Ok(())
}

/// Write `contents` to `path` via a sibling temporary file and an atomic
/// rename, so readers never observe a half-written artifact and a failed
/// run leaves any existing file untouched.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| ".".into());

    let mut tmp = NamedTempFile::new_in(&dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| anyhow!("persisting {}: {}", path.display(), e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{Style, Variant};
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::tempdir;

    fn sample_record() -> FontRecord {
        FontRecord {
            name: "Roboto".to_string(),
            variants: vec![Variant { style: Style::Normal, weight: 400 }],
            has_normal: true,
            has_italic: false,
            axes: BTreeMap::new(),
        }
    }

    #[test]
    fn json_uses_schema_field_names() {
        let json = render_json(&[sample_record()]).expect("render");

        assert!(json.contains("\"hasNormal\": true"));
        assert!(json.contains("\"hasItalic\": false"));
        assert!(json.contains("\"style\": \"normal\""));

        let parsed: Vec<FontRecord> = serde_json::from_str(&json).expect("round trip");
        assert_eq!(parsed, vec![sample_record()]);
    }

    #[test]
    fn writes_pretty_json_array() {
        let mut buf = Vec::new();
        write_json_pretty(&[sample_record()], &mut buf).expect("write");

        let parsed: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert!(parsed.is_array());
    }

    #[test]
    fn atomic_write_replaces_existing_content() {
        let tmp = tempdir().expect("tempdir");
        let target = tmp.path().join("out.json");

        fs::write(&target, b"stale").expect("seed");
        write_atomic(&target, "fresh").expect("write");

        assert_eq!(fs::read_to_string(&target).expect("read"), "fresh");
    }

    #[test]
    fn atomic_write_creates_file_when_absent() {
        let tmp = tempdir().expect("tempdir");
        let target = tmp.path().join("new.ts");

        write_atomic(&target, "content").expect("write");
        assert_eq!(fs::read_to_string(&target).expect("read"), "content");
    }
}
