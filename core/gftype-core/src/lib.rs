/// gftype-core: the patient cataloguer of Google Fonts metadata
///
/// Point it at a checkout of the Google Fonts repository and it reads the
/// `METADATA.pb` description file inside every family directory, remembers
/// each family's name, its style/weight variants and its variable-font
/// axes, and turns the whole collection into two artifacts:
///
/// - a JSON dump of every font record it found, and
/// - a TypeScript declaration module that spells out, per font, exactly
///   which weight names, numeric weights and axis values are legal — so
///   downstream code gets compile-time checking instead of typos.
///
/// ## One pass, three stages
///
/// **Discovery**: list the immediate family directories under each root.
/// Nothing recursive, nothing clever — one level down, sorted by name so
/// every run walks the collection in the same order.
///
/// **Parsing**: pattern-match each description file for its `name`, its
/// `fonts { ... }` variant blocks and its `axes { ... }` blocks. The
/// schema is flat and line-oriented, so a handful of regexes is the whole
/// grammar. A family without a name or without variants stops the run; a
/// family without a description file is logged and left out.
///
/// **Emission**: serialize the records verbatim as JSON, then render the
/// declaration module — a name union, per-font weight and axis unions,
/// and two lookup tables tying names to their unions. Both files are
/// written atomically, so a failed run never leaves half an artifact.
///
/// ## A sample conversation
///
/// ```rust,no_run
/// use std::path::PathBuf;
/// use gftype_core::pipeline::{generate, OutputPaths};
///
/// let roots = vec![PathBuf::from("../google-fonts/ofl")];
/// let paths = OutputPaths {
///     json: PathBuf::from("generated/FontsWithMetaData.json"),
///     declarations: PathBuf::from("generated/gFontInterfaces.ts"),
/// };
///
/// let outcome = generate(&roots, &paths)?;
/// println!(
///     "catalogued {} families ({} without metadata)",
///     outcome.records.len(),
///     outcome.missing.len()
/// );
/// #
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// ## The cast of characters
///
/// - [`metadata::FontRecord`]: the biography of one font family
/// - [`axes::AxisSpec`]: the closed registry of recognized variation axes
/// - [`weights`]: the nine-step weight table and its semantic names
/// - [`declare`]: the TypeScript renderer
/// - [`pipeline`]: the scan → parse → emit wiring, no hidden state
///
/// Everything is synchronous and single-threaded on purpose: this is a
/// one-shot batch transform, and determinism matters more than speed.
pub mod axes;
pub mod declare;
pub mod discovery;
pub mod metadata;
pub mod output;
pub mod pipeline;
pub mod weights;
