//! Per-value format templates
//!
//! The export file format is "each value rendered through one caller-supplied
//! template". Templates use the printf notation numerical tooling already
//! speaks (`"%10.6f"`, `"%.3e"`, `"%g"`), so format strings written for the
//! original environment keep working unchanged.
//!
//! # Design Philosophy
//!
//! Templates are parsed **once**, when an export is configured, then applied
//! per scalar. Parsing is deliberately lenient: the exporter does not
//! validate templates, so anything that is not a recognizable conversion
//! directive renders as literal text instead of failing the export. A
//! template is expected to contain exactly one directive; what a
//! multi-directive template produces is the caller's problem (the second
//! directive comes out literally).
//!
//! # Supported directives
//!
//! `%[flags][width][.precision]conv` with:
//!
//! - `conv`: `f`, `F` (fixed), `e`, `E` (scientific), `g`, `G` (general)
//! - flags: `-` (left-justify), `+` (force sign), ` ` (space sign),
//!   `0` (zero-pad)
//! - `%%` renders a literal `%`
//!
//! # Quick Start
//!
//! ```rust
//! use matwrite_rs::format::ValueFormat;
//!
//! let format = ValueFormat::parse("%10.6f");
//! assert_eq!(format.apply(1.5), "  1.500000");
//!
//! let tagged = ValueFormat::parse("c=%.2f;");
//! assert_eq!(tagged.apply(0.125), "c=0.12;");
//! ```

pub mod template;

pub use template::ValueFormat;
