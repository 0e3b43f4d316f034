//! # gbson
//!
//! `gbson` converts GenBank flat-file records, the column-aligned
//! plain-text format used to exchange annotated sequence records, into
//! GBSON: a normalized JSON document with typed header metadata, a
//! feature forest and the raw residue string.
//!
//! The crate is a single-pass, best-effort parser. A record either yields
//! a complete document or, when the mandatory `FEATURES`/`ORIGIN` section
//! markers are missing, no document at all. Per-feature anomalies such as
//! unrecognized table lines or malformed location expressions are logged
//! and skipped, never fatal.
//!
//! ## Structure
//!
//! * [`data_structs`]: the output data model. [`Range`] covers the
//!   location algebra (spans, `complement(...)`, `join(...)`), and the
//!   [`Gbson`] document carries its GBSON-shaped serde serialization.
//! * [`parse`]: the parsing pipeline, from record splitting through
//!   header and reference extraction, feature-table tokenization and
//!   recursive-descent location parsing to feature-forest assembly.
//! * [`utils`]: shared text helpers.
//!
//! ## Usage
//!
//! ```no_run
//! use gbson::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let text = std::fs::read_to_string("record.gb")?;
//!     let document = Gbson::from_genbank(&text)?;
//!
//!     println!(
//!         "{} ({} bp, {} top-level features)",
//!         document.meta.locus,
//!         document.meta.length,
//!         document.features.len()
//!     );
//!     println!("{}", document.to_json_pretty()?);
//!     Ok(())
//! }
//! ```
//!
//! Multi-record files are out of scope: split them before calling
//! [`parse::parse_record`]. The parser holds no process-wide state, so
//! independent records can be converted concurrently.

pub mod data_structs;
pub mod parse;
pub mod prelude;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;
