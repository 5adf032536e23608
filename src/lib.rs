//! # rulebook-import
//!
//! Turns talents and spells copied out of a Forbidden Lands rulebook page
//! into item JSON that Foundry VTT can import.
//!
//! ## Features
//!
//! - One record per `<h3>` heading, in document order
//! - Talent descriptions keep rank lists (minus decorative bullets and
//!   inline styles) and bold the designer's comments
//! - Spell metadata (category, range, duration, ingredient) is read from the
//!   bullet list under the title, with rulebook defaults for anything missing
//! - Plain-text fallback for talents copied without markup
//!
//! ## Quick Start
//!
//! ```
//! use rulebook_import::{parse_spells, parse_talents};
//!
//! let spells = parse_spells(
//!     "<h3>MÃOS QUE CURAM</h3>\
//!      <ul><li>✥ <strong>CATEGORIA:</strong> 2</li></ul>\
//!      <p>Você pode curar dano.</p>",
//! );
//! assert_eq!(spells[0].name, "MÃOS QUE CURAM");
//! assert_eq!(spells[0].system.rank(), "2");
//!
//! let talents = parse_talents("FÚRIA\nVocê grita.");
//! assert_eq!(talents[0].system.description(), "<p>Você grita.</p>");
//! ```
//!
//! ## Reproducible output
//!
//! Ids and timestamps come from a [`StampSource`](record::StampSource).
//! Swap in a seeded one to get byte-identical exports:
//!
//! ```
//! use rulebook_import::{Converter, ItemKind};
//! use rulebook_import::record::SeededStamps;
//!
//! let html = "<h3>LUZ</h3><p>Brilha.</p>";
//! let a = Converter::new().with_stamps(SeededStamps::new(1, 0)).convert(html, ItemKind::Spell);
//! let b = Converter::new().with_stamps(SeededStamps::new(1, 0)).convert(html, ItemKind::Spell);
//! assert_eq!(a, b);
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod export;
pub mod parse;
pub mod record;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{ConvertConfig, PlatformConfig};
pub use error::{Error, Result};
pub use export::{ExportShape, JsonConfig, JsonExporter};
pub use parse::Converter;
pub use record::{ExportRecord, ItemKind, ItemSystem, SpellSystem, TalentSystem};
pub use util::{decode_text, extract_meta_charset};

/// Convert talent markup (or plain text) with default settings.
pub fn parse_talents(input: &str) -> Vec<ExportRecord> {
    Converter::new().talents(input)
}

/// Convert spell markup with default settings. Plain text yields nothing.
pub fn parse_spells(input: &str) -> Vec<ExportRecord> {
    Converter::new().spells(input)
}
