//! Writing records out as Foundry import JSON.
//!
//! # Example
//!
//! ```
//! use rulebook_import::export::{ExportShape, JsonConfig, JsonExporter};
//! use rulebook_import::parse_spells;
//!
//! let records = parse_spells("<h3>LUZ</h3><p>Brilha.</p>");
//! let exporter = JsonExporter::with_config(JsonConfig {
//!     shape: ExportShape::List,
//!     pretty: false,
//! });
//! let json = exporter.to_string(&records)?;
//!
//! assert!(json.starts_with("[{"));
//! # Ok::<(), rulebook_import::Error>(())
//! ```

mod json;

pub use json::{ExportShape, JsonConfig, JsonExporter};
