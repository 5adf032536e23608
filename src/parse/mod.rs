//! Rulebook text to Foundry records.
//!
//! The pipeline is: decide between markup and plain text, parse markup into
//! an [`ArenaDom`](crate::dom::ArenaDom), find every heading, walk each
//! heading's block with the talent or spell extractor, and hand the fields
//! to a [`RecordBuilder`].
//!
//! Conversion never fails. Input that yields nothing returns an empty list
//! and it is up to the caller to tell the user.

mod plain;
mod segment;
mod spell;
mod talent;

pub use plain::{PlainBlock, split_blocks};
pub use segment::{ItemBlock, find_headings, heading_name, looks_like_markup};

use log::debug;

use crate::config::ConvertConfig;
use crate::dom::{MarkupTree, parse_html};
use crate::record::{
    ExportRecord, ItemKind, ItemSystem, RecordBuilder, StampSource, SystemStamps, TalentSystem,
};

/// Converts rulebook text into records.
///
/// Holds the configuration and the source of ids and timestamps. A converter
/// shares nothing with other converters, so separate threads can each run
/// their own.
///
/// # Example
///
/// ```
/// use rulebook_import::{Converter, ItemKind};
/// use rulebook_import::record::SeededStamps;
///
/// let mut converter = Converter::new().with_stamps(SeededStamps::new(42, 0));
/// let records = converter.convert("<h3>LUZ</h3><p>Brilha.</p>", ItemKind::Spell);
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].name, "LUZ");
/// ```
#[derive(Debug, Clone)]
pub struct Converter<S = SystemStamps> {
    config: ConvertConfig,
    stamps: S,
}

impl Converter<SystemStamps> {
    pub fn new() -> Self {
        Self::with_config(ConvertConfig::default())
    }

    pub fn with_config(config: ConvertConfig) -> Self {
        Self {
            config,
            stamps: SystemStamps,
        }
    }
}

impl Default for Converter<SystemStamps> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StampSource> Converter<S> {
    /// Replace the id and clock source.
    pub fn with_stamps<T: StampSource>(self, stamps: T) -> Converter<T> {
        Converter {
            config: self.config,
            stamps,
        }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert `input` into records of the given kind, in document order.
    pub fn convert(&mut self, input: &str, kind: ItemKind) -> Vec<ExportRecord> {
        let config = &self.config;
        let mut builder = RecordBuilder::new(&config.platform, &mut self.stamps);

        if !looks_like_markup(input, &config.heading_tag) {
            return match kind {
                ItemKind::Talent => {
                    let blocks = split_blocks(input);
                    debug!("plain-text input, {} talent block(s)", blocks.len());
                    blocks
                        .into_iter()
                        .map(|block| {
                            let system = TalentSystem::new(block.description);
                            builder.build(block.name, ItemSystem::Talent(system))
                        })
                        .collect()
                }
                ItemKind::Spell => {
                    debug!("spell input is not markup, nothing to convert");
                    Vec::new()
                }
            };
        }

        let dom = parse_html(input.trim());
        let headings = find_headings(&dom, &config.heading_tag);
        debug!(
            "found {} <{}> heading(s) for {kind} conversion",
            headings.len(),
            config.heading_tag
        );

        headings
            .into_iter()
            .map(|heading| {
                let name = heading_name(&dom, heading, kind);
                let system = extract_system(&dom, heading, kind, config);
                builder.build(name, system)
            })
            .collect()
    }

    pub fn talents(&mut self, input: &str) -> Vec<ExportRecord> {
        self.convert(input, ItemKind::Talent)
    }

    pub fn spells(&mut self, input: &str) -> Vec<ExportRecord> {
        self.convert(input, ItemKind::Spell)
    }
}

/// Run the extractor for `kind` over one heading's block.
pub fn extract_system<T: MarkupTree>(
    tree: &T,
    heading: T::Node,
    kind: ItemKind,
    config: &ConvertConfig,
) -> ItemSystem {
    match kind {
        ItemKind::Talent => ItemSystem::Talent(talent::extract(tree, heading, config)),
        ItemKind::Spell => ItemSystem::Spell(spell::extract(tree, heading, config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SeededStamps;

    fn converter() -> Converter<SeededStamps> {
        Converter::new().with_stamps(SeededStamps::new(9, 1_700_000_000_000))
    }

    #[test]
    fn test_record_per_heading_in_order() {
        let html = "<div><h3>UM</h3><p>a</p><h3>DOIS</h3><p>b</p><h3>TRÊS</h3></div>";
        let names: Vec<_> = converter()
            .talents(html)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["UM", "DOIS", "TRÊS"]);
    }

    #[test]
    fn test_kind_matches_mode() {
        let html = "<h3>X</h3><p>y</p>";
        assert_eq!(converter().talents(html)[0].kind, ItemKind::Talent);
        assert_eq!(converter().spells(html)[0].kind, ItemKind::Spell);
    }

    #[test]
    fn test_plain_text_only_for_talents() {
        let text = "CAMINHO DA FERA\nVocê tem um animal.";
        assert_eq!(converter().talents(text).len(), 1);
        assert!(converter().spells(text).is_empty());
    }

    #[test]
    fn test_markup_without_headings_is_empty() {
        assert!(converter().talents("<p>só texto</p>").is_empty());
        assert!(converter().spells("<p>só texto</p>").is_empty());
    }

    #[test]
    fn test_custom_heading_tag() {
        let config = ConvertConfig::new().with_heading_tag("h2");
        let mut converter =
            Converter::with_config(config).with_stamps(SeededStamps::new(1, 0));
        let records = converter.spells("<h2>A</h2><h3>não é título</h3><p>x</p><h2>B</h2>");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].system.description(), "<p>x</p>");
    }

    #[test]
    fn test_seeded_converters_agree() {
        let html = "<h3>A</h3><p>x</p><h3>B</h3>";
        assert_eq!(converter().talents(html), converter().talents(html));
    }
}
