//! Spell extraction.
//!
//! Rulebook spells open with one bullet list of `LABEL: value` facts right
//! under the title, followed by prose. Lists are read as metadata and never
//! reach the description; paragraphs are kept with their inline markup.

use super::segment::ItemBlock;
use crate::config::ConvertConfig;
use crate::dom::{MarkupTree, SerializeFilter, inner_html};
use crate::record::SpellSystem;

/// Decorative bullet the rulebook puts in front of every metadata line.
const BULLET: char = '✥';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetaField {
    Rank,
    Range,
    Duration,
    Ingredient,
}

/// Label keywords in match priority order.
const META_LABELS: &[(&str, MetaField)] = &[
    ("CATEGORIA", MetaField::Rank),
    ("ALCANCE", MetaField::Range),
    ("DURAÇÃO", MetaField::Duration),
    ("INGREDIENTE", MetaField::Ingredient),
];

/// Build the spell fields for the block that starts at `heading`.
pub fn extract<T: MarkupTree>(tree: &T, heading: T::Node, config: &ConvertConfig) -> SpellSystem {
    let filter = SerializeFilter::new().drop_attributes(&["style"]);
    let mut spell = SpellSystem::default();

    for node in ItemBlock::new(tree, heading, &config.heading_tag) {
        if tree.has_tag(node, "ul") {
            for li in tree.descendants_by_tag(node, "li") {
                apply_meta_line(&mut spell, &tree.text_content(li));
            }
        } else if tree.has_tag(node, "p") {
            if tree.text_content(node).trim().is_empty() {
                continue;
            }
            spell.description.push_str("<p>");
            spell.description.push_str(&inner_html(tree, node, &filter));
            spell.description.push_str("</p>");
        } else {
            log::trace!("spell: skipping <{}>", tree.tag_name(node).unwrap_or_default());
        }
    }

    spell
}

/// Classify one metadata line and store its value.
fn apply_meta_line(spell: &mut SpellSystem, line: &str) {
    let clean = line.replacen(BULLET, "", 1);
    let clean = clean.trim();

    let Some(field) = classify(clean) else {
        log::debug!("spell: unrecognized metadata line {clean:?}");
        return;
    };

    let value = clean
        .split_once(':')
        .map(|(_, value)| value.trim())
        .unwrap_or_default()
        .to_string();

    match field {
        MetaField::Rank if value.is_empty() => spell.rank = "1".to_string(),
        MetaField::Rank => spell.rank = value,
        MetaField::Range => spell.range = value,
        MetaField::Duration => spell.duration = value,
        MetaField::Ingredient => spell.ingredient = value,
    }
}

fn classify(line: &str) -> Option<MetaField> {
    let upper = line.to_uppercase();
    META_LABELS
        .iter()
        .find(|(label, _)| upper.contains(label))
        .map(|&(_, field)| field)
}
