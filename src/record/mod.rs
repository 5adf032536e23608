//! Foundry VTT item records.
//!
//! The shapes here mirror what Foundry's "Import Data" dialog expects for the
//! forbidden-lands system. Field names and ordering follow the platform's own
//! exports, so serialized records can be diffed against a real export.

mod builder;
mod stamp;

pub use builder::RecordBuilder;
pub use stamp::{ID_LENGTH, SeededStamps, StampSource, SystemStamps, generate_id};

use serde::Serialize;
use serde_json::{Map, Value};

/// Which kind of item a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Talent,
    Spell,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Talent => "talent",
            ItemKind::Spell => "spell",
        }
    }

    /// Icon Foundry shows until the user picks one.
    pub fn default_img(&self) -> &'static str {
        match self {
            ItemKind::Talent => "icons/svg/mystery-man.svg",
            ItemKind::Spell => "icons/svg/item-bag.svg",
        }
    }

    /// Name used when the heading has no text.
    pub fn placeholder_name(&self) -> &'static str {
        match self {
            ItemKind::Talent => "Talento Sem Nome",
            ItemKind::Spell => "Magia Sem Nome",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "talent" | "talents" | "talento" => Ok(ItemKind::Talent),
            "spell" | "spells" | "magia" => Ok(ItemKind::Spell),
            other => Err(format!("unknown item kind: {other}")),
        }
    }
}

/// `system` block of a talent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentSystem {
    pub roll_modifiers: Map<String, Value>,
    pub category: String,
    pub rank: String,
    pub description: String,
    #[serde(rename = "type")]
    pub talent_type: String,
}

impl TalentSystem {
    /// Talent fields with the rulebook's constants and the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            roll_modifiers: Map::new(),
            category: "general".to_string(),
            rank: "1".to_string(),
            description: description.into(),
            talent_type: "profession".to_string(),
        }
    }
}

/// `system` block of a spell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellSystem {
    pub spell_type: String,
    pub rank: String,
    pub range: String,
    pub duration: String,
    pub ingredient: String,
    pub description: String,
}

impl Default for SpellSystem {
    fn default() -> Self {
        Self {
            spell_type: "SPELL.SPELL".to_string(),
            rank: "1".to_string(),
            range: "Ao Alcance Das Mãos".to_string(),
            duration: "Imediato".to_string(),
            ingredient: String::new(),
            description: String::new(),
        }
    }
}

/// Kind-specific fields of a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItemSystem {
    Talent(TalentSystem),
    Spell(SpellSystem),
}

impl ItemSystem {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemSystem::Talent(_) => ItemKind::Talent,
            ItemSystem::Spell(_) => ItemKind::Spell,
        }
    }

    pub fn rank(&self) -> &str {
        match self {
            ItemSystem::Talent(t) => &t.rank,
            ItemSystem::Spell(s) => &s.rank,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ItemSystem::Talent(t) => &t.description,
            ItemSystem::Spell(s) => &s.description,
        }
    }

    pub fn as_spell(&self) -> Option<&SpellSystem> {
        match self {
            ItemSystem::Spell(s) => Some(s),
            ItemSystem::Talent(_) => None,
        }
    }

    pub fn as_talent(&self) -> Option<&TalentSystem> {
        match self {
            ItemSystem::Talent(t) => Some(t),
            ItemSystem::Spell(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSource {
    pub world_id: String,
    pub uuid: String,
    pub core_version: String,
    pub system_id: String,
    pub system_version: String,
}

/// The `_stats` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub compendium_source: Option<String>,
    pub duplicate_source: Option<String>,
    pub export_source: ExportSource,
    pub core_version: String,
    pub system_id: String,
    pub system_version: String,
    pub created_time: i64,
    pub modified_time: i64,
    pub last_modified_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Ownership {
    pub default: u8,
}

/// One importable item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord {
    pub folder: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub img: String,
    pub system: ItemSystem,
    pub effects: Vec<Value>,
    pub flags: Map<String, Value>,
    #[serde(rename = "_stats")]
    pub stats: Stats,
    pub ownership: Ownership,
}
