//! Assembles extracted fields into complete records.

use serde_json::Map;

use super::{ExportRecord, ExportSource, ItemSystem, Ownership, StampSource, Stats};
use crate::config::PlatformConfig;

/// Builds [`ExportRecord`]s, filling in everything Foundry requires that the
/// rulebook text does not carry.
///
/// # Example
///
/// ```
/// use rulebook_import::config::PlatformConfig;
/// use rulebook_import::record::{ItemSystem, RecordBuilder, SeededStamps, TalentSystem};
///
/// let platform = PlatformConfig::default();
/// let mut builder = RecordBuilder::new(&platform, SeededStamps::new(1, 1_700_000_000_000));
/// let record = builder.build("CAMINHO DA FERA", ItemSystem::Talent(TalentSystem::new("")));
///
/// assert_eq!(record.img, "icons/svg/mystery-man.svg");
/// assert_eq!(record.stats.created_time, 1_700_000_000_000);
/// assert!(record.stats.export_source.uuid.starts_with("Item."));
/// ```
pub struct RecordBuilder<'a, S> {
    platform: &'a PlatformConfig,
    stamps: S,
}

impl<'a, S: StampSource> RecordBuilder<'a, S> {
    pub fn new(platform: &'a PlatformConfig, stamps: S) -> Self {
        Self { platform, stamps }
    }

    /// Build one record. The record's type and icon follow `system`.
    pub fn build(&mut self, name: impl Into<String>, system: ItemSystem) -> ExportRecord {
        let kind = system.kind();
        let uuid = format!("Item.{}", self.stamps.next_id());
        let now = self.stamps.now_millis();
        let platform = self.platform;

        ExportRecord {
            folder: None,
            name: name.into(),
            kind,
            img: kind.default_img().to_string(),
            system,
            effects: Vec::new(),
            flags: Map::new(),
            stats: Stats {
                compendium_source: None,
                duplicate_source: None,
                export_source: ExportSource {
                    world_id: platform.world_id.clone(),
                    uuid,
                    core_version: platform.core_version.clone(),
                    system_id: platform.system_id.clone(),
                    system_version: platform.system_version.clone(),
                },
                core_version: platform.core_version.clone(),
                system_id: platform.system_id.clone(),
                system_version: platform.system_version.clone(),
                created_time: now,
                modified_time: now,
                last_modified_by: self.stamps.next_id(),
            },
            ownership: Ownership::default(),
        }
    }
}
