//! Conversion settings.

/// Platform strings stamped into every record's `_stats` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    pub world_id: String,
    pub system_id: String,
    pub core_version: String,
    pub system_version: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            world_id: "forbidden-lands".to_string(),
            system_id: "forbidden-lands".to_string(),
            core_version: "13.350".to_string(),
            system_version: "13.0.5".to_string(),
        }
    }
}

impl PlatformConfig {
    pub fn with_world_id(mut self, world_id: impl Into<String>) -> Self {
        self.world_id = world_id.into();
        self
    }

    pub fn with_core_version(mut self, version: impl Into<String>) -> Self {
        self.core_version = version.into();
        self
    }

    pub fn with_system_version(mut self, version: impl Into<String>) -> Self {
        self.system_version = version.into();
        self
    }
}

/// How input documents are segmented and cleaned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Element that opens each item (`h3` in the rulebook exports).
    pub heading_tag: String,
    /// Decorative element stripped from talent list items.
    pub marker_tag: String,
    pub platform: PlatformConfig,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            heading_tag: "h3".to_string(),
            marker_tag: "span".to_string(),
            platform: PlatformConfig::default(),
        }
    }
}

impl ConvertConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different heading element. Case is normalized to lowercase to
    /// match parsed tag names.
    pub fn with_heading_tag(mut self, tag: impl Into<String>) -> Self {
        self.heading_tag = tag.into().to_ascii_lowercase();
        self
    }

    pub fn with_marker_tag(mut self, tag: impl Into<String>) -> Self {
        self.marker_tag = tag.into().to_ascii_lowercase();
        self
    }

    pub fn with_platform(mut self, platform: PlatformConfig) -> Self {
        self.platform = platform;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConvertConfig::default();
        assert_eq!(config.heading_tag, "h3");
        assert_eq!(config.marker_tag, "span");
        assert_eq!(config.platform.system_id, "forbidden-lands");
        assert_eq!(config.platform.core_version, "13.350");
    }

    #[test]
    fn test_heading_tag_lowercased() {
        let config = ConvertConfig::new().with_heading_tag("H2");
        assert_eq!(config.heading_tag, "h2");
    }
}
