//! Sidebar navigation config
//!
//! The config ships embedded in the binary as `assets/navigation.json`.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{ShellError, ShellResult};

static EMBEDDED_NAVIGATION: &str = include_str!("../assets/navigation.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavSectionConfig {
    pub title: String,
    pub items: Vec<NavItem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SidebarConfig {
    pub brand: String,
    pub sections: Vec<NavSectionConfig>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            brand: "Dashboard".to_string(),
            sections: vec![NavSectionConfig {
                title: "Workspace".to_string(),
                items: vec![NavItem {
                    label: "Overview".to_string(),
                    href: "/dashboard".to_string(),
                }],
            }],
        }
    }
}

impl SidebarConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json(text: &str) -> ShellResult<Self> {
        let config: SidebarConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the embedded config, falling back to the default when it is unusable
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_NAVIGATION) {
            Ok(config) => {
                tracing::debug!(
                    "Loaded navigation config: {} sections, {} links",
                    config.sections.len(),
                    config.items().count()
                );
                config
            }
            Err(e) => {
                tracing::warn!("Falling back to default navigation: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> ShellResult<()> {
        if self.sections.is_empty() {
            return Err(ShellError::NoSections);
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.items.is_empty() {
                return Err(ShellError::EmptySection(section.title.clone()));
            }
            for item in &section.items {
                if !is_local_path(&item.href) {
                    return Err(ShellError::RelativeHref {
                        label: item.label.clone(),
                        href: item.href.clone(),
                    });
                }
                if !seen.insert(item.href.as_str()) {
                    return Err(ShellError::DuplicateHref(item.href.clone()));
                }
            }
        }
        Ok(())
    }

    /// All links across every section, in display order
    pub fn items(&self) -> impl Iterator<Item = &NavItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }
}

/// Same-origin absolute path; `//host` is protocol-relative and leaves the site
fn is_local_path(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}
