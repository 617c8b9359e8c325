//! Navigation config: user-customizable tab orders, persistence, and the
//! shared handle the runtime core reads them through.
//!
//! Covers:
//! - `NavConfig` (phone tab order + sidebar entries) with serde defaults
//! - `load` / `save` (YAML file I/O with atomic write, defaults on first run)
//! - XDG-compliant path helpers (`config_path`, `config_dir`)
//! - `sanitize` (repairs duplicate or degenerate orders in place)
//! - `SharedNavConfig` (explicitly injected handle with a version counter so
//!   consumers can cheaply detect updates, with no ambient global state)

use crate::error::ConfigError;
use crate::types::{SidebarEntry, Tab};
use anyhow::Result;
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default phone tab order for new installs.
fn default_phone_tabs() -> Vec<Tab> {
    vec![
        Tab::Home,
        Tab::Explore,
        Tab::Compose,
        Tab::Notifications,
        Tab::Profile,
    ]
}

/// Default sidebar entries for new installs.
fn default_sidebar_entries() -> Vec<SidebarEntry> {
    vec![
        SidebarEntry::new(Tab::Home),
        SidebarEntry::new(Tab::Explore),
        SidebarEntry::new(Tab::Local),
        SidebarEntry::new(Tab::Notifications),
        SidebarEntry::new(Tab::Messages),
        SidebarEntry::new(Tab::Profile),
        SidebarEntry::new(Tab::Compose),
    ]
}

/// User-customizable navigation configuration.
///
/// Owns the two persisted tab orders: the phone (compact) tab bar order and
/// the richer sidebar entry list. The runtime core consumes the resulting
/// orders; customization UI writes them through [`SharedNavConfig::update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Ordered tabs shown in the compact tab bar
    #[serde(default = "default_phone_tabs")]
    pub phone_tabs: Vec<Tab>,
    /// Ordered entries shown in the sidebar
    #[serde(default = "default_sidebar_entries")]
    pub sidebar_entries: Vec<SidebarEntry>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            phone_tabs: default_phone_tabs(),
            sidebar_entries: default_sidebar_entries(),
        }
    }
}

impl NavConfig {
    /// Load navigation config from the default path, or create it with
    /// defaults on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load navigation config from a specific file path.
    ///
    /// Missing file → defaults are written back and returned. Unparseable
    /// file → the error is surfaced; callers may fall back to
    /// `NavConfig::default()` if they prefer recovery over reporting.
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Navigation config path: {:?}", path);

        if path.exists() {
            let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
            let mut config: NavConfig =
                serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?;
            if config.sanitize() {
                log::warn!("Navigation config at {:?} required repairs", path);
            }
            Ok(config)
        } else {
            log::info!("Navigation config not found, creating default at {:?}", path);
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save navigation config to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save navigation config to a specific file path.
    ///
    /// Refuses to persist a config with no selectable phone tab; callers
    /// should `sanitize()` first.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if !self.phone_tabs.iter().any(|t| !t.is_command()) {
            return Err(ConfigError::Validation(
                "phone tab order has no selectable entry".to_string(),
            )
            .into());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Parse)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::Io)?;
        fs::rename(&temp_path, path).map_err(ConfigError::Io)?;

        Ok(())
    }

    /// Get the navigation config file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("navigation.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("starling")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/starling
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("starling")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Repair duplicate or degenerate tab orders in place.
    ///
    /// - Duplicate tabs are removed, first occurrence wins. With `Compose`
    ///   the only command variant, identity dedupe also enforces the
    ///   at-most-one-command-tab invariant.
    /// - An order left with no selectable (non-command) entry is reset to the
    ///   install default for that surface.
    ///
    /// Returns `true` if anything was repaired. Each repair is logged.
    pub fn sanitize(&mut self) -> bool {
        let mut repaired = false;

        let before = self.phone_tabs.len();
        dedupe_by_key(&mut self.phone_tabs, |t| *t);
        if self.phone_tabs.len() != before {
            log::warn!(
                "Removed {} duplicate phone tab(s) from navigation config",
                before - self.phone_tabs.len()
            );
            repaired = true;
        }
        if !self.phone_tabs.iter().any(|t| !t.is_command()) {
            log::warn!("Phone tab order has no selectable entry; restoring defaults");
            self.phone_tabs = default_phone_tabs();
            repaired = true;
        }

        let before = self.sidebar_entries.len();
        dedupe_by_key(&mut self.sidebar_entries, |e| e.tab);
        if self.sidebar_entries.len() != before {
            log::warn!(
                "Removed {} duplicate sidebar entr(ies) from navigation config",
                before - self.sidebar_entries.len()
            );
            repaired = true;
        }
        if !self.sidebar_entries.iter().any(|e| !e.tab.is_command()) {
            log::warn!("Sidebar order has no selectable entry; restoring defaults");
            self.sidebar_entries = default_sidebar_entries();
            repaired = true;
        }

        repaired
    }

    /// The sidebar entries mapped down to plain tabs, in order.
    pub fn sidebar_tabs(&self) -> Vec<Tab> {
        self.sidebar_entries.iter().map(|e| e.tab).collect()
    }
}

/// Remove later duplicates (by key), keeping the first occurrence of each.
fn dedupe_by_key<T, K: PartialEq>(items: &mut Vec<T>, key: impl Fn(&T) -> K) {
    let mut seen: Vec<K> = Vec::with_capacity(items.len());
    items.retain(|item| {
        let k = key(item);
        if seen.contains(&k) {
            false
        } else {
            seen.push(k);
            true
        }
    });
}

/// Versioned payload behind the shared handle.
struct VersionedNavConfig {
    config: NavConfig,
    version: u64,
}

/// Explicitly injected, shared navigation config handle.
///
/// Passed into the tab-set provider at construction instead of being read
/// from ambient global state. Every mutation goes through [`update`] (or
/// [`replace`]) and bumps a monotonically increasing version, so consumers
/// that cache derived data can compare [`version`] instead of diffing the
/// config itself.
///
/// [`update`]: SharedNavConfig::update
/// [`replace`]: SharedNavConfig::replace
/// [`version`]: SharedNavConfig::version
#[derive(Clone)]
pub struct SharedNavConfig {
    inner: Arc<RwLock<VersionedNavConfig>>,
}

impl SharedNavConfig {
    /// Wrap a config in a shared handle. The version counter starts at 0.
    pub fn new(config: NavConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(VersionedNavConfig { config, version: 0 })),
        }
    }

    /// Current version. Bumped by every `update` / `replace`.
    pub fn version(&self) -> u64 {
        self.inner.read().version
    }

    /// Read access to the current config.
    pub fn read(&self) -> MappedRwLockReadGuard<'_, NavConfig> {
        RwLockReadGuard::map(self.inner.read(), |v| &v.config)
    }

    /// Consistent (config, version) pair taken under one read guard, for
    /// consumers that cache data derived from a specific version.
    pub fn snapshot(&self) -> (NavConfig, u64) {
        let guard = self.inner.read();
        (guard.config.clone(), guard.version)
    }

    /// Apply a mutation and bump the version.
    ///
    /// The mutated config is sanitized before the write guard is released, so
    /// readers never observe a degenerate order.
    ///
    /// The closure runs under the write lock and must not call back into this
    /// handle (`read`, `version`, a nested `update`): parking_lot locks are
    /// not reentrant, so re-entry deadlocks.
    pub fn update(&self, f: impl FnOnce(&mut NavConfig)) {
        let mut guard = self.inner.write();
        f(&mut guard.config);
        guard.config.sanitize();
        guard.version += 1;
        log::debug!("Navigation config updated (version {})", guard.version);
    }

    /// Replace the whole config and bump the version.
    pub fn replace(&self, config: NavConfig) {
        self.update(|c| *c = config);
    }
}

impl Default for SharedNavConfig {
    fn default() -> Self {
        Self::new(NavConfig::default())
    }
}
