//! Navigation identity types shared between the config layer and the runtime core.

use serde::{Deserialize, Serialize};

// ============================================================================
// Tab
// ============================================================================

/// A destination (or command entry) in the primary navigation surface.
///
/// Each tab carries a stable ordinal used as the raw integer key for scroll
/// signaling; the ordinal never changes once assigned, even if the display
/// order is customized. `Compose` is the single *command tab*: activating it
/// opens the composer instead of switching the visible view, and it can never
/// become the selected tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// Home timeline
    Home,
    /// Trending and search surface
    Explore,
    /// Local instance timeline
    Local,
    /// Notifications list
    Notifications,
    /// Direct message conversations
    Messages,
    /// The signed-in account's own profile
    Profile,
    /// Command tab: opens the post composer rather than switching views
    Compose,
}

impl Tab {
    /// Stable ordinal for this tab, used as the scroll-pulse key.
    pub fn ordinal(&self) -> u8 {
        match self {
            Tab::Home => 0,
            Tab::Explore => 1,
            Tab::Local => 2,
            Tab::Notifications => 3,
            Tab::Messages => 4,
            Tab::Profile => 5,
            Tab::Compose => 6,
        }
    }

    /// Reverse lookup from a stable ordinal.
    pub fn from_ordinal(ordinal: u8) -> Option<Tab> {
        Tab::all().iter().copied().find(|t| t.ordinal() == ordinal)
    }

    /// Whether this tab triggers an action instead of switching views.
    pub fn is_command(&self) -> bool {
        matches!(self, Tab::Compose)
    }

    /// Display title for UI
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Explore => "Explore",
            Tab::Local => "Local",
            Tab::Notifications => "Notifications",
            Tab::Messages => "Messages",
            Tab::Profile => "Profile",
            Tab::Compose => "Compose",
        }
    }

    /// Symbol name for UI icon lookup
    pub fn symbol(&self) -> &'static str {
        match self {
            Tab::Home => "house",
            Tab::Explore => "magnifyingglass",
            Tab::Local => "building.2",
            Tab::Notifications => "bell",
            Tab::Messages => "tray",
            Tab::Profile => "person.crop.circle",
            Tab::Compose => "square.and.pencil",
        }
    }

    /// All tabs in ordinal order, for iteration.
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Home,
            Tab::Explore,
            Tab::Local,
            Tab::Notifications,
            Tab::Messages,
            Tab::Profile,
            Tab::Compose,
        ]
    }
}

// ============================================================================
// Sidebar entries
// ============================================================================

/// A sidebar navigation entry: a tab plus optional presentation overrides.
///
/// The sidebar order is richer than the phone tab order: entries can rename
/// or re-icon a destination without affecting its identity. The runtime core
/// maps entries down to plain [`Tab`] values; the overrides are consumed by
/// the sidebar renderer only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarEntry {
    /// The destination this entry navigates to
    pub tab: Tab,
    /// Optional label override (defaults to `tab.title()`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Optional symbol override (defaults to `tab.symbol()`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl SidebarEntry {
    /// Plain entry with no overrides.
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            label: None,
            symbol: None,
        }
    }

    /// Effective label, honoring the override.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.tab.title())
    }

    /// Effective symbol, honoring the override.
    pub fn symbol(&self) -> &str {
        self.symbol.as_deref().unwrap_or_else(|| self.tab.symbol())
    }
}

impl From<Tab> for SidebarEntry {
    fn from(tab: Tab) -> Self {
        SidebarEntry::new(tab)
    }
}

// ============================================================================
// Compose visibility
// ============================================================================

/// Default visibility applied to a new post when the composer opens.
///
/// Read from user preferences at command-tab activation time and passed to the
/// composer dispatch; this crate does not interpret the value further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComposeVisibility {
    /// Visible to everyone (default)
    #[default]
    Public,
    /// Public but excluded from public timelines
    Unlisted,
    /// Followers only
    FollowersOnly,
    /// Mentioned accounts only
    Direct,
}

impl ComposeVisibility {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ComposeVisibility::Public => "Public",
            ComposeVisibility::Unlisted => "Unlisted",
            ComposeVisibility::FollowersOnly => "Followers Only",
            ComposeVisibility::Direct => "Direct",
        }
    }

    /// All available visibilities for UI iteration
    pub fn all() -> &'static [ComposeVisibility] {
        &[
            ComposeVisibility::Public,
            ComposeVisibility::Unlisted,
            ComposeVisibility::FollowersOnly,
            ComposeVisibility::Direct,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_stable_and_reversible() {
        for &tab in Tab::all() {
            assert_eq!(
                Tab::from_ordinal(tab.ordinal()),
                Some(tab),
                "ordinal round-trip failed for {:?}",
                tab
            );
        }
        assert_eq!(Tab::from_ordinal(200), None);
    }

    #[test]
    fn compose_is_the_only_command_tab() {
        let commands: Vec<Tab> = Tab::all()
            .iter()
            .copied()
            .filter(|t| t.is_command())
            .collect();
        assert_eq!(commands, vec![Tab::Compose]);
    }

    #[test]
    fn tab_serializes_snake_case() {
        let yaml = serde_yaml_ng::to_string(&Tab::Notifications).expect("serialize");
        assert_eq!(yaml.trim(), "notifications");
        let back: Tab = serde_yaml_ng::from_str("notifications").expect("deserialize");
        assert_eq!(back, Tab::Notifications);
    }

    #[test]
    fn sidebar_entry_overrides_fall_back_to_tab() {
        let plain = SidebarEntry::new(Tab::Local);
        assert_eq!(plain.label(), "Local");
        assert_eq!(plain.symbol(), "building.2");

        let renamed = SidebarEntry {
            tab: Tab::Local,
            label: Some("My Instance".to_string()),
            symbol: Some("server.rack".to_string()),
        };
        assert_eq!(renamed.label(), "My Instance");
        assert_eq!(renamed.symbol(), "server.rack");
    }

    #[test]
    fn sidebar_entry_omits_empty_overrides_in_yaml() {
        let yaml = serde_yaml_ng::to_string(&SidebarEntry::new(Tab::Home)).expect("serialize");
        assert!(!yaml.contains("label"), "unexpected label field: {yaml}");
        assert!(!yaml.contains("symbol"), "unexpected symbol field: {yaml}");
    }
}
