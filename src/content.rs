//! Per-layout chrome directives and the per-tab content dispatch table.
//!
//! The state machine stays platform-agnostic; everything presentation-shaped
//! lives here. [`NavChrome`] tells the host how to dress the navigation
//! surface for the resolved layout, and [`ContentRegistry`] maps each tab to
//! the builder that produces its content view. The core never renders
//! anything itself.

use crate::config::Tab;
use crate::layout::LayoutMode;
use crate::selection::SelectionSnapshot;
use crate::tab_set::TabSet;
use crate::traits::Preferences;
use std::collections::HashMap;

/// Where the host should place the primary navigation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavPlacement {
    /// Tab bar anchored to the bottom edge
    BottomBar,
    /// Persistent sidebar on the leading edge
    LeadingSidebar,
    /// Floating tab bar for immersive platforms
    FloatingBar,
}

/// Presentation directives for the navigation surface, derived from the
/// layout mode and user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavChrome {
    /// Placement of the navigation surface
    pub placement: NavPlacement,
    /// Whether tab entries render text labels alongside their icons
    pub show_labels: bool,
    /// Whether to reserve a secondary content column next to the sidebar
    pub secondary_column: bool,
}

impl NavChrome {
    /// Derive chrome directives for a layout.
    ///
    /// The sidebar renders as an icon rail regardless of the label
    /// preference (its entries carry their own labels), and it is the only
    /// placement that can host a secondary column.
    pub fn resolve(layout: LayoutMode, prefs: &impl Preferences) -> NavChrome {
        match layout {
            LayoutMode::TabBar => NavChrome {
                placement: NavPlacement::BottomBar,
                show_labels: prefs.show_tab_labels(),
                secondary_column: false,
            },
            LayoutMode::Sidebar => NavChrome {
                placement: NavPlacement::LeadingSidebar,
                show_labels: false,
                secondary_column: prefs.show_secondary_column(),
            },
            LayoutMode::ImmersiveTabBar => NavChrome {
                placement: NavPlacement::FloatingBar,
                show_labels: prefs.show_tab_labels(),
                secondary_column: false,
            },
        }
    }
}

/// Builder producing the content view for one tab, given the current
/// selection snapshot.
pub type ContentBuilder<V> = Box<dyn Fn(&SelectionSnapshot) -> V>;

/// Dispatch table from tab to content builder.
///
/// Hosts register one builder per selectable tab; the command tab has no
/// content of its own (activating it dispatches the composer instead). `V`
/// is whatever the host's view layer produces.
pub struct ContentRegistry<V> {
    builders: HashMap<Tab, ContentBuilder<V>>,
}

impl<V> ContentRegistry<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Register the builder for a tab, replacing any previous one.
    pub fn register(&mut self, tab: Tab, builder: impl Fn(&SelectionSnapshot) -> V + 'static) {
        if tab.is_command() {
            log::warn!(
                "Registering content for command tab {}; it will never be shown",
                tab.title()
            );
        }
        self.builders.insert(tab, Box::new(builder));
    }

    /// Build the content for a tab, supplying the shared selection snapshot.
    ///
    /// Returns `None` when no builder is registered so hosts can show a
    /// placeholder instead of crashing on a configuration gap.
    pub fn build(&self, tab: Tab, snapshot: &SelectionSnapshot) -> Option<V> {
        let builder = self.builders.get(&tab)?;
        Some(builder(snapshot))
    }

    /// Whether a builder is registered for the tab.
    pub fn covers(&self, tab: Tab) -> bool {
        self.builders.contains_key(&tab)
    }

    /// Selectable tabs of the given set with no registered builder.
    ///
    /// Empty means every tab the user can select has content. The command
    /// tab never needs one.
    pub fn missing_for(&self, set: &TabSet) -> Vec<Tab> {
        set.iter()
            .filter(|tab| !tab.is_command() && !self.covers(*tab))
            .collect()
    }
}

impl<V> Default for ContentRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}
