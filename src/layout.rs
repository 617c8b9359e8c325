//! Adaptive layout selection for the primary navigation surface.
//!
//! This module centralises the platform/device branching that would otherwise
//! be scattered across the navigation views as inline conditionals. The
//! environment inputs (`DeviceClass`, `SizeClass`, `PlatformCapabilities`)
//! are fed in by the host on window or platform changes; the resolution
//! itself is a pure policy table with no side effects.
//!
//! # Conventions
//!
//! - [`LayoutMode::resolve`] is total: every input combination has a defined
//!   output, and identical inputs always yield the same mode.
//! - Consumers never branch on platform themselves; they match on the
//!   resolved [`LayoutMode`] (or the [`NavChrome`](crate::content::NavChrome)
//!   derived from it).

/// Hardware form factor of the host device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceClass {
    /// Handset-sized device (default)
    #[default]
    Phone,
    /// Tablet-sized device
    Tablet,
    /// Desktop or laptop
    Desktop,
}

impl DeviceClass {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceClass::Phone => "Phone",
            DeviceClass::Tablet => "Tablet",
            DeviceClass::Desktop => "Desktop",
        }
    }

    /// All device classes for iteration
    pub fn all() -> &'static [DeviceClass] {
        &[DeviceClass::Phone, DeviceClass::Tablet, DeviceClass::Desktop]
    }

    /// Returns true for the classes that can host a persistent sidebar.
    pub fn is_tablet_or_desktop(&self) -> bool {
        matches!(self, DeviceClass::Tablet | DeviceClass::Desktop)
    }
}

/// Horizontal size class of the hosting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeClass {
    /// Narrow window (e.g. split view, handset width)
    Compact,
    /// Full-width window (default)
    #[default]
    Regular,
}

impl SizeClass {
    /// All size classes for iteration
    pub fn all() -> &'static [SizeClass] {
        &[SizeClass::Compact, SizeClass::Regular]
    }
}

/// Capability flags describing what the host platform can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlatformCapabilities {
    /// Platform renders navigation as an immersive floating bar
    pub immersive: bool,
    /// Platform supports opening additional windows (composer windows)
    pub multi_window: bool,
    /// Platform never shows a sidebar, regardless of device class
    pub force_tab_bar: bool,
}

impl PlatformCapabilities {
    /// Handset profile: single window, tab bar only.
    pub fn handheld() -> Self {
        Self {
            immersive: false,
            multi_window: false,
            force_tab_bar: true,
        }
    }

    /// Tablet profile: multi-window, sidebar-capable.
    pub fn tablet() -> Self {
        Self {
            immersive: false,
            multi_window: true,
            force_tab_bar: false,
        }
    }

    /// Desktop profile: multi-window, sidebar-capable.
    pub fn desktop() -> Self {
        Self::tablet()
    }

    /// Immersive headset profile: floating bar, multi-window.
    pub fn immersive() -> Self {
        Self {
            immersive: true,
            multi_window: true,
            force_tab_bar: false,
        }
    }
}

/// The chosen adaptive presentation style for primary navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Bottom tab bar
    TabBar,
    /// Persistent leading sidebar
    Sidebar,
    /// Immersive floating tab bar
    ImmersiveTabBar,
}

impl LayoutMode {
    /// Resolve the layout mode for an environment.
    ///
    /// Pure, total policy table, evaluated top-down with first match winning:
    ///
    /// | # | Condition | Mode |
    /// |---|---|---|
    /// | 1 | `platform.immersive` | [`ImmersiveTabBar`](LayoutMode::ImmersiveTabBar) |
    /// | 2 | tablet-or-desktop and not `platform.force_tab_bar` | [`Sidebar`](LayoutMode::Sidebar) |
    /// | 3 | otherwise | [`TabBar`](LayoutMode::TabBar) |
    ///
    /// The size class is part of the environment triple but the layout policy
    /// does not branch on it: a compact-width tablet keeps its sidebar while
    /// the tab-set provider hands it the phone tab order.
    pub fn resolve(
        device: DeviceClass,
        _size: SizeClass,
        platform: PlatformCapabilities,
    ) -> LayoutMode {
        if platform.immersive {
            LayoutMode::ImmersiveTabBar
        } else if device.is_tablet_or_desktop() && !platform.force_tab_bar {
            LayoutMode::Sidebar
        } else {
            LayoutMode::TabBar
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LayoutMode::TabBar => "Tab Bar",
            LayoutMode::Sidebar => "Sidebar",
            LayoutMode::ImmersiveTabBar => "Immersive Tab Bar",
        }
    }

    /// All layout modes for iteration
    pub fn all() -> &'static [LayoutMode] {
        &[
            LayoutMode::TabBar,
            LayoutMode::Sidebar,
            LayoutMode::ImmersiveTabBar,
        ]
    }
}

/// Environment inputs the host feeds into the navigation core.
///
/// Rebuilt and passed to
/// [`SelectionController::update_environment`](crate::selection::SelectionController::update_environment)
/// whenever the window moves between size classes or the platform profile
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavEnvironment {
    /// Hardware form factor
    pub device_class: DeviceClass,
    /// Horizontal size class of the hosting window
    pub size_class: SizeClass,
    /// Platform capability flags
    pub platform: PlatformCapabilities,
}

impl NavEnvironment {
    /// Bundle the three environment inputs.
    pub fn new(
        device_class: DeviceClass,
        size_class: SizeClass,
        platform: PlatformCapabilities,
    ) -> Self {
        Self {
            device_class,
            size_class,
            platform,
        }
    }

    /// Resolve the layout mode for this environment.
    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::resolve(self.device_class, self.size_class, self.platform)
    }

    /// Whether the compact (phone-style) tab order applies in this
    /// environment: handset hardware, or any device at compact width.
    pub fn wants_compact_tabs(&self) -> bool {
        self.device_class == DeviceClass::Phone || self.size_class == SizeClass::Compact
    }
}
