//! Tab set resolution: which tabs are valid for the current auth state,
//! layout, and environment.
//!
//! A [`TabSet`] is an ordered, deduplicated sequence of tabs with at least
//! one selectable (non-command) entry. Sets are backed by `Arc<[Tab]>` so
//! repeated reads hand out the same allocation: UI identity keys stay
//! stable across re-renders, and callers can cheaply detect a set change by
//! pointer identity instead of diffing contents.
//!
//! The [`TabSetProvider`] owns one cached set per navigation surface and
//! rebuilds the config-backed ones only when the injected
//! [`SharedNavConfig`] reports a new version.

use crate::config::{SharedNavConfig, Tab};
use crate::layout::{LayoutMode, NavEnvironment};
use std::sync::Arc;

/// Auth state as seen by the navigation core.
///
/// Derived from [`SessionQuery::is_authenticated`] snapshot reads; a missing
/// or unavailable session reads as `Unauthenticated`.
///
/// [`SessionQuery::is_authenticated`]: crate::traits::SessionQuery::is_authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No account is signed in
    Unauthenticated,
    /// An account is signed in
    Authenticated,
}

impl AuthState {
    /// Map a session snapshot to an auth state.
    pub fn from_authenticated(authenticated: bool) -> AuthState {
        if authenticated {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }

    /// Whether this state represents a signed-in account.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated)
    }
}

/// Ordered, deduplicated, validated sequence of navigation tabs.
///
/// Invariants, enforced at construction:
/// - unique by identifier (first occurrence wins)
/// - at least one selectable (non-command) entry
/// - at most one command tab (identity dedupe enforces this while `Compose`
///   is the only command variant)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Arc<[Tab]>,
    /// First non-command entry, cached at construction so re-anchoring is
    /// total without re-scanning
    first_selectable: Tab,
}

impl TabSet {
    /// Build a set from an ordered tab sequence.
    ///
    /// Later duplicates are dropped. Returns `None` if the result has no
    /// selectable entry (including the empty input); callers fall back to
    /// [`TabSet::fallback`] in that case.
    pub fn from_tabs(tabs: impl IntoIterator<Item = Tab>) -> Option<TabSet> {
        let mut deduped: Vec<Tab> = Vec::new();
        for tab in tabs {
            if !deduped.contains(&tab) {
                deduped.push(tab);
            }
        }
        let first_selectable = deduped.iter().copied().find(|t| !t.is_command())?;
        Some(TabSet {
            tabs: deduped.into(),
            first_selectable,
        })
    }

    /// The restricted set shown while signed out: public content only, no
    /// command tab, no per-account destinations. Also the recovery set when
    /// a configured order resolves to nothing selectable.
    pub fn fallback() -> TabSet {
        TabSet {
            tabs: Arc::from([Tab::Explore, Tab::Local].as_slice()),
            first_selectable: Tab::Explore,
        }
    }

    /// All tabs in display order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Iterate the tabs in display order.
    pub fn iter(&self) -> impl Iterator<Item = Tab> + '_ {
        self.tabs.iter().copied()
    }

    /// Number of tabs in the set.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// A valid set is never empty; this exists for completeness.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Whether the set contains the given tab.
    pub fn contains(&self, tab: Tab) -> bool {
        self.tabs.contains(&tab)
    }

    /// First selectable (non-command) entry, the anchor for initial
    /// selection and for re-anchoring when the active tab leaves the set.
    pub fn first_selectable(&self) -> Tab {
        self.first_selectable
    }

    /// The set's command tab, if it has one.
    pub fn command_tab(&self) -> Option<Tab> {
        self.tabs.iter().copied().find(Tab::is_command)
    }

    /// Whether two sets share the same backing allocation.
    ///
    /// The provider hands out cached sets, so pointer identity doubles as a
    /// cheap "did the set change" test for render-cycle callers.
    pub fn ptr_eq(a: &TabSet, b: &TabSet) -> bool {
        Arc::ptr_eq(&a.tabs, &b.tabs)
    }
}

/// The fixed immersive-platform set: distinct and non-customizable.
fn immersive_tab_set() -> TabSet {
    TabSet {
        tabs: Arc::from([Tab::Home, Tab::Explore, Tab::Notifications, Tab::Compose].as_slice()),
        first_selectable: Tab::Home,
    }
}

/// Build a set from a configured order, falling back when the order is
/// degenerate. The fallback path is a reported-but-non-fatal configuration
/// defect.
fn build_or_fallback(fallback: &TabSet, tabs: Vec<Tab>, surface: &str) -> TabSet {
    match TabSet::from_tabs(tabs) {
        Some(set) => set,
        None => {
            log::warn!(
                "Configured {} resolved to no selectable tabs; using the fallback set",
                surface
            );
            fallback.clone()
        }
    }
}

/// Produces the tab set valid for an (auth state, layout mode, environment)
/// triple.
///
/// Holds one cached [`TabSet`] per surface. The fallback and immersive sets
/// are fixed; the phone and sidebar sets come from the injected
/// [`SharedNavConfig`] and are rebuilt only when its version changes, so the
/// determinism invariant holds: same inputs, same sequence, same allocation.
pub struct TabSetProvider {
    config: SharedNavConfig,
    built_version: u64,
    fallback: TabSet,
    immersive: TabSet,
    phone: TabSet,
    sidebar: TabSet,
}

impl TabSetProvider {
    /// Create a provider reading tab orders from the given config handle.
    pub fn new(config: SharedNavConfig) -> Self {
        let fallback = TabSet::fallback();
        let mut provider = Self {
            config,
            built_version: 0,
            immersive: immersive_tab_set(),
            phone: fallback.clone(),
            sidebar: fallback.clone(),
            fallback,
        };
        provider.rebuild();
        provider
    }

    /// Resolve the current tab set.
    ///
    /// Decision order, first match winning:
    /// 1. signed out → the fixed fallback set
    /// 2. compact environment (phone hardware, or compact width) → the
    ///    user-ordered phone set
    /// 3. immersive layout → the fixed immersive set
    /// 4. otherwise (regular-width tablet/desktop) → the user-ordered
    ///    sidebar entries mapped down to plain tabs
    ///
    /// Returns a cheap clone of the cached set for that surface.
    pub fn current(&mut self, auth: AuthState, layout: LayoutMode, env: NavEnvironment) -> TabSet {
        self.rebuild_if_stale();
        match auth {
            AuthState::Unauthenticated => self.fallback.clone(),
            AuthState::Authenticated if env.wants_compact_tabs() => self.phone.clone(),
            AuthState::Authenticated if layout == LayoutMode::ImmersiveTabBar => {
                self.immersive.clone()
            }
            AuthState::Authenticated => self.sidebar.clone(),
        }
    }

    /// Version of the config the cached sets were built from.
    pub fn built_version(&self) -> u64 {
        self.built_version
    }

    fn rebuild_if_stale(&mut self) {
        if self.config.version() != self.built_version {
            self.rebuild();
        }
    }

    fn rebuild(&mut self) {
        let (config, version) = self.config.snapshot();
        self.sidebar = build_or_fallback(&self.fallback, config.sidebar_tabs(), "sidebar order");
        self.phone = build_or_fallback(&self.fallback, config.phone_tabs, "phone tab order");
        self.built_version = version;
        log::debug!("Rebuilt tab sets for navigation config version {}", version);
    }
}
