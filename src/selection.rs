//! Selection state machine: the single source of truth for which tab is
//! active.
//!
//! [`SelectionController`] composes the tab-set provider, the scroll pulse,
//! and the platform dispatch policy, and is the entry point driven by user
//! input. All collaborators are injected at construction so the whole machine
//! runs against fakes in tests.
//!
//! State transitions happen only through [`request_select`] and the
//! re-validation hooks ([`session_changed`], [`config_changed`],
//! [`update_environment`]). Everything else is a read.
//!
//! [`request_select`]: SelectionController::request_select
//! [`session_changed`]: SelectionController::session_changed
//! [`config_changed`]: SelectionController::config_changed
//! [`update_environment`]: SelectionController::update_environment

use crate::badge;
use crate::config::{SharedNavConfig, Tab};
use crate::content::NavChrome;
use crate::layout::{LayoutMode, NavEnvironment};
use crate::scroll_pulse::ScrollPulse;
use crate::tab_set::{AuthState, TabSet, TabSetProvider};
use crate::traits::{
    ComposerDispatch, FeedbackEffects, Preferences, SessionQuery, UnreadCounters,
};
use std::time::Instant;

/// What a selection request did, so hosts can react (schedule a deferred
/// pulse clear, log a transition) without re-deriving it from state diffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Candidate is not in the current tab set; nothing changed
    Ignored,
    /// Candidate was the command tab; a composer request was dispatched and
    /// the active tab is unchanged
    ComposerDispatched,
    /// The active tab was re-selected; a scroll pulse was armed. Hosts that
    /// schedule a timer for the deferred clear pass this generation back to
    /// [`SelectionController::clear_pulse_deferred`]
    PulseArmed { generation: u64 },
    /// Selection moved from `from` to the candidate
    Switched { from: Tab },
}

/// Consistent point-in-time view of the selection state.
///
/// Taken in one call so readers never observe a torn pair (a new active tab
/// with a stale pulse target, or vice versa).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSnapshot {
    /// The active tab
    pub active_tab: Tab,
    /// Armed scroll-pulse target ordinal, if any
    pub scroll_pulse_target: Option<u8>,
}

/// Owns the active tab and applies the selection state machine.
///
/// Single-writer: all mutation goes through `&mut self` methods on the UI
/// scheduling context. Collaborator reads are synchronous snapshots; none of
/// them block.
pub struct SelectionController<S, P, U, F, D> {
    session: S,
    prefs: P,
    counters: U,
    effects: F,
    composer: D,
    provider: TabSetProvider,
    /// Device/size/platform inputs the layout and tab set derive from
    env: NavEnvironment,
    layout: LayoutMode,
    auth: AuthState,
    /// Tab set valid for (auth, layout, env), refreshed on every
    /// re-validation hook
    tabs: TabSet,
    active_tab: Tab,
    pulse: ScrollPulse,
}

impl<S, P, U, F, D> SelectionController<S, P, U, F, D>
where
    S: SessionQuery,
    P: Preferences,
    U: UnreadCounters,
    F: FeedbackEffects,
    D: ComposerDispatch,
{
    /// Create a controller anchored to the first selectable tab of the set
    /// valid for the current session and environment.
    pub fn new(
        env: NavEnvironment,
        config: SharedNavConfig,
        session: S,
        prefs: P,
        counters: U,
        effects: F,
        composer: D,
    ) -> Self {
        let layout = env.layout_mode();
        let auth = AuthState::from_authenticated(session.is_authenticated());
        let mut provider = TabSetProvider::new(config);
        let tabs = provider.current(auth, layout, env);
        let active_tab = tabs.first_selectable();
        log::info!(
            "starling-nav {} ready: layout {}, {} tabs, active {}",
            crate::VERSION,
            layout.display_name(),
            tabs.len(),
            active_tab.title()
        );
        Self {
            session,
            prefs,
            counters,
            effects,
            composer,
            provider,
            env,
            layout,
            auth,
            tabs,
            active_tab,
            pulse: ScrollPulse::new(),
        }
    }

    /// Apply a user selection request.
    ///
    /// Transitions, first match wins:
    /// - candidate outside the current set → ignored (logged, nothing moves)
    /// - command tab → composer dispatch, active tab unchanged
    /// - already active → feedback, scroll pulse armed for the deferred clear
    /// - otherwise → feedback, pulse cleared, active tab switched
    pub fn request_select(&mut self, candidate: Tab, now: Instant) -> SelectOutcome {
        if !self.tabs.contains(candidate) {
            log::warn!(
                "Ignoring selection of {} (not in the current tab set)",
                candidate.title()
            );
            return SelectOutcome::Ignored;
        }

        if candidate.is_command() {
            self.dispatch_composer();
            return SelectOutcome::ComposerDispatched;
        }

        if candidate == self.active_tab {
            self.fire_selection_feedback();
            let generation = self.pulse.arm(candidate.ordinal(), now);
            log::debug!(
                "Re-selected {}, armed scroll pulse (generation {})",
                candidate.title(),
                generation
            );
            return SelectOutcome::PulseArmed { generation };
        }

        self.fire_selection_feedback();
        self.pulse.clear();
        let from = self.active_tab;
        self.active_tab = candidate;
        log::debug!("Switched tab: {} -> {}", from.title(), candidate.title());
        SelectOutcome::Switched { from }
    }

    /// Re-read the session and re-validate the selection.
    ///
    /// Call when the auth state may have changed (sign-in, sign-out, account
    /// switch).
    pub fn session_changed(&mut self) {
        let auth = AuthState::from_authenticated(self.session.is_authenticated());
        if auth != self.auth {
            log::info!(
                "Auth state changed: {}",
                if auth.is_authenticated() { "authenticated" } else { "unauthenticated" }
            );
        }
        self.auth = auth;
        self.refresh_tabs();
    }

    /// Re-validate the selection against the latest navigation config.
    ///
    /// Call after the injected [`SharedNavConfig`] is updated; the provider
    /// rebuilds its cached sets from the new version.
    pub fn config_changed(&mut self) {
        self.refresh_tabs();
    }

    /// Adopt a new environment (device rotation, window resize, stage
    /// change) and re-validate the selection.
    pub fn update_environment(&mut self, env: NavEnvironment) {
        let layout = env.layout_mode();
        if layout != self.layout {
            log::info!(
                "Layout changed: {} -> {}",
                self.layout.display_name(),
                layout.display_name()
            );
        }
        self.env = env;
        self.layout = layout;
        self.refresh_tabs();
    }

    /// Advance the pulse clock; returns `true` if the pulse just cleared.
    ///
    /// For hosts that poll a frame/run-loop clock instead of scheduling
    /// one-shot timers.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.pulse.tick(now)
    }

    /// Deferred pulse clear for timer-scheduling hosts.
    ///
    /// Applies only if `generation` still matches the armed pulse, so a
    /// stale timer from a superseded pulse is a no-op.
    pub fn clear_pulse_deferred(&mut self, generation: u64) {
        self.pulse.clear_deferred(generation);
    }

    /// Deadline of the armed pulse, if any. `None` means nothing to
    /// schedule.
    pub fn next_pulse_deadline(&self) -> Option<Instant> {
        self.pulse.next_deadline()
    }

    /// Consistent (active tab, pulse target) snapshot for content views.
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            active_tab: self.active_tab,
            scroll_pulse_target: self.pulse.target(),
        }
    }

    /// The active tab.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// The resolved layout mode.
    pub fn layout_mode(&self) -> LayoutMode {
        self.layout
    }

    /// The environment the layout was resolved from.
    pub fn environment(&self) -> NavEnvironment {
        self.env
    }

    /// The auth state as of the last session read.
    pub fn auth_state(&self) -> AuthState {
        self.auth
    }

    /// The current tab set.
    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    /// Badge count for one tab, computed from the live counters.
    pub fn badge_for(&self, tab: Tab) -> u32 {
        badge::badge(tab, self.active_tab, &self.session, &self.counters)
    }

    /// Badge counts for every tab in the current set, in display order.
    pub fn badges(&self) -> Vec<(Tab, u32)> {
        badge::badges_for(&self.tabs, self.active_tab, &self.session, &self.counters)
    }

    /// Chrome directives for the current layout and preferences.
    pub fn chrome(&self) -> NavChrome {
        NavChrome::resolve(self.layout, &self.prefs)
    }

    /// Route the command-tab activation to the platform-appropriate composer
    /// presentation. Fire-and-forget: once requested it cannot be recalled,
    /// even if the user switches tabs immediately after.
    fn dispatch_composer(&self) {
        let visibility = self.prefs.default_compose_visibility();
        if self.env.platform.multi_window {
            log::info!("Opening composer window ({})", visibility.display_name());
            self.composer.open_composer_window(visibility);
        } else {
            log::info!("Presenting composer modal ({})", visibility.display_name());
            self.composer.present_composer_modal(visibility);
        }
    }

    /// Best-effort haptic and sound. Implementors swallow failures, so this
    /// can never abort a transition.
    fn fire_selection_feedback(&self) {
        self.effects.fire_haptic_tab_selection();
        self.effects.play_tab_selection_sound();
    }

    /// Recompute the tab set and re-anchor the active tab if it fell out.
    fn refresh_tabs(&mut self) {
        self.tabs = self.provider.current(self.auth, self.layout, self.env);
        if !self.tabs.contains(self.active_tab) {
            // Expected on auth and layout transitions, not an error
            let anchor = self.tabs.first_selectable();
            log::debug!(
                "Active tab {} left the set, re-anchoring to {}",
                self.active_tab.title(),
                anchor.title()
            );
            self.active_tab = anchor;
            self.pulse.clear();
        }
    }
}
