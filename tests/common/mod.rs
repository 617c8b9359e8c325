//! Shared integration test helpers for starling-nav.
//!
//! This module provides fake collaborators and canonical environment/harness
//! factories used across the `tests/` integration test suite. The fakes share
//! their observable state through `Rc<Cell<_>>` so a test can keep a clone,
//! hand the fake to the controller, and assert on effects afterwards.
//!
//! # Usage
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{TestHarness, phone_env};
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use starling_nav::config::{ComposeVisibility, SharedNavConfig};
use starling_nav::layout::{DeviceClass, NavEnvironment, PlatformCapabilities, SizeClass};
use starling_nav::selection::SelectionController;
use starling_nav::traits::{
    ComposerDispatch, FeedbackEffects, Preferences, SessionQuery, SessionToken, UnreadCounters,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Fake session whose auth state can be flipped mid-test.
#[derive(Clone)]
pub struct FakeSession {
    pub authenticated: Rc<Cell<bool>>,
    pub token: Rc<RefCell<Option<SessionToken>>>,
}

impl FakeSession {
    /// Session with a signed-in account and a token.
    pub fn signed_in() -> Self {
        Self {
            authenticated: Rc::new(Cell::new(true)),
            token: Rc::new(RefCell::new(Some(SessionToken::new("itest-token")))),
        }
    }

    /// Session with nobody signed in.
    pub fn signed_out() -> Self {
        Self {
            authenticated: Rc::new(Cell::new(false)),
            token: Rc::new(RefCell::new(None)),
        }
    }

    /// Flip to signed-out, dropping the token.
    pub fn sign_out(&self) {
        self.authenticated.set(false);
        self.token.replace(None);
    }

    /// Flip to signed-in with a fresh token.
    pub fn sign_in(&self) {
        self.authenticated.set(true);
        self.token.replace(Some(SessionToken::new("itest-token")));
    }
}

impl SessionQuery for FakeSession {
    fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    fn current_session_token(&self) -> Option<SessionToken> {
        self.token.borrow().clone()
    }
}

/// Fake preferences with settable fields.
#[derive(Clone)]
pub struct FakePrefs {
    pub labels: Rc<Cell<bool>>,
    pub visibility: Rc<Cell<ComposeVisibility>>,
    pub secondary: Rc<Cell<bool>>,
}

impl Default for FakePrefs {
    fn default() -> Self {
        Self {
            labels: Rc::new(Cell::new(true)),
            visibility: Rc::new(Cell::new(ComposeVisibility::Public)),
            secondary: Rc::new(Cell::new(false)),
        }
    }
}

impl Preferences for FakePrefs {
    fn show_tab_labels(&self) -> bool {
        self.labels.get()
    }

    fn default_compose_visibility(&self) -> ComposeVisibility {
        self.visibility.get()
    }

    fn show_secondary_column(&self) -> bool {
        self.secondary.get()
    }
}

/// Fake unread counters with settable values.
#[derive(Clone, Default)]
pub struct FakeCounters {
    pub live: Rc<Cell<u32>>,
    pub extra: Rc<Cell<u32>>,
}

impl UnreadCounters for FakeCounters {
    fn unread_notifications(&self) -> u32 {
        self.live.get()
    }

    fn extra_count_for(&self, _token: &SessionToken) -> u32 {
        self.extra.get()
    }
}

/// Fake feedback sink counting haptic and sound deliveries.
#[derive(Clone, Default)]
pub struct FakeEffects {
    pub haptics: Rc<Cell<u32>>,
    pub sounds: Rc<Cell<u32>>,
}

impl FakeEffects {
    /// Total feedback deliveries of both kinds.
    pub fn total(&self) -> u32 {
        self.haptics.get() + self.sounds.get()
    }
}

impl FeedbackEffects for FakeEffects {
    fn fire_haptic_tab_selection(&self) {
        self.haptics.set(self.haptics.get() + 1);
    }

    fn play_tab_selection_sound(&self) {
        self.sounds.set(self.sounds.get() + 1);
    }
}

/// Fake composer recording which presentation was requested and with what
/// visibility.
#[derive(Clone, Default)]
pub struct FakeComposer {
    pub windows: Rc<Cell<u32>>,
    pub modals: Rc<Cell<u32>>,
    pub last_visibility: Rc<RefCell<Option<ComposeVisibility>>>,
}

impl FakeComposer {
    /// Total composer dispatches of both kinds.
    pub fn total(&self) -> u32 {
        self.windows.get() + self.modals.get()
    }
}

impl ComposerDispatch for FakeComposer {
    fn open_composer_window(&self, visibility: ComposeVisibility) {
        self.windows.set(self.windows.get() + 1);
        self.last_visibility.replace(Some(visibility));
    }

    fn present_composer_modal(&self, visibility: ComposeVisibility) {
        self.modals.set(self.modals.get() + 1);
        self.last_visibility.replace(Some(visibility));
    }
}

/// Controller type wired to the fake collaborators.
pub type TestController =
    SelectionController<FakeSession, FakePrefs, FakeCounters, FakeEffects, FakeComposer>;

/// A controller plus handles to every fake it was built from.
///
/// Keeps the fakes alive and inspectable for the duration of the test.
pub struct TestHarness {
    pub session: FakeSession,
    pub prefs: FakePrefs,
    pub counters: FakeCounters,
    pub effects: FakeEffects,
    pub composer: FakeComposer,
    pub config: SharedNavConfig,
    pub controller: TestController,
}

impl TestHarness {
    /// Signed-in harness with the default navigation config.
    pub fn new(env: NavEnvironment) -> Self {
        Self::build(env, FakeSession::signed_in(), SharedNavConfig::default())
    }

    /// Signed-out harness with the default navigation config.
    pub fn signed_out(env: NavEnvironment) -> Self {
        Self::build(env, FakeSession::signed_out(), SharedNavConfig::default())
    }

    /// Signed-in harness reading tab orders from the given config handle.
    pub fn with_config(env: NavEnvironment, config: SharedNavConfig) -> Self {
        Self::build(env, FakeSession::signed_in(), config)
    }

    fn build(env: NavEnvironment, session: FakeSession, config: SharedNavConfig) -> Self {
        let prefs = FakePrefs::default();
        let counters = FakeCounters::default();
        let effects = FakeEffects::default();
        let composer = FakeComposer::default();
        let controller = SelectionController::new(
            env,
            config.clone(),
            session.clone(),
            prefs.clone(),
            counters.clone(),
            effects.clone(),
            composer.clone(),
        );
        Self {
            session,
            prefs,
            counters,
            effects,
            composer,
            config,
            controller,
        }
    }
}

/// Phone hardware at compact width.
pub fn phone_env() -> NavEnvironment {
    NavEnvironment::new(
        DeviceClass::Phone,
        SizeClass::Compact,
        PlatformCapabilities::handheld(),
    )
}

/// Tablet at regular width.
pub fn tablet_env() -> NavEnvironment {
    NavEnvironment::new(
        DeviceClass::Tablet,
        SizeClass::Regular,
        PlatformCapabilities::tablet(),
    )
}

/// Tablet squeezed to compact width (split view).
pub fn compact_tablet_env() -> NavEnvironment {
    NavEnvironment::new(
        DeviceClass::Tablet,
        SizeClass::Compact,
        PlatformCapabilities::tablet(),
    )
}

/// Desktop window at regular width.
pub fn desktop_env() -> NavEnvironment {
    NavEnvironment::new(
        DeviceClass::Desktop,
        SizeClass::Regular,
        PlatformCapabilities::desktop(),
    )
}

/// Immersive headset platform.
pub fn immersive_env() -> NavEnvironment {
    NavEnvironment::new(
        DeviceClass::Tablet,
        SizeClass::Regular,
        PlatformCapabilities::immersive(),
    )
}
