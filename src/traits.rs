//! Collaborator trait contracts for the navigation core.
//!
//! These traits are the seam between the selection state machine and the
//! external subsystems it orchestrates: session management, user preferences,
//! live unread counters, feedback delivery, and composer dispatch. Concrete
//! implementations live in the host application; the traits exist so the
//! `SelectionController` can be constructed with fakes in tests.
//!
//! # Notes
//!
//! All methods take `&self` and none of them block: every call is a
//! synchronous snapshot read or a fire-and-forget effect. A collaborator that
//! cannot produce a snapshot must answer with its absent value (`false`,
//! `None`, `0`) rather than wait; the core treats a missing session as
//! unauthenticated and a missing counter as zero.

use crate::config::ComposeVisibility;

/// Opaque session token identifying the signed-in account.
///
/// The core never inspects the contents; it only forwards the token to
/// [`UnreadCounters::extra_count_for`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Read-only view of the auth/session state.
pub trait SessionQuery {
    /// Whether an account is currently signed in.
    fn is_authenticated(&self) -> bool;

    /// The current session token, if one is available.
    ///
    /// Returning `None` while `is_authenticated()` is `true` is legal (e.g.
    /// token refresh in flight); badge computation then reports zero.
    fn current_session_token(&self) -> Option<SessionToken>;
}

/// Read-only view of the user preferences the navigation chrome consumes.
pub trait Preferences {
    /// Whether tab bars should render text labels beneath their icons.
    fn show_tab_labels(&self) -> bool;

    /// Default visibility applied to a new post when the composer opens.
    fn default_compose_visibility(&self) -> ComposeVisibility;

    /// Whether the sidebar layout should reserve a secondary content column.
    fn show_secondary_column(&self) -> bool;
}

/// Live unread counters backing the notifications badge.
///
/// Both counters are declared non-negative at the boundary; badge computation
/// combines them with saturating arithmetic and never writes back.
pub trait UnreadCounters {
    /// Unread notification count from the live stream.
    fn unread_notifications(&self) -> u32;

    /// Locally cached extra count for the given session token.
    fn extra_count_for(&self, token: &SessionToken) -> u32;
}

/// Best-effort sensory feedback on tab selection.
///
/// Both methods are fire-and-forget: implementors swallow delivery failures,
/// and the selection transition proceeds regardless.
pub trait FeedbackEffects {
    /// Trigger the tab-selection haptic.
    fn fire_haptic_tab_selection(&self);

    /// Play the tab-selection sound.
    fn play_tab_selection_sound(&self);
}

/// Composer presentation, dispatched when the command tab is activated.
///
/// Exactly one of the two methods is invoked per activation: the window
/// variant on multi-window platforms, the modal variant elsewhere. The
/// request is fire-and-forget and cannot be recalled once made; switching
/// tabs immediately afterwards does not cancel it.
pub trait ComposerDispatch {
    /// Open the composer in a new window.
    fn open_composer_window(&self, visibility: ComposeVisibility);

    /// Present the composer modally over the current window.
    fn present_composer_modal(&self, visibility: ComposeVisibility);
}
