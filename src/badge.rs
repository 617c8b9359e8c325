//! Badge computation for navigation tabs.
//!
//! A badge is the non-negative unread count annotating a tab. Only the
//! notifications tab ever carries one, and it is suppressed while that tab is
//! active (the user is already looking at the list). The computation is a
//! pure read over the session and counter collaborators: it never mutates a
//! counter and never blocks.

use crate::config::Tab;
use crate::tab_set::TabSet;
use crate::traits::{SessionQuery, UnreadCounters};

/// Badge count for one tab.
///
/// Returns 0 for every tab except [`Tab::Notifications`]; 0 for the
/// notifications tab while it is active; and 0 when no session token is
/// available (an unavailable session reads as signed-out rather than being
/// awaited). Otherwise the live unread count plus the locally cached extra
/// count for the session, combined with saturating arithmetic.
pub fn badge(
    tab: Tab,
    active_tab: Tab,
    session: &impl SessionQuery,
    counters: &impl UnreadCounters,
) -> u32 {
    if tab != Tab::Notifications || active_tab == Tab::Notifications {
        return 0;
    }
    match session.current_session_token() {
        Some(token) => counters
            .unread_notifications()
            .saturating_add(counters.extra_count_for(&token)),
        None => 0,
    }
}

/// Badge counts for a whole tab set, in set order.
///
/// Convenience for render cycles that draw every tab in one pass.
pub fn badges_for(
    set: &TabSet,
    active_tab: Tab,
    session: &impl SessionQuery,
    counters: &impl UnreadCounters,
) -> Vec<(Tab, u32)> {
    set.iter()
        .map(|tab| (tab, badge(tab, active_tab, session, counters)))
        .collect()
}
