// Library exports for the Starling navigation core
//
// # Scheduling Model Policy
//
// starling-nav assumes a single-threaded, event-driven host: every state
// transition runs on the UI scheduling context and this crate spawns no
// worker threads. New code should follow these rules:
//
//   - `SelectionController`: single writer. All mutation goes through its
//     `&mut self` methods; do not share it across threads. Reads hand out
//     consistent snapshots so content views never observe a torn
//     (active tab, pulse target) pair.
//
//   - timers: the deferred scroll-pulse clear is the only asynchronous
//     element. Hosts either poll `tick(now)` from a frame clock, or schedule
//     a one-shot timer for `next_pulse_deadline()` and call
//     `clear_pulse_deferred(generation)` when it fires. Stale generations
//     are ignored.
//
//   - `SharedNavConfig`: the one cross-thread handle (parking_lot RwLock).
//     Customization UI may write it from anywhere; the core reads versioned
//     snapshots.
//
// Collaborator reads (session, counters, preferences) are synchronous,
// non-blocking snapshot reads. A collaborator that cannot answer returns its
// absent value instead of waiting.

/// Crate version, reported in the controller's startup log line so hosts can
/// tell which navigation core build produced a log.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod badge;
pub mod config;
pub mod content;
pub mod layout;
pub mod scroll_pulse;
pub mod selection;
pub mod tab_set;
pub mod traits;
