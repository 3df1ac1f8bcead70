//! Realtime update relay.
//!
//! Pushes `updateThreads` / `newResponse` notifications to WebSocket clients
//! scoped to the board or thread room they joined. The relay is never the
//! source of truth: the authoritative write path publishes into it after it
//! has committed a change.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
