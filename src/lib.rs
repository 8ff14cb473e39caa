//! # fanout
//!
//! A minimal pattern-matching publish/subscribe event dispatcher.
//!
//! Handlers are registered against event-name patterns; [`Dispatcher::emit`]
//! synchronously invokes every handler whose pattern matches the emitted
//! name, passing along an opaque payload. Two pattern dialects are
//! supported, chosen per instance at construction via [`MatchDialect`]:
//!
//! - **Marker-prefixed** (default): `starts-with:debug` matches `debug` and
//!   `debug-verbose`, `ends-with:verbose` matches names ending in `verbose`,
//!   and an exact `*` registration catches every event.
//! - **Inline wildcard**: `debug*` embeds the wildcard in the pattern and is
//!   compiled to an anchored, case-insensitive matcher.
//!
//! Emission is a fire-and-forget fan-out on the calling thread: no queuing,
//! no delivery guarantees, no handler return values. A dispatcher shared
//! across threads must be wrapped in a lock by the caller, since
//! registration takes `&mut self`.
//!
//! # Quick start
//!
//! ```
//! use fanout::Dispatcher;
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//!
//! let mut bus = Dispatcher::new();
//! bus.register("starts-with:user-", move |event: &str, payload: &u32| {
//!     sink.lock().unwrap().push((event.to_string(), *payload));
//! });
//!
//! bus.emit("user-created", &7);
//! bus.emit("session-expired", &8);
//!
//! assert_eq!(
//!     seen.lock().unwrap().as_slice(),
//!     &[("user-created".to_string(), 7)]
//! );
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatcher;
mod error;
mod handler;
mod pattern;
pub mod testing;

pub use dispatcher::{Dispatcher, MatchDialect};
pub use error::RegisterError;
pub use handler::{Handler, PayloadFn, payload_fn};
