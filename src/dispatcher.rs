//! The dispatcher component.

use crate::error::RegisterError;
use crate::handler::Handler;
use crate::pattern::{self, CATCH_ALL, ENDS_WITH, Matcher, STARTS_WITH};
use std::collections::HashMap;

/// Pattern dialect a [`Dispatcher`] speaks, fixed at construction.
///
/// The two dialects are never mixed within one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchDialect {
    /// Patterns use literal `starts-with:`/`ends-with:` markers; an exact
    /// `*` registration acts as a catch-all invoked for every event.
    #[default]
    MarkerPrefixed,
    /// Patterns embed `*` as a glob wildcard, compiled to an anchored,
    /// case-insensitive matcher.
    ///
    /// With `enabled: false` every pattern is treated as a literal name and
    /// the `*` catch-all applies. With `enabled: true` the catch-all step
    /// is skipped outright; a bare `*` pattern instead compiles to a
    /// match-everything wildcard. That skip is inherited behaviour, kept
    /// for compatibility even though it looks like an inconsistency.
    InlineWildcard {
        /// Whether wildcard compilation is active for this instance.
        enabled: bool,
    },
}

struct PatternEntry<P> {
    matcher: Matcher,
    handler: Box<dyn Handler<P>>,
}

/// A pattern-matching publish/subscribe dispatcher over payloads of type `P`.
///
/// Handlers are registered under pattern strings and invoked synchronously,
/// on the emitting thread, for every event name they match. Each [`emit`]
/// dispatches in a fixed order:
///
/// 1. the exact handler registered under the event name, if any;
/// 2. every pattern handler whose matcher accepts the name (iteration order
///    among these is unspecified);
/// 3. the `*` catch-all, when the dialect makes it applicable.
///
/// At most one handler lives under a given pattern string; registering the
/// same pattern again silently replaces the previous handler. Handlers have
/// no return value, and a panicking handler aborts the remaining
/// invocations of that `emit` call.
///
/// [`emit`]: Dispatcher::emit
pub struct Dispatcher<P> {
    dialect: MatchDialect,
    exact: HashMap<String, Box<dyn Handler<P>>>,
    patterns: HashMap<String, PatternEntry<P>>,
}

impl<P> Default for Dispatcher<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Dispatcher<P> {
    /// Create a dispatcher speaking the marker-prefixed dialect.
    pub fn new() -> Self {
        Self::with_dialect(MatchDialect::MarkerPrefixed)
    }

    /// Create a dispatcher speaking the given dialect.
    pub fn with_dialect(dialect: MatchDialect) -> Self {
        Self {
            dialect,
            exact: HashMap::new(),
            patterns: HashMap::new(),
        }
    }

    /// The dialect this dispatcher was constructed with.
    pub fn dialect(&self) -> MatchDialect {
        self.dialect
    }

    /// Number of registered handlers, across both exact and pattern entries.
    pub fn handler_count(&self) -> usize {
        self.exact.len() + self.patterns.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.patterns.is_empty()
    }

    /// Register `handler` under `pattern`, replacing any previous handler
    /// for the same pattern string.
    ///
    /// Best-effort: an invalid pattern (empty, or a wildcard that fails to
    /// compile) is silently ignored. Use [`try_register`] to surface the
    /// rejection instead.
    ///
    /// [`try_register`]: Dispatcher::try_register
    pub fn register<H>(&mut self, pattern: impl Into<String>, handler: H)
    where
        H: Handler<P> + 'static,
    {
        let _ = self.try_register(pattern, handler);
    }

    /// Strict variant of [`register`](Dispatcher::register): rejects an
    /// empty pattern and propagates wildcard compilation failure.
    pub fn try_register<H>(
        &mut self,
        pattern: impl Into<String>,
        handler: H,
    ) -> Result<(), RegisterError>
    where
        H: Handler<P> + 'static,
    {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(RegisterError::EmptyPattern);
        }

        let handler: Box<dyn Handler<P>> = Box::new(handler);
        match self.classify(&pattern)? {
            Some(matcher) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(pattern = %pattern, ?matcher, "registered pattern handler");
                self.patterns.insert(pattern, PatternEntry { matcher, handler });
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(pattern = %pattern, "registered exact handler");
                self.exact.insert(pattern, handler);
            }
        }
        Ok(())
    }

    /// Remove the handler registered under `pattern`, if any.
    ///
    /// Removing an unknown pattern is a no-op; other registrations are
    /// untouched.
    pub fn unregister(&mut self, pattern: &str) {
        self.exact.remove(pattern);
        self.patterns.remove(pattern);
        #[cfg(feature = "tracing")]
        tracing::trace!(pattern = %pattern, "unregistered");
    }

    /// Invoke every handler matching `event`, passing `payload`.
    ///
    /// Dispatch order is exact handler, then matching pattern handlers,
    /// then the `*` catch-all where the dialect allows it. The catch-all
    /// fires regardless of whether earlier steps fired, and receives the
    /// event name alongside the payload. An empty event name is ignored.
    ///
    /// Handlers run inline; a panic unwinds through this call and skips the
    /// handlers that would have run after it.
    pub fn emit(&self, event: &str, payload: &P) {
        if event.is_empty() {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(event, "dispatching");

        if let Some(handler) = self.exact.get(event) {
            handler.call(event, payload);
        }

        for entry in self.patterns.values() {
            if entry.matcher.matches(event) {
                entry.handler.call(event, payload);
            }
        }

        if self.catch_all_applies()
            && let Some(handler) = self.exact.get(CATCH_ALL)
        {
            handler.call(event, payload);
        }
    }

    /// Classify a pattern under the active dialect. `None` means exact.
    fn classify(&self, pattern: &str) -> Result<Option<Matcher>, RegisterError> {
        match self.dialect {
            MatchDialect::MarkerPrefixed => {
                if let Some(rest) = pattern.strip_prefix(STARTS_WITH) {
                    Ok(Some(Matcher::Prefix(rest.to_owned())))
                } else if let Some(rest) = pattern.strip_prefix(ENDS_WITH) {
                    Ok(Some(Matcher::Suffix(rest.to_owned())))
                } else {
                    Ok(None)
                }
            }
            MatchDialect::InlineWildcard { enabled: true } if pattern.contains('*') => Ok(Some(
                Matcher::Wildcard(pattern::compile_wildcard(pattern)?),
            )),
            MatchDialect::InlineWildcard { .. } => Ok(None),
        }
    }

    fn catch_all_applies(&self) -> bool {
        match self.dialect {
            MatchDialect::MarkerPrefixed => true,
            MatchDialect::InlineWildcard { enabled } => !enabled,
        }
    }
}
