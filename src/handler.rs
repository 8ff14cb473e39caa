//! Handler trait and closure adapters.

/// A callback invoked when an emitted event matches the pattern it was
/// registered under.
///
/// Any `Fn(&str, &P)` closure is a handler. Handlers registered under exact
/// patterns already know their event name; wrap a payload-only closure with
/// [`payload_fn`] for those.
pub trait Handler<P>: Send + Sync {
    /// Invoke the handler with the emitted event name and its payload.
    fn call(&self, event: &str, payload: &P);
}

impl<P, F> Handler<P> for F
where
    F: Fn(&str, &P) + Send + Sync,
{
    fn call(&self, event: &str, payload: &P) {
        self(event, payload)
    }
}

/// Adapter making a payload-only closure usable as a [`Handler`].
///
/// The event name is dropped; this is the natural shape for exact-pattern
/// handlers, where the name always equals the registered pattern.
pub struct PayloadFn<F>(F);

impl<P, F> Handler<P> for PayloadFn<F>
where
    F: Fn(&P) + Send + Sync,
{
    fn call(&self, _event: &str, payload: &P) {
        (self.0)(payload)
    }
}

/// Wrap a payload-only closure as a [`Handler`].
pub fn payload_fn<F>(f: F) -> PayloadFn<F> {
    PayloadFn(f)
}
