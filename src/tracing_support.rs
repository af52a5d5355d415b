//! Tracing support for timing graph searches.
//!
//! With the `tracing` feature enabled, traversals and shortest-path searches
//! open spans, and [`init_tracing`] installs a subscriber whose layer totals
//! the time spent in each span name on the current thread.  Without the
//! feature every function here is a no-op and [`info_span!`] expands to a
//! dummy span.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, SpanTiming>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    /// Accumulated time and number of closed spans for one span name.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpanTiming {
        pub total: Duration,
        pub count: usize,
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let name = span.metadata().name();
            if let Some(start) = span.extensions().get::<Instant>() {
                let elapsed = start.elapsed();
                SPAN_TIMINGS.with(|timings| {
                    let mut timings = timings.borrow_mut();
                    let entry = timings.entry(name).or_default();
                    entry.total += elapsed;
                    entry.count += 1;
                });
            }
        }
    }

    /// Installs the timing subscriber as the global default.  Safe to call
    /// more than once; does nothing if another subscriber is already set.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default().with(TimingLayer).try_init();
        });
    }

    /// Returns the timing recorded on this thread for spans named `name`.
    pub fn span_timing(name: &str) -> Option<SpanTiming> {
        SPAN_TIMINGS.with(|timings| timings.borrow().get(name).copied())
    }

    pub fn reset_span_timings() {
        init_tracing();
        SPAN_TIMINGS.with(|timings| timings.borrow_mut().clear());
    }

    #[doc(hidden)]
    pub fn dump_span_timings() {
        SPAN_TIMINGS.with(|timings| {
            let timings = timings.borrow();
            let mut entries: Vec<_> = timings.iter().collect();
            entries.sort_by(|a, b| b.1.total.cmp(&a.1.total));
            eprintln!("span timings (desc):");
            for (name, timing) in entries {
                eprintln!("  {name}: {:?} ({}x)", timing.total, timing.count);
            }
        });
    }

    pub use tracing::info_span;
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::time::Duration;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpanTiming {
        pub total: Duration,
        pub count: usize,
    }

    pub fn init_tracing() {}

    pub fn span_timing(_name: &str) -> Option<SpanTiming> {
        None
    }

    pub fn reset_span_timings() {}

    #[doc(hidden)]
    pub fn dump_span_timings() {}

    #[macro_export]
    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub use crate::info_span;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
