//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the root configuration.
//!
//! [`RootLayer`] is a tracing-subscriber layer that turns every tracing event
//! into a [`Record`] and hands it to the root handlers. The event target is
//! used as the logger name with `::` path separators rewritten to `.`, so an
//! event emitted from `app::net` is filtered exactly like a record from
//! `logging::get_logger("app.net")`.
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::init_tracing();
//! logging::set_level(logging::Level::Debug);
//!
//! tracing::debug!("computing delta");
//! ```

use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::{Level, Record, get_logger};

/// A tracing layer that routes events into the root handlers.
#[derive(Clone, Copy, Debug, Default)]
pub struct RootLayer {
    _private: (),
}

impl RootLayer {
    /// Creates the layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Map a tracing target onto a dotted logger name.
    fn target_to_logger_name(target: &str) -> String {
        target.replace("::", ".")
    }
}

impl<S> Layer<S> for RootLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Level::from(*metadata.level());
        let logger = get_logger(&Self::target_to_logger_name(metadata.target()));
        if !logger.is_enabled_for(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            crate::dispatch(&Record::new(logger.name(), level, message));
        }
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber consisting of [`RootLayer`].
///
/// Panics if a global subscriber has already been installed, like
/// [`SubscriberInitExt::init`](tracing_subscriber::util::SubscriberInitExt::init).
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(RootLayer::new()).init();
}

/// Installs a global tracing subscriber combining `filter` with [`RootLayer`].
///
/// # Example
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// logging::init_tracing_with_filter(EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(RootLayer::new())
        .init();
}
