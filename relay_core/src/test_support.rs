//! Helpers shared by unit tests

use std::sync::{Arc, Mutex};
use tracing::{subscriber::DefaultGuard, Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, prelude::*, Layer};

/// Records the level of every event emitted on the current thread while the
/// returned guard is alive.
#[derive(Clone, Default)]
pub struct CapturedLevels(Arc<Mutex<Vec<Level>>>);

impl CapturedLevels {
    pub fn install() -> (Self, DefaultGuard) {
        let captured = Self::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (captured, guard)
    }

    pub fn count(&self, level: Level) -> usize {
        self.0.lock().unwrap().iter().filter(|l| **l == level).count()
    }
}

impl<S: Subscriber> Layer<S> for CapturedLevels {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(*event.metadata().level());
    }
}
