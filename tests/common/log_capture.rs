use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// One recorded tracing event.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub level: Level,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

type Events = Arc<Mutex<Vec<Recorded>>>;

/// Records events emitted on the current thread until dropped.
pub struct TestLogCapture {
    events: Events,
    _guard: tracing::subscriber::DefaultGuard,
}

impl TestLogCapture {
    pub fn start() -> Self {
        let events = Events::default();
        let subscriber = tracing_subscriber::registry().with(Recorder(Arc::clone(&events)));
        let guard = tracing::subscriber::set_default(subscriber);
        Self {
            events,
            _guard: guard,
        }
    }

    fn events(&self) -> MutexGuard<'_, Vec<Recorded>> {
        self.events.lock().unwrap()
    }

    pub fn assert_logged_at_level(&self, level: Level, needle: &str) {
        let events = self.events();
        assert!(
            events
                .iter()
                .any(|e| e.level == level && e.message.contains(needle)),
            "no {level} event containing {needle:?} in {events:#?}"
        );
    }

    /// Field values are compared exactly, as rendered by `Debug`/`Display`.
    pub fn assert_field_logged(&self, name: &str, value: &str) {
        let events = self.events();
        assert!(
            events
                .iter()
                .flat_map(|e| &e.fields)
                .any(|(k, v)| k == name && v == value),
            "no field {name}={value} in {events:#?}"
        );
    }

    pub fn assert_no_errors(&self) {
        let events = self.events();
        let errors: Vec<_> = events.iter().filter(|e| e.level == Level::ERROR).collect();
        assert!(errors.is_empty(), "Unexpected errors: {errors:#?}");
    }
}

struct Recorder(Events);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldCollector::default();
        event.record(&mut fields);
        self.0.lock().unwrap().push(Recorded {
            level: *event.metadata().level(),
            message: fields.message,
            fields: fields.rest,
        });
    }
}

#[derive(Default)]
struct FieldCollector {
    message: String,
    rest: Vec<(String, String)>,
}

impl FieldCollector {
    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.rest.push((field.name().to_string(), value));
        }
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }
}
