//! Tracing subscriber setup.

use super::otlp;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Name of the span file inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "memberdesk-otlp.json";

/// Installs the global subscriber.
///
/// Two layers are registered:
/// - spans at `config.trace_level` and above are exported as OTLP/JSON to
///   `~/.local/share/zellij/memberdesk/memberdesk-otlp.json`
/// - warnings and errors are also printed to stderr, which Zellij collects in
///   its own log
///
/// If the data directory cannot be created only the stderr layer is
/// installed. Calling this more than once has no effect.
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        let _ = tracing_subscriber::registry().with(stderr_layer()).try_init();
        tracing::warn!(error = %e, dir = %data_dir.display(), "trace export disabled");
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", otlp::SCOPE_NAME)]);
    let provider = otlp::file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(otlp::SCOPE_NAME))
        .with_filter(EnvFilter::new(&config.trace_level));

    let _ = tracing_subscriber::registry()
        .with(otel_layer)
        .with(stderr_layer())
        .try_init();
}

fn stderr_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(LevelFilter::WARN)
}
