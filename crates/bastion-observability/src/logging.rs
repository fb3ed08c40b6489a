use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use bastion_config::{LogConfig, LogFormat};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Filter directives used when `RUST_LOG` is not set.
///
/// The application logs at the configured level while noisy dependencies
/// are held at `warn`.
pub fn default_filter(level: &str) -> String {
    format!(
        "bastion={level},bastion_auth={level},bastion_core={level},tower_http=warn,hyper=warn"
    )
}

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.level)))
}

/// Initialize the global tracing subscriber.
///
/// - **Console**: compact (default) or JSON, selected by `LOG_FORMAT`
/// - **File**: when `LOG_DIR` is set, JSON lines in a daily-rolling
///   `bastion.json` file
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LogConfig) -> Option<WorkerGuard> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console_layer: BoxedLayer = match config.format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter(config))
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_filter(env_filter(config))
            .boxed(),
    };
    layers.push(console_layer);

    let guard = config.directory.as_ref().map(|dir| {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "bastion.json");
        let (writer, guard) = tracing_appender::non_blocking(file_appender);

        layers.push(
            fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(env_filter(config))
                .boxed(),
        );

        guard
    });

    tracing_subscriber::registry().with(layers).init();

    if let Some(dir) = &config.directory {
        tracing::info!(directory = %dir, "File logging enabled");
    }

    guard
}
