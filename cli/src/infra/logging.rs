use es_monitor_bootstrap::environment::Environment;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub struct Logging;

impl Logging {
    /// Installs the global subscriber. Logs go to stderr; stdout carries the status lines.
    ///
    /// The returned guard flushes pending records when dropped, keep it alive until exit.
    pub fn init() -> WorkerGuard {
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());

        let rust_log = Environment::string("RUST_LOG", "INFO,aws_config=WARN,aws_smithy_runtime=WARN");

        tracing_subscriber::registry()
            .with(EnvFilter::new(rust_log))
            .with(Box::new(tracing_subscriber::fmt::layer().with_writer(non_blocking)))
            .init();

        guard
    }
}
