use tracing::level_filters::LevelFilter;
use tracing_error::ErrorLayer;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_regex(true)
        .try_from_env()
        .unwrap_or_else(|_| {
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy("")
        })
}

/// Filtered with `RUST_LOG`, info and up if unset. For example:
/// `RUST_LOG=translator=trace,info` or, for everything inside one
/// instrumented function, `RUST_LOG='[light_bulb]=trace,info'`.
///
/// Logs go to stderr, stdout carries the translated messages. When running
/// under systemd the journal is used instead, follow it with:
/// `journalctl -fu <unit> --output-fields=CODE_FILE,CODE_LINE,MESSAGE -o cat`
pub fn setup() {
    let env_filter = env_filter();

    let fmt = fmt::layer()
        .pretty()
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(true);

    let registry =
        tracing_subscriber::Registry::default().with(ErrorLayer::default());

    if !libsystemd::logging::connected_to_journal() {
        registry.with(fmt.with_filter(env_filter)).init();
        tracing::debug!("Started logging to stderr");
        return;
    }

    match tracing_journald::layer() {
        Ok(journal) => {
            registry.with(journal.with_filter(env_filter)).init();
            tracing::debug!("Started logging to journald");
        }
        Err(err) => {
            registry.with(fmt.with_filter(env_filter)).init();
            tracing::error!(
                "Could not log to journald directly. Logging to stderr \
                as fallback. Error connecting to journald:: {err}"
            );
        }
    }
}

/// Output is captured per test, shown for failing ones. Safe to call from
/// every test, only the first call installs anything.
pub fn setup_for_tests() {
    // a second install fails, that is the only error possible here
    let _ = color_eyre::install();

    let captured = fmt::layer()
        .compact()
        .with_test_writer()
        .with_line_number(true)
        .with_filter(env_filter());
    let _ = tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(captured)
        .try_init();
}
