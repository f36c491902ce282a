use crate::error::StackTrace;
use crate::handler::Handler;
use crate::menu::Console;
use error_stack::ResultExt;
use kernel::KernelError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod controller;
mod error;
mod handler;
mod menu;
mod operation;
mod prompt;
mod request;
mod response;

fn main() -> Result<(), StackTrace> {
    let log_dir = dotenvy::var("LHMS_LOG_DIR").unwrap_or_else(|_| "./logs/".into());
    let appender = tracing_appender::rolling::daily(std::path::Path::new(&log_dir), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    dotenvy::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
                )),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let handler = Handler::init()?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Console::new(handler, stdin.lock(), stdout.lock())
        .run()
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Lost the operator console")?;

    Ok(())
}
