use std::sync::Once;
use tracing_subscriber::{
    EnvFilter, field::MakeExt, layer::SubscriberExt, util::SubscriberInitExt,
};

const RUST_LOG: &str = "info";

static INIT: Once = Once::new();

/// Initialize logging.
///
/// Records from the `log` facade are forwarded into the subscriber. Calling this more than once
/// is a no-op.
pub fn init_tracing(name: &str) {
    INIT.call_once(|| init_logging(name));
}

fn init_logging(name: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        eprintln!("RUST_LOG is unset, using default: '{RUST_LOG}'");
        EnvFilter::new(RUST_LOG)
    });

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .map_fmt_fields(|f| f.debug_alt())
                .with_ansi(true)
                .with_level(true)
                .compact(),
        )
        .try_init();

    match result {
        Ok(()) => log::debug!("logging initialized for {name}"),
        Err(err) => eprintln!("Error initializing logging: {:?}", err),
    }
}
