use error_stack::ResultExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use kernel::KernelError;

use crate::env;

const RUST_LOG: &str = "RUST_LOG";
const DEFAULT_FILTER: &str = "kernel=debug,application=debug,driver=debug";

/// Installs the global subscriber. The filter comes from `RUST_LOG` (also read from `.env`).
pub fn init_tracing() -> error_stack::Result<(), KernelError> {
    let filter = env(RUST_LOG).unwrap_or_else(|| DEFAULT_FILTER.into());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(filter))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .try_init()
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to install tracing subscriber")
}

#[cfg(test)]
mod test {
    use crate::logging::init_tracing;

    #[test]
    fn second_install_is_reported() {
        let _ = init_tracing();
        assert!(init_tracing().is_err());
    }
}
