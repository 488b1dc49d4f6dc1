//! Telemetry helpers for applications embedding `chart-gallery`.
//!
//! Tracing setup stays explicit and opt-in. Hosts either call
//! `init_default_tracing` or wire their own `tracing` subscriber.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or when the host application
/// already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
