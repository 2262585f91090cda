//! SHARC Site CLI Library
//!
//! Command implementations for resolving and checking the SHARC documentation
//! site configuration before it is handed to the external site generator.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (show, check)

pub mod cmd;

pub use sharc_site_core::SiteConfig;
pub use sharc_site_links::{LinkChecker, LinkReport};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
