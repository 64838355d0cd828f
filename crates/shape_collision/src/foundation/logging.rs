//! Logging utilities

/// Initialize the logging system from `RUST_LOG`
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::try_init();
}

/// Initialize logging from `RUST_LOG`, falling back to `level` when unset
///
/// Safe to call more than once; later calls are ignored.
pub fn init_with_level(level: log::LevelFilter) {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_repeatable() {
        init();
        init();
        init_with_level(log::LevelFilter::Debug);
        log::debug!("logging initialized");
        // A global logger is now installed
        assert!(env_logger::try_init().is_err());
    }
}
