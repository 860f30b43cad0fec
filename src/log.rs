/// Initialize logging for the puzzle engine.
///
/// Respects `debug_enabled` for the default level; an explicit `RUST_LOG`
/// overrides it. Timestamps and module paths are suppressed to keep the
/// CLI's stderr diagnostics readable.
pub fn init_logger(debug_enabled: bool) {
    use std::env;

    let level = if debug_enabled {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
    log::debug!("logger initialized at {level:?} level");
}
