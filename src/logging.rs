//! Logger setup: `info` by default, overridable with `RUST_LOG`

pub fn setup_logging() {
    let mut builder = env_logger::Builder::new();

    builder.filter(None, log::LevelFilter::Info);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    if let Err(e) = builder.try_init() {
        eprintln!("Logger already initialised: {}", e);
    }
}
