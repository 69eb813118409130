use env_logger::Env;

/// Install the global logger. Filtering defaults to `info` and follows
/// `RUST_LOG` when set. Calling this more than once is a no-op.
pub fn init_logging() {
    let env = Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}
