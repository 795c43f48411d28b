use std::io::Write;

use env_logger::{Builder, Env, Target};

/// Route diagnostics to stdout as plain lines, e.g. `WARN: Skipping malformed line 3 in ...`
///
/// `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        })
        .init();
}
