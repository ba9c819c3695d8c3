// Process-wide logger, set up once at startup. Lines go to stdout as
// `<timestamp> <LEVEL> <message>`; RUST_LOG overrides the default `info`.

use env_logger::{Builder, Env, Target};
use std::io::Write;

pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        })
        .init();
}
