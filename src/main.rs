// Entrypoint: set up logging, build the uploader and run it once.
// Per-record failures are only logged, so the process exits 0 unless the
// HTTP client itself cannot be built.

use bulk_upload_users::{config::Config, logging, upload::Uploader};

fn main() -> anyhow::Result<()> {
    logging::init();

    let uploader = Uploader::new(Config::from_env())?;
    uploader.run();
    Ok(())
}
