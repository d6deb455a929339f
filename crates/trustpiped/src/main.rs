use anyhow::Result;
use tracing::Level;

use trustpipe_core::init_tracing;

fn main() -> Result<()> {
    init_tracing(false, Level::INFO);

    tracing::info!(version = trustpipe_core::VERSION, "trustpiped stub started");
    Ok(())
}
