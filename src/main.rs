use std::io;

use anyhow::Result;
use tracing::info;

use rookery_cli::Session;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries session output only.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("rookery starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    Session::new().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
