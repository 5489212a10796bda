use anyhow::Result;
use tracing::info;

use kibitz_text::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("kibitz starting");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new().run(stdin.lock(), stdout.lock())?;
    Ok(())
}
