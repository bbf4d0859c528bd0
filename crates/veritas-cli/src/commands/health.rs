//! Health command implementation.

use crate::error::Result;
use crate::output::Formatter;
use veritas_sdk::VeritasClient;

/// Execute the health command.
pub async fn execute_health(client: &VeritasClient, formatter: &Formatter) -> Result<()> {
    let health = client.health().await?;
    println!("{}", formatter.format_health(client.base_url(), &health)?);
    Ok(())
}
