use std::path::Path;

use crate::CliError;

/// Parse one metadata file, repairing it if needed, and print the result as JSON.
pub(crate) fn run_parse(file: &Path) -> Result<(), CliError> {
    let metadata = pitwall_lib::load_metadata(file)?;
    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}
