//! Adapter operation - run the selected worker.

use patterns_core::{Console, Result, adapter::workers};

/// Execute the adapter demo.
///
/// Builds the worker registered under `value` and writes its response.
pub fn adapter(value: &str, console: &mut dyn Console) -> Result<()> {
    let target = workers().select(value)?;
    console.line(&target.request());
    Ok(())
}
