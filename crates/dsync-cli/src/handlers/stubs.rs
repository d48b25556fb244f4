use anyhow::Result;

/// Recognized commands whose behavior is still planned. They exit with the
/// usage/stub code so scripts can tell them apart from failures.
pub fn not_implemented(cmd: &str) -> Result<i32> {
    eprintln!("{cmd}: not implemented yet");
    Ok(2)
}
