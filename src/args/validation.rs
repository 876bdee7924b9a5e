use std::path::PathBuf;

/// # Errors
///
/// Will return `Err` if the path is not a readable directory
pub fn check_readable_dir(dir: &str) -> Result<String, String> {
    let path = PathBuf::from(dir);
    if !path.is_dir() {
        return Err(format!("The static asset directory '{dir}' is not readable."));
    }
    Ok(dir.to_string())
}
