use std::path::PathBuf;

/// Accept a directory that exists, or one that can be created later because
/// nothing else is in the way.
///
/// # Errors
///
/// Will return `Err` if the path exists and is not a directory
pub fn check_output_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);
    if path.exists() && !path.is_dir() {
        return Err(format!("The output location '{dir}' is not a directory."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the parent directory does not exist or the path is a directory
pub fn check_parent_dir_is_writeable(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if path.is_dir() {
        return Err(format!("The json output '{file}' is a directory."));
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !parent.is_dir() {
        return Err(format!(
            "The directory for the json output '{file}' does not exist."
        ));
    }
    let readonly = std::fs::metadata(&parent)
        .map(|meta| meta.permissions().readonly())
        .unwrap_or(true);
    if readonly {
        return Err(format!(
            "The directory for the json output '{file}' is not writeable."
        ));
    }
    Ok(path)
}
