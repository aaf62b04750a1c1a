use std::path::Path;

pub fn validate_file_exists(path: &str) -> Result<String, String> {
    let candidate = Path::new(path);
    if !candidate.exists() {
        Err(format!("Path does not exist: {path}"))
    } else if !candidate.is_file() {
        Err(format!("Not a file: {path}"))
    } else {
        Ok(path.to_string())
    }
}
