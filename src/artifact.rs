use std::{fs, io, path::Path};

/// Writes `bytes` to `path`, creating missing parent directories and replacing
/// whatever was there before.
pub fn write(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, bytes)
}
