use anyhow::{anyhow, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub fn file_stem(path: &Path) -> Result<&str> {
    path.file_stem()
        .ok_or_else(|| anyhow!("No file stem found: {}", path.display()))?
        .to_str()
        .ok_or_else(|| anyhow!("Can't convert file stem to string: {}", path.display()))
}

pub fn combine_path(directory: &Path, file_stem: &str, extension: &str) -> PathBuf {
    directory.join(format!("{}.{}", file_stem, extension))
}

pub fn write_file(target: &Path, data: &[u8]) -> Result<()> {
    fs::write(target, data)
        .with_context(|| format!("Could not write data to file: {}", target.display()))
}
