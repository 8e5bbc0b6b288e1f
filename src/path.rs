//! String based path handling for `mtllib` and `map_d` resolution.
//!
//! Paths inside Wavefront files are written with either separator, so everything is
//! normalized to `/` before the directory component is taken.

use std::path::Path;

pub fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

/// Everything up to and including the last `/`, or `""` for a bare file name.
pub fn directory_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[..=i],
        None => "",
    }
}

/// Resolves `relative` against the directory of the file at `base`.
pub fn resolve_sibling(base: &str, relative: &str) -> String {
    format!("{}{}", directory_of(base), normalize(relative))
}

pub fn has_extension(path: &str, extension: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(extension))
}

/// File name without directory and extension.
pub fn file_stem(path: &str) -> &str {
    let name = &path[directory_of(path).len()..];
    match name.rfind('.') {
        Some(0) | None => name,
        Some(i) => &name[..i],
    }
}
