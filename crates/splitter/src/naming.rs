use std::path::{Path, PathBuf};

use crate::mode::SplitMode;

/// Directory the parts go to when none is given: the source's own directory.
pub fn default_outdir(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Destination path for every part, in part order.
///
/// Names are `prefix + name + ext`, where `name` is the explicit name in
/// rename mode or the source stem followed by the 1-based part index, and
/// `ext` is the source extension (with its dot) if it has one.
pub fn output_paths(mode: &SplitMode, source: &Path, outdir: &Path, prefix: &str) -> Vec<PathBuf> {
    let ext = source
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let names: Vec<String> = match mode {
        SplitMode::ByNames(names) => names.clone(),
        SplitMode::ByCount(n) => {
            let stem = source
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            (1..=*n).map(|i| format!("{}{}", stem, i)).collect()
        }
    };

    names
        .into_iter()
        .map(|name| outdir.join(format!("{}{}{}", prefix, name, ext)))
        .collect()
}
