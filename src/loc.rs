use std::path::Path;
use walkdir::WalkDir;

const SOURCE_EXTENSIONS: &[&str] = &[
    "rs", "ts", "tsx", "js", "jsx", "mjs", "py", "go", "java", "c", "h", "cc", "cpp", "hpp",
];

/// Total line count of recognized source files under `root`.
///
/// Fallback for the file-metadata artifact: when no CI step wrote a
/// `total_lines` figure, the engine can derive one from a configured source
/// root. Unreadable files (binary, permission) are skipped.
pub fn count_source_lines(root: &Path) -> u64 {
    let mut total = 0u64;
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let recognized = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| SOURCE_EXTENSIONS.contains(&ext));
        if !recognized {
            continue;
        }
        if let Ok(contents) = std::fs::read_to_string(path) {
            total += contents.lines().count() as u64;
        }
    }
    total
}
