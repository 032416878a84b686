// src/process/utils.rs
use std::path::{Path, PathBuf};

pub const OUTPUT_EXTENSION: &str = "txt";

/// Characters that are path separators or reserved on common filesystems.
const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|', '\0'];

/// Replace every ASCII space with `_`. Nothing else is touched.
pub fn sanitize_for_filename(value: &str) -> String {
    value.replace(' ', "_")
}

/// `<out_dir>/<sanitized value>.txt`, built by appending to `out_dir`.
///
/// A value starting with `/` stays under `out_dir` (`data//x.txt`) instead of
/// replacing it the way `Path::join` does with an absolute argument.
pub fn output_path<P: AsRef<Path>>(out_dir: P, value: &str) -> PathBuf {
    let mut path = out_dir.as_ref().as_os_str().to_os_string();
    path.push("/");
    path.push(sanitize_for_filename(value));
    path.push(".");
    path.push(OUTPUT_EXTENSION);
    PathBuf::from(path)
}

/// Reserved characters present in `value`, in order of appearance, without repeats.
/// Such values still go through `sanitize_for_filename` unchanged; callers only warn.
pub fn reserved_chars(value: &str) -> Vec<char> {
    let mut found = Vec::new();
    for c in value.chars() {
        if (RESERVED.contains(&c) || c.is_control()) && !found.contains(&c) {
            found.push(c);
        }
    }
    found
}
