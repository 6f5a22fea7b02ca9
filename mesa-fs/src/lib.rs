//! Capability-based file access for listing inputs and report outputs.
//!
//! Paths arrive from the command line as plain strings; these helpers split
//! each one into an ambient anchor directory and a relative remainder, then
//! perform every operation through a `cap-std` directory handle.
#![forbid(unsafe_code)]

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing UTF-8 file path for reading.
///
/// # Errors
/// Returns the underlying I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create or truncate a file for writing, creating missing parent directories.
///
/// # Errors
/// Returns the underlying I/O error when a directory or the file cannot be
/// created, or when `path` has no file name.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = parent_dir_and_name(path)?;
    dir.create(name)
}

/// Report whether `path` names an existing regular file.
///
/// A missing file or parent directory yields `Ok(false)`.
///
/// # Errors
/// Returns other I/O errors, such as permission failures, unchanged.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = match parent_dir_and_name(path) {
        Ok(found) => found,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    };
    match dir.metadata(name.as_str()) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Create every missing directory above `path`.
///
/// # Errors
/// Returns the underlying I/O error when a directory cannot be created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let (anchor, relative) = split_anchor(parent);
    if relative.as_str().is_empty() {
        return Ok(());
    }
    fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?.create_dir_all(&relative)
}

/// Open the directory containing `path` and return it with the file name.
fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split a path into its leading anchor and the remainder below it.
///
/// The anchor holds any prefix, root, `.` and `..` components; `cap-std`
/// refuses to traverse those from inside a directory handle. Relative paths
/// with no such components are anchored at `.`.
fn split_anchor(path: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let mut components = path.components().peekable();
    let mut anchor = Utf8PathBuf::new();
    while let Some(component) = components.next_if(|component| {
        matches!(
            component,
            Utf8Component::Prefix(_)
                | Utf8Component::RootDir
                | Utf8Component::CurDir
                | Utf8Component::ParentDir
        )
    }) {
        anchor.push(component);
    }
    if anchor.as_str().is_empty() {
        anchor.push(".");
    }
    (anchor, components.collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::io::{Read, Write};
    use tempfile::TempDir;

    #[fixture]
    fn workdir() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path");
        (dir, root)
    }

    #[rstest]
    #[case("data/listings.csv", ".", "data/listings.csv")]
    #[case("../shared/out", "..", "shared/out")]
    #[case("./reports", ".", "reports")]
    #[case("/var/tmp/mesa", "/", "var/tmp/mesa")]
    fn split_anchor_separates_traversal(
        #[case] input: &str,
        #[case] anchor: &str,
        #[case] relative: &str,
    ) {
        let (found_anchor, found_relative) = split_anchor(Utf8Path::new(input));
        assert_eq!(found_anchor, Utf8PathBuf::from(anchor));
        assert_eq!(found_relative, Utf8PathBuf::from(relative));
    }

    #[rstest]
    fn create_then_open_round_trips_contents(workdir: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workdir;
        let target = root.join("nested/deeper/report.json");

        let mut file = create_utf8_file(&target).expect("create report");
        file.write_all(b"{}").expect("write report");
        drop(file);

        let mut contents = String::new();
        open_utf8_file(&target)
            .expect("open report")
            .read_to_string(&mut contents)
            .expect("read report");
        assert_eq!(contents, "{}");
        assert!(is_regular_file(&target).expect("stat report"));
    }

    #[rstest]
    fn missing_paths_are_not_regular_files(workdir: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workdir;
        assert!(!is_regular_file(&root.join("absent.csv")).expect("stat absent"));
        assert!(!is_regular_file(&root.join("no/such/dir.csv")).expect("stat absent dir"));
        assert!(!is_regular_file(&root).expect("stat directory"));
    }
}
