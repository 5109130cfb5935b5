//! Caller-relative location macros.

/// The calling crate's manifest directory as a `&'static Path`.
///
/// Expands `env!("CARGO_MANIFEST_DIR")` at the call site, so each crate
/// sees its own directory — the closest Rust analogue of "the directory
/// this script lives in".
#[macro_export]
macro_rules! manifest_dir {
    () => {
        ::std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
    };
}

/// The directory of the calling source file, as compiled into `file!()`.
///
/// The result is relative to the directory the crate was compiled from and
/// is intended for diagnostics, not for opening files — use
/// [`manifest_dir!`] / [`resource_path!`] for that.
#[macro_export]
macro_rules! source_dir {
    () => {
        ::std::path::Path::new(file!())
            .parent()
            .unwrap_or_else(|| ::std::path::Path::new("."))
    };
}

/// A path under the calling crate's manifest directory, normalized.
///
/// ```rust
/// let manifest = knack_fs::resource_path!("Cargo.toml");
/// assert!(manifest.is_file());
/// ```
#[macro_export]
macro_rules! resource_path {
    ($relative:expr) => {
        $crate::normalize(&$crate::manifest_dir!().join($relative))
    };
}

/// Opens a file under the calling crate's manifest directory, read-only.
///
/// Returns [`FsResult<File>`](crate::FsResult); a missing file surfaces as
/// [`FsError::NotFound`](crate::FsError::NotFound) carrying the resolved
/// path.
#[macro_export]
macro_rules! open_resource {
    ($relative:expr) => {
        $crate::open_relative($crate::manifest_dir!(), $relative)
    };
}
