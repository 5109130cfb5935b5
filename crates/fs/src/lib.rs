//! # knack-fs
//!
//! Path helpers for code that ships resources next to itself.
//!
//! Locating a file "relative to the caller" is a macro concern in Rust —
//! `file!()` and `env!("CARGO_MANIFEST_DIR")` expand where they are
//! written, so [`manifest_dir!`] and [`source_dir!`] report the *calling*
//! crate and source file:
//!
//! ```rust,ignore
//! let fixtures = knack_fs::resource_path!("tests/fixtures");
//! let file = knack_fs::open_resource!("config/defaults.toml")?;
//! ```
//!
//! For lookups across several directories, [`SearchPath`] holds an ordered
//! list and returns the first hit:
//!
//! ```rust,ignore
//! let mut search = knack_fs::SearchPath::new();
//! search.push(system_dir);
//! search.insert_front(user_dir); // user files win
//! let theme = search.resolve("theme.toml");
//! ```

mod macros;
pub mod path;
pub mod search;

pub use path::{FsError, FsResult, normalize, open_relative};
pub use search::SearchPath;
