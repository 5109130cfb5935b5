//! Tests for the Buildable derive macro - successful cases.

use knack_macros::Buildable;
use serde::{Deserialize, Serialize};

/// Plain struct: every field required.
#[derive(Debug, Buildable)]
pub struct Connection {
    pub host: String,
    pub port: u16,
}

/// Defaults in all three spellings plus an implicit Option.
#[derive(Debug, Buildable)]
pub struct Policy {
    #[builder(default)]
    pub retries: u32,
    #[builder(default = 250)]
    pub delay_ms: u64,
    #[builder(default = "immediate")]
    pub mode: String,
    pub note: Option<String>,
}

/// A custom serde-able field type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Buildable)]
pub struct Layout {
    pub window: Window,
    #[builder(default = Vec::new())]
    pub panes: Vec<String>,
}

fn main() {
    let connection = Connection::builder()
        .with_host("localhost")
        .with_port(5432u16)
        .build()
        .unwrap();
    assert_eq!(connection.host, "localhost");
    assert_eq!(connection.port, 5432);

    let policy = Policy::builder().build().unwrap();
    assert_eq!(policy.retries, 0);
    assert_eq!(policy.delay_ms, 250);
    assert_eq!(policy.mode, "immediate");
    assert_eq!(policy.note, None);

    let layout = Layout::builder()
        .with_window(Window {
            width: 80,
            height: 24,
        })
        .build()
        .unwrap();
    assert_eq!(layout.window.width, 80);
    assert!(layout.panes.is_empty());
}
