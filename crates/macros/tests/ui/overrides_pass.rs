//! Tests for the overrides attribute macro - successful cases.

use knack_macros::overrides;

pub struct Engine;

impl Engine {
    pub fn start(&self) -> u8 {
        1
    }

    pub fn idle() {}
}

pub struct TurboEngine;

impl TurboEngine {
    /// Instance method overriding an instance method.
    #[overrides(Engine)]
    pub fn start(&self) -> u8 {
        2
    }

    /// Associated function overriding an associated function.
    #[overrides(Engine)]
    pub fn idle() {}
}

pub trait Render {
    fn draw(&self) -> &'static str {
        "base"
    }
}

pub struct Canvas;

impl Render for Canvas {}

pub struct Sprite;

impl Sprite {
    /// The reference method comes from a trait in scope.
    #[overrides(Canvas)]
    pub fn draw(&self) -> &'static str {
        "sprite"
    }
}

fn main() {
    assert_eq!(Engine.start(), 1);
    assert_eq!(TurboEngine.start(), 2);
    TurboEngine::idle();
    assert_eq!(Canvas.draw(), "base");
    assert_eq!(Sprite.draw(), "sprite");
}
