//! Domain types shared across the viewport engine, the NASA client and the
//! HTTP layer.

pub mod event;
pub mod starfield;

pub use event::*;
pub use starfield::*;
