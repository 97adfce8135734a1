//! Orchestration services above the NASA client.

pub mod hover;

pub use hover::HoverWatcher;
