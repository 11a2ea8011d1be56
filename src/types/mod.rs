//! Core types for siteassist.

pub mod generation;
pub mod image;
pub mod message;
pub mod usage;

pub use generation::*;
pub use image::*;
pub use message::*;
pub use usage::*;
