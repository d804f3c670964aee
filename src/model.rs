//! Pure state models
//!
//! Each model owns its state and changes only through `update`, driven by
//! its own `Message` type. Nothing here performs I/O.

pub mod deck;
pub mod gesture;
pub mod progress;
pub mod slide;

pub use deck::{Deck, GestureSettings};
pub use slide::{Slide, SlidePosition, Transform};
