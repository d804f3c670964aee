//! Reusable widgets

pub mod deck;
pub mod hint;
pub mod progress_bar;
pub mod slide;

pub use deck::DeckWidget;
pub use hint::HintWidget;
pub use progress_bar::ProgressBarWidget;
pub use slide::SlideWidget;
