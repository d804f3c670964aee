//! Slide deck controller
//!
//! Owns the ordered slides and the cursor on the active one, and turns
//! vertical drag gestures into slide transitions:
//! - while dragging, the active slide and its neighbour in the drag
//!   direction get a transform derived from the live displacement
//! - on release, the cursor moves by one if the displacement exceeded
//!   the commit threshold and a neighbour exists
//! - every release settles the deck: classifications are recomputed and
//!   all transforms are cleared
//!
//! The deck is never empty, and at rest exactly one slide is active.

use color_eyre::eyre::{bail, Result};

use super::{
    gesture::{self, Gesture, Outcome},
    progress::Progress,
    slide::{Slide, SlidePosition, Transform, Translate},
};

/// Tunables for drag feedback and commit decisions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    /// Minimum |displacement| (exclusive) for a release to change slides
    pub commit_threshold: f64,
    /// Displacement at which the scale delta reaches 1.0
    pub scale_divisor: f64,
    /// Scale of a neighbour slide before it starts entering
    pub entering_scale: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            commit_threshold: 100.0,
            scale_divisor: 2000.0,
            entering_scale: 0.95,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    GestureStarted { y: f64 },
    GestureMoved { y: f64 },
    GestureEnded,
    NextSlideRequested,
    PreviousSlideRequested,
}

/// Result of a settle: the cursor before and after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    pub from: usize,
    pub to: usize,
}

impl Settled {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    slides: Vec<Slide>,
    current_index: usize,
    gesture: Gesture,
    settings: GestureSettings,
}

impl Deck {
    /// Build a deck with the cursor at `initial_index` (0 when `None`).
    ///
    /// An index past the end is clamped to the last slide.
    pub fn new(
        slides: Vec<Slide>,
        initial_index: Option<usize>,
        settings: GestureSettings,
    ) -> Result<Self> {
        if slides.is_empty() {
            bail!("a deck needs at least one slide");
        }

        let last = slides.len() - 1;
        let current_index = match initial_index {
            Some(index) if index > last => {
                tracing::warn!(index, last, "initial slide out of range, clamping");
                last
            }
            Some(index) => index,
            None => 0,
        };

        let mut deck = Self {
            slides,
            current_index,
            gesture: Gesture::Idle,
            settings,
        };
        deck.settle();
        Ok(deck)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current_index]
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.current_index, self.slides.len())
    }

    fn has_next(&self) -> bool {
        self.current_index + 1 < self.slides.len()
    }

    fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Apply a message. Returns `Some` whenever the deck settled.
    pub fn update(&mut self, message: Message) -> Option<Settled> {
        match message {
            Message::GestureStarted { y } => {
                self.gesture.update(gesture::Message::Started { y });
                None
            }
            Message::GestureMoved { y } => {
                if let Outcome::Displaced(diff_y) =
                    self.gesture.update(gesture::Message::Moved { y })
                {
                    self.apply_drag(diff_y);
                }
                None
            }
            Message::GestureEnded => match self.gesture.update(gesture::Message::Ended) {
                Outcome::Released(diff_y) => Some(self.release(diff_y)),
                _ => None,
            },
            Message::NextSlideRequested => self.step(|deck| {
                if deck.has_next() {
                    deck.current_index += 1;
                }
            }),
            Message::PreviousSlideRequested => self.step(|deck| {
                if deck.has_previous() {
                    deck.current_index -= 1;
                }
            }),
        }
    }

    fn step(&mut self, advance: impl FnOnce(&mut Self)) -> Option<Settled> {
        if self.gesture.is_dragging() {
            tracing::debug!("ignoring keyboard navigation during a drag");
            return None;
        }
        let from = self.current_index;
        advance(self);
        Some(self.finish(from))
    }

    fn release(&mut self, diff_y: f64) -> Settled {
        let from = self.current_index;
        if diff_y.abs() > self.settings.commit_threshold {
            if diff_y > 0.0 && self.has_next() {
                self.current_index += 1;
            } else if diff_y < 0.0 && self.has_previous() {
                self.current_index -= 1;
            }
        }
        self.finish(from)
    }

    fn finish(&mut self, from: usize) -> Settled {
        self.settle();
        let settled = Settled {
            from,
            to: self.current_index,
        };
        tracing::debug!(
            from = settled.from,
            to = settled.to,
            progress = self.progress().percent(),
            "deck settled"
        );
        settled
    }

    /// Recompute the transforms for a live displacement.
    ///
    /// Only `diff_y` is used, so repeating a move with the same pointer
    /// position yields the same transforms.
    fn apply_drag(&mut self, diff_y: f64) {
        for slide in &mut self.slides {
            slide.clear_transform();
        }

        let neighbour = if diff_y > 0.0 && self.has_next() {
            Some((self.current_index + 1, 1.0))
        } else if diff_y < 0.0 && self.has_previous() {
            Some((self.current_index - 1, -1.0))
        } else {
            None
        };
        let Some((neighbour_index, viewport)) = neighbour else {
            return;
        };

        let delta = diff_y.abs() / self.settings.scale_divisor;
        let leaving = Transform {
            translate: Translate::by(-diff_y),
            scale: 1.0 - delta,
        };
        let entering = Transform {
            translate: Translate::from_viewport(viewport, -diff_y),
            scale: self.settings.entering_scale + delta,
        };
        self.slides[self.current_index].set_transform(leaving);
        self.slides[neighbour_index].set_transform(entering);
    }

    /// Classify every slide against the cursor and clear all transforms
    fn settle(&mut self) {
        let current_index = self.current_index;
        for (index, slide) in self.slides.iter_mut().enumerate() {
            slide.set_position(SlidePosition::classify(index, current_index));
            slide.clear_transform();
        }
    }
}
