use std::cmp::Ordering;
use std::fmt;

/// Where a slide sits relative to the deck cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlidePosition {
    /// The slide under the cursor
    Active,
    /// A slide after the cursor
    #[default]
    Upcoming,
    /// A slide before the cursor
    Elapsed,
}

impl SlidePosition {
    /// Classify `index` against the cursor
    pub fn classify(index: usize, current_index: usize) -> Self {
        match index.cmp(&current_index) {
            Ordering::Equal => SlidePosition::Active,
            Ordering::Greater => SlidePosition::Upcoming,
            Ordering::Less => SlidePosition::Elapsed,
        }
    }
}

/// Vertical translation as `viewport * 100% + offset` pointer units
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Translate {
    /// Fraction of the viewport height (-1.0 above, 0.0 in place, 1.0 below)
    pub viewport: f64,
    /// Extra offset in pointer units
    pub offset: f64,
}

impl Translate {
    pub fn by(offset: f64) -> Self {
        Self {
            viewport: 0.0,
            offset,
        }
    }

    pub fn from_viewport(viewport: f64, offset: f64) -> Self {
        Self { viewport, offset }
    }

    /// Resolve against a concrete viewport height, in the same unit as `offset`
    pub fn resolve(&self, viewport_height: f64) -> f64 {
        self.viewport * viewport_height + self.offset
    }
}

/// Transient visual transform applied to a slide during a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Translate,
    pub scale: f64,
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Translate { viewport, offset } = self.translate;
        if viewport == 0.0 {
            write!(f, "translateY({offset}px)")?;
        } else {
            let sign = if offset < 0.0 { '-' } else { '+' };
            write!(
                f,
                "translateY(calc({}% {sign} {}px))",
                viewport * 100.0,
                offset.abs()
            )?;
        }
        write!(f, " scale({})", self.scale)
    }
}

/// One unit of content in the deck
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slide {
    title: Option<String>,
    body: Vec<String>,
    position: SlidePosition,
    transform: Option<Transform>,
}

impl Slide {
    pub fn new(title: Option<String>, body: Vec<String>) -> Self {
        Self {
            title,
            body,
            position: SlidePosition::default(),
            transform: None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    pub fn position(&self) -> SlidePosition {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.position == SlidePosition::Active
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    pub(crate) fn set_position(&mut self, position: SlidePosition) {
        self.position = position;
    }

    pub(crate) fn set_transform(&mut self, transform: Transform) {
        self.transform = Some(transform);
    }

    pub(crate) fn clear_transform(&mut self) {
        self.transform = None;
    }
}
