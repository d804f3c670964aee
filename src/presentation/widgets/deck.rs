//! Deck rendering
//!
//! At rest only the active slide is drawn. During a drag the active slide
//! and the entering neighbour are drawn with their transforms:
//! translation becomes a row offset (pointer units / `row_height`) and
//! scale becomes an inset on every side. Rows pushed outside the area are
//! clipped.

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use crate::model::{
    deck::Deck,
    slide::{Slide, Transform},
};
use crate::presentation::config::Styles;
use crate::presentation::widgets::SlideWidget;

pub struct DeckWidget<'a> {
    deck: &'a Deck,
    styles: &'a Styles,
    row_height: f64,
}

impl<'a> DeckWidget<'a> {
    pub fn new(deck: &'a Deck, styles: &'a Styles, row_height: f64) -> Self {
        Self {
            deck,
            styles,
            row_height,
        }
    }
}

/// Where a transformed slide lands in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    rows: i32,
    inset_x: u16,
    inset_y: u16,
}

impl Placement {
    fn resolve(transform: Option<&Transform>, area: Rect, row_height: f64) -> Self {
        let Some(transform) = transform else {
            return Self {
                rows: 0,
                inset_x: 0,
                inset_y: 0,
            };
        };
        let viewport = f64::from(area.height) * row_height;
        let rows = (transform.translate.resolve(viewport) / row_height).round() as i32;
        Self {
            rows,
            inset_x: inset(transform.scale, area.width),
            inset_y: inset(transform.scale, area.height),
        }
    }
}

/// Cells to trim from each side so `scale` of `length` remains; never grows
fn inset(scale: f64, length: u16) -> u16 {
    let shrink = ((1.0 - scale) * f64::from(length) / 2.0).round();
    let max = f64::from(length.saturating_sub(1) / 2);
    shrink.clamp(0.0, max) as u16
}

fn render_placed(slide: &Slide, styles: &Styles, placement: Placement, area: Rect, buf: &mut Buffer) {
    let inner = Rect {
        x: area.x + placement.inset_x,
        y: area.y + placement.inset_y,
        width: area.width - 2 * placement.inset_x,
        height: area.height - 2 * placement.inset_y,
    };
    let mut scratch = Buffer::empty(area);
    SlideWidget::new(slide, styles).render(inner, &mut scratch);

    for row in inner.top()..inner.bottom() {
        let target = i32::from(row) + placement.rows;
        if target < i32::from(area.top()) || target >= i32::from(area.bottom()) {
            continue;
        }
        let target = target as u16;
        for x in inner.left()..inner.right() {
            if let (Some(src), Some(dst)) = (scratch.cell((x, row)), buf.cell_mut((x, target))) {
                *dst = src.clone();
            }
        }
    }
}

impl Widget for DeckWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.is_empty() {
            return;
        }

        // Active slide first so the entering neighbour draws over it
        let mut visible: Vec<&Slide> = self
            .deck
            .slides()
            .iter()
            .filter(|slide| slide.is_active() || slide.transform().is_some())
            .collect();
        visible.sort_by_key(|slide| !slide.is_active());

        for slide in visible {
            let placement = Placement::resolve(slide.transform(), area, self.row_height);
            render_placed(slide, self.styles, placement, area, buf);
        }
    }
}
