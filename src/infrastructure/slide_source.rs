//! Slide file loading
//!
//! A slide file is plain text. Lines consisting of `---` separate slides,
//! a `# ` line sets the slide title and `<!-- active -->` marks the slide
//! to open first. Segments with no content are skipped.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{bail, Result, WrapErr};

use crate::model::slide::Slide;

const SEPARATOR: &str = "---";
const ACTIVE_MARKER: &str = "<!-- active -->";
const TITLE_PREFIX: &str = "# ";

/// Slides parsed from a file, plus the index of the marked slide if any
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSource {
    pub slides: Vec<Slide>,
    pub marked_active: Option<usize>,
}

impl SlideSource {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read slides from {}", path.display()))?;
        let source = Self::parse(&text)?;
        log::info!(
            "loaded {} slides from {}",
            source.slides.len(),
            path.display()
        );
        Ok(source)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut slides = Vec::new();
        let mut marked_active = None;

        for segment in split_segments(text) {
            let Some(parsed) = parse_segment(&segment) else {
                continue;
            };
            if parsed.active {
                match marked_active {
                    None => marked_active = Some(slides.len()),
                    Some(first) => log::warn!(
                        "slide {} is also marked active; keeping slide {}",
                        slides.len() + 1,
                        first + 1
                    ),
                }
            }
            slides.push(parsed.slide);
        }

        if slides.is_empty() {
            bail!("no slides found");
        }

        Ok(Self {
            slides,
            marked_active,
        })
    }

    /// `--start` wins over the file's marker; otherwise the first slide
    pub fn initial_index(&self, requested: Option<usize>) -> Option<usize> {
        requested.or(self.marked_active)
    }
}

fn split_segments(text: &str) -> Vec<Vec<&str>> {
    let mut segments = vec![Vec::new()];
    for line in text.lines() {
        if line.trim_end() == SEPARATOR {
            segments.push(Vec::new());
        } else if let Some(current) = segments.last_mut() {
            current.push(line);
        }
    }
    segments
}

struct ParsedSlide {
    slide: Slide,
    active: bool,
}

fn parse_segment(lines: &[&str]) -> Option<ParsedSlide> {
    let mut title = None;
    let mut active = false;
    let mut body = Vec::new();

    for line in lines {
        if line.trim() == ACTIVE_MARKER {
            active = true;
        } else if title.is_none() && line.starts_with(TITLE_PREFIX) {
            title = Some(line[TITLE_PREFIX.len()..].trim().to_owned());
        } else {
            body.push(line.trim_end().to_owned());
        }
    }

    // Blank lines around the separators are layout, not content
    while body.first().is_some_and(|line| line.is_empty()) {
        body.remove(0);
    }
    while body.last().is_some_and(|line| line.is_empty()) {
        body.pop();
    }

    if title.is_none() && body.is_empty() {
        return None;
    }
    Some(ParsedSlide {
        slide: Slide::new(title, body),
        active,
    })
}
