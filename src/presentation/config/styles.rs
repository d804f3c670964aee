use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"slide.title": "bold yellow"`
#[derive(Clone, Debug, Default, PartialEq, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style for `key`, or the default style when it is not configured
    pub fn get_or_default(&self, key: &str) -> Style {
        self.0.get(key).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, raw)| {
                parse_style(&raw)
                    .map(|style| (key, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(Styles(styles))
    }
}

/// Parse `"[modifiers] [fg] [on bg]"`, e.g. `"bold white on blue"`
pub fn parse_style(line: &str) -> Result<Style, String> {
    let (foreground, background) = match line.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => match line.strip_prefix("on ") {
            Some(bg) => ("", Some(bg)),
            None => (line, None),
        },
    };

    let mut style = Style::default();
    let mut color_words = Vec::new();
    for word in foreground.split_whitespace() {
        match parse_modifier(word) {
            Some(modifier) => style = style.add_modifier(modifier),
            None => color_words.push(word),
        }
    }
    // Color names may span words, e.g. "dark gray"
    if !color_words.is_empty() {
        style = style.fg(parse_color(&color_words.join(" "))?);
    }
    if let Some(background) = background {
        style = style.bg(parse_color(background.trim())?);
    }
    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underlined" => Some(Modifier::UNDERLINED),
        "reversed" => Some(Modifier::REVERSED),
        _ => None,
    }
}

fn parse_color(word: &str) -> Result<Color, String> {
    Color::from_str(word).map_err(|_| format!("Unknown color `{word}`"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", Style::default())]
    #[case("red", Style::default().fg(Color::Red))]
    #[case("bold yellow", Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow))]
    #[case("white on blue", Style::default().fg(Color::White).bg(Color::Blue))]
    #[case("on dark gray", Style::default().bg(Color::DarkGray))]
    #[case("dark gray", Style::default().fg(Color::DarkGray))]
    #[case("bold light blue on dark gray", Style::default().add_modifier(Modifier::BOLD).fg(Color::LightBlue).bg(Color::DarkGray))]
    #[case("dim #ff8800", Style::default().add_modifier(Modifier::DIM).fg(Color::Rgb(0xff, 0x88, 0x00)))]
    fn test_parse_style(#[case] raw: &str, #[case] expected: Style) {
        assert_eq!(parse_style(raw), Ok(expected));
    }

    #[test]
    fn test_parse_style_unknown_color() {
        assert!(parse_style("blurple").is_err());
    }

    #[test]
    fn test_bundled_default_styles_parse() {
        let styles: Styles =
            json5::from_str(r#"{ "slide.border": "dark gray", "hint": "dim" }"#)
                .expect("default styles parse");
        assert_eq!(
            styles.get_or_default("slide.border"),
            Style::default().fg(Color::DarkGray)
        );
    }

    #[test]
    fn test_get_or_default() {
        let styles: Styles =
            json5::from_str(r#"{ "progress": "green on black" }"#).expect("valid styles");
        assert_eq!(
            styles.get_or_default("progress"),
            Style::default().fg(Color::Green).bg(Color::Black)
        );
        assert_eq!(styles.get_or_default("missing"), Style::default());
    }
}
