use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, written in config as e.g. `"bold white on #212529"`.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, spec)| {
                parse_style(&spec)
                    .map(|style| (key, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        "crossed" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}

/// Parse a style description: modifiers and a foreground colour, optionally
/// followed by `on <background>`.
pub fn parse_style(spec: &str) -> Result<Style, String> {
    let mut style = Style::default();
    let mut background = false;

    for word in spec.split_whitespace() {
        let word = word.to_ascii_lowercase();
        if word == "on" {
            background = true;
            continue;
        }
        if let Some(modifier) = parse_modifier(&word) {
            style = style.add_modifier(modifier);
            continue;
        }
        let color = Color::from_str(&word.replace("grey", "gray"))
            .map_err(|_| format!("Unknown colour `{word}` in style `{spec}`"))?;
        style = if background {
            style.bg(color)
        } else {
            style.fg(color)
        };
    }

    Ok(style)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_style_default() {
        assert_eq!(parse_style("").unwrap(), Style::default());
    }

    #[test]
    fn test_parse_style_foreground() {
        assert_eq!(
            parse_style("red").unwrap(),
            Style::default().fg(Color::Red)
        );
    }

    #[test]
    fn test_parse_style_background() {
        assert_eq!(
            parse_style("on blue").unwrap(),
            Style::default().bg(Color::Blue)
        );
    }

    #[test]
    fn test_parse_style_modifiers_and_hex() {
        assert_eq!(
            parse_style("bold white on #212529").unwrap(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0x21, 0x25, 0x29))
                .add_modifier(Modifier::BOLD)
        );
        assert_eq!(
            parse_style("underlined lightblue").unwrap(),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED)
        );
    }

    #[test]
    fn test_parse_style_grey_alias() {
        assert_eq!(
            parse_style("darkgrey").unwrap(),
            Style::default().fg(Color::DarkGray)
        );
    }

    #[test]
    fn test_parse_style_unknown_colour() {
        assert!(parse_style("bold mauve").is_err());
    }
}
