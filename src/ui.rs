use ratatui::{prelude::*, widgets::*};

use crate::models::Character;

/// Color for a character status label.
///
/// Three recognized values, everything else gets the neutral fallback.
pub fn status_color(status: &str) -> Color {
    match status {
        "ALIVE" => Color::Green,
        "DEAD" => Color::Red,
        "UNKNOWN" => Color::Yellow,
        _ => Color::Gray,
    }
}

/// Color for a character species label.
///
/// Two recognized values, everything else gets the neutral fallback.
pub fn species_color(species: &str) -> Color {
    match species {
        "HUMAN" => Color::Cyan,
        "MONSTER" => Color::Magenta,
        _ => Color::Gray,
    }
}

/// The lines of one list row: 1-based position, name, gender, color-coded
/// status and species, and the avatar URL (placeholder substituted).
pub fn character_lines(position: usize, character: &Character) -> Vec<Line<'static>> {
    let title = Line::from(vec![
        Span::styled(
            format!("{:>3} ", position),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            character.name.clone(),
            Style::default().fg(Color::White).bold(),
        ),
        Span::styled(
            format!("  ({})", character.gender),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let detail = Line::from(vec![
        Span::raw("    Status: "),
        Span::styled(
            character.status.clone(),
            Style::default().fg(status_color(&character.status)),
        ),
        Span::raw("  Species: "),
        Span::styled(
            character.species.clone(),
            Style::default().fg(species_color(&character.species)),
        ),
    ]);

    let avatar = Line::from(Span::styled(
        format!("    {}", character.image_url()),
        Style::default().fg(Color::DarkGray),
    ));

    vec![title, detail, avatar]
}

/// Build one row of the character list
pub fn character_row(position: usize, character: &Character) -> ListItem<'static> {
    ListItem::new(character_lines(position, character))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PLACEHOLDER_IMAGE_URL;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color("ALIVE"), Color::Green);
        assert_eq!(status_color("DEAD"), Color::Red);
        assert_eq!(status_color("UNKNOWN"), Color::Yellow);
        assert_eq!(status_color("CRYOGENIC"), Color::Gray);
        assert_eq!(status_color(""), Color::Gray);
    }

    #[test]
    fn test_species_colors() {
        assert_eq!(species_color("HUMAN"), Color::Cyan);
        assert_eq!(species_color("MONSTER"), Color::Magenta);
        assert_eq!(species_color("ROBOT"), Color::Gray);
        assert_eq!(species_color("MUTANT"), Color::Gray);
    }

    #[test]
    fn test_row_shows_one_based_position_and_placeholder() {
        let fry = Character {
            id: 1,
            name: String::from("Fry"),
            gender: String::from("Male"),
            species: String::from("HUMAN"),
            status: String::from("ALIVE"),
            image: None,
        };
        let lines = character_lines(1, &fry);
        assert_eq!(lines.len(), 3);
        assert!(line_text(&lines[0]).contains("  1 "));
        assert!(line_text(&lines[0]).contains("Fry"));
        assert!(line_text(&lines[1]).contains("ALIVE"));
        assert!(line_text(&lines[1]).contains("HUMAN"));
        assert!(line_text(&lines[2]).contains(PLACEHOLDER_IMAGE_URL));
    }

    #[test]
    fn test_status_span_carries_its_color() {
        let nibbler = Character {
            id: 13,
            name: String::from("Nibbler"),
            gender: String::from("Male"),
            species: String::from("MONSTER"),
            status: String::from("UNKNOWN"),
            image: Some(String::from("https://example.com/nibbler.png")),
        };
        let lines = character_lines(13, &nibbler);
        let detail = &lines[1];
        let status_span = detail.spans.iter().find(|s| s.content == "UNKNOWN").unwrap();
        assert_eq!(status_span.style.fg, Some(Color::Yellow));
        let species_span = detail.spans.iter().find(|s| s.content == "MONSTER").unwrap();
        assert_eq!(species_span.style.fg, Some(Color::Magenta));
    }
}
