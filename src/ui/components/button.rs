//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Spinner frames shown while an action is in progress
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
/// Ticks each spinner frame stays on screen
const TICKS_PER_FRAME: usize = 6;

/// Render a generic button with border, tinted with `accent` when enabled
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
    accent: Option<Color>,
) {
    let border_style = match (is_selected, accent) {
        (true, _) => Style::default().fg(Color::Cyan),
        (false, Some(color)) if is_enabled => Style::default().fg(color),
        _ => Style::default().fg(Color::DarkGray),
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render the primary submit button.
///
/// Green when enabled, grey when disabled, and a spinner in place of the
/// label while `is_busy`.
pub fn render_submit_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    is_enabled: bool,
    is_busy: bool,
    tick: usize,
) {
    if !is_busy {
        let content = if is_enabled && is_selected {
            format!("▶ {label}")
        } else {
            label.to_string()
        };
        render_button(
            frame,
            area,
            &content,
            is_selected,
            is_enabled,
            Some(Color::Green),
        );
        return;
    }

    let content = spinner_frame(tick);
    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}

/// Spinner glyph for the given frame counter
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[(tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        let cycle = TICKS_PER_FRAME * SPINNER_FRAMES.len();
        assert_eq!(spinner_frame(0), spinner_frame(cycle));
        assert_eq!(spinner_frame(0), spinner_frame(1));
        assert_ne!(spinner_frame(0), spinner_frame(TICKS_PER_FRAME));
    }

    #[test]
    fn test_spinner_handles_large_ticks() {
        let _ = spinner_frame(usize::MAX);
    }
}
