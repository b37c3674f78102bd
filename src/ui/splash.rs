//! Loading screen shown until the form is ready

use crate::state::SplashState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

/// Draw the loading gate
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let width = 40u16.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + area.height.saturating_sub(3) / 2;

    let title_area = Rect {
        x,
        y,
        width,
        height: 1,
    };
    let title = Paragraph::new(Line::from(Span::styled(
        "Formulário de Cadastro",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let gauge_area = Rect {
        x,
        y: (y + 2).min(area.bottom().saturating_sub(1)),
        width,
        height: 1,
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
        .ratio(f64::from(splash_state.progress.clamp(0.0, 1.0)))
        .label("Carregando...");
    frame.render_widget(gauge, gauge_area);

    // Skip hint at the bottom
    if area.height > 4 {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Pressione qualquer tecla para pular",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        let hint_area = Rect {
            x: area.x,
            y: area.bottom() - 2,
            width: area.width,
            height: 1,
        };
        frame.render_widget(hint, hint_area);
    }
}
