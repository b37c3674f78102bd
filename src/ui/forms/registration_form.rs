//! Registration form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use crate::validation::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

/// Maximum width of the form column
const FORM_WIDTH: u16 = 64;

/// Draw the registration form centered in `area`
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let form_area = centered_column(area, FORM_WIDTH);

    let block = Block::default()
        .title(Line::from(Span::styled(
            " Formulário ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )))
        .title_bottom(Line::from(Span::styled(
            format!(" validação: {} ", form.profile()),
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let mut constraints: Vec<Constraint> = FieldId::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let locked = form.is_submitting();
    for field in form.fields() {
        let is_active = form.active_field_index == field.id.index();
        draw_field(frame, chunks[field.id.index()], field, is_active, locked);
    }

    render_submit_button(
        frame,
        chunks[FieldId::ALL.len()],
        "Enviar",
        form.is_submit_row_active(),
        form.can_submit(),
        locked,
        app.tick,
    );
}

/// Horizontally center a column of at most `width` cells
fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_column_narrower_than_area() {
        let area = Rect::new(0, 0, 100, 30);
        let column = centered_column(area, 64);
        assert_eq!(column, Rect::new(18, 0, 64, 30));
    }

    #[test]
    fn test_centered_column_clamps_to_area() {
        let area = Rect::new(2, 1, 40, 30);
        let column = centered_column(area, 64);
        assert_eq!(column, Rect::new(2, 1, 40, 30));
    }
}
