//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod splash;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match &app.state.current_view {
        View::Splash => {
            if let Some(splash_state) = &app.splash_state {
                splash::draw(frame, area, splash_state);
            }
        }
        View::Form => {
            let (main_area, status_area) = layout::create_layout(area);
            forms::draw_registration(frame, main_area, app);
            layout::draw_status_bar(frame, status_area, app);
        }
    }

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, app.state.errors.len() - 1);
    }
}
