mod button;

pub use button::Button;

// UI constants - functions below keep the layout responsive
use macroquad::prelude::{screen_height, screen_width};

use crate::application::Control;

pub const PANEL_WIDTH: f32 = 220.0;
pub const PANEL_PADDING: f32 = 10.0;
pub const BUTTON_HEIGHT: f32 = 36.0;

/// Vertical placement of the trace plot inside the panel
pub const TRACE_TOP: f32 = 30.0;
pub const TRACE_HEIGHT: f32 = 160.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Pixel size of one cell so the whole grid fits the grid area
pub fn cell_size(grid_size: usize) -> f32 {
    fit_cell_size(grid_area_width(), grid_area_height(), grid_size)
}

fn fit_cell_size(area_width: f32, area_height: f32, grid_size: usize) -> f32 {
    if grid_size == 0 {
        return 1.0;
    }
    (area_width.min(area_height) / grid_size as f32).max(1.0)
}

/// Create the Reset/Start/Stop buttons stacked under the trace plot
pub fn create_buttons() -> Vec<Button> {
    let x = panel_x() + PANEL_PADDING;
    let width = PANEL_WIDTH - 2.0 * PANEL_PADDING;
    let top = TRACE_TOP + TRACE_HEIGHT + 30.0;

    [Control::Reset, Control::Start, Control::Stop]
        .into_iter()
        .enumerate()
        .map(|(i, control)| Button::new(x, top + i as f32 * (BUTTON_HEIGHT + 10.0), width, BUTTON_HEIGHT, control))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size_fits_smaller_side() {
        assert_eq!(fit_cell_size(800.0, 600.0, 100), 6.0);
        assert_eq!(fit_cell_size(300.0, 900.0, 100), 3.0);
    }

    #[test]
    fn test_cell_size_never_below_one_pixel() {
        assert_eq!(fit_cell_size(500.0, 500.0, 2000), 1.0);
    }
}
