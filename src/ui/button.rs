use macroquad::prelude::*;

use crate::application::Control;

const LABEL_FONT_SIZE: u16 = 20;

/// Panel button that issues one [`Control`] when clicked
#[derive(Clone)]
pub struct Button {
    bounds: Rect,
    control: Control,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, control: Control) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
            control,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    pub const fn control(&self) -> Control {
        self.control
    }

    pub const fn label(&self) -> &'static str {
        self.control.label()
    }

    /// Y coordinate just below the button
    pub fn bottom(&self) -> f32 {
        self.bounds.bottom()
    }

    /// Top and left edges count as inside, bottom and right as outside
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.bounds.contains(Vec2::from(mouse_pos))
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let Rect { x, y, w, h } = self.bounds;
        let fill = if self.is_hovered(mouse_pos) { self.hover_color } else { self.color };
        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        // get_text_center is relative to the baseline origin
        let origin = self.bounds.center() - get_text_center(self.label(), None, LABEL_FONT_SIZE, 1.0, 0.0);
        draw_text(self.label(), origin.x, origin.y, f32::from(LABEL_FONT_SIZE), WHITE);
    }

    /// Left press this frame while the cursor is over the button
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos)
    }
}
