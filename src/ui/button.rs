use macroquad::prelude::*;

use super::Action;

/// Clickable panel button bound to a simulation action
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    action: Action,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, action: Action) -> Self {
        Self { x, y, width, height, action }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn contains(&self, (mx, my): (f32, f32)) -> bool {
        mx >= self.x && mx <= self.x + self.width && my >= self.y && my <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.contains(mouse_pos) {
            Color::from_rgba(60, 160, 90, 255)
        } else {
            Color::from_rgba(40, 110, 60, 255)
        };
        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 1.0, WHITE);

        let label = self.action.label();
        let size = measure_text(label, None, 20, 1.0);
        draw_text(
            label,
            self.x + (self.width - size.width) / 2.0,
            self.y + (self.height + size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
