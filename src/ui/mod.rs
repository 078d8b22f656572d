mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
const BUTTON_GAP: f32 = 8.0;
const BUTTONS_TOP: f32 = 20.0;

/// What a control asks the simulation to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Play,
    Stop,
    RandomDense,
    RandomSparse,
    Shapes,
    Clear,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Play,
        Action::Stop,
        Action::RandomDense,
        Action::RandomSparse,
        Action::Shapes,
        Action::Clear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::Play => "Play",
            Action::Stop => "Stop",
            Action::RandomDense => "Random 30%",
            Action::RandomSparse => "Random 10%",
            Action::Shapes => "Shapes",
            Action::Clear => "Clear",
        }
    }
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    (screen_width() - PANEL_WIDTH).max(0.0)
}

/// Rows and columns that fit the grid area at `cell_size` pixels per cell
pub fn grid_dimensions(cell_size: f32) -> (usize, usize) {
    let rows = (screen_height() / cell_size).floor() as usize;
    let cols = (grid_area_width() / cell_size).floor() as usize;
    (rows, cols)
}

/// Y coordinate just below the last button, where panel text starts
pub fn buttons_bottom() -> f32 {
    BUTTONS_TOP + Action::ALL.len() as f32 * (BUTTON_HEIGHT + BUTTON_GAP)
}

/// One button per action, stacked down the panel
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    Action::ALL
        .iter()
        .enumerate()
        .map(|(i, &action)| {
            let y = BUTTONS_TOP + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            Button::new(px + 10.0, y, PANEL_WIDTH - 20.0, BUTTON_HEIGHT, action)
        })
        .collect()
}
