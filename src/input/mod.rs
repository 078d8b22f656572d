use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::{DENSE_DENSITY, Result, SPARSE_DENSITY, presets};
use crate::ui::{Action, Button, grid_area_width};

/// Run one panel action against the simulation
pub fn apply_action(sim: &mut Simulation, action: Action) -> Result<()> {
    match action {
        Action::Play => sim.start(),
        Action::Stop => sim.stop(),
        Action::RandomDense => sim.random_fill(DENSE_DENSITY)?,
        Action::RandomSparse => sim.random_fill(SPARSE_DENSITY)?,
        Action::Shapes => sim.random_shapes()?,
        Action::Clear => sim.clear(),
    }
    Ok(())
}

/// Dispatch clicks on panel buttons
pub fn process_button_clicks(sim: &mut Simulation, buttons: &[Button], mouse_pos: (f32, f32)) -> Result<()> {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .try_for_each(|btn| apply_action(sim, btn.action()))
}

/// Grid cell under the pointer, if the pointer is over the board
pub fn cell_under(sim: &Simulation, (mx, my): (f32, f32), cell_size: f32) -> Option<(usize, usize)> {
    if mx < 0.0 || my < 0.0 || mx >= grid_area_width() {
        return None;
    }
    let (row, col) = ((my / cell_size) as usize, (mx / cell_size) as usize);
    sim.grid().contains(row, col).then_some((row, col))
}

/// Click toggles a cell; dragging toggles each cell once as it is entered.
#[derive(Default)]
pub struct PointerPainter {
    last_cell: Option<(usize, usize)>,
}

impl PointerPainter {
    pub fn handle(&mut self, sim: &mut Simulation, mouse_pos: (f32, f32), cell_size: f32) -> Result<()> {
        if !is_mouse_button_down(MouseButton::Left) {
            self.last_cell = None;
            return Ok(());
        }
        let Some(cell) = cell_under(sim, mouse_pos, cell_size) else {
            return Ok(());
        };
        if self.last_cell != Some(cell) {
            self.last_cell = Some(cell);
            sim.toggle(cell.0, cell.1)?;
        }
        Ok(())
    }
}

/// Keyboard shortcuts for the panel actions plus stepping and glider drops
pub fn process_keyboard_input(sim: &mut Simulation, mouse_pos: (f32, f32), cell_size: f32) -> Result<()> {
    let shortcuts = [
        (KeyCode::R, Action::RandomDense),
        (KeyCode::T, Action::RandomSparse),
        (KeyCode::S, Action::Shapes),
        (KeyCode::C, Action::Clear),
    ];
    for (key, action) in shortcuts {
        if is_key_pressed(key) {
            apply_action(sim, action)?;
        }
    }

    if is_key_pressed(KeyCode::Space) {
        sim.toggle_running();
    }
    if is_key_pressed(KeyCode::N) {
        sim.step();
    }
    if is_key_pressed(KeyCode::G) {
        if let Some((row, col)) = cell_under(sim, mouse_pos, cell_size) {
            sim.place(&presets::glider(), row, col)?;
        }
    }
    Ok(())
}
