use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::Grid;
use crate::ui::{Button, PANEL_WIDTH, buttons_bottom, panel_x};

const ALIVE: Color = Color::new(0.0, 0.5, 0.0, 1.0);

/// Draw live cells as green discs with a white outline
pub fn draw_grid(grid: &Grid, cell_size: f32) {
    let radius = (cell_size / 2.0 - 1.0).max(0.5);
    for (row, col) in grid.live_positions() {
        let cx = col as f32 * cell_size + cell_size / 2.0;
        let cy = row as f32 * cell_size + cell_size / 2.0;
        draw_circle(cx, cy, radius, ALIVE);
        draw_circle_lines(cx, cy, radius, 1.0, WHITE);
    }
}

/// Draw the control panel: buttons, counters and the last reported problem
pub fn draw_controls(sim: &Simulation, buttons: &[Button], mouse_pos: (f32, f32), notice: Option<&str>) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let (rows, cols) = sim.dimensions();
    let (status, status_color) = if sim.is_running() {
        ("Running", GREEN)
    } else {
        ("Stopped", ORANGE)
    };
    let top = buttons_bottom() + 20.0;
    let lines = [
        (format!("Live Cells: {}", sim.live_cells()), WHITE),
        (format!("Generation: {}", sim.generation()), LIGHTGRAY),
        (format!("Grid: {rows}x{cols}"), GRAY),
        (status.to_string(), status_color),
    ];
    for (i, (text, color)) in lines.iter().enumerate() {
        draw_text(text, px + 10.0, top + i as f32 * 22.0, 18.0, *color);
    }

    if let Some(notice) = notice {
        draw_text(notice, px + 10.0, top + lines.len() as f32 * 22.0 + 10.0, 14.0, RED);
    }
}
