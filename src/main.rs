use std::time::Duration;

use clap::Parser;
use conway_shapes::{
    ShapeConfig, Simulation, SimulationConfig, input, rendering,
    ui::{self, grid_dimensions},
};
use macroquad::prelude::*;

/// Conway's Game of Life with random and shape-based seeding
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Cell size in pixels
    #[arg(long, default_value_t = 10.0)]
    cell_size: f32,

    /// Milliseconds between generations while running
    #[arg(long, default_value_t = 500)]
    tick_ms: u64,

    /// Seed for reproducible random boards
    #[arg(long)]
    seed: Option<u64>,

    /// Fraction of the board that shape seeding aims to cover
    #[arg(long, default_value_t = 0.4)]
    coverage: f64,
}

impl Args {
    fn to_config(&self) -> SimulationConfig {
        SimulationConfig {
            tick_interval: Duration::from_millis(self.tick_ms),
            seed: self.seed,
            shapes: ShapeConfig {
                coverage: self.coverage,
                ..ShapeConfig::default()
            },
            ..SimulationConfig::default()
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let cell_size = args.cell_size.max(2.0);

    if let Err(err) = args.to_config().shapes.validate() {
        log::error!("{err}");
        return;
    }

    let (rows, cols) = grid_dimensions(cell_size);
    let mut sim = Simulation::new(args.to_config().with_dimensions(rows, cols));
    let mut painter = input::PointerPainter::default();
    let mut notice: Option<String> = None;

    loop {
        // A viewport change replaces the board with an empty one
        let (rows, cols) = grid_dimensions(cell_size);
        sim.resize(rows, cols);

        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        let handled = input::process_button_clicks(&mut sim, &buttons, mouse_pos)
            .and_then(|_| painter.handle(&mut sim, mouse_pos, cell_size))
            .and_then(|_| input::process_keyboard_input(&mut sim, mouse_pos, cell_size));
        match handled {
            Ok(()) if is_mouse_button_pressed(MouseButton::Left) => notice = None,
            Ok(()) => {}
            Err(err) => notice = Some(err.to_string()),
        }

        sim.update(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_grid(sim.grid(), cell_size);
        rendering::draw_controls(&sim, &buttons, mouse_pos, notice.as_deref());

        next_frame().await;
    }
}
