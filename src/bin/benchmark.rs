//! Times serial against parallel generation advance on shape-seeded boards

use std::time::Instant;

use conway_shapes::domain::{Grid, advance, advance_parallel, random_shapes};
use rand::{SeedableRng, rngs::StdRng};

fn time_per_generation(grid: &Grid, iterations: u32, step: fn(&Grid) -> Grid) -> f64 {
    let mut grid = grid.clone();
    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Generation Advance Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;
    let mut rng = StdRng::seed_from_u64(0x5eed);

    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for size in sizes {
        let grid = match random_shapes(size, size, &mut rng) {
            Ok(grid) => grid,
            Err(err) => {
                eprintln!("skipping {size}x{size}: {err}");
                continue;
            }
        };
        let serial_ms = time_per_generation(&grid, iterations, advance);
        let parallel_ms = time_per_generation(&grid, iterations, advance_parallel);

        println!(
            "{:>12} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms.max(f64::EPSILON)
        );
    }
}
