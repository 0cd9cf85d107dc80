//! Seep Quickstart: pour liquid into a container and watch it settle.
//!
//! Demonstrates:
//!   1. Creating a simulation with the default solver config
//!   2. Painting obstacles with a wall stroke
//!   3. Pouring liquid through batched edits
//!   4. Stepping until the lattice settles, reading tick reports
//!   5. Rendering cell views as ASCII
//!
//! Run with:
//!   cargo run --example quickstart

use seep::prelude::*;

// ─── Container parameters ───────────────────────────────────────

const WIDTH: u32 = 16;
const HEIGHT: u32 = 10;
const POUR_X: i32 = 4;
const POUR_AMOUNT: f64 = 5.0;
const POUR_FRAMES: usize = 4;

fn render(sim: &Simulation) {
    let mut row = String::new();
    let mut y = 0;
    for v in sim.views() {
        if v.y != y {
            println!("  {row}");
            row.clear();
            y = v.y;
        }
        let glyph = match v.kind {
            CellKind::Obstacle => '#',
            CellKind::Open if v.liquid <= 0.0 => ' ',
            CellKind::Open if v.pressure > 0.5 => '@',
            CellKind::Open if v.fill_level >= 0.99 => '=',
            CellKind::Open if v.fill_level >= 0.5 => '~',
            CellKind::Open => '.',
        };
        row.push(glyph);
    }
    println!("  {row}");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Seep Quickstart ===\n");

    // 1. Create the simulation.
    let mut sim = Simulation::new(WIDTH, HEIGHT, SolverConfig::default())?;
    println!(
        "Lattice: {}x{} ({} cells)",
        sim.lattice().width(),
        sim.lattice().height(),
        sim.lattice().len()
    );

    // 2. Drag a wall across the floor, starting on an open cell so the
    //    stroke paints.
    let stroke = WallStroke::begin(sim.lattice(), 8, 8).ok_or("stroke outside lattice")?;
    for y in 4..HEIGHT as i32 {
        stroke.apply(sim.lattice_mut(), 8, y);
    }
    println!("Wall stroke mode: {:?}", stroke.mode());

    // 3. Pour for a few frames.
    for _ in 0..POUR_FRAMES {
        let report = sim.step(&[Edit::AddLiquid {
            x: POUR_X,
            y: 1,
            amount: POUR_AMOUNT,
        }])?;
        println!(
            "tick {}: {} transfers, {:.3} moved, {} active",
            report.tick,
            report.transfers(),
            report.volume_moved,
            report.active_cells
        );
    }

    // 4. Let it settle.
    match sim.run_until_settled(10_000) {
        Some(n) => println!("\nSettled after {n} more ticks"),
        None => println!("\nStill moving after 10000 ticks"),
    }
    println!(
        "Total liquid: {:.6} (poured {:.1})",
        sim.lattice().total_liquid(),
        POUR_AMOUNT * POUR_FRAMES as f64
    );

    // 5. Render.
    println!("\nFinal state (tick {}):", sim.current_tick());
    render(&sim);

    // Knock the wall down and watch the levels even out.
    let erase = WallStroke::begin(sim.lattice(), 8, 5).ok_or("stroke outside lattice")?;
    for y in 4..HEIGHT as i32 {
        erase.apply(sim.lattice_mut(), 8, y);
    }
    sim.run_until_settled(10_000);
    println!("\nAfter removing the wall (tick {}):", sim.current_tick());
    render(&sim);

    println!("Done.");
    Ok(())
}
