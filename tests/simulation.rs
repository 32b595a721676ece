use toroidal_life::config::{OutputFormat, Settings};
use toroidal_life::simulation::{JsonRenderer, RecordingRenderer, TerminalRenderer};
use toroidal_life::{run_simulation, GameOfLifeRules, Grid, Pattern, PatternKind, Simulation};

fn headless(generations: u64) -> Settings {
    let mut settings = Settings::default();
    settings.simulation.generations = generations;
    settings.simulation.delay_ms = 0;
    settings
}

fn shifted(cells: &[(usize, usize)], dr: usize, dc: usize, size: usize) -> Vec<(usize, usize)> {
    let mut moved: Vec<(usize, usize)> = cells
        .iter()
        .map(|&(row, col)| ((row + dr) % size, (col + dc) % size))
        .collect();
    moved.sort_unstable();
    moved
}

#[test]
fn glider_translates_diagonally_every_four_generations() {
    let mut simulation = Simulation::new(headless(0)).unwrap();
    let start = simulation.grid().living_cells();

    for _ in 0..4 {
        assert_eq!(simulation.live_cells(), 5);
        simulation.advance();
    }

    assert_eq!(simulation.generation(), 4);
    assert_eq!(simulation.live_cells(), 5);
    assert_eq!(simulation.grid().living_cells(), shifted(&start, 1, 1, 25));
}

#[test]
fn glider_wraps_around_the_torus() {
    // After 100 generations the glider has moved 25 cells and is back where it started
    let mut simulation = Simulation::new(headless(0)).unwrap();
    let start = simulation.grid().clone();

    for _ in 0..100 {
        simulation.advance();
        assert_eq!(simulation.live_cells(), 5);
    }
    assert_eq!(simulation.grid(), &start);
}

#[test]
fn glider_near_corner_crosses_the_edge() {
    let mut grid = Grid::new(6).unwrap();
    grid.seed(&Pattern::glider(), (4, 4)).unwrap();
    let start = grid.living_cells();

    let moved = GameOfLifeRules::evolve_generations(grid, 4);
    assert_eq!(moved.living_cells(), shifted(&start, 1, 1, 6));
}

#[test]
fn block_is_a_still_life() {
    for size in [4, 5, 25] {
        let mut grid = Grid::new(size).unwrap();
        grid.seed(&Pattern::block(), (1, 1)).unwrap();
        assert_eq!(GameOfLifeRules::evolve(&grid), grid, "size {}", size);
    }
}

#[test]
fn beacon_has_period_two() {
    let mut settings = headless(0);
    settings.pattern.kind = PatternKind::Beacon;
    let mut simulation = Simulation::new(settings).unwrap();
    let start = simulation.grid().clone();

    simulation.advance();
    assert_ne!(simulation.grid(), &start);
    assert_eq!(simulation.live_cells(), 6);
    simulation.advance();
    assert_eq!(simulation.grid(), &start);
}

#[test]
fn identical_seeds_stay_identical() {
    let mut left = Simulation::new(headless(0)).unwrap();
    let mut right = Simulation::new(headless(0)).unwrap();

    for _ in 0..50 {
        assert_eq!(left.grid(), right.grid());
        left.advance();
        right.advance();
    }
    assert_eq!(left.generation(), right.generation());
}

#[test]
fn driver_loop_records_reference_run() {
    let mut renderer = RecordingRenderer::new();
    let summary = run_simulation(headless(12), &mut renderer).unwrap();

    assert_eq!(summary.generation, 12);
    assert_eq!(summary.live_cells, 5);
    assert_eq!(renderer.frames.len(), 13);
    assert_eq!(renderer.pauses.len(), 12);

    for (index, frame) in renderer.frames.iter().enumerate() {
        assert_eq!(frame.generation, index as u64);
        assert_eq!(frame.live_cells, frame.grid.count_live());
        assert_eq!(frame.is_final, index == 12);
    }

    let first = renderer.frames[0].grid.living_cells();
    assert_eq!(renderer.frames[12].grid.living_cells(), shifted(&first, 3, 3, 25));
}

#[test]
fn terminal_renderer_draws_every_frame() {
    let mut settings = headless(2);
    settings.grid.size = 8;
    let display = settings.display.clone();

    let mut simulation = Simulation::new(settings).unwrap();
    let mut renderer = TerminalRenderer::new(Vec::new(), display);
    simulation.run(&mut renderer).unwrap();

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(text.matches("\x1b[2J\x1b[H").count(), 3);
    assert!(text.contains("Generation: 0 | Live Cells: 5"));
    assert!(text.contains("Generation: 1 | Live Cells: 5"));
    assert!(text.contains("Final Generation: 2 | Live Cells: 5"));
    assert_eq!(text.matches("Press Ctrl+C to exit").count(), 2);
    assert!(text.contains("┌──────────┐"));
}

#[test]
fn json_renderer_emits_one_line_per_frame() {
    let mut settings = headless(3);
    settings.display.format = OutputFormat::Json;

    let mut renderer = JsonRenderer::new(Vec::new());
    run_simulation(settings, &mut renderer).unwrap();

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3]["generation"], 3);
    assert_eq!(lines[3]["final"], true);
    assert_eq!(lines[3]["live_cells"], 5);
}
