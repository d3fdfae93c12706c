mod cli;
mod logging;
mod render;
mod scenario;

use clap::Parser;
use eyre::Result;
use log::{debug, info, warn};

use cli::{Algorithm, Args, Command};
use logging::Logger;
use router::{
    ArenaExpansion, Coordinate, FrontierExpansion, Grid, Movement, Path, RouteFinder, RouteMatrix,
    RouteResult,
};
use scenario::Scenario;

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    let scenario = match &args.scenario {
        Some(path) => {
            info!("loading scenario: {}", path.display());
            Scenario::load(path)?
        }
        None => {
            debug!("no scenario given, using the demo field");
            Scenario::demo()
        }
    };

    let grid = scenario.build_grid()?;
    let movement = scenario.movement(args.diagonal);
    info!(
        "{}x{} grid, {} cells blocked, {} moves",
        grid.height(),
        grid.width(),
        grid.blocked_count(),
        movement.name()
    );

    match args.command {
        Command::Route {
            algorithm,
            no_render,
        } => run_route(&grid, movement, &scenario, algorithm, !no_render),
        Command::Multi { algorithm } => run_multi(&grid, movement, &scenario, algorithm),
        Command::Benchmark => run_benchmark(&grid, movement, &scenario),
    }

    Ok(())
}

// ========== Single route ==========

fn plan(
    grid: &Grid,
    movement: Movement,
    algorithm: Algorithm,
    start: Coordinate,
    target: Coordinate,
) -> RouteResult {
    match algorithm {
        Algorithm::Frontier => {
            RouteFinder::with_algorithm(grid, movement, FrontierExpansion).plan(start, target)
        }
        Algorithm::Arena => {
            RouteFinder::with_algorithm(grid, movement, ArenaExpansion).plan(start, target)
        }
    }
}

fn run_route(
    grid: &Grid,
    movement: Movement,
    scenario: &Scenario,
    algorithm: Algorithm,
    draw: bool,
) {
    let (start, target) = (scenario.start(), scenario.target());
    info!("routing {} -> {} with {}", start, target, algorithm.name());

    let result = plan(grid, movement, algorithm, start, target);
    match &result.path {
        Some(path) => {
            print_result(&result);
            if draw {
                let matrix = grid.passability_matrix();
                println!("{}", render::overlay(&matrix, |r, c| path.contains(r, c)));
            }
        }
        None => {
            warn!("no route from {} to {}", start, target);
            if draw {
                println!("{}", render::overlay(&grid.passability_matrix(), |_, _| false));
            }
        }
    }
}

// ========== Multiple points ==========

fn route_all(
    grid: &Grid,
    movement: Movement,
    algorithm: Algorithm,
    start: Coordinate,
    waypoints: &[Coordinate],
) -> (Vec<Option<Path>>, RouteMatrix) {
    match algorithm {
        Algorithm::Frontier => {
            let finder = RouteFinder::with_algorithm(grid, movement, FrontierExpansion);
            (finder.routes_from(start, waypoints), finder.route_matrix(waypoints))
        }
        Algorithm::Arena => {
            let finder = RouteFinder::with_algorithm(grid, movement, ArenaExpansion);
            (finder.routes_from(start, waypoints), finder.route_matrix(waypoints))
        }
    }
}

fn run_multi(grid: &Grid, movement: Movement, scenario: &Scenario, algorithm: Algorithm) {
    let start = scenario.start();
    let waypoints = scenario.waypoints();
    if waypoints.is_empty() {
        warn!("scenario has no waypoints");
        return;
    }

    info!(
        "routing {} waypoints from {} with {}",
        waypoints.len(),
        start,
        algorithm.name()
    );

    let (routes, matrix) = route_all(grid, movement, algorithm, start, &waypoints);

    for (waypoint, route) in waypoints.iter().zip(&routes) {
        match route {
            Some(path) => info!("{} -> {}: {} points", start, waypoint, path.len()),
            None => warn!("{} -> {}: unreachable", start, waypoint),
        }
    }

    for (i, j) in matrix.unreachable_pairs() {
        warn!("no route between waypoints {} and {}", i + 1, j + 1);
    }

    println!("{}", render::route_table(&matrix));
}

// ========== Benchmark ==========

fn run_benchmark(grid: &Grid, movement: Movement, scenario: &Scenario) {
    info!("benchmarking route algorithms");
    let (start, target) = (scenario.start(), scenario.target());

    let results: Vec<_> = Algorithm::all()
        .map(|algorithm| {
            info!("testing {}", algorithm.name());
            let result = plan(grid, movement, algorithm, start, target);
            (algorithm.name(), result)
        })
        .collect();

    print_benchmark_summary(&results);

    let mut paths = results.iter().map(|(_, result)| &result.path);
    if let Some(first) = paths.next() {
        if paths.all(|path| path == first) {
            info!("all algorithms agree on the route");
        } else {
            warn!("algorithms returned different routes");
        }
    }
}

// ========== Utilities ==========

fn print_result(result: &RouteResult) {
    if let Some(steps) = result.steps() {
        info!("finished in {} steps ({:?})", steps, result.planning_time);
    }
}

fn print_benchmark_summary(results: &[(&str, RouteResult)]) {
    info!("\nbenchmark results:");
    info!("{:<20} {:>8}  {:>12}", "algorithm", "steps", "plan");
    info!("{:-<44}", "");

    for (name, result) in results {
        let steps = result
            .steps()
            .map_or_else(|| "-".to_string(), |steps| steps.to_string());
        info!("{:<20} {:>8}  {:>12?}", name, steps, result.planning_time);
    }

    if let Some((name, result)) = results.iter().min_by_key(|(_, r)| r.planning_time) {
        info!("\nfastest: {} ({:?})", name, result.planning_time);
    }
}
