#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::time::Instant;

use grid_life::board::{Board, random_board, step};
use grid_life::{ParallelStepper, StepperConfig};
use rand::SeedableRng;

const LIVE_DENSITY: f64 = 0.42;

fn seed_board(size: usize) -> Board {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EED_1234_ABCD_EF01);
    random_board(size, size, LIVE_DENSITY, &mut rng).expect("density is a valid probability")
}

fn bench_serial(board: &Board, iterations: u64) -> (f64, u64) {
    let mut current = board.clone();
    let start = Instant::now();
    for _ in 0..iterations {
        current = step(&current);
    }
    let total_ms = start.elapsed().as_secs_f64() * 1000.0;
    (total_ms, current.population())
}

fn bench_parallel(stepper: &ParallelStepper, board: &Board, iterations: u64) -> (f64, u64) {
    let mut current = board.clone();
    let start = Instant::now();
    for _ in 0..iterations {
        current = stepper.step(&current);
    }
    let total_ms = start.elapsed().as_secs_f64() * 1000.0;
    (total_ms, current.population())
}

fn main() {
    let threads = std::env::args().nth(1).map(|arg| {
        arg.parse::<usize>()
            .expect("thread count must be a positive integer")
    });
    let mut config = StepperConfig::default().min_parallel_rows(0);
    if let Some(n) = threads {
        config = config.thread_count(n);
    }
    let stepper = ParallelStepper::with_config(config).expect("failed to build thread pool");

    let scales: &[(usize, u64)] = &[(64, 200), (256, 100), (1024, 20), (2048, 5)];

    println!("threads: {}", stepper.threads());
    println!(
        "{:<10} {:>8} {:>14} {:>14} {:>10} {:>8}",
        "Grid", "Iters", "Serial(ms)", "Parallel(ms)", "Speedup", "Match"
    );
    println!("{}", "-".repeat(70));

    for &(size, iters) in scales {
        let board = seed_board(size);
        let (serial_ms, serial_pop) = bench_serial(&board, iters);
        let (parallel_ms, parallel_pop) = bench_parallel(&stepper, &board, iters);
        let status = if serial_pop == parallel_pop {
            "MATCH"
        } else {
            "MISMATCH"
        };
        println!(
            "{:<10} {:>8} {:>14.1} {:>14.1} {:>9.2}x {:>8}",
            format!("{size}x{size}"),
            iters,
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            status
        );
    }
}
