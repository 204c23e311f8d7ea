//! Life Engine CLI - Run Game of Life simulations from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use life_engine::{
    compute::Simulation,
    schema::{Seed, SimulationConfig},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  generations  Number of generations to run (default: max_generations, or 100)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SimulationConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }

    let generations: u64 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .or(config.max_generations)
        .unwrap_or(100);

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        Seed::default()
    };

    println!("Game of Life");
    println!("============");
    println!("Grid: {}x{}", config.size, config.size);
    match config.max_generations {
        Some(max) => println!("Generation limit: {}", max),
        None => println!("Generation limit: none"),
    }
    println!("Generations: {}", generations);
    println!();

    // Initialize
    let mut sim = Simulation::from_seed(config, &seed).unwrap_or_else(|e| {
        eprintln!("Error seeding grid: {}", e);
        std::process::exit(1);
    });

    println!("Initial state:");
    println!("  Placed cells: {}", sim.stats().placed);
    println!("  Live cells: {}", sim.stats().initial_alive);
    println!();

    // Run simulation
    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..generations {
        if !sim.step() {
            break;
        }

        // Print progress every 10%
        if (i + 1) % (generations / 10).max(1) == 0 {
            let stats = sim.stats();
            let elapsed = start.elapsed().as_secs_f32();
            let gens_per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  Generation {}/{}: alive={}, original={}, {:.1} gen/s",
                i + 1,
                generations,
                stats.alive,
                stats.originally_alive,
                gens_per_sec
            );
        }
    }

    let elapsed = start.elapsed();
    let computed = sim.generation();
    let stats = sim.finish();

    println!();
    println!("{}", stats);
    println!(
        "  - {:.2}% of the starting cells are still alive",
        stats.original_survival() * 100.0
    );
    println!();
    println!(
        "Time: {:.2}s ({:.1} gen/s)",
        elapsed.as_secs_f32(),
        computed as f32 / elapsed.as_secs_f32()
    );
}

fn print_example_config() {
    let config = SimulationConfig::default();
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", serde_json::to_string_pretty(&seed).unwrap());
}
