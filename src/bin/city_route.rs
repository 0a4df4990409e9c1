use city_route::config::ReplayConfig;
use city_route::view::render_frame;
use city_route::{plan_route, CityMap, NodeId, Replay, StepLog};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "city_route")]
#[command(about = "Animate Dijkstra's shortest-path search over the built-in city map")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cities and roads of the map
    Cities,
    /// Find the shortest route between two cities, step by step
    Route {
        /// Source city id, e.g. A
        source: String,
        /// Destination city id, e.g. G
        target: String,
        /// Milliseconds between steps (overrides CITY_ROUTE_TICK_MS)
        #[arg(long)]
        tick_ms: Option<u64>,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
        /// Print the step log as JSON instead of animating it
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let map = CityMap::kota();

    match cli.command {
        Commands::Cities => list_cities(&map),
        Commands::Route {
            source,
            target,
            tick_ms,
            no_color,
            json,
        } => {
            let mut config = ReplayConfig::from_env().with_json(json);
            if let Some(ms) = tick_ms {
                config = config.with_tick_ms(ms);
            }
            if no_color {
                config = config.with_color(false);
            }
            if !config.color {
                colored::control::set_override(false);
            }

            let log = plan_route(&map, &NodeId::from(source), &NodeId::from(target))?;

            if config.json {
                println!("{}", serde_json::to_string_pretty(&log)?);
            } else {
                animate(&map, log, &config).await;
            }
        }
    }

    Ok(())
}

fn list_cities(map: &CityMap) {
    println!("{}", "Cities:".bright_white().bold());
    for city in map.cities() {
        println!("  {} - {} ({}, {})", city.id, city.name, city.x, city.y);
    }
    println!("{}", "Roads:".bright_white().bold());
    for road in map.roads() {
        println!("  {} - {}: {}", road.from, road.to, road.weight);
    }
}

fn draw(map: &CityMap, replay: &Replay, color: bool) {
    print!("\x1B[2J\x1B[1;1H"); // Clear screen
    println!("{}", "CityRoute Explorer".bright_cyan().bold());
    if let Some((index, total)) = replay.position() {
        println!("Step {} / {}", index, total);
    }
    print!("{}", render_frame(map, replay.current_step(), color));
}

/// Replays the log one step per tick. Ctrl-C cancels the pending ticks.
async fn animate(map: &CityMap, log: StepLog, config: &ReplayConfig) {
    let mut replay = Replay::new();
    let mut ticker = tokio::time::interval(config.tick_interval.max(Duration::from_millis(1)));
    // The first tick of an interval completes immediately
    ticker.tick().await;

    replay.start(log);
    draw(map, &replay, config.color);

    while replay.is_running() {
        tokio::select! {
            _ = ticker.tick() => {
                replay.tick();
                draw(map, &replay, config.color);
            }
            _ = tokio::signal::ctrl_c() => {
                replay.reset();
                println!("\nReplay cancelled.");
                return;
            }
        }
    }
}
