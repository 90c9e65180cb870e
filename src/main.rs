use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use std::fs::File;
use std::io::BufWriter;

use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use macroquad::prelude::*;
use toroidal_life::{Config, FrameRate, LifeEngine, Simulation, StateDump, input, rendering};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    let (window_width, window_height) = match Config::get() {
        Ok(config) => config.window_size(),
        Err(_) => Config::default().window_size(),
    };
    Conf {
        window_title: "Game Of Life".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Write the current generation if it changed; a failing dump is dropped.
fn record(dump: &mut Option<StateDump<BufWriter<File>>>, state: &Simulation) {
    if let Some(sink) = dump.as_mut() {
        if let Err(err) = sink.sync(state) {
            warn!(%err, "state dump failed, disabling");
            *dump = None;
        }
    }
}

/// Seed for the process-wide generator when none is configured
fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();

    let config = match Config::get() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid configuration");
            eprintln!("{}", Config::USAGE);
            process::exit(2);
        }
    };

    let rng_seed = config.rng_seed.unwrap_or_else(wall_clock_seed);
    let mut rng = StdRng::seed_from_u64(rng_seed);

    let engine = match config
        .dimensions()
        .and_then(|dims| LifeEngine::seeded(dims, &config.seed, &mut rng))
    {
        Ok(engine) => engine,
        Err(err) => {
            error!(%err, "cannot start simulation");
            process::exit(1);
        }
    };
    info!(
        dims = %engine.dimensions(),
        seed = %config.seed,
        rng_seed,
        population = engine.population(),
        "simulation ready"
    );

    let mut state = Simulation::new(engine, config.generations_per_second).with_running(true);
    let tile = rendering::load_tile(&config.cell_image).await;

    let mut dump = config.dump.as_deref().and_then(|path| match StateDump::create(path) {
        Ok(dump) => Some(dump),
        Err(err) => {
            warn!(path = %path.display(), %err, "state dump disabled");
            None
        }
    });
    record(&mut dump, &state);

    let mut frame_rate = FrameRate::new();

    loop {
        if input::quit_requested() {
            break;
        }
        state = input::process_keyboard_input(state, &mut rng);
        record(&mut dump, &state);

        state = state.tick(get_frame_time());
        record(&mut dump, &state);

        clear_background(rendering::BACKGROUND);
        rendering::draw_generation(state.engine.current(), &tile, config.tile_size);

        if frame_rate.record_frame(get_frame_time()) {
            debug!(fps = frame_rate.fps(), step_ms = state.last_step_time_ms, "frame rate");
        }
        rendering::draw_caption(frame_rate.caption(), state.generation);

        next_frame().await;
    }

    if let Some(sink) = dump {
        let written = sink.generations();
        match sink.finish() {
            Ok(_) => info!(generations = written, "state dump closed"),
            Err(err) => warn!(%err, "state dump flush failed"),
        }
    }
    info!(generation = state.generation, "simulation stopped");
}
