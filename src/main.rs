use clap::Parser;
use macroquad::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use life_scope::{Args, Cadence, Simulation, input, rendering::WindowSink, ui};

/// Length of the ramp fed to the trace panel
const SOURCE_LEN: usize = 1000;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1020,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Evenly spaced samples from 0 to 1
fn linear_ramp(len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..len).map(|i| i as f64 / (len - 1) as f64).collect(),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let config = args.to_config();
    tracing::info!(size = config.size, seed = ?config.seed, interval = ?config.interval, "starting");

    let mut simulation = match Simulation::from_config(&config, linear_ramp(SOURCE_LEN)) {
        Ok(simulation) => simulation,
        Err(err) => {
            tracing::error!(%err, "cannot start simulation");
            std::process::exit(1);
        }
    };
    let mut cadence = Cadence::new(config.interval);

    loop {
        if input::quit_requested() {
            tracing::info!(frame = simulation.frame(), "quit");
            break;
        }

        let mouse_pos = mouse_position();
        // Recreate buttons with current panel position
        let buttons = ui::create_buttons();

        let mut controls = input::button_controls(&buttons, mouse_pos);
        controls.extend(input::keyboard_controls());
        if let Err(err) = input::process_controls(&mut simulation, &mut cadence, &controls) {
            tracing::error!(%err, "control failed");
        }

        if simulation.is_running() && cadence.advance(get_frame_time()) {
            simulation.tick();
        }

        simulation.publish(&mut WindowSink::new(&buttons, mouse_pos));

        next_frame().await;
    }
}
