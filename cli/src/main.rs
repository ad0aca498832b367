#![warn(clippy::pedantic)]

//! Terminal front end for the cube engine.
//!
//! Plays the role the GUI layer plays in a graphical build: it owns a
//! [`CubeState`], applies turns to the model instantly, and drives the
//! visual rebound through a [`MotionProfile`] sampled at a fixed frame
//! rate.

mod config;
mod net;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::ensure;
use cube_state::{CubeState, Face, Layer};
use env_logger::TimestampPrecision;
use log::{LevelFilter, debug, info};
use motion::MotionProfile;

use crate::config::AnimationConfig;
use crate::net::print_net;

/// Inspect and manipulate a virtual N×N×N cube from the terminal
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Log verbosity. Can be set zero to three times.
    #[arg(short, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a solved cube
    Show {
        /// Stickers per side of the cube
        #[arg(short, long, default_value_t = 3)]
        size: usize,
    },
    /// Apply one layer turn to a solved cube and print the result
    Turn {
        /// Face the turned layer is parallel to (R, U, F, L, D or B)
        face: Face,
        #[arg(short, long, default_value_t = 3)]
        size: usize,
        /// How many layers inward from the face the slice sits
        #[arg(short, long, default_value_t = 0)]
        depth: usize,
        /// Quarter-turns to apply; negative turns clockwise
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        count: i32,
    },
    /// Scramble a cube and print the result
    Scramble {
        #[arg(short, long, default_value_t = 3)]
        size: usize,
        /// Seed for the random move sequence; random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply a turn, then print the rebound animation frame by frame
    Animate {
        /// Face the turned layer is parallel to (R, U, F, L, D or B)
        face: Face,
        #[arg(short, long, default_value_t = 3)]
        size: usize,
        #[arg(short, long, default_value_t = 0)]
        depth: usize,
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        count: i32,
        /// TOML file with max_speed, acceleration and frame_rate
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    match cli.command {
        Commands::Show { size } => {
            print_net(&CubeState::solved(size));
        }
        Commands::Turn {
            face,
            size,
            depth,
            count,
        } => {
            let mut cube = CubeState::solved(size);
            let layer = Layer::new(face, depth);
            ensure!(
                cube.layer_in_range(layer),
                "depth {depth} is out of range for a cube of size {size}"
            );

            cube.turn(layer, count);
            print_net(&cube);
        }
        Commands::Scramble { size, seed } => {
            let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
            let mut cube = CubeState::solved(size);
            cube.scramble(&mut rng);
            print_net(&cube);
        }
        Commands::Animate {
            face,
            size,
            depth,
            count,
            config,
        } => {
            let config = AnimationConfig::load(config.as_deref())?;
            ensure!(
                config.max_speed > 0.0 && config.acceleration > 0.0 && config.frame_rate > 0.0,
                "animation parameters must all be positive"
            );
            debug!("animation config: {config:?}");

            let mut cube = CubeState::solved(size);
            let layer = Layer::new(face, depth);
            ensure!(
                cube.layer_in_range(layer),
                "depth {depth} is out of range for a cube of size {size}"
            );

            // The permutation lands instantly; the drawn layer angle
            // then rebounds from the negated turn angle back to zero to
            // catch up visually.
            cube.turn(layer, count);
            print_net(&cube);

            let start_angle = -90.0 * f64::from(count.rem_euclid(4));
            let profile =
                MotionProfile::new(start_angle, 0.0, 0.0, config.max_speed, config.acceleration);
            info!(
                "rebounding {} over {:.3} s",
                layer,
                profile.duration()
            );

            println!("{:>8} {:>12} {:>12}", "t (s)", "angle (deg)", "w (deg/s)");
            let mut frame = 0u32;
            loop {
                let time = f64::from(frame) / config.frame_rate;
                println!(
                    "{time:8.3} {:12.3} {:12.3}",
                    profile.position(time),
                    profile.velocity(time)
                );
                if profile.has_finished(time) {
                    break;
                }
                frame += 1;
            }
        }
    }

    Ok(())
}
