//! quadpose CLI.
//!
//! Puts a robot into a pose and prints the resulting joint angles and,
//! optionally, every world-space frame:
//! - `preset`: apply a named stance
//! - `body`: start from a stance and override body pose fields
//! - `foot`: start from a stance and move one foot once
//! - `info`: print the geometry in use

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use quadpose_control::prelude::*;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Analytic leg kinematics for a four-legged robot.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Robot geometry as TOML. Missing keys take their defaults.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Euler rotation order, overriding the configuration (e.g. ZXY).
    #[arg(long, global = true)]
    order: Option<RotationOrder>,

    /// Print every frame, not just joint angles.
    #[arg(long, global = true)]
    frames: bool,

    /// More log output (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a preset stance.
    Preset {
        /// crouch, stand_tall, power_on, power_off, pose_1 or pose_2.
        name: Preset,
    },

    /// Set body pose fields on top of a preset.
    Body(BodyArgs),

    /// Offset one foot from its resting spot for a single solve.
    Foot {
        /// Leg name (front_left, fl, 1, ...).
        leg: LegId,

        #[arg(allow_negative_numbers = true)]
        x: f64,

        #[arg(allow_negative_numbers = true)]
        y: f64,

        #[arg(allow_negative_numbers = true)]
        z: f64,

        /// Stance to start from.
        #[arg(long, default_value = "crouch")]
        preset: Preset,
    },

    /// Print the robot geometry.
    Info,
}

#[derive(Args)]
struct BodyArgs {
    #[arg(long, allow_negative_numbers = true)]
    yaw: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    roll: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pitch: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    x: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    y: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    z: Option<f64>,

    /// Stance to start from.
    #[arg(long, default_value = "crouch")]
    preset: Preset,
}

impl BodyArgs {
    const fn update(&self) -> BodyPoseUpdate {
        BodyPoseUpdate {
            yaw: self.yaw,
            roll: self.roll,
            pitch: self.pitch,
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<RobotConfiguration, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            RobotConfiguration::from_file(path)?
        }
        None => RobotConfiguration::default(),
    };
    if let Some(order) = cli.order {
        config.rotation_order = order;
    }
    Ok(config)
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_angles(robot: &Robot<RecordingSink>) {
    println!("{:<12} {:>10} {:>10} {:>10}", "leg", "hip_yaw", "hip_pitch", "knee");
    for leg in LegId::ALL {
        if let Some(a) = robot.joint_angles(leg) {
            println!(
                "{:<12} {:>10.5} {:>10.5} {:>10.5}",
                leg.as_str(),
                a.hip_yaw,
                a.hip_pitch,
                a.knee
            );
        }
    }
}

fn print_frames(robot: &Robot<RecordingSink>) {
    println!();
    println!(
        "{:<26} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "frame", "x", "y", "z", "yaw", "roll", "pitch"
    );
    for name in FrameName::all() {
        if let Some(frame) = robot.sink().get(&name) {
            let t = frame.translation();
            let (yaw, roll, pitch) = frame.euler_angles();
            println!(
                "{:<26} {:>9.4} {:>9.4} {:>9.4} {:>9.4} {:>9.4} {:>9.4}",
                name.to_string(),
                t.x,
                t.y,
                t.z,
                yaw,
                roll,
                pitch
            );
        }
    }
}

fn print_info(config: &RobotConfiguration) -> Result<(), ConfigError> {
    println!("quadpose v{}", env!("CARGO_PKG_VERSION"));
    println!();
    print!("{}", config.to_toml_string()?);
    println!();
    println!("hip link length    {:.4}", config.hip_link_length());
    println!("nominal foot out   {:.4}", config.nominal_foot_out());
    println!("power-off foot out {:.4}", config.power_off_foot_out());
    println!(
        "leg reach          {:.4} .. {:.4}",
        config.min_reach(),
        config.max_reach()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn run(cli: &Cli) -> Result<(), QuadposeError> {
    let config = load_config(cli)?;
    let command = match &cli.command {
        None | Some(Commands::Info) => {
            print_info(&config)?;
            return Ok(());
        }
        Some(command) => command,
    };

    let mut robot = Robot::spawn(Arc::new(config), RecordingSink::new())?;
    match command {
        Commands::Preset { name } => robot.apply(*name)?,
        Commands::Body(args) => {
            robot.apply(args.preset)?;
            robot.set_body_pose(args.update())?;
        }
        Commands::Foot {
            leg,
            x,
            y,
            z,
            preset,
        } => {
            robot.apply(*preset)?;
            robot.move_foot(*leg, *x, *y, *z);
            robot.recompute_all()?;
        }
        Commands::Info => {}
    }

    print_angles(&robot);
    if cli.frames {
        print_frames(&robot);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn foot_accepts_negative_offsets() {
        let cli = Cli::try_parse_from(["quadpose", "foot", "fl", "-1", "0", "0.5"]).unwrap();
        match cli.command {
            Some(Commands::Foot { leg, x, z, preset, .. }) => {
                assert_eq!(leg, LegId::FrontLeft);
                assert!((x + 1.0).abs() < f64::EPSILON);
                assert!((z - 0.5).abs() < f64::EPSILON);
                assert_eq!(preset, Preset::Crouch);
            }
            _ => panic!("expected foot command"),
        }
    }

    #[test]
    fn body_keeps_unset_fields_empty() {
        let cli = Cli::try_parse_from([
            "quadpose", "body", "--yaw", "-0.2", "--preset", "stand_tall", "--order", "xyz",
        ])
        .unwrap();
        assert_eq!(cli.order, Some(RotationOrder::Xyz));
        let Some(Commands::Body(args)) = cli.command else {
            panic!("expected body command");
        };
        let update = args.update();
        assert_eq!(update.yaw, Some(-0.2));
        assert!(update.z.is_none());
        assert_eq!(args.preset, Preset::StandTall);
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(Cli::try_parse_from(["quadpose", "preset", "jump"]).is_err());
    }

    #[test]
    fn unreachable_body_pose_fails() {
        let cli = Cli::try_parse_from(["quadpose", "body", "--z", "20"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(matches!(err, QuadposeError::Kinematics(_)));
    }
}
