use std::process::ExitCode;

use clap::Parser;
use spherical_angle::input::DEFAULT_RADIUS;
use spherical_angle::{compute, AngularInput};
use tracing::Level;

#[derive(Parser, Debug)]
#[clap(author = "Brian Kuhns", version, about, allow_negative_numbers = true)]
/// Given two meridians and two parallels on a sphere,
/// print the angle at the corner where the first meridian meets the second parallel
struct Args {
    /// log every intermediate value to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// first meridian in degrees (-180 to 180)
    meridian1: f64,

    /// second meridian in degrees (-180 to 180)
    meridian2: f64,

    /// first parallel in degrees (-90 to 90)
    parallel1: f64,

    /// second parallel in degrees (-90 to 90)
    parallel2: f64,

    /// radius of the sphere
    #[arg(long = "radius", visible_alias = "rad", default_value_t = DEFAULT_RADIUS)]
    radius: f64,
}

/// What one run writes and the status it exits with.
#[derive(Debug, PartialEq)]
struct Outcome {
    status: u8,
    stdout: Option<String>,
    stderr: Option<String>,
}

fn run(args: &Args) -> Outcome {
    let input = AngularInput::new(args.meridian1, args.meridian2, args.parallel1, args.parallel2)
        .with_radius(args.radius);

    match compute(input) {
        Ok(solution) => Outcome {
            status: 0,
            stdout: Some(solution.angle_deg.to_string()),
            stderr: None,
        },
        Err(err) => Outcome {
            status: err.exit_code(),
            stdout: None,
            stderr: Some(err.to_string()),
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let outcome = run(&args);
    if let Some(out) = &outcome.stdout {
        println!("{out}");
    }
    if let Some(err) = &outcome.stderr {
        eprintln!("{err}");
    }
    ExitCode::from(outcome.status)
}
