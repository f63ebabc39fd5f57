use ecef_ins::core::{EARTH_ROTATION_RATE, DEGREES};
use ecef_ins::mechanization::earth_rate_matrix;
use ecef_ins::{geodetic_to_ecef, gravitation, ImuSample, NavState, Navigator, NavigatorConfig, Wgs84};
use nalgebra::Vector3;
use std::env;
use std::process::ExitCode;

const SAMPLE_RATE_HZ: f64 = 100.0;
const DURATION_S: f64 = 60.0;

fn main() -> ExitCode {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => match NavigatorConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => NavigatorConfig::default(),
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Navigation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Stationary alignment check: feed the navigator the measurements of an
/// ideal IMU sitting still on the ground and report how far it wanders
fn run(config: NavigatorConfig) -> ecef_ins::Result<()> {
    println!("=== ECEF Strapdown Mechanization Demo ===");

    // 38.8977 N, 77.0365 W, 45.7 m
    let llh = Vector3::new(38.897778, -77.036389, 45.72);
    let position = geodetic_to_ecef(&llh);
    let start = NavState::at_rest(position);
    println!(
        "Start: lat={:.6} deg lon={:.6} deg -> ECEF [{:.3}, {:.3}, {:.3}] m",
        llh.x, llh.y, position.x, position.y, position.z
    );

    // With the body axes along ECEF, the ideal IMU senses the reaction to
    // gravity (centrifugal included) and the Earth rate
    let omega = earth_rate_matrix::<Wgs84>();
    let g = gravitation(&position);
    let imu = ImuSample::new(
        -(g - omega * omega * position),
        Vector3::new(0.0, 0.0, EARTH_ROTATION_RATE),
    );
    println!("Gravitation |g| = {:.5} m/s^2", g.norm());

    let mut navigator = Navigator::new(start, config)?;
    let dt = 1.0 / SAMPLE_RATE_HZ;
    let steps = (DURATION_S * SAMPLE_RATE_HZ).round() as u64;

    for _ in 0..steps {
        let state = navigator.step(&imu, dt)?;
        if navigator.epoch() % (SAMPLE_RATE_HZ as u64 * 10) == 0 {
            println!(
                "t={:6.1} s  position error={:.3e} m  speed={:.3e} m/s",
                navigator.elapsed(),
                (state.position - position).norm(),
                state.velocity.norm()
            );
        }
    }

    let end = navigator.state();
    let heading_error = end.attitude[(1, 0)].atan2(end.attitude[(0, 0)]) / DEGREES;
    println!("Final heading error: {:.3e} deg", heading_error);
    Ok(())
}
