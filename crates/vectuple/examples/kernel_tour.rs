//! Walks a few points through the kernels and prints the results.
//!
//! Run with `RUST_LOG=vectuple=trace` to see the library's diagnostics.

use std::f32::consts::FRAC_PI_4;

use log::LevelFilter;
use vectuple::{tuple, *};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Info)
        .filter(Some("vectuple"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    // Points as they might arrive from a parser: plain tuples.
    let points: [(f32, f32, f32); 4] = [
        (1.0, 0.0, 0.0),
        (0.0, 3.0, 4.0),
        (1e-4, 0.0, 0.0),
        (0.0, 0.0, 0.0),
    ];
    let tolerance = Tolerance::new(1e-3)?;

    let mut packed = vec![0.0f32; points.len() * 3];
    for (i, p) in points.iter().enumerate() {
        let v = tuple::read(p);
        let n = Vec3Kernel::normalize(v, tolerance);
        let r = Vec3Kernel::rotate_axis_angle(n, [0.0, 0.0, 1.0], FRAC_PI_4);
        tuple::write_slice(&mut packed, i * 3, r)?;

        log::info!(
            "{} -> normalized {} -> rotated {}",
            Vec3::from(v),
            Vec3::from(n),
            Vec3::from(r)
        );

        match Vec3Kernel::reciprocal_length(v) {
            Ok(inv) => log::info!("  1/|v| = {inv}"),
            Err(e) => log::warn!("  {e}"),
        }
    }

    let a = vec3(1.0, 2.0, 3.0);
    let b = vec3(-2.0, 0.5, 1.0);
    log::info!("{a} x {b} = {}", a.cross(b));
    log::info!("{a} . {b} = {}", a.dot(b));
    log::info!("lerp({a}, {b}, 0.25) = {}", a.lerp(b, 0.25));
    log::info!("{a} + {b} * 0.25 = {}", a.integrate_linear(b, 0.25));

    let fast = Kernel3::<FastPolicy>::reciprocal_length(a.to_array())?;
    let exact = a.reciprocal_length()?;
    log::info!("1/|a|: exact {exact}, fast {fast}");

    let second = tuple::read_slice::<3>(&packed, 3)?;
    log::info!("packed[1] = {}", Vec3::from(second));

    Ok(())
}
