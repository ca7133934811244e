//! Path trace demo: generates a few moves and prints them as CSV.
//!
//! ```text
//! cargo run --example trace                         # default logging
//! RUST_LOG=humancurve=trace cargo run --example trace
//! ```
//!
//! Output columns: `move,index,x,y`.

use humancurve::{Easing, GenerationConfig, HumanCurve, MovePlanner, Point2, TargetRect};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const VIEWPORT_HEIGHT: f64 = 800.0;

fn main() -> Result<(), humancurve::HumanCurveError> {
    // Default: WARN for everything, INFO for humancurve.
    // Override with RUST_LOG env var (e.g. RUST_LOG=humancurve=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("trace=info".parse().unwrap_or_default())
        .add_directive("humancurve=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    println!("move,index,x,y");

    // Fixed-seed move with an explicit configuration.
    let config = GenerationConfig {
        knots_count: 3,
        target_points: 60,
        easing: Easing::SineInOut.as_fn(),
        seed: Some(2024),
        ..GenerationConfig::default()
    };
    let path = HumanCurve::generate(Point2::new(40.0, 700.0), Point2::new(1500.0, 120.0), &config)?;
    print_path(0, &path);

    // Planned moves hopping between on-screen targets.
    let planner = MovePlanner::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let targets = [
        TargetRect::new(1200.0, 80.0, 1240.0, 110.0),
        TargetRect::new(300.0, 600.0, 360.0, 640.0),
        TargetRect::new(900.0, 400.0, 920.0, 420.0),
    ];
    let mut cursor = Point2::new(900.0, 400.0);
    for (i, target) in targets.iter().enumerate() {
        let planned = planner.plan_move(cursor, target, VIEWPORT_HEIGHT, &mut rng)?;
        tracing::info!(
            destination = ?planned.destination,
            points = planned.points.len(),
            "planned move {}",
            i + 1
        );
        print_path(i + 1, &planned.points);
        cursor = planned.destination;
    }
    Ok(())
}

fn print_path(id: usize, points: &[Point2]) {
    for (i, p) in points.iter().enumerate() {
        println!("{id},{i},{:.3},{:.3}", p.x, p.y);
    }
}
