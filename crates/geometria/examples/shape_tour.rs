//! Build one shape of every kind and print its metrics.
//!
//! Usage:
//!   cargo run -p geometria --example shape_tour -- [seed]

use geometria::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);

    let rect = Shape::rectangle(
        false,
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(0.0, 2.0),
        ],
    );
    match rect {
        Ok(r) => println!("{r}: area={} perimeter={}", r.compute_area(), r.compute_perimeter()),
        Err(e) => eprintln!("rectangle: {e}"),
    }

    for (i, kind) in ShapeKind::ALL.into_iter().enumerate() {
        let tok = ReplayToken::new(seed, i as u64);
        match draw_shape(kind, SampleCfg::default(), tok) {
            Some(s) => println!(
                "{s}\n  area={:.4} perimeter={:.4} angles={:?}",
                s.compute_area(),
                s.compute_perimeter(),
                s.inner_angles()
            ),
            None => eprintln!("{kind}: no valid sample"),
        }
    }
}
