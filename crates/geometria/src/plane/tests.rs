use super::rand::{draw_shape, ReplayToken, SampleCfg};
use super::*;
use ::rand::{rngs::StdRng, Rng, SeedableRng};
use proptest::prelude::*;

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&c| Point::from(c)).collect()
}

fn rect_4x2() -> Vec<Point> {
    pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)])
}

fn equilateral_2() -> Vec<Point> {
    pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 3f64.sqrt())])
}

fn right_345() -> Vec<Point> {
    pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)])
}

#[test]
fn point_move_reset_and_display() {
    let mut p = Point::new(1.5, -2.0);
    assert_eq!(p.to_string(), "(1.5,-2)");
    p.move_to(3.0, 4.0);
    assert_eq!(p, Point::new(3.0, 4.0));
    assert_eq!(p.distance_to(&Point::origin()), 5.0);
    p.reset();
    assert_eq!(p, Point::origin());
    assert_eq!(p.to_string(), "(0,0)");
}

#[test]
fn distance_symmetric_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let p = Point::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
        let q = Point::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
        assert_eq!(p.distance_to(&q), q.distance_to(&p));
        assert_eq!(p.distance_to(&p), 0.0);
    }
}

#[test]
fn line_length_and_slope() {
    let l = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
    assert_eq!(l.length(), 5.0);
    assert_eq!(l.compute_length(), l.length());
    assert!((l.slope().unwrap() - 4.0 / 3.0).abs() < 1e-12);
    assert_eq!(
        l.to_string(),
        "Line instance defined between (0,0) and (3,4) points."
    );

    let vertical = Line::new(Point::new(2.0, -1.0), Point::new(2.0, 5.0));
    assert_eq!(vertical.slope(), Err(LineError::VerticalSlope));
}

#[test]
fn line_snapshots_endpoints() {
    let mut a = Point::new(0.0, 0.0);
    let b = Point::new(0.0, 2.0);
    let l = Line::new(a, b);
    a.move_to(10.0, 10.0);
    assert_eq!(l.start(), Point::origin());
    assert_eq!(l.length(), 2.0);
}

#[test]
fn horizontal_crossing_cases() {
    let l = Line::new(Point::new(0.0, -1.0), Point::new(2.0, 1.0));
    assert_eq!(l.horizontal_crossing(), Some(Point::new(1.0, 0.0)));
    // Same side of the x-axis.
    let above = Line::new(Point::new(0.0, 1.0), Point::new(2.0, 3.0));
    assert_eq!(above.horizontal_crossing(), None);
    // Horizontal, even when lying on the axis.
    let flat = Line::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0));
    assert_eq!(flat.horizontal_crossing(), None);
    // Touching the axis at an endpoint counts.
    let touch = Line::new(Point::new(3.0, 0.0), Point::new(5.0, 2.0));
    assert_eq!(touch.horizontal_crossing(), Some(Point::new(3.0, 0.0)));
}

#[test]
fn vertical_crossing_cases() {
    let l = Line::new(Point::new(-2.0, 0.0), Point::new(2.0, 4.0));
    assert_eq!(l.vertical_crossing(), Some(Point::new(0.0, 2.0)));
    let right = Line::new(Point::new(1.0, 0.0), Point::new(2.0, 4.0));
    assert_eq!(right.vertical_crossing(), None);
    let vertical = Line::new(Point::new(0.0, -1.0), Point::new(0.0, 1.0));
    assert_eq!(vertical.vertical_crossing(), None);
}

#[test]
fn polygon_edges_wrap_around() {
    let poly = Polygon::new(false, rect_4x2()).unwrap();
    let edges = poly.edges();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[3].start(), Point::new(0.0, 2.0));
    assert_eq!(edges[3].end(), Point::new(0.0, 0.0));
    assert_eq!(poly.compute_edges(), edges.to_vec());
    assert_eq!(poly.compute_perimeter(), 12.0);
}

#[test]
fn polygon_regular_flag_is_checked() {
    assert!(matches!(
        Polygon::new(true, rect_4x2()),
        Err(ShapeError::NotRegular { edge: 1 })
    ));
    assert!(matches!(
        Polygon::new(false, pts(&[(0.0, 0.0), (1.0, 1.0)])),
        Err(ShapeError::TooFewVertices { found: 2 })
    ));
}

#[test]
fn rectangle_metrics() {
    let r = Shape::rectangle(false, rect_4x2()).unwrap();
    assert_eq!(r.kind(), ShapeKind::Rectangle);
    assert_eq!(r.compute_perimeter(), 12.0);
    assert_eq!(r.compute_area(), 8.0);
    assert_eq!(r.inner_angles(), &[90.0, 90.0, 90.0, 90.0]);
    assert_eq!(r.edge_lengths(), vec![4.0, 2.0, 4.0, 2.0]);
}

#[test]
fn rectangle_needs_four_vertices() {
    let err = Shape::rectangle(false, right_345()).unwrap_err();
    assert_eq!(
        err,
        ShapeError::WrongVertexCount {
            kind: ShapeKind::Rectangle,
            expected: 4,
            found: 3
        }
    );
}

#[test]
fn square_accepts_and_rejects() {
    let ok = Shape::square(pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])).unwrap();
    assert_eq!(ok.compute_area(), 4.0);
    assert_eq!(ok.to_string(), "square with vertices (0,0), (2,0), (2,2), (0,2)");

    let skewed = pts(&[(0.0, 0.0), (2.0, 0.0), (3.0, 2.0), (0.0, 2.0)]);
    assert!(Shape::square(skewed).is_err());

    let unit = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    assert_eq!(
        Shape::new(ShapeKind::Square, false, unit).unwrap_err(),
        ShapeError::RegularityMismatch {
            kind: ShapeKind::Square,
            required: true
        }
    );
}

#[test]
fn square_rotated_within_tolerance() {
    let th = 0.3_f64;
    let (c, s) = (th.cos(), th.sin());
    let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let rotated: Vec<Point> = corners
        .iter()
        .map(|&(x, y)| Point::new(c * x - s * y + 5.0, s * x + c * y - 2.0))
        .collect();
    let sq = Shape::square(rotated).unwrap();
    assert!((sq.compute_area() - 1.0).abs() < 1e-12);
}

#[test]
fn triangle_heron_and_angles() {
    let t = Shape::triangle(false, right_345()).unwrap();
    assert_eq!(t.compute_area(), 6.0);
    let angles = t.inner_angles();
    // Edges: 4 (base), 5 (hypotenuse), 3; angles are opposite each edge.
    assert!((angles[1] - 90.0).abs() < 1e-9);
    assert!((angles.iter().sum::<f64>() - 180.0).abs() < 1e-6);
}

#[test]
fn triangle_rejects_zero_length_edge() {
    let collapsed = pts(&[(1.0, 1.0), (1.0, 1.0), (3.0, 0.0)]);
    assert_eq!(
        Shape::triangle(false, collapsed).unwrap_err(),
        ShapeError::DegenerateEdge { edge: 0 }
    );
}

#[test]
fn equilateral_accepts_sqrt3_apex() {
    let t = Shape::new(ShapeKind::Equilateral, true, equilateral_2()).unwrap();
    assert!((t.compute_area() - 1.732).abs() < 1e-3);
    for a in t.inner_angles() {
        assert!((a - 60.0).abs() < 1e-6, "angle {a}");
    }
}

#[test]
fn equilateral_requires_regular_flag() {
    // Fails the regularity flag check, not the geometry.
    assert_eq!(
        Shape::new(ShapeKind::Equilateral, false, equilateral_2()).unwrap_err(),
        ShapeError::RegularityMismatch {
            kind: ShapeKind::Equilateral,
            required: true
        }
    );
    // Regular flag on a non-equilateral set fails in the polygon core.
    assert!(matches!(
        Shape::new(ShapeKind::Equilateral, true, right_345()),
        Err(ShapeError::NotRegular { .. })
    ));
}

#[test]
fn isosceles_condition() {
    let iso = pts(&[(-1.0, 0.0), (1.0, 0.0), (0.0, 3.0)]);
    assert!(Shape::new(ShapeKind::Isosceles, false, iso.clone()).is_ok());
    assert!(Shape::new(ShapeKind::Isosceles, true, iso).is_err());
    assert!(matches!(
        Shape::new(ShapeKind::Isosceles, false, right_345()),
        Err(ShapeError::EdgeMismatch { .. })
    ));
    // All three equal is not isosceles.
    assert!(Shape::new(ShapeKind::Isosceles, false, equilateral_2()).is_err());
}

#[test]
fn scalene_condition() {
    assert!(Shape::new(ShapeKind::Scalene, false, right_345()).is_ok());
    let iso = pts(&[(-1.0, 0.0), (1.0, 0.0), (0.0, 3.0)]);
    assert!(matches!(
        Shape::new(ShapeKind::Scalene, false, iso),
        Err(ShapeError::EdgeMismatch { .. })
    ));
}

#[test]
fn right_triangle_345() {
    let t = Shape::new(ShapeKind::RightTriangle, false, right_345()).unwrap();
    assert_eq!(t.compute_area(), 6.0);
    let sum: f64 = t.inner_angles().iter().sum();
    assert!((sum - 180.0).abs() < 1e-6);
    assert!(Shape::new(ShapeKind::RightTriangle, true, right_345()).is_err());
}

#[test]
fn right_triangle_rejects_acute() {
    let acute = pts(&[(0.0, 0.0), (4.0, 0.0), (1.0, 3.0)]);
    assert!(matches!(
        Shape::new(ShapeKind::RightTriangle, false, acute),
        Err(ShapeError::EdgeMismatch { .. })
    ));
}

#[test]
fn right_triangle_tolerance_is_one_sided() {
    // 3-4-5 sits exactly on the upper boundary a² + b² == c².
    assert!(Shape::new(ShapeKind::RightTriangle, false, right_345()).is_ok());

    // Legs 1,1: c² rounds up to 2.0000000000000004, so a² + b² = 2 is below it.
    let unit = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    assert!(Shape::new(ShapeKind::RightTriangle, false, unit).is_ok());

    // Legs 2,3: c² rounds down to 12.999999999999998, one ulp under a² + b² = 13.
    // The slack only applies below c², so this right triangle is rejected.
    let c = 13f64.sqrt();
    assert!(c * c < 13.0);
    let legs_2_3 = pts(&[(0.0, 0.0), (2.0, 0.0), (0.0, 3.0)]);
    assert!(matches!(
        Shape::new(ShapeKind::RightTriangle, false, legs_2_3.clone()),
        Err(ShapeError::EdgeMismatch {
            kind: ShapeKind::RightTriangle,
            ..
        })
    ));
    // Still a perfectly good plain triangle.
    assert!(Shape::triangle(false, legs_2_3).is_ok());
}

#[test]
fn triangle_kinds_need_three_vertices() {
    for kind in ShapeKind::ALL.into_iter().filter(|k| k.is_triangle()) {
        for regular in [false, true] {
            let err = Shape::new(kind, regular, rect_4x2()).unwrap_err();
            assert!(
                matches!(err, ShapeError::WrongVertexCount { expected: 3, found: 4, .. }),
                "{kind}: {err}"
            );
        }
    }
}

#[test]
fn derived_metrics_are_idempotent() {
    let t = Shape::triangle(false, pts(&[(0.3, 0.1), (4.2, -1.0), (1.7, 2.9)])).unwrap();
    assert_eq!(t.compute_perimeter(), t.compute_perimeter());
    assert_eq!(t.compute_inner_angles(), t.compute_inner_angles());
    assert_eq!(t.compute_inner_angles(), t.inner_angles().to_vec());
}

#[test]
fn shape_keeps_vertex_snapshot() {
    let mut verts = rect_4x2();
    let r = Shape::rectangle(false, verts.clone()).unwrap();
    verts[2].move_to(100.0, 100.0);
    assert_eq!(r.vertices()[2], Point::new(4.0, 2.0));
    assert_eq!(r.compute_area(), 8.0);
}

#[test]
fn kind_parse_roundtrip_names() {
    for kind in ShapeKind::ALL {
        assert_eq!(kind.name().parse::<ShapeKind>().unwrap(), kind);
    }
    assert_eq!("Right_Triangle".parse::<ShapeKind>().unwrap(), ShapeKind::RightTriangle);
    assert!("hexagon".parse::<ShapeKind>().is_err());
}

#[test]
fn isclose_matches_relative_rule() {
    assert!(isclose(1.0, 1.0 + 1e-10, 1e-9, 0.0));
    assert!(!isclose(1.0, 1.0 + 1e-8, 1e-9, 0.0));
    assert!(!isclose(0.0, 1e-300, 1e-9, 0.0));
    assert!(isclose(0.0, 1e-300, 1e-9, 1e-12));
    assert!(!isclose(f64::INFINITY, 1.0, 1e-9, 0.0));
    assert!(!isclose(1.0, f64::NEG_INFINITY, 1e-9, 1e9));
    assert!(!isclose(f64::INFINITY, f64::NEG_INFINITY, 1e-9, 0.0));
    assert!(isclose(f64::INFINITY, f64::INFINITY, 1e-9, 0.0));
    assert!(!isclose(f64::NAN, f64::NAN, 1e-9, 1.0));
}

#[test]
fn exact_edge_mode_rejects_rounded_equilateral() {
    let exact = ShapeCfg {
        exact_equal_edges: true,
        ..ShapeCfg::default()
    };
    // Edges 2 and 1.9999999999999998 pass the tolerance but not `==`.
    assert!(matches!(
        Shape::with_cfg(ShapeKind::Equilateral, true, equilateral_2(), &exact),
        Err(ShapeError::EdgeMismatch {
            kind: ShapeKind::Equilateral,
            ..
        })
    ));
    let axis_square = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    assert!(Shape::with_cfg(ShapeKind::Square, true, axis_square, &exact).is_ok());
}

#[test]
fn non_finite_vertices_are_rejected() {
    let nan_apex = pts(&[(0.0, 0.0), (4.0, 0.0), (f64::NAN, 3.0)]);
    assert_eq!(
        Shape::triangle(false, nan_apex).unwrap_err(),
        ShapeError::NonFiniteVertex { vertex: 2 }
    );
    let far = pts(&[(0.0, 0.0), (f64::INFINITY, 0.0), (4.0, 2.0), (0.0, 2.0)]);
    assert_eq!(
        Shape::rectangle(false, far).unwrap_err(),
        ShapeError::NonFiniteVertex { vertex: 1 }
    );
}

#[test]
fn collinear_triangle_has_zero_area() {
    let flat = Shape::triangle(false, pts(&[(0.0, 0.0), (1.0, 0.0), (3.0, 0.0)])).unwrap();
    assert_eq!(flat.compute_area(), 0.0);
    let angles = flat.inner_angles();
    assert!((angles.iter().sum::<f64>() - 180.0).abs() < 1e-9);
}

#[test]
fn sampler_is_replayable() {
    let tok = ReplayToken::new(2025, 3);
    for kind in ShapeKind::ALL {
        let a = draw_shape(kind, SampleCfg::default(), tok).expect("sample");
        let b = draw_shape(kind, SampleCfg::default(), tok).expect("sample");
        assert_eq!(a, b);
        assert_eq!(a.kind(), kind);
    }
}

proptest! {
    #[test]
    fn prop_distance_symmetric(x0 in -1e3..1e3f64, y0 in -1e3..1e3f64, x1 in -1e3..1e3f64, y1 in -1e3..1e3f64) {
        let p = Point::new(x0, y0);
        let q = Point::new(x1, y1);
        prop_assert_eq!(p.distance_to(&q), q.distance_to(&p));
        prop_assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn prop_sampled_shapes_are_valid(seed in any::<u64>(), index in 0u64..64, k in 0usize..7) {
        let kind = ShapeKind::ALL[k];
        let shape = draw_shape(kind, SampleCfg::default(), ReplayToken::new(seed, index));
        prop_assert!(shape.is_some());
        let shape = shape.unwrap();
        prop_assert_eq!(shape.vertices().len(), kind.vertex_count());
        prop_assert!(shape.compute_area() > 0.0);
        if kind.is_triangle() {
            let sum: f64 = shape.inner_angles().iter().sum();
            prop_assert!((sum - 180.0).abs() < 1e-6);
        }
    }
}
