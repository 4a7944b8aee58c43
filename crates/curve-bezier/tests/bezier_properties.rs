use approx::assert_abs_diff_eq;
use curve_bezier::{
    cubic_point, cubic_point_windowed, cubic_velocity, quadratic_as_cubic, quadratic_point,
    quadratic_velocity, quadratic_velocity_windowed, CubicBezier, CubicBezierCurve2D, CubicBezierCurve3D, Curve, CurveError,
    QuadraticBezier, QuadraticBezierCurve2D,
};
use curve_core::normalize;
use curve_math::{dvec2, dvec3, DVec2, DVec3, Lift, ProjectXy};

const EPS: f64 = 1e-3;

fn cubic_3d() -> [DVec3; 4] {
    [
        dvec3(-4.0, -4.0, -3.0),
        dvec3(-2.0, 4.0, 0.0),
        dvec3(2.0, -4.0, 3.0),
        dvec3(4.0, 4.0, 0.0),
    ]
}

fn quadratic_2d() -> [DVec2; 3] {
    [dvec2(-4.0, -4.0), dvec2(2.0, -4.0), dvec2(4.0, 4.0)]
}

fn samples(n: usize) -> impl Iterator<Item = f64> {
    (0..=n).map(move |i| i as f64 / n as f64)
}

#[test]
fn test_boundary_identity() {
    let control_sets = [
        cubic_3d(),
        [
            dvec3(0.1, 7.3, -2.2),
            dvec3(5.5, -1.0, 0.0),
            dvec3(-3.25, 2.0, 9.0),
            dvec3(1e3, -1e3, 0.5),
        ],
    ];
    for [p0, p1, p2, p3] in control_sets {
        assert_eq!(cubic_point(p0, p1, p2, p3, 0.0).unwrap(), p0);
        assert_eq!(cubic_point(p0, p1, p2, p3, 1.0).unwrap(), p3);
    }
}

#[test]
fn test_degree_elevation_equivalence() {
    let [p0, p1, p2] = quadratic_2d();
    let (c0, c1, c2, c3) = quadratic_as_cubic(p0, p1, p2);
    for t in samples(32) {
        let s = 1.0 - t;
        let direct = s * s * p0 + 2.0 * s * t * p1 + t * t * p2;
        let elevated = cubic_point(c0, c1, c2, c3, t).unwrap();
        assert_abs_diff_eq!(quadratic_point(p0, p1, p2, t).unwrap(), elevated, epsilon = EPS);
        assert_abs_diff_eq!(direct, elevated, epsilon = EPS);

        let direct_velocity = 2.0 * s * (p1 - p0) + 2.0 * t * (p2 - p1);
        assert_abs_diff_eq!(
            quadratic_velocity(p0, p1, p2, t).unwrap(),
            direct_velocity,
            epsilon = EPS
        );
    }
}

#[test]
fn test_dimension_lift_consistency() {
    let flat = CubicBezierCurve2D::new(
        dvec2(-4.0, -4.0),
        dvec2(-2.0, 4.0),
        dvec2(2.0, -4.0),
        dvec2(4.0, 4.0),
    );
    let lifted = flat.lift();
    for t in samples(20) {
        let p2 = flat.point(t).unwrap();
        let p3 = lifted.point(t).unwrap();
        assert_abs_diff_eq!(p2, p3.xy(), epsilon = 1e-12);
        assert_abs_diff_eq!(p2.lift(), p3, epsilon = 1e-12);

        let v2 = flat.velocity(t).unwrap();
        let v3 = lifted.velocity(t).unwrap();
        assert_abs_diff_eq!(v2, v3.xy(), epsilon = 1e-12);
    }

    let quad: QuadraticBezierCurve2D = QuadraticBezier::new(
        quadratic_2d()[0],
        quadratic_2d()[1],
        quadratic_2d()[2],
    );
    for t in samples(20) {
        assert_abs_diff_eq!(
            quad.point(t).unwrap(),
            quad.lift().point(t).unwrap().xy(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_normalization_invariance() {
    let [p0, p1, p2, p3] = cubic_3d();
    let windows = [(2.0, 5.0), (-8.0, 1.0), (0.5, 0.75), (10.0, 1000.0)];
    for (a, b) in windows {
        for u in samples(10) {
            let t = a + u * (b - a);
            let direct = cubic_point(p0, p1, p2, p3, normalize(t, a, b)).unwrap();
            let windowed = cubic_point_windowed(p0, p1, p2, p3, t, a, b).unwrap();
            assert_eq!(direct, windowed);
        }
    }
}

#[test]
fn test_range_rejection() {
    let [p0, p1, p2, p3] = cubic_3d();
    assert_eq!(
        cubic_point(p0, p1, p2, p3, 1.5).unwrap_err(),
        CurveError::InvalidParameter { t: 1.5, lower: 0.0, upper: 1.0 }
    );
    assert_eq!(
        cubic_point_windowed(p0, p1, p2, p3, 15.0, 2.0, 5.0).unwrap_err(),
        CurveError::InvalidParameter { t: 15.0, lower: 2.0, upper: 5.0 }
    );
    assert!(cubic_velocity(p0, p1, p2, p3, -0.5).is_err());

    let [q0, q1, q2] = quadratic_2d();
    assert!(quadratic_point(q0, q1, q2, 1.5).unwrap_err().is_invalid_parameter());
}

#[test]
fn test_reversed_window_runs_backwards() {
    let [p0, p1, p2, p3] = cubic_3d();
    assert_eq!(cubic_point_windowed(p0, p1, p2, p3, 10.0, 10.0, 2.0).unwrap(), p0);
    assert_eq!(cubic_point_windowed(p0, p1, p2, p3, 2.0, 10.0, 2.0).unwrap(), p3);
    assert_abs_diff_eq!(
        cubic_point_windowed(p0, p1, p2, p3, 4.0, 10.0, 2.0).unwrap(),
        cubic_point(p0, p1, p2, p3, 0.75).unwrap(),
        epsilon = 1e-12
    );
}

#[test]
fn test_degenerate_window_rejected() {
    let [q0, q1, q2] = quadratic_2d();
    assert_eq!(
        quadratic_velocity_windowed(q0, q1, q2, 3.0, 3.0, 3.0).unwrap_err(),
        CurveError::DegenerateWindow { start: 3.0, end: 3.0 }
    );

    let [p0, p1, p2, p3] = cubic_3d();
    let err = cubic_point_windowed(p0, p1, p2, p3, 0.0, f64::NEG_INFINITY, 1.0).unwrap_err();
    assert!(err.is_degenerate_window());
}

#[test]
fn test_cubic_3d_scenario() {
    let [p0, p1, p2, p3] = cubic_3d();
    let curve = CubicBezierCurve3D::new(p0, p1, p2, p3);
    assert_abs_diff_eq!(curve.point(0.5).unwrap(), dvec3(0.0, 0.0, 0.75), epsilon = EPS);
    assert_abs_diff_eq!(
        curve.point(0.25).unwrap(),
        dvec3(-2.1875, -0.5, -0.84375),
        epsilon = EPS
    );
    assert_abs_diff_eq!(curve.velocity(0.5).unwrap(), dvec3(9.0, 0.0, 4.5), epsilon = EPS);
}

#[test]
fn test_quadratic_2d_scenario() {
    let [p0, p1, p2] = quadratic_2d();
    let curve = QuadraticBezier::new(p0, p1, p2);
    assert_abs_diff_eq!(curve.point(0.25).unwrap(), dvec2(-1.25, -3.5), epsilon = EPS);
    assert_abs_diff_eq!(curve.velocity(0.25).unwrap(), dvec2(10.0, 4.0), epsilon = EPS);

    let cubic = curve.as_cubic();
    for t in [0.0, 0.25, 0.75] {
        assert_abs_diff_eq!(curve.point(t).unwrap(), cubic.point(t).unwrap(), epsilon = EPS);
    }
}

#[test]
fn test_curves_through_trait() {
    fn sweep<C: Curve>(curve: &C) -> Vec<C::Point> {
        samples(4).map(|t| curve.point(t).unwrap()).collect()
    }

    let [p0, p1, p2] = quadratic_2d();
    let quad = QuadraticBezier::new(p0, p1, p2);
    let cubic: CubicBezier<DVec2> = quad.into();
    for (a, b) in sweep(&quad).into_iter().zip(sweep(&cubic)) {
        assert_abs_diff_eq!(a, b, epsilon = EPS);
    }
}

#[test]
fn test_serde_roundtrip_preserves_equality() {
    let [p0, p1, p2, p3] = cubic_3d();
    let curve = CubicBezierCurve3D::new(p0, p1, p2, p3);
    let json = serde_json::to_string(&curve).unwrap();
    let back: CubicBezierCurve3D = serde_json::from_str(&json).unwrap();
    assert_eq!(curve, back);
}
