mod support;

use prismnet::ellipse;
use prismnet::errors::GeometryError;
use prismnet::float_types::{PI, Real};
use prismnet::net::{CutSpec, DEFAULT_SAMPLES, NetParams, compute_net};

#[test]
fn samples_span_perimeter() {
    let net = compute_net(&support::lampshade_params()).unwrap();

    assert_eq!(net.samples.len(), DEFAULT_SAMPLES);
    assert_eq!(net.samples[0], 0.0);
    assert_eq!(*net.samples.last().unwrap(), net.perimeter);
    for pair in net.samples.windows(2) {
        assert!(pair[0] < pair[1], "samples must be strictly increasing");
    }
}

#[test]
fn perimeter_matches_boundary_trace() {
    // Ramanujan II against a dense polyline trace of the boundary
    let ramanujan = ellipse::perimeter(12.0, 4.0);
    let traced = ellipse::polyline_length(&ellipse::boundary_points(12.0, 4.0, 16384));
    assert!(ramanujan > 0.0);
    assert!(
        ((ramanujan - traced) / traced).abs() < 1e-4,
        "Ramanujan {} vs traced {}",
        ramanujan,
        traced
    );
}

#[test]
fn perimeter_of_circle() {
    let r: Real = 7.5;
    assert!(support::approx_eq(
        ellipse::perimeter(r, r),
        2.0 * PI * r,
        1e-9
    ));
}

#[test]
fn cut_lines_start_at_major_vertex_extremes() {
    // Tall prism so clipping cannot mask the raw formula values.
    let mut params = support::lampshade_params();
    params.height = 1000.0;
    let net = compute_net(&params).unwrap();

    let amplitude2 = params.major_axis * params.cut2.angle_deg.to_radians().tan();

    // cut 1: sin(-pi/2) = -1, so y(0) = start_height exactly
    assert!(support::approx_eq(net.cut1[0].y, params.cut1.start_height, 1e-9));
    // cut 2: sin(pi/2) = 1, so y(0) = start_height + 2A
    assert!(support::approx_eq(
        net.cut2[0].y,
        params.cut2.start_height + 2.0 * amplitude2,
        1e-9
    ));
}

#[test]
fn lampshade_scenario() {
    // 12x4 mm, 25 mm tall, 45 deg/3 mm and 45 deg/1 mm: cut 1 starts at
    // 3 mm, cut 2 at 1 + 2*12*tan(45 deg) = 25 mm, exactly the top rim.
    let net = compute_net(&support::lampshade_params()).unwrap();

    assert!(support::approx_eq(net.cut1[0].y, 3.0, 1e-9));
    assert!(support::approx_eq(net.cut2[0].y, 25.0, 1e-9));
}

#[test]
fn zero_angle_gives_flat_cuts() {
    let params = NetParams::new(
        12.0,
        4.0,
        25.0,
        CutSpec::new(0.0, 3.0),
        CutSpec::new(0.0, 40.0), // above the rim, must clamp flat at 25
    );
    let net = compute_net(&params).unwrap();

    for point in &net.cut1 {
        assert!(support::approx_eq(point.y, 3.0, 1e-12));
    }
    for point in &net.cut2 {
        assert!(support::approx_eq(point.y, 25.0, 1e-12));
    }
}

#[test]
fn compute_net_is_idempotent() {
    let params = support::lampshade_params();
    assert_eq!(compute_net(&params).unwrap(), compute_net(&params).unwrap());
}

#[test]
fn bottom_edge_spans_the_net() {
    let net = compute_net(&support::lampshade_params()).unwrap();
    let [start, end] = net.bottom_edge();
    assert_eq!((start.x, start.y), (0.0, 0.0));
    assert_eq!((end.x, end.y), (net.perimeter, 0.0));
}

#[test]
fn degenerate_parameters_are_rejected() {
    let base = support::lampshade_params();

    let mut params = base.clone();
    params.major_axis = 0.0;
    assert_eq!(
        compute_net(&params),
        Err(GeometryError::NonPositiveAxis {
            name: "major",
            value: 0.0
        })
    );

    let mut params = base.clone();
    params.minor_axis = -1.0;
    assert!(matches!(
        compute_net(&params),
        Err(GeometryError::NonPositiveAxis { name: "minor", .. })
    ));

    let mut params = base.clone();
    params.height = 0.0;
    assert_eq!(
        compute_net(&params),
        Err(GeometryError::NonPositiveHeight(0.0))
    );

    let mut params = base.clone();
    params.cut1.angle_deg = 90.0;
    assert!(matches!(
        compute_net(&params),
        Err(GeometryError::SteepCutAngle { cut: "cut 1", .. })
    ));

    let mut params = base.clone();
    params.cut2.angle_deg = -90.0;
    assert!(matches!(
        compute_net(&params),
        Err(GeometryError::SteepCutAngle { cut: "cut 2", .. })
    ));

    let mut params = base.clone();
    params.samples = 1;
    assert_eq!(compute_net(&params), Err(GeometryError::TooFewSamples(1)));

    let mut params = base;
    params.height = Real::NAN;
    assert!(matches!(
        compute_net(&params),
        Err(GeometryError::NonPositiveHeight(_))
    ));
}
