use super::*;

const EPS: f64 = 1e-12;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn vector_length_and_degeneracy() {
    let l = ControlLine::new((0.0, 0.0), (3.0, 4.0));
    assert_eq!(l.vector(), Vec2::new(3.0, 4.0));
    assert!(close(l.length(), 5.0));
    assert!(!l.is_degenerate());

    let zero = ControlLine::new((2.0, 2.0), (2.0, 2.0));
    assert!(zero.is_degenerate());
    let tiny = ControlLine::new((0.0, 0.0), (MIN_LINE_LENGTH / 10.0, 0.0));
    assert!(tiny.is_degenerate());
}

#[test]
fn unit_normal_is_unit_and_perpendicular() {
    let l = ControlLine::new((1.0, 1.0), (4.0, 5.0));
    let n = l.unit_normal();
    assert!(close(n.hypot(), 1.0));
    assert!(n.dot(l.vector()).abs() < EPS);

    // +90 degree rotation of the x axis is the y axis.
    let x_axis = ControlLine::new((0.0, 0.0), (1.0, 0.0));
    assert!(close(x_axis.unit_normal().x, 0.0));
    assert!(close(x_axis.unit_normal().y, 1.0));
}

#[test]
fn projection_is_0_at_start_and_1_at_end() {
    let l = ControlLine::new((2.0, -1.0), (6.0, 2.0));
    assert!(close(l.projection(l.start), 0.0));
    assert!(close(l.projection(l.end), 1.0));
    let mid = Point::new(4.0, 0.5);
    assert!(close(l.projection(mid), 0.5));
}

#[test]
fn signed_distance_flips_sign_across_the_line() {
    let l = ControlLine::new((0.0, 0.0), (10.0, 0.0));
    assert!(close(l.signed_distance(Point::new(5.0, 3.0)), 3.0));
    assert!(close(l.signed_distance(Point::new(5.0, -3.0)), -3.0));
    assert!(close(l.signed_distance(Point::new(7.0, 0.0)), 0.0));
}

#[test]
fn point_at_inverts_projection_and_signed_distance() {
    let l = ControlLine::new((1.0, 2.0), (7.0, -3.0));
    for p in [
        Point::new(0.0, 0.0),
        Point::new(3.5, 1.5),
        Point::new(-2.0, 9.0),
    ] {
        let u = l.projection(p);
        let v = l.signed_distance(p);
        let q = l.point_at(u, v);
        assert!(close(q.x, p.x));
        assert!(close(q.y, p.y));
    }
}

#[test]
fn lerp_is_endpoint_wise() {
    let a = ControlLine::new((0.0, 0.0), (10.0, 0.0));
    let b = ControlLine::new((0.0, 10.0), (10.0, 10.0));
    let mid = a.lerp(&b, 0.5);
    assert_eq!(mid.start, Point::new(0.0, 5.0));
    assert_eq!(mid.end, Point::new(10.0, 5.0));

    assert_eq!(a.lerp(&b, 0.0), a);
    assert_eq!(a.lerp(&b, 1.0), b);
}
