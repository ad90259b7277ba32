use super::*;

fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> ControlLine {
    ControlLine::new((x0, y0), (x1, y1))
}

#[test]
fn t_0_returns_source_field_and_t_1_returns_dest_field() {
    let src = vec![line(0.0, 0.0, 10.0, 0.0), line(5.0, 5.0, 5.0, 15.0)];
    let dst = vec![line(2.0, 1.0, 12.0, 3.0), line(6.0, 4.0, 8.0, 20.0)];

    assert_eq!(interpolate_fields(&src, &dst, 0.0).unwrap(), src);
    assert_eq!(interpolate_fields(&src, &dst, 1.0).unwrap(), dst);
}

#[test]
fn midpoint_moves_each_endpoint_independently() {
    let src = vec![line(0.0, 0.0, 10.0, 0.0)];
    let dst = vec![line(0.0, 10.0, 10.0, 10.0)];

    let mid = interpolate_fields(&src, &dst, 0.5).unwrap();
    assert_eq!(mid, vec![line(0.0, 5.0, 10.0, 5.0)]);
}

#[test]
fn count_mismatch_is_a_validation_error() {
    let src = vec![line(0.0, 0.0, 10.0, 0.0)];
    let dst: Vec<ControlLine> = vec![];

    let err = interpolate_fields(&src, &dst, 0.5).unwrap_err();
    assert!(err.to_string().contains("control-line count mismatch"));
}

#[test]
fn empty_fields_interpolate_to_empty() {
    let out = interpolate_fields(&[], &[], 0.3).unwrap();
    assert!(out.is_empty());
}
