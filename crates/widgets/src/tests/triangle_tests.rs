// Triangle Solver Tests

use super::assert_close;
use crate::error::TriangleError;
use crate::triangle::{solve_triangle, TriangleCase, TriangleInput};

const EPS: f64 = 1e-9;

// ==================== SSS ====================

#[test]
fn test_right_triangle_3_4_5() {
    let input = TriangleInput {
        a: Some(3.0),
        b: Some(4.0),
        c: Some(5.0),
        ..TriangleInput::default()
    };
    let solution = solve_triangle(&input).unwrap();
    assert_eq!(solution.case, TriangleCase::Sss);
    let t = solution.triangles[0];
    assert_close(t.angle_c, 90.0, EPS);
    assert_close(t.angle_a, 36.869_897_645_844, 1e-9);
    assert_close(t.area, 6.0, EPS);
    assert_close(t.perimeter, 12.0, EPS);
}

#[test]
fn test_triangle_inequality() {
    let input = TriangleInput {
        a: Some(1.0),
        b: Some(2.0),
        c: Some(3.0),
        ..TriangleInput::default()
    };
    assert_eq!(
        solve_triangle(&input),
        Err(TriangleError::InvalidSides(1.0, 2.0, 3.0))
    );
}

// ==================== SAS ====================

#[test]
fn test_sas_included_angle() {
    let input = TriangleInput {
        a: Some(3.0),
        b: Some(4.0),
        angle_c: Some(90.0),
        ..TriangleInput::default()
    };
    let solution = solve_triangle(&input).unwrap();
    assert_eq!(solution.case, TriangleCase::Sas);
    let t = solution.triangles[0];
    assert_close(t.c, 5.0, EPS);
    assert_close(t.angle_a, 36.869_897_645_844, 1e-9);
    assert_close(t.angle_b, 53.130_102_354_156, 1e-9);
    assert_close(t.area, 6.0, EPS);
}

#[test]
fn test_sas_with_unknown_first_side() {
    let input = TriangleInput {
        b: Some(5.0),
        c: Some(5.0),
        angle_a: Some(60.0),
        ..TriangleInput::default()
    };
    let t = solve_triangle(&input).unwrap().triangles[0];
    assert_close(t.a, 5.0, EPS);
    assert_close(t.angle_b, 60.0, EPS);
    assert_close(t.angle_c, 60.0, EPS);
}

// ==================== ASA / AAS ====================

#[test]
fn test_two_angles_and_a_side() {
    let input = TriangleInput {
        c: Some(10.0),
        angle_a: Some(30.0),
        angle_b: Some(60.0),
        ..TriangleInput::default()
    };
    let solution = solve_triangle(&input).unwrap();
    assert_eq!(solution.case, TriangleCase::Asa);
    let t = solution.triangles[0];
    assert_close(t.angle_c, 90.0, EPS);
    assert_close(t.a, 5.0, EPS);
    assert_close(t.b, 5.0 * 3f64.sqrt(), EPS);
}

// ==================== SSA ====================

#[test]
fn test_ssa_two_triangles() {
    let input = TriangleInput {
        a: Some(6.0),
        b: Some(10.0),
        angle_a: Some(30.0),
        ..TriangleInput::default()
    };
    let solution = solve_triangle(&input).unwrap();
    assert_eq!(solution.case, TriangleCase::Ssa);
    assert_eq!(solution.triangles.len(), 2);
    let acute = solution.triangles[0];
    let obtuse = solution.triangles[1];
    assert_close(acute.angle_b, (5.0f64 / 6.0).asin().to_degrees(), EPS);
    assert_close(obtuse.angle_b, 180.0 - acute.angle_b, EPS);
    for t in &solution.triangles {
        assert_close(t.angle_a + t.angle_b + t.angle_c, 180.0, EPS);
        assert_close(t.a, 6.0, EPS);
        assert_close(t.b, 10.0, EPS);
    }
}

#[test]
fn test_ssa_one_triangle() {
    let input = TriangleInput {
        a: Some(10.0),
        b: Some(6.0),
        angle_a: Some(30.0),
        ..TriangleInput::default()
    };
    assert_eq!(solve_triangle(&input).unwrap().triangles.len(), 1);
}

#[test]
fn test_ssa_angle_opposite_second_side() {
    let input = TriangleInput {
        a: Some(10.0),
        b: Some(6.0),
        angle_b: Some(30.0),
        ..TriangleInput::default()
    };
    let solution = solve_triangle(&input).unwrap();
    assert_eq!(solution.triangles.len(), 2);
    assert_close(solution.triangles[0].angle_a, (5.0f64 / 6.0).asin().to_degrees(), EPS);
}

#[test]
fn test_ssa_no_triangle() {
    let input = TriangleInput {
        a: Some(2.0),
        b: Some(10.0),
        angle_a: Some(30.0),
        ..TriangleInput::default()
    };
    assert_eq!(solve_triangle(&input), Err(TriangleError::NoSolution));
}

// ==================== VALIDATION ====================

#[test]
fn test_too_few_values() {
    let input = TriangleInput {
        a: Some(3.0),
        angle_b: Some(40.0),
        c: Some(-2.0),
        ..TriangleInput::default()
    };
    assert_eq!(solve_triangle(&input), Err(TriangleError::TooFewValues(2)));
}

#[test]
fn test_needs_a_side() {
    let input = TriangleInput {
        angle_a: Some(50.0),
        angle_b: Some(60.0),
        angle_c: Some(70.0),
        ..TriangleInput::default()
    };
    assert_eq!(solve_triangle(&input), Err(TriangleError::NoSide));
}

#[test]
fn test_angle_sum() {
    let input = TriangleInput {
        a: Some(5.0),
        angle_a: Some(100.0),
        angle_b: Some(80.0),
        ..TriangleInput::default()
    };
    assert_eq!(solve_triangle(&input), Err(TriangleError::AngleSum(180.0)));
}

#[test]
fn test_three_angles_short_of_180() {
    let input = TriangleInput {
        a: Some(5.0),
        angle_a: Some(30.0),
        angle_b: Some(40.0),
        angle_c: Some(50.0),
        ..TriangleInput::default()
    };
    assert_eq!(solve_triangle(&input), Err(TriangleError::OverdeterminedAngles));
}
