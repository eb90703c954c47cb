// Triangle solver
//
// Sides a, b, c are opposite the angles A, B, C. Angles are in degrees.
// Cases: SSS, SAS, ASA/AAS and SSA, which may have zero, one or two
// solutions.

use crate::error::TriangleError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// sin B this close to 1 gives a single right-angled SSA solution
const RIGHT_ANGLE_EPSILON: f64 = 1e-12;

/// Known values; missing, non-positive or non-finite entries are unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleInput {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub angle_a: Option<f64>,
    pub angle_b: Option<f64>,
    pub angle_c: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub angle_a: f64,
    pub angle_b: f64,
    pub angle_c: f64,
    pub perimeter: f64,
    /// Heron's formula
    pub area: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TriangleCase {
    Sss,
    Sas,
    Asa,
    Ssa,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriangleSolution {
    pub case: TriangleCase,
    /// Two entries only in the ambiguous SSA case
    pub triangles: Vec<Triangle>,
}

fn known(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

fn sin_deg(angle: f64) -> f64 {
    angle.to_radians().sin()
}

fn cos_deg(angle: f64) -> f64 {
    angle.to_radians().cos()
}

/// Angle opposite `opposite` from the law of cosines
fn angle_from_sides(opposite: f64, adjacent1: f64, adjacent2: f64) -> f64 {
    let cos = (adjacent1 * adjacent1 + adjacent2 * adjacent2 - opposite * opposite)
        / (2.0 * adjacent1 * adjacent2);
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Side opposite `angle` between two known sides
fn side_from_angle(adjacent1: f64, adjacent2: f64, angle: f64) -> f64 {
    (adjacent1 * adjacent1 + adjacent2 * adjacent2 - 2.0 * adjacent1 * adjacent2 * cos_deg(angle))
        .sqrt()
}

impl Triangle {
    /// Complete a triangle from all sides and angles
    fn new(sides: [f64; 3], angles: [f64; 3]) -> Triangle {
        let [a, b, c] = sides;
        let perimeter = a + b + c;
        let p = perimeter / 2.0;
        let area = (p * (p - a) * (p - b) * (p - c)).max(0.0).sqrt();
        Triangle {
            a,
            b,
            c,
            angle_a: angles[0],
            angle_b: angles[1],
            angle_c: angles[2],
            perimeter,
            area,
        }
    }

    fn from_sides(sides: [f64; 3]) -> Triangle {
        let [a, b, c] = sides;
        let angle_a = angle_from_sides(a, b, c);
        let angle_b = angle_from_sides(b, a, c);
        Triangle::new(sides, [angle_a, angle_b, 180.0 - angle_a - angle_b])
    }
}

/// Rotate `[x, y, z]` left by `by` places
fn rotate<T: Copy>(values: [T; 3], by: usize) -> [T; 3] {
    [values[by % 3], values[(by + 1) % 3], values[(by + 2) % 3]]
}

pub fn solve_triangle(input: &TriangleInput) -> Result<TriangleSolution, TriangleError> {
    let sides = [known(input.a), known(input.b), known(input.c)];
    let angles = [
        known(input.angle_a),
        known(input.angle_b),
        known(input.angle_c),
    ];

    let side_count = sides.iter().flatten().count();
    let angle_count = angles.iter().flatten().count();

    if side_count + angle_count < 3 {
        return Err(TriangleError::TooFewValues(side_count + angle_count));
    }
    if side_count == 0 {
        return Err(TriangleError::NoSide);
    }
    let angle_sum: f64 = angles.iter().flatten().sum();
    if angle_sum >= 180.0 {
        return Err(TriangleError::AngleSum(angle_sum));
    }
    if angle_count == 3 {
        return Err(TriangleError::OverdeterminedAngles);
    }

    let solution = if side_count == 3 {
        solve_sss(sides.map(|s| s.unwrap_or_default()))?
    } else if angle_count >= 2 {
        solve_asa(sides, angles)
    } else {
        solve_two_sides(sides, angles)?
    };

    debug!(case = ?solution.case, count = solution.triangles.len(), "solved triangle");
    Ok(solution)
}

fn solve_sss(sides: [f64; 3]) -> Result<TriangleSolution, TriangleError> {
    let [a, b, c] = sides;
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(TriangleError::InvalidSides(a, b, c));
    }
    Ok(TriangleSolution {
        case: TriangleCase::Sss,
        triangles: vec![Triangle::from_sides(sides)],
    })
}

/// Two angles and at least one side: third angle, then the law of sines
fn solve_asa(sides: [Option<f64>; 3], angles: [Option<f64>; 3]) -> TriangleSolution {
    let known_sum: f64 = angles.iter().flatten().sum();
    let angles = angles.map(|angle| angle.unwrap_or(180.0 - known_sum));

    // Any known side fixes the scale; the first one is used
    let (index, side) = sides
        .iter()
        .enumerate()
        .find_map(|(i, s)| s.map(|s| (i, s)))
        .unwrap_or((0, 1.0));
    let ratio = side / sin_deg(angles[index]);
    let sides = angles.map(|angle| ratio * sin_deg(angle));

    TriangleSolution {
        case: TriangleCase::Asa,
        triangles: vec![Triangle::new(sides, angles)],
    }
}

/// Two sides and one angle: SAS when the angle is between them, SSA otherwise
fn solve_two_sides(
    sides: [Option<f64>; 3],
    angles: [Option<f64>; 3],
) -> Result<TriangleSolution, TriangleError> {
    // Index of the unknown side; the angle at the same index is the included one
    let missing = sides.iter().position(Option::is_none).unwrap_or(2);
    // Rotate so the unknown side is last: [p, q, r] with r unknown
    let by = (missing + 1) % 3;
    let [p, q, _] = rotate(sides, by).map(|s| s.unwrap_or_default());
    let [angle_p, angle_q, angle_r] = rotate(angles, by);
    let unrotate = |values: [f64; 3]| rotate(values, (3 - by) % 3);

    if let Some(angle_r) = angle_r {
        let r = side_from_angle(p, q, angle_r);
        let angle_p = angle_from_sides(p, q, r);
        let angle_q = 180.0 - angle_r - angle_p;
        return Ok(TriangleSolution {
            case: TriangleCase::Sas,
            triangles: vec![Triangle::new(
                unrotate([p, q, r]),
                unrotate([angle_p, angle_q, angle_r]),
            )],
        });
    }

    // SSA: the known angle is opposite one of the known sides
    let (opposite, other, known_angle, swapped) = match (angle_p, angle_q) {
        (Some(angle), _) => (p, q, angle, false),
        (None, Some(angle)) => (q, p, angle, true),
        (None, None) => return Err(TriangleError::TooFewValues(2)),
    };

    let sine = other * sin_deg(known_angle) / opposite;
    if sine > 1.0 + RIGHT_ANGLE_EPSILON {
        return Err(TriangleError::NoSolution);
    }

    let first = sine.min(1.0).asin().to_degrees();
    let mut candidates = vec![first];
    if (1.0 - sine).abs() > RIGHT_ANGLE_EPSILON {
        candidates.push(180.0 - first);
    }

    let triangles: Vec<Triangle> = candidates
        .into_iter()
        .filter(|other_angle| known_angle + other_angle < 180.0)
        .map(|other_angle| {
            let third_angle = 180.0 - known_angle - other_angle;
            let third = opposite * sin_deg(third_angle) / sin_deg(known_angle);
            let (sides, angles) = if swapped {
                ([other, opposite, third], [other_angle, known_angle, third_angle])
            } else {
                ([opposite, other, third], [known_angle, other_angle, third_angle])
            };
            Triangle::new(unrotate(sides), unrotate(angles))
        })
        .collect();

    if triangles.is_empty() {
        return Err(TriangleError::NoSolution);
    }
    Ok(TriangleSolution {
        case: TriangleCase::Ssa,
        triangles,
    })
}
