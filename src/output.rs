// Plain text rendering of reports

use analysis::{Analysis, Limit, Line};
use parser::display::format_number;
use std::fmt::Write;
use widgets::{TriangleSolution, TrigSolution};

fn point(x: f64, y: f64) -> String {
    format!("({}, {})", format_number(x), format_number(y))
}

fn list<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.iter().map(render).collect::<Vec<_>>().join(", ")
    }
}

fn side(limit: Limit, line: Option<Line>) -> String {
    match line {
        Some(line) => format!("{} (asymptote {})", limit, line),
        None => limit.to_string(),
    }
}

pub fn analysis_text(report: &Analysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "f(x)   = {}", report.function.text);
    let _ = writeln!(out, "f'(x)  = {}", report.derivative.text);
    let _ = writeln!(out, "f''(x) = {}", report.second_derivative.text);
    let _ = writeln!(out, "excluded: {}", list(&report.excluded, |x| format_number(*x)));

    let _ = writeln!(
        out,
        "critical points: {}",
        list(&report.critical_points, |p| format!("{} {}", point(p.x, p.y), p.kind))
    );
    let _ = writeln!(
        out,
        "inflection points: {}",
        list(&report.inflection_points, |p| point(p.x, p.y))
    );

    let _ = writeln!(out, "monotonicity:");
    for interval in &report.monotonicity {
        let _ = writeln!(out, "  {}", interval);
    }
    let _ = writeln!(out, "concavity:");
    for interval in &report.concavity {
        let _ = writeln!(out, "  {}", interval);
    }

    let asymptotes = &report.asymptotes;
    let _ = writeln!(
        out,
        "vertical asymptotes: {}",
        list(&asymptotes.vertical, |x| format!("x = {}", format_number(*x)))
    );
    let _ = writeln!(out, "x -> -∞: {}", side(asymptotes.limit_left, asymptotes.left));
    let _ = writeln!(out, "x -> +∞: {}", side(asymptotes.limit_right, asymptotes.right));

    match (report.samples.first(), report.samples.last()) {
        (Some(first), Some(last)) => {
            let _ = writeln!(
                out,
                "samples: {} points on [{}, {}]",
                report.samples.len(),
                format_number(first.x),
                format_number(last.x)
            );
        }
        _ => {
            let _ = writeln!(out, "samples: none");
        }
    }

    for note in &report.notes {
        let _ = writeln!(out, "note: {}", note);
    }
    out
}

pub fn trig_text(solution: &TrigSolution) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}(x) = {}",
        solution.func,
        format_number(solution.value)
    );
    let _ = writeln!(out, "{}", solution.alpha_latex);
    for family in &solution.families {
        let _ = writeln!(out, "{}", family.degrees);
    }
    out
}

pub fn triangle_text(solution: &TriangleSolution) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "case {:?}, {} solution(s)",
        solution.case,
        solution.triangles.len()
    );
    let round = |v: f64| format_number((v * 1e4).round() / 1e4);
    for (i, t) in solution.triangles.iter().enumerate() {
        let _ = writeln!(out, "triangle {}:", i + 1);
        let _ = writeln!(
            out,
            "  a = {}, b = {}, c = {}",
            round(t.a),
            round(t.b),
            round(t.c)
        );
        let _ = writeln!(
            out,
            "  A = {}°, B = {}°, C = {}°",
            round(t.angle_a),
            round(t.angle_b),
            round(t.angle_c)
        );
        let _ = writeln!(out, "  perimeter = {}", round(t.perimeter));
        let _ = writeln!(out, "  area = {}", round(t.area));
    }
    out
}
