//! Argument syntax: points `x,y`, point pairs `x1,y1:x2,y2`, matrices `a,b,c,d,tx,ty`.

use anyhow::{bail, Context, Result};
use nalgebra::Vector2;
use planar::{Aff2, Line, Segment};

fn numbers(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|tok| {
            let tok = tok.trim();
            let v: f64 = tok
                .parse()
                .with_context(|| format!("invalid number {tok:?} in {s:?}"))?;
            if !v.is_finite() {
                bail!("non-finite number {tok:?} in {s:?}");
            }
            Ok(v)
        })
        .collect()
}

pub fn point(s: &str) -> Result<Vector2<f64>> {
    match numbers(s)?.as_slice() {
        [x, y] => Ok(Vector2::new(*x, *y)),
        other => bail!("expected `x,y`, got {} value(s) in {s:?}", other.len()),
    }
}

pub fn point_pair(s: &str) -> Result<(Vector2<f64>, Vector2<f64>)> {
    let (a, b) = s
        .split_once(':')
        .with_context(|| format!("expected `x1,y1:x2,y2`, got {s:?}"))?;
    Ok((point(a)?, point(b)?))
}

/// Line through two points, directed first to second.
pub fn line(s: &str) -> Result<Line> {
    let (a, b) = point_pair(s)?;
    if a == b {
        tracing::warn!(input = s, "coincident points; line direction is arbitrary");
    }
    Ok(Line::from_points(a, b))
}

pub fn segment(s: &str) -> Result<Segment> {
    let (a, b) = point_pair(s)?;
    Ok(Segment::new(a, b))
}

pub fn matrix(s: &str) -> Result<Aff2> {
    let v = numbers(s)?;
    let c: [f64; 6] = v
        .as_slice()
        .try_into()
        .with_context(|| format!("expected `a,b,c,d,tx,ty`, got {} value(s)", v.len()))?;
    Ok(Aff2::from_coefficients(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn parses_points_with_whitespace() {
        assert_eq!(point("1.5, -2").unwrap(), vector![1.5, -2.0]);
        assert_eq!(point_pair("0,0:1,0").unwrap(), (vector![0.0, 0.0], vector![1.0, 0.0]));
    }

    #[test]
    fn rejects_malformed_points() {
        assert!(point("1;2").is_err());
        assert!(point("x,2").is_err());
        assert!(point("1,2,3").is_err());
        assert!(point("inf,0").is_err());
        assert!(point_pair("0,0").is_err());
    }

    #[test]
    fn builds_line_and_matrix() {
        let l = line("0,0:1,0").unwrap();
        assert!(l.approx(&Line::X_AXIS));
        let m = matrix("1,0,0,1,2,3").unwrap();
        assert_eq!(m.transform_point(vector![0.0, 0.0]), vector![2.0, 3.0]);
        assert!(matrix("1,0,0,1").is_err());
    }
}
