//! JSON reports and where they go (stdout or a file).

use anyhow::{Context, Result};
use nalgebra::Vector2;
use planar::Line;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Canonical form of a line plus derived quantities.
#[derive(Debug, Serialize)]
pub struct LineReport {
    pub theta: f64,
    pub offset: f64,
    pub normal: [f64; 2],
    pub direction: [f64; 2],
    /// `(a, b, c)` with `a x + b y + c = 0`.
    pub implicit: [f64; 3],
}

impl From<&Line> for LineReport {
    fn from(l: &Line) -> Self {
        let (a, b, c) = l.implicit();
        Self {
            theta: l.theta(),
            offset: l.offset(),
            normal: xy(l.normal()),
            direction: xy(l.direction()),
            implicit: [a, b, c],
        }
    }
}

/// Intersection outcome; `point` is null when there is no unique crossing.
#[derive(Debug, Serialize)]
pub struct IntersectionReport {
    pub point: Option<[f64; 2]>,
    pub parallel: bool,
}

#[derive(Debug, Serialize)]
pub struct DistanceReport {
    pub distance: f64,
    pub signed_distance: f64,
    pub closest: [f64; 2],
}

#[derive(Debug, Serialize)]
pub struct ReflectReport {
    pub point: [f64; 2],
    /// Coefficients `[a, b, c, d, tx, ty]`.
    pub matrix: [f64; 6],
}

#[inline]
pub fn xy(v: Vector2<f64>) -> [f64; 2] {
    [v.x, v.y]
}

/// Pretty JSON to `out` (parent dirs created) or to stdout.
pub fn emit<T: Serialize>(report: &T, out: Option<&Path>) -> Result<()> {
    let body = serde_json::to_string_pretty(report)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            fs::write(path, body + "\n")
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => println!("{body}"),
    }
    Ok(())
}
