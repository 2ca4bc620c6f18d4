use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod parse;
mod report;

use report::{emit, xy, DistanceReport, IntersectionReport, LineReport, ReflectReport};

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Line, segment and reflection queries on the command line")]
#[command(version = planar::VERSION)]
struct Cmd {
    /// Write the JSON report here instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Canonical (theta, offset) form of the line through `x1,y1:x2,y2`
    Line {
        #[arg(long, allow_hyphen_values = true)]
        through: String,
    },
    /// Crossing point of two lines (null when parallel)
    Intersect {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
    },
    /// Distance from a point to a line, and the closest point on it
    Distance {
        #[arg(long, allow_hyphen_values = true)]
        line: String,
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
    /// Mirror a point across a line
    Reflect {
        #[arg(long, allow_hyphen_values = true)]
        line: String,
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
    /// Crossing point of two finite segments (null when they miss)
    SegmentIntersect {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
    },
    /// Image of a line under the affine matrix `a,b,c,d,tx,ty`
    TransformLine {
        #[arg(long, allow_hyphen_values = true)]
        line: String,
        #[arg(long, allow_hyphen_values = true)]
        matrix: String,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON.
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = cmd.out.as_deref();
    match cmd.action {
        Action::Line { through } => {
            let l = parse::line(&through)?;
            tracing::debug!(theta = l.theta(), offset = l.offset(), "line");
            emit(&LineReport::from(&l), out)
        }
        Action::Intersect { a, b } => {
            let (la, lb) = (parse::line(&a)?, parse::line(&b)?);
            let point = la.intersection(&lb);
            tracing::debug!(hit = point.is_some(), "intersect");
            emit(
                &IntersectionReport {
                    point: point.map(xy),
                    parallel: la.is_parallel(&lb),
                },
                out,
            )
        }
        Action::Distance { line, point } => {
            let l = parse::line(&line)?;
            let p = parse::point(&point)?;
            emit(
                &DistanceReport {
                    distance: l.distance(p),
                    signed_distance: l.signed_distance(p),
                    closest: xy(l.closest(p)),
                },
                out,
            )
        }
        Action::Reflect { line, point } => {
            let l = parse::line(&line)?;
            let p = parse::point(&point)?;
            let m = l.reflection_matrix();
            emit(
                &ReflectReport {
                    point: xy(m.transform_point(p)),
                    matrix: m.coefficients(),
                },
                out,
            )
        }
        Action::SegmentIntersect { a, b } => {
            let (sa, sb) = (parse::segment(&a)?, parse::segment(&b)?);
            let point = sa.intersection(&sb);
            tracing::debug!(hit = point.is_some(), "segment_intersect");
            emit(
                &IntersectionReport {
                    point: point.map(xy),
                    parallel: sa.line().is_parallel(&sb.line()),
                },
                out,
            )
        }
        Action::TransformLine { line, matrix } => {
            let l = parse::line(&line)?;
            let f = parse::matrix(&matrix)?;
            f.inverse()
                .with_context(|| format!("matrix {matrix:?} is singular; the image is not a line"))?;
            let img = l.transform(&f);
            tracing::debug!(theta = img.theta(), offset = img.offset(), "transform_line");
            emit(&LineReport::from(&img), out)
        }
    }
}
