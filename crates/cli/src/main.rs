use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use la2d::{Ellipse, Mat3, Rect, Vec2};
use serde::Serialize;
use serde_json::Value;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod ops;

use ops::{compose, parse_fixed, TransformOp};

#[derive(Parser)]
#[command(name = "la2d")]
#[command(about = "Evaluate 2D affine geometry from the shell; prints JSON")]
struct Cmd {
    /// Log debug events (to stderr)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Bounding box of a rect after a chain of transforms
    TransformRect {
        /// X,Y,W,H
        #[arg(long, allow_hyphen_values = true)]
        rect: String,
        /// Transform op, applied in the order given (repeatable)
        #[arg(long = "op", allow_hyphen_values = true)]
        ops: Vec<TransformOp>,
    },
    /// Map a point through a chain of transforms
    TransformPoint {
        /// X,Y
        #[arg(long, allow_hyphen_values = true)]
        point: String,
        #[arg(long = "op", allow_hyphen_values = true)]
        ops: Vec<TransformOp>,
    },
    /// Invert an affine matrix
    Invert {
        /// M11,M12,M21,M22,X0,Y0
        #[arg(long, allow_hyphen_values = true)]
        mat: String,
    },
    /// Axis-extremal points of an ellipse within an arc
    Extrema {
        /// CX,CY,RX,RY,PHI
        #[arg(long, allow_hyphen_values = true)]
        ellipse: String,
        #[arg(long, allow_hyphen_values = true)]
        start: f64,
        #[arg(long, allow_hyphen_values = true)]
        end: f64,
        #[arg(long)]
        anticlockwise: bool,
    },
    /// Print version info
    Report,
}

#[derive(Serialize)]
struct RectOut {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    empty: bool,
}

impl From<Rect> for RectOut {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
            empty: r.is_empty(),
        }
    }
}

#[derive(Serialize)]
struct ExtremaOut {
    angles: [f64; 4],
    points: [Option<[f64; 2]>; 4],
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let out = match cmd.action {
        Action::TransformRect { rect, ops } => transform_rect(&rect, &ops)?,
        Action::TransformPoint { point, ops } => transform_point(&point, &ops)?,
        Action::Invert { mat } => invert(&mat)?,
        Action::Extrema {
            ellipse,
            start,
            end,
            anticlockwise,
        } => extrema(&ellipse, start, end, anticlockwise)?,
        Action::Report => report(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn transform_rect(rect: &str, ops: &[TransformOp]) -> Result<Value> {
    let [x, y, w, h] = parse_fixed::<4>(rect, "rect")?;
    let m = compose(ops);
    tracing::debug!(ops = ops.len(), matrix = ?m.to_array(), "transform_rect");
    let out = Rect::new(x, y, w, h).transform(&m);
    Ok(serde_json::json!({
        "matrix": m.to_array(),
        "rect": RectOut::from(out),
    }))
}

fn transform_point(point: &str, ops: &[TransformOp]) -> Result<Value> {
    let [x, y] = parse_fixed::<2>(point, "point")?;
    let m = compose(ops);
    tracing::debug!(ops = ops.len(), matrix = ?m.to_array(), "transform_point");
    let p = m.transform_vec2(Vec2::new(x, y));
    Ok(serde_json::json!({
        "matrix": m.to_array(),
        "point": [p.x, p.y],
    }))
}

fn invert(mat: &str) -> Result<Value> {
    let m = Mat3::from_array(parse_fixed::<6>(mat, "matrix")?);
    let Some(inv) = m.inverse() else {
        bail!("matrix is singular (det = {})", m.determinant());
    };
    tracing::debug!(det = m.determinant(), "invert");
    Ok(serde_json::json!({
        "matrix": m.to_array(),
        "inverse": inv.to_array(),
    }))
}

fn extrema(ellipse: &str, start: f64, end: f64, anticlockwise: bool) -> Result<Value> {
    let [cx, cy, rx, ry, phi] = parse_fixed::<5>(ellipse, "ellipse")?;
    let e = Ellipse::new(cx, cy, rx, ry, phi);
    let points = e
        .extrema(start, end, anticlockwise)
        .map(|slot| slot.map(|p| [p.x, p.y]));
    tracing::debug!(
        start,
        end,
        anticlockwise,
        found = points.iter().flatten().count(),
        "extrema"
    );
    Ok(serde_json::to_value(ExtremaOut {
        angles: e.flat_tangent_angles(),
        points,
    })?)
}

fn report() -> Value {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    serde_json::json!({
        "code_rev": rev,
        "version": la2d::VERSION,
        "epsilon": la2d::EPSILON,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, TAU};

    fn close(v: &Value, expected: f64) -> bool {
        (v.as_f64().unwrap() - expected).abs() < 1e-9
    }

    #[test]
    fn transform_rect_translation() {
        let ops = [TransformOp::Translate { x: 100.0, y: 100.0 }];
        let out = transform_rect("10,20,50,100", &ops).unwrap();
        assert_eq!(out["rect"]["x"], 110.0);
        assert_eq!(out["rect"]["y"], 120.0);
        assert_eq!(out["rect"]["width"], 50.0);
        assert_eq!(out["rect"]["height"], 100.0);
        assert_eq!(out["rect"]["empty"], false);
    }

    #[test]
    fn transform_rect_rejects_short_rect() {
        assert!(transform_rect("1,2,3", &[]).is_err());
    }

    #[test]
    fn transform_point_rotation() {
        let ops = [TransformOp::Rotate { angle: FRAC_PI_2 }];
        let out = transform_point("1,2", &ops).unwrap();
        assert!(close(&out["point"][0], -2.0));
        assert!(close(&out["point"][1], 1.0));
    }

    #[test]
    fn invert_scale_and_singular() {
        let out = invert("2,0,0,4,0,0").unwrap();
        assert_eq!(out["inverse"][0], 0.5);
        assert_eq!(out["inverse"][3], 0.25);
        let err = invert("1,2,2,4,0,0").unwrap_err();
        assert!(err.to_string().contains("singular"));
    }

    #[test]
    fn extrema_reports_nulls_in_slot_order() {
        let out = extrema("0,0,100,100,0", 0.0, 3.0 * std::f64::consts::FRAC_PI_4, false).unwrap();
        let pts = out["points"].as_array().unwrap();
        assert_eq!(pts.len(), 4);
        assert!(close(&pts[0][0], 100.0));
        assert!(pts[1].is_null());
        assert!(close(&pts[2][1], 100.0));
        assert!(pts[3].is_null());

        let full = extrema("0,0,100,100,0", 0.0, TAU, false).unwrap();
        assert!(full["points"].as_array().unwrap().iter().all(|p| !p.is_null()));
    }

    #[test]
    fn report_has_version() {
        assert_eq!(report()["version"], la2d::VERSION);
    }

    #[test]
    fn cli_parses_repeated_ops() {
        let cmd = Cmd::try_parse_from([
            "la2d",
            "transform-rect",
            "--rect",
            "-5,0,10,10",
            "--op",
            "translate:1,2",
            "--op",
            "rotate:-1.5",
        ])
        .unwrap();
        match cmd.action {
            Action::TransformRect { rect, ops } => {
                assert_eq!(rect, "-5,0,10,10");
                assert_eq!(ops.len(), 2);
                assert_eq!(ops[1], TransformOp::Rotate { angle: -1.5 });
            }
            _ => panic!("expected transform-rect"),
        }
    }
}
