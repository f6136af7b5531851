//! Command-line transform ops and their composition into a `Mat3`.
//!
//! Syntax: `KIND:ARGS` with comma-separated numbers, e.g. `translate:1,2`,
//! `scale:2,4`, `rotate:1.5708`, `skew:0.785,0`,
//! `matrix:m11,m12,m21,m22,x0,y0`.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use la2d::Mat3;

#[derive(Clone, Debug, PartialEq)]
pub enum TransformOp {
    Translate { x: f64, y: f64 },
    Scale { sx: f64, sy: f64 },
    Rotate { angle: f64 },
    Skew { angle_x: f64, angle_y: f64 },
    Matrix([f64; 6]),
}

impl TransformOp {
    pub fn to_mat3(&self) -> Mat3 {
        match *self {
            TransformOp::Translate { x, y } => Mat3::new_translation(x, y),
            TransformOp::Scale { sx, sy } => Mat3::new_scaling(sx, sy),
            TransformOp::Rotate { angle } => Mat3::new_rotation(angle),
            TransformOp::Skew { angle_x, angle_y } => Mat3::new_skew(angle_x, angle_y),
            TransformOp::Matrix(a) => Mat3::from_array(a),
        }
    }
}

impl FromStr for TransformOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, args) = s
            .split_once(':')
            .with_context(|| format!("expected KIND:ARGS, got {s:?}"))?;
        let nums = parse_floats(args).with_context(|| format!("arguments of {kind:?}"))?;
        let op = match (kind, nums.as_slice()) {
            ("translate", &[x, y]) => TransformOp::Translate { x, y },
            ("scale", &[sx, sy]) => TransformOp::Scale { sx, sy },
            ("rotate", &[angle]) => TransformOp::Rotate { angle },
            ("skew", &[angle_x, angle_y]) => TransformOp::Skew { angle_x, angle_y },
            ("matrix", &[m11, m12, m21, m22, x0, y0]) => {
                TransformOp::Matrix([m11, m12, m21, m22, x0, y0])
            }
            ("translate" | "scale" | "rotate" | "skew" | "matrix", _) => {
                bail!("wrong number of arguments for {kind:?}: {}", nums.len())
            }
            _ => bail!("unknown op {kind:?}"),
        };
        Ok(op)
    }
}

/// Comma-separated floats.
pub fn parse_floats(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<f64>()
                .with_context(|| format!("not a number: {t:?}"))
        })
        .collect()
}

/// Exactly `N` comma-separated floats.
pub fn parse_fixed<const N: usize>(s: &str, what: &str) -> Result<[f64; N]> {
    let nums = parse_floats(s).with_context(|| format!("parsing {what}"))?;
    match <[f64; N]>::try_from(nums.as_slice()) {
        Ok(a) => Ok(a),
        Err(_) => bail!("{what} expects {N} values, got {}", nums.len()),
    }
}

/// Compose so that the first listed op acts on points first.
pub fn compose(ops: &[TransformOp]) -> Mat3 {
    let mut m = Mat3::identity();
    for op in ops {
        m.preapply(&op.to_mat3());
    }
    m
}
