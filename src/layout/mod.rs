//! Peg Layout Generator.
//!
//! Turns a count, canvas and shape tag into an ordered peg list with
//! contiguous ids `0..N`, all inside the canvas minus the margin. Shape
//! selection is a closed enum dispatched once here; the distribution policy
//! applies to circular layouts only.
//!
//! Two optional post-passes operate on a generated list:
//! - [`adjust::snap_pegs_to_edges`] pulls pegs onto nearby strong edges.
//! - [`adjust::validate_pegs`] rejects out-of-bounds or colliding pegs and
//!   may legitimately return fewer than N pegs.

pub mod adjust;
mod circle;
mod custom;
mod curve;
mod polygon;
mod star;

use crate::error::Error;
use crate::types::Peg;
use log::debug;
use serde::Deserialize;

pub use adjust::{snap_pegs_to_edges, validate_pegs};

/// Canvas dimensions in pixels. Must match the edge map the pegs will be
/// scored against.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> [f32; 2] {
        [self.width / 2.0, self.height / 2.0]
    }

    /// Radius of the largest centered circle that respects `margin`.
    #[inline]
    pub fn boundary_radius(&self, margin: f32) -> f32 {
        self.width.min(self.height) / 2.0 - margin
    }

    #[inline]
    pub fn contains(&self, p: [f32; 2]) -> bool {
        p[0] >= 0.0 && p[0] < self.width && p[1] >= 0.0 && p[1] < self.height
    }

    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Boundary shape the pegs are placed on.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle,
    /// Regular polygon with `sides ≥ 3`, parameterized by perimeter
    /// arclength.
    Polygon { sides: usize },
    /// Closed-form parametric heart curve.
    Heart,
    /// Star alternating outer and inner radius over `2 × points` sectors.
    Star { points: usize },
    /// User polyline, bounding-box-normalized into the canvas and resampled
    /// by nearest-index lookup.
    Custom { points: Vec<[f32; 2]> },
}

/// Angular distribution policy for circular layouts.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Distribution {
    /// `angle_i = start_angle + 2π·i/N`.
    Even { start_angle: f32 },
    /// Golden-angle spiral, radially projected back to the boundary.
    GoldenSpiral,
    /// N uniform angles, sorted ascending so ids stay monotone in angle.
    /// Randomized: two runs produce different layouts.
    RandomAngle,
}

impl Default for Distribution {
    fn default() -> Self {
        Distribution::Even { start_angle: 0.0 }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct LayoutParams {
    pub count: usize,
    pub canvas: CanvasSize,
    #[serde(default = "default_margin")]
    pub margin: f32,
    pub shape: Shape,
    #[serde(default)]
    pub distribution: Distribution,
}

fn default_margin() -> f32 {
    10.0
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            count: 200,
            canvas: CanvasSize::new(300.0, 300.0),
            margin: default_margin(),
            shape: Shape::Circle,
            distribution: Distribution::default(),
        }
    }
}

/// Generate exactly `count` pegs with ids `0..count` for the given shape.
///
/// Fails fast on invalid input; geometric degeneracy (e.g. a collapsed
/// custom polyline) is not an error here and is handled by the optional
/// validation pass.
pub fn generate_pegs(params: &LayoutParams) -> Result<Vec<Peg>, Error> {
    if params.count == 0 {
        return Err(Error::InvalidPegCount);
    }
    if !params.canvas.is_valid() {
        return Err(Error::InvalidCanvas {
            width: params.canvas.width,
            height: params.canvas.height,
        });
    }

    let pegs = match &params.shape {
        Shape::Circle => circle::generate(
            params.count,
            &params.canvas,
            params.margin,
            params.distribution,
        ),
        Shape::Polygon { sides } => {
            if *sides < 3 {
                return Err(Error::InvalidPolygon(*sides));
            }
            polygon::generate(params.count, &params.canvas, params.margin, *sides)
        }
        Shape::Heart => curve::generate_heart(params.count, &params.canvas, params.margin),
        Shape::Star { points } => {
            if *points < 2 {
                return Err(Error::InvalidStar(*points));
            }
            star::generate(params.count, &params.canvas, params.margin, *points)
        }
        Shape::Custom { points } => {
            if points.is_empty() {
                return Err(Error::EmptyCustomShape);
            }
            if let Some(index) = points
                .iter()
                .position(|p| !p[0].is_finite() || !p[1].is_finite())
            {
                return Err(Error::NonFiniteCoordinate { index });
            }
            custom::generate(params.count, &params.canvas, params.margin, points)
        }
    };

    debug_assert!(pegs.iter().enumerate().all(|(i, p)| p.id == i));
    debug!(
        "layout: {} pegs on {} ({}x{} canvas, margin {})",
        pegs.len(),
        shape_name(&params.shape),
        params.canvas.width,
        params.canvas.height,
        params.margin
    );
    Ok(pegs)
}

fn shape_name(shape: &Shape) -> &'static str {
    match shape {
        Shape::Circle => "circle",
        Shape::Polygon { .. } => "polygon",
        Shape::Heart => "heart",
        Shape::Star { .. } => "star",
        Shape::Custom { .. } => "custom",
    }
}
