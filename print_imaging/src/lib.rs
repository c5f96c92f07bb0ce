// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print Imaging: path and paint resources plus backend traits.
//!
//! This crate is the drawing surface that icon glyphs are emitted into. It
//! defines a deliberately tiny, plain‑old‑data (POD) friendly imaging
//! vocabulary:
//!
//! - **Resources**: [`PathId`] and [`PaintId`] are opaque handles whose
//!   lifetimes are managed through [`ResourceBackend`].
//! - **Operations**: [`StateOp`] mutates the current imaging state and
//!   [`DrawOp`] produces pixels; [`ImagingOp`] unifies both for recording.
//! - **Backends**: [`ImagingBackend`] accepts operations. Any concrete UI
//!   toolkit (a CPU rasterizer, a GPU renderer, a test recorder) implements
//!   it on top of its own canvas.
//!
//! Paths are uploaded once and referenced by id afterwards, so an icon that
//! is repainted with unchanged inputs does not re-upload its geometry.
//!
//! ```
//! use kurbo::{Affine, BezPath};
//! use peniko::Color;
//! use print_imaging::{PaintDesc, PathDesc};
//!
//! let mut path = BezPath::new();
//! path.move_to((0.0, 0.0));
//! path.line_to((10.0, 0.0));
//! path.line_to((10.0, 10.0));
//! path.close_path();
//!
//! let desc = PathDesc::from_bez_path(&path);
//! assert_eq!(desc.commands.len(), 4);
//!
//! let paint = PaintDesc::solid(Color::BLACK);
//! # let _ = (paint, Affine::IDENTITY);
//! ```

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

pub use kurbo::Affine;
pub use peniko::Fill as FillRule;

use kurbo::{BezPath, PathEl, Point};
use peniko::{Brush, Color};

/// Identifier for a path resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource. Paths are expected to be reused across frames while they
/// remain alive.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathId(pub u32);

/// Identifier for a paint resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaintId(pub u32);

/// State operations that mutate the current imaging state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current transform matrix.
    SetTransform(Affine),
    /// Set the current paint resource.
    SetPaint(PaintId),
    /// Set the current fill rule used for filling paths.
    ///
    /// The default fill rule is [`FillRule::NonZero`].
    SetFillRule(FillRule),
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the given path with the current paint.
    FillPath(PathId),
}

/// Unified imaging operation used by recordings.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// Simple path command enumeration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCmd {
    /// Move the current point without drawing.
    MoveTo {
        /// X coordinate of the new point.
        x: f32,
        /// Y coordinate of the new point.
        y: f32,
    },
    /// Draw a line from the current point to the given point.
    LineTo {
        /// X coordinate of the line end.
        x: f32,
        /// Y coordinate of the line end.
        y: f32,
    },
    /// Draw a quadratic Bézier curve from the current point to the given
    /// point, using a single control point.
    QuadTo {
        /// X coordinate of the control point.
        x1: f32,
        /// Y coordinate of the control point.
        y1: f32,
        /// X coordinate of the curve end.
        x: f32,
        /// Y coordinate of the curve end.
        y: f32,
    },
    /// Draw a cubic Bézier curve from the current point to the given point,
    /// using two control points.
    CurveTo {
        /// X coordinate of the first control point.
        x1: f32,
        /// Y coordinate of the first control point.
        y1: f32,
        /// X coordinate of the second control point.
        x2: f32,
        /// Y coordinate of the second control point.
        y2: f32,
        /// X coordinate of the curve end.
        x: f32,
        /// Y coordinate of the curve end.
        y: f32,
    },
    /// Close the current subpath.
    Close,
}

/// Description of a path resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDesc {
    /// Command buffer describing the path geometry.
    pub commands: Box<[PathCmd]>,
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "path coordinates are pixel-scale values; f32 precision is what backends consume"
)]
fn to_f32(p: Point) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

impl PathDesc {
    /// Lower a [`kurbo::BezPath`] into a path description.
    pub fn from_bez_path(path: &BezPath) -> Self {
        let commands: Vec<PathCmd> = path
            .elements()
            .iter()
            .map(|el| match *el {
                PathEl::MoveTo(p) => {
                    let (x, y) = to_f32(p);
                    PathCmd::MoveTo { x, y }
                }
                PathEl::LineTo(p) => {
                    let (x, y) = to_f32(p);
                    PathCmd::LineTo { x, y }
                }
                PathEl::QuadTo(p1, p) => {
                    let (x1, y1) = to_f32(p1);
                    let (x, y) = to_f32(p);
                    PathCmd::QuadTo { x1, y1, x, y }
                }
                PathEl::CurveTo(p1, p2, p) => {
                    let (x1, y1) = to_f32(p1);
                    let (x2, y2) = to_f32(p2);
                    let (x, y) = to_f32(p);
                    PathCmd::CurveTo {
                        x1,
                        y1,
                        x2,
                        y2,
                        x,
                        y,
                    }
                }
                PathEl::ClosePath => PathCmd::Close,
            })
            .collect();
        Self {
            commands: commands.into_boxed_slice(),
        }
    }

    /// Lift this description back into a [`kurbo::BezPath`].
    ///
    /// Backends that rasterize with Kurbo-based tooling can use this to get
    /// at the geometry directly.
    pub fn to_bez_path(&self) -> BezPath {
        let pt = |x: f32, y: f32| Point::new(f64::from(x), f64::from(y));
        let mut path = BezPath::new();
        for cmd in self.commands.iter() {
            match *cmd {
                PathCmd::MoveTo { x, y } => path.move_to(pt(x, y)),
                PathCmd::LineTo { x, y } => path.line_to(pt(x, y)),
                PathCmd::QuadTo { x1, y1, x, y } => path.quad_to(pt(x1, y1), pt(x, y)),
                PathCmd::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => path.curve_to(pt(x1, y1), pt(x2, y2), pt(x, y)),
                PathCmd::Close => path.close_path(),
            }
        }
        path
    }

    /// Returns `true` if the description has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Description of a paint resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintDesc {
    /// Brush used when rendering.
    ///
    /// This is a [`peniko::Brush`], so backends can directly map it onto their
    /// native paint representation.
    pub brush: Brush,
}

impl PaintDesc {
    /// Create a paint that fills with a single solid color.
    #[inline]
    pub fn solid(color: Color) -> Self {
        Self {
            brush: Brush::Solid(color),
        }
    }
}

/// Resource lifetime interface.
///
/// Backends implement this to manage their own resource storage. IDs must
/// remain valid and refer to the same logical resource until the
/// corresponding `destroy_*` function is called. Destroying an id twice, or
/// an id the backend never issued, must be tolerated.
pub trait ResourceBackend {
    /// Create a path resource.
    fn create_path(&mut self, desc: PathDesc) -> PathId;
    /// Destroy a previously created path.
    fn destroy_path(&mut self, id: PathId);

    /// Create a paint resource.
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId;
    /// Destroy a previously created paint.
    fn destroy_paint(&mut self, id: PaintId);
}

/// Minimal imaging backend trait.
pub trait ImagingBackend: ResourceBackend {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Fill `path` with `paint` under `transform`.
    ///
    /// This is equivalent to emitting [`StateOp::SetTransform`],
    /// [`StateOp::SetPaint`] and [`DrawOp::FillPath`] in that order.
    #[inline]
    fn fill_path(&mut self, path: PathId, paint: PaintId, transform: Affine) {
        self.state(StateOp::SetTransform(transform));
        self.state(StateOp::SetPaint(paint));
        self.draw(DrawOp::FillPath(path));
    }
}
