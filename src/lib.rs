//! Small library that renders sparkline area graphs as SVG drawings.
//!
//! Main features:
//!  - Deterministic x sampling with random or caller supplied heights
//!  - Gradient fill clipped by the graph polyline mask
//!  - Drawing descriptor tree that can be attached to any rendering target
//!
//! ```no_run
//! use sparkgraph::{generate_graph, GraphOptions};
//!
//! let options = GraphOptions::default().with_width(90).with_top_color("gold");
//! let drawing = generate_graph(&options).unwrap();
//! println!("{}", drawing);
//! ```
#![deny(warnings)]

mod color;
mod geometry;
mod grad;
mod graph;
mod options;
mod sampler;
mod scene;
mod svg;
mod target;
mod utils;

pub use color::Color;
pub use geometry::{
    EPSILON, PI, Scalar, ScalarFmt, Transform, TransformList, TransformOp, scalar_fmt,
};
pub use grad::{GradLinear, GradStop, GradStops};
pub use graph::{
    compose, generate_graph, generate_into, make_id, GraphError, ID_ALPHABET, ID_LENGTH,
    STROKE_MARGIN, STROKE_WIDTH,
};
pub use options::GraphOptions;
pub use sampler::{sample, sample_y, x_series, Point, Points};
pub use scene::{Drawing, Mask, Polyline, Rect, Scene, SceneInner};
pub use svg::SVG_NAMESPACE;
pub use target::{RenderTarget, SvgDocument};
