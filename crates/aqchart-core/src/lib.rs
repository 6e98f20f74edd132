// File: crates/aqchart-core/src/lib.rs
// Summary: Core library entry point; exports the data model, interaction reducer, scene projection and rendering.

pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hit;
pub mod layout;
pub mod loader;
pub mod navigator;
pub mod render;
pub mod scale;
pub mod scene;
pub mod selection;
pub mod theme;
pub mod transform;
pub mod types;
pub mod view;

pub use chart::{Chart, Session};
pub use config::ChartConfig;
pub use dataset::{Category, Dataset, Record, ValueIndex};
pub use error::{ChartError, Result};
pub use geometry::{Point, Rect};
pub use hit::{Hit, HitIndex};
pub use layout::{Layout, Target};
pub use loader::{load_csv, read_csv};
pub use navigator::{IndicatorDrag, Navigator};
pub use scale::{LinearScale, ScalePair, Scales};
pub use scene::{DrawCommand, Scene};
pub use selection::{LegendState, Selection};
pub use theme::Theme;
pub use transform::{ZoomConstraint, ZoomTransform};
pub use view::{Event, ViewState};
