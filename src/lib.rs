//! infinite vertical scrolling backdrop for 2‑D Bevy games
//!
//! A ring of rows (one per background depth, cycled until the camera is
//! covered) scrolls vertically; each row keeps a strip of pooled image tiles
//! under the camera horizontally. `Scroller` is the engine and is usable with
//! any `TileHost`; `BackdropPlugin` wires it to sprites and the 2‑D camera.

pub mod backdrop;
pub mod camera;
pub mod components;
pub mod config;
pub mod constants;
pub mod errors;
pub mod geometry;
pub mod host;
pub mod row;
pub mod scroller;

pub use backdrop::{BackdropPlugin, BackdropSource};
pub use components::{ActiveBackdrop, BackdropStatus, BackdropTile};
pub use config::{BackdropConfig, DepthConfig};
pub use errors::BackdropError;
pub use geometry::{Span, Viewport};
pub use host::TileHost;
pub use row::{Rearranged, Row, Tile};
pub use scroller::{Scroller, TickReport};
