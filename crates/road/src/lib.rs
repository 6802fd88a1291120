#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Road Geometry
//!
//! Lane geometry and the lane graph that the parking environment is built on.
//!
//! ## Key Components
//!
//! -   **Lanes:** [`StraightLane`] is a straight centerline segment with a
//!     width and a pair of boundary markings. It answers world-position and
//!     heading queries in lane coordinates.
//! -   **Network:** [`RoadNetwork`] is a directed multigraph of named nodes
//!     whose edges carry lanes. [`RoadNetwork::lanes_list`] flattens it in
//!     insertion order.
//! -   **Parking lot:** [`build_lot`] generates the repeated-slot parking
//!     layout described by a [`LotLayout`].
//!
//! ```rust
//! use road::{build_lot, LotLayout};
//!
//! let layout = LotLayout::default();
//! layout.validate().unwrap();
//! let net = build_lot(&layout);
//! assert_eq!(net.lanes_list().len(), 30);
//! ```

pub mod error;
pub mod lane;
pub mod lot;
pub mod network;

pub use error::RoadError;
pub use lane::{LineType, StraightLane};
pub use lot::{build_lot, LotLayout};
pub use network::{LaneIndex, RoadNetwork};

pub use glam::DVec2;
