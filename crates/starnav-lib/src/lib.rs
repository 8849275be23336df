//! Starnav library entry points.
//!
//! This crate exposes the star-map navigation engine: build a navigation
//! graph from an in-memory topology, refresh its jump-bridge overlay, and run
//! gate, direct-jump, and reachability queries against it. Higher-level
//! consumers should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod path;
pub mod routing;
pub mod starmap;

pub use error::{Error, Result};
pub use graph::{build_graph, build_graph_with, JumpLink, NavGraph, NavNode};
pub use path::{navigate, navigate_by_range, HopKind, RouteHop, RoutingMode};
pub use routing::{plan_range_route, plan_route, RoutePlan, RouteRequest};
pub use starmap::{
    DistanceSource, JumpBridge, Position, StarSystem, Starmap, HIGH_SEC_THRESHOLD,
    LIGHT_YEAR_METERS, MAX_JUMP_RANGE_LY,
};
