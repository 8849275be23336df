//! High-level route planning on top of the core routers.
//!
//! The planning layer resolves system names against the graph, attaches fuzzy
//! suggestions to failures, runs the requested router, and classifies the
//! resulting hops. Consumers that want the narrow "absent means no route"
//! contract can call [`crate::path::navigate`] and
//! [`crate::path::navigate_by_range`] directly.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::NavGraph;
use crate::path::{navigate, navigate_by_range, HopKind, RouteHop, RoutingMode};

/// Number of fuzzy suggestions attached to an unknown-system error.
const SUGGESTION_LIMIT: usize = 3;

/// High-level gate-route request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub use_jump_bridges: bool,
    pub mode: RoutingMode,
}

impl RouteRequest {
    /// Convenience constructor for a shortest-path request without bridges.
    pub fn shortest(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            use_jump_bridges: false,
            mode: RoutingMode::Shortest,
        }
    }

    pub fn with_mode(mut self, mode: RoutingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn via_jump_bridges(mut self) -> Self {
        self.use_jump_bridges = true;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: String,
    pub goal: String,
    pub steps: Vec<RouteHop>,
    pub gates: usize,
    pub bridges: usize,
    pub jumps: usize,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a system name, returning suggestions for near misses.
fn resolve_system(graph: &NavGraph, name: &str) -> Result<()> {
    if !name.is_empty() && graph.contains(name) {
        return Ok(());
    }
    Err(Error::UnknownSystem {
        name: name.to_string(),
        suggestions: graph.fuzzy_system_matches(name, SUGGESTION_LIMIT),
    })
}

/// Compute a gate route, reporting failures as errors.
pub fn plan_route(graph: &NavGraph, request: &RouteRequest) -> Result<RoutePlan> {
    resolve_system(graph, &request.start)?;
    resolve_system(graph, &request.goal)?;

    let steps = navigate(
        graph,
        &request.start,
        &request.goal,
        request.use_jump_bridges,
        request.mode,
    )
    .ok_or_else(|| Error::RouteNotFound {
        start: request.start.clone(),
        goal: request.goal.clone(),
    })?;

    // Hop kinds sit on the departing system; the terminal entry is not a hop.
    let traversed = &steps[..steps.len().saturating_sub(1)];
    let bridges = traversed
        .iter()
        .filter(|hop| hop.kind == HopKind::JumpBridge)
        .count();
    let gates = traversed.len() - bridges;

    let plan = RoutePlan {
        start: request.start.clone(),
        goal: request.goal.clone(),
        steps,
        gates,
        bridges,
        jumps: 0,
    };
    debug!(
        start = %plan.start,
        goal = %plan.goal,
        mode = %request.mode,
        hops = plan.hop_count(),
        "planned gate route"
    );
    Ok(plan)
}

/// Compute a direct-jump route, reporting failures as errors.
pub fn plan_range_route(
    graph: &NavGraph,
    start: &str,
    goal: &str,
    max_range_ly: f64,
) -> Result<RoutePlan> {
    resolve_system(graph, start)?;
    resolve_system(graph, goal)?;

    let steps = navigate_by_range(graph, start, goal, max_range_ly).ok_or_else(|| {
        Error::RouteNotFound {
            start: start.to_string(),
            goal: goal.to_string(),
        }
    })?;

    // Range hops sit on the arriving system; the first entry is the departure.
    let jumps = steps
        .iter()
        .skip(1)
        .filter(|hop| hop.kind == HopKind::Jump)
        .count();

    let plan = RoutePlan {
        start: start.to_string(),
        goal: goal.to_string(),
        steps,
        gates: 0,
        bridges: 0,
        jumps,
    };
    debug!(
        start = %plan.start,
        goal = %plan.goal,
        max_range_ly,
        hops = plan.hop_count(),
        "planned range route"
    );
    Ok(plan)
}
