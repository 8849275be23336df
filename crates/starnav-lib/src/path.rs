use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::graph::NavGraph;

/// Weight charged for entering an unpenalised system.
const BASE_COST: f64 = 1.0;

/// Weight charged for entering a system the routing mode discourages.
const PENALTY_COST: f64 = 1000.0;

/// Flat light-year surcharge per direct jump, so the range router prefers
/// fewer, longer jumps over many short ones.
const JUMP_OVERHEAD_LY: f64 = 5.0;

/// Policy that changes per-system traversal cost without changing topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoutingMode {
    /// Uniform cost; every system is equally cheap.
    #[default]
    Shortest,
    /// Penalise systems outside high security.
    Safest,
    /// Penalise high-security systems.
    #[serde(rename = "prefer-low")]
    PreferLow,
}

impl RoutingMode {
    /// Weight charged for entering a system under this mode. Always strictly
    /// positive.
    fn cost(self, high_sec: bool) -> f64 {
        match self {
            RoutingMode::Shortest => BASE_COST,
            RoutingMode::Safest => {
                if high_sec {
                    BASE_COST
                } else {
                    PENALTY_COST
                }
            }
            RoutingMode::PreferLow => {
                if high_sec {
                    PENALTY_COST
                } else {
                    BASE_COST
                }
            }
        }
    }
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RoutingMode::Shortest => "shortest",
            RoutingMode::Safest => "safest",
            RoutingMode::PreferLow => "prefer-low",
        };
        f.write_str(value)
    }
}

/// Classification for the hop leaving (gate routes) or arriving at (range
/// routes) a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HopKind {
    Gate,
    JumpBridge,
    Jump,
}

/// One entry in a computed route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteHop {
    pub system: String,
    pub kind: HopKind,
    /// Jump range in light-years; only direct-jump hops carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_ly: Option<f64>,
}

impl fmt::Display for RouteHop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.range_ly) {
            (HopKind::JumpBridge, _) => write!(f, "{} (Ansiblex)", self.system),
            (HopKind::Jump, Some(range)) => {
                write!(f, "{} (Jump To, Range {range:.2})", self.system)
            }
            _ => f.write_str(&self.system),
        }
    }
}

/// Compute a gate route between two named systems.
///
/// Single-source shortest path over gate edges plus, when `use_jump_bridges`
/// is set, each system's jump-bridge partner. The cost of a hop is the
/// *entered* system's weight under `mode`, regardless of the edge taken.
/// Returns `None` when either name is empty or unknown, or when no path
/// exists; callers cannot distinguish the two here.
pub fn navigate(
    graph: &NavGraph,
    start: &str,
    goal: &str,
    use_jump_bridges: bool,
    mode: RoutingMode,
) -> Option<Vec<RouteHop>> {
    if start.is_empty() || goal.is_empty() {
        return None;
    }
    let start = graph.node(start)?.name.as_str();
    let goal = graph.node(goal)?.name.as_str();

    let mut best: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut queue = BinaryHeap::new();

    best.insert(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let current = entry.system;
        let current_cost = entry.cost.0;
        if current_cost > *best.get(current).unwrap_or(&f64::INFINITY) {
            continue;
        }
        if current == goal {
            break;
        }

        let Some(node) = graph.node(current) else {
            continue;
        };
        let bridge = if use_jump_bridges {
            node.jump_bridge.as_deref()
        } else {
            None
        };

        for next in node.gates.iter().map(String::as_str).chain(bridge) {
            let Some(next_node) = graph.node(next) else {
                continue;
            };
            let next = next_node.name.as_str();
            let candidate = current_cost + mode.cost(next_node.high_sec);
            if candidate < *best.get(next).unwrap_or(&f64::INFINITY) {
                best.insert(next, candidate);
                parents.insert(next, current);
                queue.push(QueueEntry::new(next, candidate));
            }
        }
    }

    let mut names = backtrack(&parents, goal)?;
    names.reverse();
    Some(annotate_gate_route(graph, &names, use_jump_bridges))
}

/// Compute a direct-jump route between two named systems.
///
/// Edges come exclusively from the precomputed range links, filtered at query
/// time to `range_ly <= max_range_ly`; each edge costs its range plus a fixed
/// overhead. The search runs with start and end swapped so that the backtrace
/// from the requested start already lists hops in caller order without a
/// final reversal. Preconditions and failure signalling match [`navigate`].
pub fn navigate_by_range(
    graph: &NavGraph,
    start: &str,
    goal: &str,
    max_range_ly: f64,
) -> Option<Vec<RouteHop>> {
    if start.is_empty() || goal.is_empty() {
        return None;
    }
    let search_goal = graph.node(start)?.name.as_str();
    let search_start = graph.node(goal)?.name.as_str();

    let mut best: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut queue = BinaryHeap::new();

    best.insert(search_start, 0.0);
    queue.push(QueueEntry::new(search_start, 0.0));

    while let Some(entry) = queue.pop() {
        let current = entry.system;
        let current_cost = entry.cost.0;
        if current_cost > *best.get(current).unwrap_or(&f64::INFINITY) {
            continue;
        }
        if current == search_goal {
            break;
        }

        let Some(node) = graph.node(current) else {
            continue;
        };

        for link in &node.jump_links {
            if link.range_ly > max_range_ly {
                continue;
            }
            let Some(next_node) = graph.node(&link.target) else {
                continue;
            };
            let next = next_node.name.as_str();
            let candidate = current_cost + link.range_ly + JUMP_OVERHEAD_LY;
            if candidate < *best.get(next).unwrap_or(&f64::INFINITY) {
                best.insert(next, candidate);
                parents.insert(next, current);
                queue.push(QueueEntry::new(next, candidate));
            }
        }
    }

    // Walking the parents from the caller's start toward the internal start
    // yields start-to-goal order directly.
    let names = backtrack(&parents, search_goal)?;
    Some(annotate_range_route(graph, &names))
}

/// Walk predecessor pointers from `end` until a node with none.
///
/// Returns `None` when `end` never gained a predecessor, which covers both
/// "no path" and "start equals end". The result runs from `end` back to the
/// search root.
fn backtrack<'a>(parents: &HashMap<&'a str, &'a str>, end: &'a str) -> Option<Vec<&'a str>> {
    if !parents.contains_key(end) {
        return None;
    }

    let mut names = vec![end];
    let mut current = end;
    while let Some(&previous) = parents.get(current) {
        names.push(previous);
        current = previous;
    }
    Some(names)
}

fn annotate_gate_route(
    graph: &NavGraph,
    names: &[&str],
    use_jump_bridges: bool,
) -> Vec<RouteHop> {
    names
        .iter()
        .enumerate()
        .map(|(index, &name)| {
            let bridge_hop = use_jump_bridges
                && index + 1 < names.len()
                && graph
                    .node(name)
                    .and_then(|node| node.jump_bridge.as_deref())
                    == Some(names[index + 1]);
            RouteHop {
                system: name.to_string(),
                kind: if bridge_hop {
                    HopKind::JumpBridge
                } else {
                    HopKind::Gate
                },
                range_ly: None,
            }
        })
        .collect()
}

fn annotate_range_route(graph: &NavGraph, names: &[&str]) -> Vec<RouteHop> {
    names
        .iter()
        .enumerate()
        .map(|(index, &name)| {
            if index == 0 {
                RouteHop {
                    system: name.to_string(),
                    kind: HopKind::Gate,
                    range_ly: None,
                }
            } else {
                RouteHop {
                    system: name.to_string(),
                    kind: HopKind::Jump,
                    range_ly: graph.link_range(name, names[index - 1]),
                }
            }
        })
        .collect()
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    system: &'a str,
    cost: FloatOrd,
}

impl<'a> QueueEntry<'a> {
    fn new(system: &'a str, cost: f64) -> Self {
        Self {
            system,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.system.cmp(self.system))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_pops_cheapest_first() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new("far", 7.5));
        queue.push(QueueEntry::new("near", 1.0));
        queue.push(QueueEntry::new("middle", 3.0));

        assert_eq!(queue.pop().unwrap().system, "near");
        assert_eq!(queue.pop().unwrap().system, "middle");
        assert_eq!(queue.pop().unwrap().system, "far");
    }

    #[test]
    fn mode_costs_match_policy() {
        assert_eq!(RoutingMode::Shortest.cost(true), 1.0);
        assert_eq!(RoutingMode::Shortest.cost(false), 1.0);
        assert_eq!(RoutingMode::Safest.cost(true), 1.0);
        assert_eq!(RoutingMode::Safest.cost(false), 1000.0);
        assert_eq!(RoutingMode::PreferLow.cost(true), 1000.0);
        assert_eq!(RoutingMode::PreferLow.cost(false), 1.0);
    }

    #[test]
    fn hop_rendering_matches_kind() {
        let gate = RouteHop {
            system: "Arveto".to_string(),
            kind: HopKind::Gate,
            range_ly: None,
        };
        assert_eq!(gate.to_string(), "Arveto");

        let bridge = RouteHop {
            system: "Deltar".to_string(),
            kind: HopKind::JumpBridge,
            range_ly: None,
        };
        assert_eq!(bridge.to_string(), "Deltar (Ansiblex)");

        let jump = RouteHop {
            system: "Lorne".to_string(),
            kind: HopKind::Jump,
            range_ly: Some(7.25),
        };
        assert_eq!(jump.to_string(), "Lorne (Jump To, Range 7.25)");
    }
}
