use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::starmap::{
    fuzzy_matches, DistanceSource, JumpBridge, Position, Starmap, LIGHT_YEAR_METERS,
    MAX_JUMP_RANGE_LY,
};

/// Precomputed direct-jump link to another system.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpLink {
    pub target: String,
    pub range_ly: f64,
}

/// One system within the navigation graph.
#[derive(Debug, Clone)]
pub struct NavNode {
    pub name: String,
    pub high_sec: bool,
    pub position: Position,
    /// Gate-connected neighbour names, copied verbatim from the topology.
    pub gates: Vec<String>,
    /// Reciprocal jump-bridge partner, at most one.
    pub jump_bridge: Option<String>,
    /// Direct-jump candidates within the absolute maximum range.
    pub jump_links: Vec<JumpLink>,
}

/// Navigation graph snapshot.
///
/// Built wholesale from a [`Starmap`] and read-only afterwards, except for the
/// jump-bridge overlay which may be refreshed or cleared in place. Searches
/// never mutate the graph, so concurrent readers of one snapshot are safe;
/// rebuilds produce a fresh value to swap in.
#[derive(Debug, Clone, Default)]
pub struct NavGraph {
    nodes: HashMap<String, NavNode>,
}

impl NavGraph {
    /// Return the node for a given system name.
    pub fn node(&self, name: &str) -> Option<&NavNode> {
        self.nodes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Names similar to `name`, best match first, at most `limit` entries.
    pub fn fuzzy_system_matches(&self, name: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.nodes.keys().map(String::as_str), name, limit)
    }

    /// Re-apply a jump-bridge list over the existing graph.
    ///
    /// Each endpoint with a non-empty name has its partner set to the opposite
    /// name; one side may be updated unilaterally when only it carries a valid
    /// identifier. Gate adjacency and range links are untouched.
    pub fn refresh_jump_bridges(&mut self, bridges: &[JumpBridge]) {
        let mut skipped = 0usize;
        for bridge in bridges {
            if !bridge.from.is_empty() {
                match self.nodes.get_mut(&bridge.from) {
                    Some(node) => node.jump_bridge = Some(bridge.to.clone()),
                    None => skipped += 1,
                }
            }
            if !bridge.to.is_empty() {
                match self.nodes.get_mut(&bridge.to) {
                    Some(node) => node.jump_bridge = Some(bridge.from.clone()),
                    None => skipped += 1,
                }
            }
        }

        if skipped > 0 {
            warn!(skipped, "ignored jump bridge endpoints naming unknown systems");
        }
    }

    /// Remove every jump-bridge partner.
    pub fn clear_jump_bridges(&mut self) {
        for node in self.nodes.values_mut() {
            node.jump_bridge = None;
        }
    }

    /// All systems within `hops` gate jumps of `start`, including `start`.
    pub fn systems_within_hops(&self, start: &str, hops: u32) -> HashSet<String> {
        let mut reached = HashSet::new();
        self.collect_systems_within_hops(&mut reached, start, hops);
        reached
    }

    /// Accumulator form of [`systems_within_hops`](Self::systems_within_hops).
    ///
    /// A zero budget leaves `reached` untouched. Recursion into a neighbour is
    /// unconditional: a system first reached with a small remaining budget must
    /// still be expanded again when a longer budget arrives through another
    /// path. Worst-case cost is the branching factor raised to `hops`, so keep
    /// budgets small.
    pub fn collect_systems_within_hops(
        &self,
        reached: &mut HashSet<String>,
        start: &str,
        hops: u32,
    ) {
        if hops == 0 {
            return;
        }

        if !reached.contains(start) {
            reached.insert(start.to_string());
        }

        let Some(node) = self.node(start) else {
            return;
        };

        for neighbour in &node.gates {
            if !reached.contains(neighbour) {
                reached.insert(neighbour.clone());
            }
            self.collect_systems_within_hops(reached, neighbour, hops - 1);
        }
    }

    /// Stored range in light-years between two linked systems, if any.
    ///
    /// Links are symmetric in practice but stored per node, so both sides are
    /// consulted.
    pub(crate) fn link_range(&self, from: &str, to: &str) -> Option<f64> {
        let forward = self
            .node(from)
            .and_then(|node| node.jump_links.iter().find(|link| link.target == to));
        if let Some(link) = forward {
            return Some(link.range_ly);
        }
        self.node(to)
            .and_then(|node| node.jump_links.iter().find(|link| link.target == from))
            .map(|link| link.range_ly)
    }
}

/// Build the navigation graph using the starmap's own coordinates for ranging.
pub fn build_graph(map: &Starmap, bridges: &[JumpBridge]) -> NavGraph {
    build_graph_with(map, bridges, map)
}

/// Build the navigation graph with an external ranging service.
///
/// One node per system, gate names copied verbatim, bridge pairs wired
/// reciprocally, then an all-pairs scan against `distance` fills the
/// range-link index: every non-high-security destination strictly closer than
/// the absolute maximum becomes a link (the `> 0` guard excludes self).
/// The scan is O(N²) and runs once per topology rebuild, never per query.
pub fn build_graph_with<D: DistanceSource>(
    map: &Starmap,
    bridges: &[JumpBridge],
    distance: &D,
) -> NavGraph {
    let mut nodes = HashMap::with_capacity(map.len());
    for system in map.iter() {
        nodes.insert(
            system.name.clone(),
            NavNode {
                name: system.name.clone(),
                high_sec: system.is_high_security(),
                position: system.position,
                gates: system.gates.clone(),
                jump_bridge: None,
                jump_links: Vec::new(),
            },
        );
    }

    let mut graph = NavGraph { nodes };
    graph.refresh_jump_bridges(bridges);

    let max_range = MAX_JUMP_RANGE_LY * LIGHT_YEAR_METERS;
    let mut links = 0usize;
    for node in graph.nodes.values_mut() {
        for system in map.iter() {
            if system.is_high_security() {
                continue;
            }

            let separation = distance.distance_between(&system.name, &node.name);
            if separation > 0.0 && separation < max_range {
                node.jump_links.push(JumpLink {
                    target: system.name.clone(),
                    range_ly: separation / LIGHT_YEAR_METERS,
                });
                links += 1;
            }
        }
    }

    debug!(
        systems = graph.nodes.len(),
        bridges = bridges.len(),
        links,
        "built navigation graph"
    );

    graph
}
