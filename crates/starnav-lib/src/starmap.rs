use std::collections::HashMap;

use tracing::debug;

/// Metres in one light-year, matching the unit the topology source uses for
/// system coordinates.
pub const LIGHT_YEAR_METERS: f64 = 9.460_730_472_580_8e15;

/// Absolute ceiling on a single direct jump. Range links beyond this are never
/// stored, regardless of what a caller later asks for.
pub const MAX_JUMP_RANGE_LY: f64 = 10.0;

/// Security level above which a system counts as high security.
pub const HIGH_SEC_THRESHOLD: f64 = 0.45;

/// Minimum Jaro-Winkler similarity for a name to qualify as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Cartesian coordinates for a star system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// One star system as supplied by the topology source.
///
/// `gates` lists the names of directly gate-connected systems; the source is
/// expected to supply symmetric entries.
#[derive(Debug, Clone, PartialEq)]
pub struct StarSystem {
    pub name: String,
    pub security: f64,
    pub position: Position,
    pub gates: Vec<String>,
}

impl StarSystem {
    /// Whether this system sits above the high-security threshold.
    pub fn is_high_security(&self) -> bool {
        self.security > HIGH_SEC_THRESHOLD
    }
}

/// A reciprocal long-range shortcut between two named systems.
///
/// An empty name marks that side as absent; the other side may still be
/// updated unilaterally during a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpBridge {
    pub from: String,
    pub to: String,
}

impl JumpBridge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// In-memory topology keyed by system name.
#[derive(Debug, Clone, Default)]
pub struct Starmap {
    systems: HashMap<String, StarSystem>,
}

impl Starmap {
    /// Build a starmap from a list of systems. Later duplicates replace
    /// earlier entries, matching the topology source's own keying.
    pub fn from_systems(systems: Vec<StarSystem>) -> Self {
        let mut map = HashMap::with_capacity(systems.len());
        for system in systems {
            map.insert(system.name.clone(), system);
        }
        debug!(systems = map.len(), "loaded starmap");
        Self { systems: map }
    }

    /// Lookup a system by its case-sensitive name.
    pub fn system(&self, name: &str) -> Option<&StarSystem> {
        self.systems.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.systems.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Iterate over all systems in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &StarSystem> {
        self.systems.values()
    }

    /// Names similar to `name`, best match first, at most `limit` entries.
    pub fn fuzzy_system_matches(&self, name: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.systems.keys().map(String::as_str), name, limit)
    }
}

/// Physical distance between two named systems.
///
/// Implementations must be symmetric, return zero for identical or unknown
/// names, and use the unit [`LIGHT_YEAR_METERS`] converts from.
pub trait DistanceSource {
    fn distance_between(&self, a: &str, b: &str) -> f64;
}

impl DistanceSource for Starmap {
    fn distance_between(&self, a: &str, b: &str) -> f64 {
        match (self.system(a), self.system(b)) {
            (Some(from), Some(to)) => from.position.distance_to(&to.position),
            _ => 0.0,
        }
    }
}

/// Rank `names` against `query` by Jaro-Winkler similarity.
pub(crate) fn fuzzy_matches<'a, I>(names: I, query: &str, limit: usize) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    let mut scored: Vec<(f64, &str)> = names
        .map(|name| (strsim::jaro_winkler(query, name), name))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored.truncate(limit);
    scored.into_iter().map(|(_, name)| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Position {
            x: 0.0,
            y: 3.0,
            z: 0.0,
        };
        let b = Position {
            x: 4.0,
            y: 0.0,
            z: 0.0,
        };
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn security_threshold_is_exclusive() {
        let mut system = StarSystem {
            name: "Arveto".to_string(),
            security: 0.45,
            position: Position {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            gates: Vec::new(),
        };
        assert!(!system.is_high_security());

        system.security = 0.46;
        assert!(system.is_high_security());
    }

    #[test]
    fn unknown_names_have_zero_distance() {
        let map = Starmap::from_systems(vec![StarSystem {
            name: "Arveto".to_string(),
            security: 0.9,
            position: Position {
                x: 1.0,
                y: 2.0,
                z: 3.0,
            },
            gates: Vec::new(),
        }]);

        assert_eq!(map.distance_between("Arveto", "Nowhere"), 0.0);
        assert_eq!(map.distance_between("Arveto", "Arveto"), 0.0);
    }
}
