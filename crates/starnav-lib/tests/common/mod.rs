//! Shared fixture topologies for integration tests.
#![allow(dead_code)]

use starnav_lib::{
    build_graph, JumpBridge, NavGraph, Position, StarSystem, Starmap, LIGHT_YEAR_METERS,
};

/// Build a system positioned on the x axis at `x_ly` light-years.
pub fn system(name: &str, security: f64, x_ly: f64, gates: &[&str]) -> StarSystem {
    StarSystem {
        name: name.to_string(),
        security,
        position: Position {
            x: x_ly * LIGHT_YEAR_METERS,
            y: 0.0,
            z: 0.0,
        },
        gates: gates.iter().map(|gate| gate.to_string()).collect(),
    }
}

/// Two parallel gate paths from Arveto to Deltar: one through low-security
/// Caldos, one entirely high security. Systems sit 20 ly apart so no range
/// links form.
pub fn diamond_map() -> Starmap {
    Starmap::from_systems(vec![
        system("Arveto", 0.9, 0.0, &["Besima", "Evanna"]),
        system("Besima", 0.8, 20.0, &["Arveto", "Caldos"]),
        system("Caldos", 0.3, 40.0, &["Besima", "Deltar"]),
        system("Deltar", 0.7, 60.0, &["Caldos", "Fyris"]),
        system("Evanna", 0.6, 80.0, &["Arveto", "Fyris"]),
        system("Fyris", 0.8, 100.0, &["Evanna", "Deltar"]),
    ])
}

pub fn diamond_graph() -> NavGraph {
    build_graph(&diamond_map(), &[])
}

/// A single gate corridor Arveto-Besima-Caldos-Deltar plus the gateless
/// Orphan, for exact-route and no-route assertions.
pub fn corridor_map() -> Starmap {
    Starmap::from_systems(vec![
        system("Arveto", 0.9, 0.0, &["Besima"]),
        system("Besima", 0.8, 20.0, &["Arveto", "Caldos"]),
        system("Caldos", 0.3, 40.0, &["Besima", "Deltar"]),
        system("Deltar", 0.7, 60.0, &["Caldos"]),
        system("Orphan", 0.9, 200.0, &[]),
    ])
}

pub fn corridor_graph(bridges: &[JumpBridge]) -> NavGraph {
    build_graph(&corridor_map(), bridges)
}

/// Low-security systems on a line for the range router: Jorun at 0 ly,
/// Kestra at 4, Lorne at 8, Mivas at 14, with high-security Hovan at 2.
/// Kestra-Mivas sits exactly at the 10 ly ceiling and must not link.
pub fn jump_line_map() -> Starmap {
    Starmap::from_systems(vec![
        system("Jorun", 0.2, 0.0, &[]),
        system("Hovan", 0.8, 2.0, &[]),
        system("Kestra", 0.1, 4.0, &[]),
        system("Lorne", 0.3, 8.0, &[]),
        system("Mivas", 0.4, 14.0, &[]),
    ])
}

pub fn jump_line_graph() -> NavGraph {
    build_graph(&jump_line_map(), &[])
}
