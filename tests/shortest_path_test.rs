use cypher_graph::algo::{shortest_path, PathOptions};
use cypher_graph::{build, results, Graph, PropertyContainer};
use serde_json::{json, Value};

const STATIONS: [&str; 11] = [
    "Alexanderplatz",
    "Jannowitzbrücke",
    "Hackescher Markt",
    "Friedrichstrasse",
    "Hallesches Tor",
    "Schlesisches Tor",
    "Rosa-Luxenburg-Platz",
    "Klosterstrasse",
    "Senefelder Platz",
    "Ostbahnhof",
    "Warschauer Strasse",
];

// (from, to, minutes)
const TRACKS: [(&str, &str, u32); 11] = [
    ("Alexanderplatz", "Jannowitzbrücke", 30),
    ("Alexanderplatz", "Hackescher Markt", 2),
    ("Hackescher Markt", "Friedrichstrasse", 2),
    ("Friedrichstrasse", "Hallesches Tor", 2),
    ("Hallesches Tor", "Schlesisches Tor", 2),
    ("Alexanderplatz", "Rosa-Luxenburg-Platz", 2),
    ("Alexanderplatz", "Klosterstrasse", 2),
    ("Rosa-Luxenburg-Platz", "Senefelder Platz", 2),
    ("Jannowitzbrücke", "Ostbahnhof", 2),
    ("Ostbahnhof", "Warschauer Strasse", 2),
    ("Warschauer Strasse", "Schlesisches Tor", 2),
];

fn station_id(name: &str) -> String {
    let idx = STATIONS.iter().position(|s| *s == name).unwrap();
    (idx + 1).to_string()
}

fn station(name: &str) -> Value {
    json!({ "id": station_id(name), "labels": ["station"], "properties": { "name": name } })
}

/// One row per matched relationship, as `MATCH (n:station)-[r:train]->() RETURN n,r`
/// would return it: the relationship plus both of its endpoints.
fn train_rows(both_directions_twice: bool) -> Value {
    let mut rows = Vec::new();
    let mut rel_id = 100;
    for &(a, b, minutes) in TRACKS.iter() {
        for (from, to) in [(a, b), (b, a)] {
            rel_id += 1;
            let row = json!({
                "graph": {
                    "nodes": [station(from), station(to)],
                    "relationships": [{
                        "id": rel_id.to_string(),
                        "startNode": station_id(from),
                        "endNode": station_id(to),
                        "type": "train",
                        "properties": { "minutes": minutes }
                    }]
                }
            });
            if both_directions_twice {
                rows.push(row.clone());
            }
            rows.push(row);
        }
    }
    json!({ "results": [{ "columns": ["n", "r"], "data": rows }], "errors": [] })
}

fn berlin(both_directions_twice: bool) -> Graph {
    let body = serde_json::to_vec(&train_rows(both_directions_twice)).unwrap();
    build(&results::parse_fragments(&body).unwrap())
}

fn route(graph: &Graph, from: &str, to: &str, options: &PathOptions) -> Vec<String> {
    let path = shortest_path(graph, &station_id(from), &station_id(to), options).unwrap();
    path.property_values("name")
        .into_iter()
        .map(|name| name.unwrap().to_string())
        .collect()
}

#[test]
fn test_berlin_graph_shape() {
    let graph = berlin(false);

    assert_eq!(graph.vertex_count(), 11);
    assert_eq!(graph.edge_count(), 22);
    assert_eq!(graph.vertices_by_label("station").len(), 11);
    assert_eq!(graph.edges_by_type("train").len(), 22);

    let alex = graph.find_vertex("name", "Alexanderplatz").unwrap();
    assert_eq!(graph.outgoing_edges(alex.id.as_str()).len(), 4);
    assert_eq!(graph.incoming_edges(alex.id.as_str()).len(), 4);
}

#[test]
fn test_ostbahnhof_to_klosterstrasse() {
    let graph = berlin(false);
    let options = PathOptions::default().with_edge_type("train");

    assert_eq!(
        route(&graph, "Ostbahnhof", "Klosterstrasse", &options),
        ["Ostbahnhof", "Jannowitzbrücke", "Alexanderplatz", "Klosterstrasse"]
    );
}

#[test]
fn test_hallesches_tor_to_senefelder_platz() {
    let graph = berlin(false);
    let options = PathOptions::default().with_edge_type("train");

    assert_eq!(
        route(&graph, "Hallesches Tor", "Senefelder Platz", &options),
        [
            "Hallesches Tor",
            "Friedrichstrasse",
            "Hackescher Markt",
            "Alexanderplatz",
            "Rosa-Luxenburg-Platz",
            "Senefelder Platz"
        ]
    );
}

#[test]
fn test_paths_are_symmetric_over_bidirectional_tracks() {
    let graph = berlin(false);
    let options = PathOptions::default();

    let mut back = route(&graph, "Senefelder Platz", "Hallesches Tor", &options);
    back.reverse();
    assert_eq!(back, route(&graph, "Hallesches Tor", "Senefelder Platz", &options));
}

#[test]
fn test_weighted_route_avoids_slow_track() {
    let graph = berlin(false);
    let options = PathOptions::default().with_weight_property("minutes");

    let path = shortest_path(
        &graph,
        &station_id("Ostbahnhof"),
        &station_id("Klosterstrasse"),
        &options,
    )
    .unwrap();

    assert_eq!(path.hops(), 7);
    assert_eq!(path.cost, 14.0);
    assert!(path.edges.iter().all(|e| e.property("minutes") == Some("2")));
    assert_eq!(
        path.property_values("name").first().copied().flatten(),
        Some("Ostbahnhof")
    );
}

#[test]
fn test_unknown_edge_type_finds_nothing() {
    let graph = berlin(false);
    let options = PathOptions::default().with_edge_type("tram");

    assert!(shortest_path(&graph, &station_id("Ostbahnhof"), &station_id("Klosterstrasse"), &options).is_none());
    assert!(shortest_path(&graph, "999", &station_id("Klosterstrasse"), &PathOptions::default()).is_none());
}

#[test]
fn test_repeated_rows_keep_parallel_edges() {
    let graph = berlin(true);

    assert_eq!(graph.vertex_count(), 11);
    assert_eq!(graph.edge_count(), 44);
    assert_eq!(graph.distinct_edge_count(), 22);

    let options = PathOptions::default().with_edge_type("train");
    assert_eq!(route(&graph, "Ostbahnhof", "Klosterstrasse", &options).len(), 4);
}
