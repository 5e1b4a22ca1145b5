//! cypher-graph: load a Cypher query result as a graph and inspect it
//!
//! Connects to a graph server's transactional HTTP endpoint through
//! [`GraphLoader`].

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use cypher_graph::algo::{shortest_path, PathOptions};
use cypher_graph::{ClientConfig, Graph, GraphLoader, PropertyContainer};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "cypher-graph", version, about = "Load Cypher query results as graphs")]
struct Cli {
    /// YAML configuration file; flags below override its values
    #[arg(long, global = true, env = "CYPHER_GRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// http or https
    #[arg(long, global = true, env = "CYPHER_GRAPH_PROTOCOL")]
    protocol: Option<String>,

    #[arg(long, global = true, env = "CYPHER_GRAPH_HOST")]
    host: Option<String>,

    #[arg(long, global = true, env = "CYPHER_GRAPH_PORT")]
    port: Option<u16>,

    /// Transactional endpoint path
    #[arg(long, global = true, env = "CYPHER_GRAPH_PATH")]
    path: Option<String>,

    #[arg(long, global = true, env = "CYPHER_GRAPH_USER")]
    user: Option<String>,

    #[arg(long, global = true, env = "CYPHER_GRAPH_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a query result and summarize the graph
    Load {
        /// Cypher query; the configured default query if omitted
        query: Option<String>,

        /// Also list every vertex
        #[arg(long)]
        vertices: bool,
    },
    /// Shortest path between two vertices found by property value
    Path {
        /// Cypher query; the configured default query if omitted
        query: Option<String>,

        /// Property used to look up the endpoints
        #[arg(long, default_value = "name")]
        key: String,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        /// Only follow edges of this type
        #[arg(long)]
        edge_type: Option<String>,

        /// Numeric edge property to minimize; hop count if omitted
        #[arg(long)]
        weight: Option<String>,
    },
}

impl Cli {
    fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_yaml_file(path)
                .with_context(|| format!("reading {}", path.display()))?,
            None => ClientConfig::default(),
        };

        if let Some(protocol) = &self.protocol {
            config.protocol = protocol.clone();
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(path) = &self.path {
            config.path = path.clone();
        }
        if let Some(user) = &self.user {
            config.username = Some(user.clone());
        }
        if let Some(password) = &self.password {
            config.password = Some(password.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let loader = GraphLoader::from_config(cli.client_config()?)?;

    match &cli.command {
        Commands::Load { query, vertices } => {
            let query = query.as_deref().unwrap_or(loader.default_query());
            let (graph, stats) = loader.execute_with_stats(query).await?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&graph)?),
                OutputFormat::Table => {
                    print_summary(&graph);
                    if *vertices {
                        print_vertices(&graph);
                    }
                    println!(
                        "{} fragment(s), {} duplicate vertices, {} relationships skipped",
                        stats.fragments, stats.duplicate_vertices, stats.skipped_relationships
                    );
                }
            }
        }
        Commands::Path {
            query,
            key,
            from,
            to,
            edge_type,
            weight,
        } => {
            let query = query.as_deref().unwrap_or(loader.default_query());
            let graph = loader.execute(query).await?;

            let source = graph
                .find_vertex(key, from)
                .ok_or_else(|| anyhow!("no vertex with {} = {}", key, from))?;
            let target = graph
                .find_vertex(key, to)
                .ok_or_else(|| anyhow!("no vertex with {} = {}", key, to))?;

            let mut options = PathOptions::default();
            if let Some(edge_type) = edge_type {
                options = options.with_edge_type(edge_type.as_str());
            }
            if let Some(weight) = weight {
                options = options.with_weight_property(weight.as_str());
            }

            let path = shortest_path(&graph, source.id.as_str(), target.id.as_str(), &options)
                .ok_or_else(|| anyhow!("{} is not reachable from {}", to, from))?;

            match cli.format {
                OutputFormat::Json => {
                    let steps: Vec<_> = path
                        .vertices
                        .iter()
                        .map(|v| {
                            let mut step = serde_json::Map::new();
                            step.insert("id".to_string(), v.id.as_str().into());
                            step.insert(key.clone(), v.property(key).into());
                            serde_json::Value::Object(step)
                        })
                        .collect();
                    let out = serde_json::json!({
                        "hops": path.hops(),
                        "cost": path.cost,
                        "path": steps,
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
                OutputFormat::Table => {
                    let mut table = Table::new();
                    table.set_content_arrangement(ContentArrangement::Dynamic);
                    table.set_header(vec!["#", "id", key.as_str(), "via"]);

                    for (i, vertex) in path.vertices.iter().enumerate() {
                        let via = match i {
                            0 => String::new(),
                            _ => path.edges[i - 1].edge_type.to_string(),
                        };
                        table.add_row(vec![
                            i.to_string(),
                            vertex.id.to_string(),
                            vertex.property(key).unwrap_or("").to_string(),
                            via,
                        ]);
                    }

                    println!("{}", table);
                    println!("{} hop(s), cost {}", path.hops(), path.cost);
                }
            }
        }
    }

    Ok(())
}

fn print_summary(graph: &Graph) {
    let mut labels: BTreeMap<&str, usize> = BTreeMap::new();
    for vertex in graph.vertices() {
        for label in &vertex.labels {
            *labels.entry(label.as_str()).or_default() += 1;
        }
    }
    let mut types: BTreeMap<&str, usize> = BTreeMap::new();
    for edge in graph.edges() {
        *types.entry(edge.edge_type.as_str()).or_default() += 1;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["kind", "name", "count"]);
    let mut add = |kind: &str, name: &str, count: usize| {
        table.add_row(vec![kind.to_string(), name.to_string(), count.to_string()]);
    };
    add("vertices", "", graph.vertex_count());
    add("edges", "", graph.edge_count());
    add("distinct edges", "", graph.distinct_edge_count());
    for (label, count) in labels {
        add("label", label, count);
    }
    for (edge_type, count) in types {
        add("type", edge_type, count);
    }

    println!("{}", table);
}

fn print_vertices(graph: &Graph) {
    if graph.is_empty() {
        println!("(no vertices)");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["id", "labels", "properties", "out", "in"]);

    for vertex in graph.vertices() {
        let labels: Vec<&str> = vertex.labels.iter().map(|l| l.as_str()).collect();
        let properties: BTreeMap<_, _> = vertex.properties().iter().collect();
        let properties: Vec<String> = properties.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        table.add_row(vec![
            vertex.id.to_string(),
            labels.join(","),
            properties.join(", "),
            graph.outgoing_edges(vertex.id.as_str()).len().to_string(),
            graph.incoming_edges(vertex.id.as_str()).len().to_string(),
        ]);
    }

    println!("{}", table);
}
