//! Results persistence module

use crate::pipeline::SplitOutcome;
use anyhow::Result;
use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Save split results to the specified directory
pub fn save_results(outcome: &SplitOutcome, output_dir: &Path) -> Result<()> {
    log::info!(
        "Saving {} clusters to {}",
        outcome.clusters.len(),
        output_dir.display()
    );

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    save_summary(outcome, output_dir)?;
    save_clusters(outcome, output_dir)?;
    save_graph(outcome, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save run counters and graph statistics
fn save_summary(outcome: &SplitOutcome, output_dir: &Path) -> Result<()> {
    log::info!("Saving summary information");

    let path = output_dir.join("summary.json");
    let mut file = File::create(path)?;

    let report = &outcome.report;
    let summary = json!({
        "graph_stats": {
            "node_count": report.node_count,
            "edge_count": report.edge_count,
        },
        "cluster_stats": {
            "cluster_count": report.cluster_sizes.len(),
            "cluster_sizes": report.cluster_sizes,
            "size_spread": report.size_spread(),
            "initial_crossing_edges": report.initial_crossing_edges,
            "final_crossing_edges": report.final_crossing_edges,
            "removed_edge_count": report.removed_edge_count,
        },
        "severed_edges": outcome.severed_edges,
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save per-cluster membership with category names
fn save_clusters(outcome: &SplitOutcome, output_dir: &Path) -> Result<()> {
    log::info!("Saving individual cluster information");

    let path = output_dir.join("clusters.json");
    let mut file = File::create(path)?;

    let clusters_json = json!({
        "clusters": outcome.clusters.iter().map(|c| {
            json!({
                "id": c.id,
                "size": c.size,
                "internal_edges": c.internal_edges,
                "density": c.density,
                "members": c.members.iter().map(|abbreviation| {
                    json!({
                        "abbreviation": abbreviation,
                        "name": outcome.graph.label(abbreviation),
                    })
                }).collect::<Vec<_>>(),
            })
        }).collect::<Vec<_>>()
    });

    file.write_all(to_string_pretty(&clusters_json)?.as_bytes())?;

    Ok(())
}

/// Save nodes with their cluster and all relations, for external visualization
fn save_graph(outcome: &SplitOutcome, output_dir: &Path) -> Result<()> {
    log::info!("Saving graph with cluster assignment");

    let path = output_dir.join("graph.json");
    let mut file = File::create(path)?;

    let assignment = outcome.partition.assignment();
    let graph_json = json!({
        "nodes": outcome.graph.node_ids().map(|id| {
            json!({
                "id": id,
                "label": outcome.graph.label(id),
                "cluster": assignment.get(id),
            })
        }).collect::<Vec<_>>(),
        "edges": outcome.graph.edges().map(|(a, b)| json!([a, b])).collect::<Vec<_>>(),
    });

    file.write_all(to_string_pretty(&graph_json)?.as_bytes())?;

    Ok(())
}
