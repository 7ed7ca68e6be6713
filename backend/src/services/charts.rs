//! Declarative chart options for the four dashboard charts.
//!
//! The objects follow the ECharts option schema so any renderer that speaks
//! it can draw them without further processing. Tooltips that would need a
//! callback on the client are pre-rendered per data item.

use serde_json::{json, Value};

use super::graph::graph_tooltip;
use super::scatter::point_tooltip;
use crate::api::{Activity, DistributionData, GraphData, ScatterData, TimelineData};

fn edge_to_edge_grid() -> Value {
    json!({ "top": 0, "bottom": 0, "left": 0, "right": 0 })
}

/// Pie chart of the duration buckets.
pub fn distribution_chart_options(data: &DistributionData) -> Value {
    let slices: Vec<Value> = data
        .slices
        .iter()
        .map(|s| json!({ "value": s.value, "name": s.name }))
        .collect();

    json!({
        "tooltip": { "trigger": "item" },
        "legend": { "top": 40 },
        "series": [{
            "name": data.series_name,
            "type": "pie",
            "radius": "50%",
            "data": slices,
            "label": { "formatter": "{b}: {d}%" },
            "emphasis": {
                "itemStyle": {
                    "shadowBlur": 10,
                    "shadowOffsetX": 0,
                    "shadowColor": "rgba(0,0,0,0.5)"
                }
            }
        }]
    })
}

/// Scatter of prerequisite count against dependency count.
pub fn scatter_chart_options(data: &ScatterData) -> Value {
    let points: Vec<Value> = data
        .points
        .iter()
        .zip(&data.node_ids)
        .map(|(point, node_id)| {
            json!({
                "value": [point.x, point.y, point.z],
                "tooltip": { "formatter": point_tooltip(*node_id, point) }
            })
        })
        .collect();

    json!({
        "tooltip": { "trigger": "item" },
        "grid": edge_to_edge_grid(),
        "xAxis": { "name": "Prerequisites", "type": "value", "min": 0 },
        "yAxis": { "name": "Dependencies", "type": "value", "min": 0 },
        "series": [{
            "type": "scatter",
            "symbolSize": 10,
            "data": points
        }]
    })
}

/// Line chart of active activities per week.
pub fn timeline_chart_options(data: &TimelineData) -> Value {
    json!({
        "tooltip": { "trigger": "axis" },
        "grid": edge_to_edge_grid(),
        "xAxis": { "type": "category", "name": "Week", "data": data.week_labels() },
        "yAxis": { "type": "value", "name": "Active Activities" },
        "series": [{
            "name": "Active Activities",
            "type": "line",
            "smooth": true,
            "data": data.counts()
        }]
    })
}

/// Force-directed dependency graph.
///
/// `graph` must have been built from `activities`; node tooltips are taken
/// from the activity at the same position.
pub fn graph_chart_options(graph: &GraphData, activities: &[Activity]) -> Value {
    let nodes: Vec<Value> = graph
        .nodes
        .iter()
        .zip(activities)
        .map(|(node, activity)| {
            json!({
                "id": node.id,
                "name": node.name,
                "value": node.value,
                "label": { "show": true },
                "tooltip": { "formatter": graph_tooltip(activity) }
            })
        })
        .collect();

    json!({
        "tooltip": { "trigger": "item" },
        "series": [{
            "type": "graph",
            "layout": "force",
            "roam": true,
            "label": { "show": true },
            "edgeSymbol": ["none", "arrow"],
            "edgeSymbolSize": [0, 10],
            "data": nodes,
            "links": graph.edges,
            "force": {
                "repulsion": graph.layout.repulsion,
                "edgeLength": graph.layout.edge_length
            }
        }],
        "grid": edge_to_edge_grid()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DurationStats, ForceLayout, ScatterMode};
    use crate::services::{build_distribution, build_graph, build_scatter, build_timeline};

    fn activities() -> Vec<Activity> {
        vec![
            Activity::new(1, 0.5, "2024-01-03", "2024-01-03").with_dependencies(&[2], &[2]),
            Activity::new(2, 12.0, "2024-01-04", "2024-01-16").with_prerequisites(&[1], &[1]),
        ]
    }

    #[test]
    fn test_distribution_options() {
        let stats = DurationStats {
            total_activities: 2,
            shorter_than_day: 1,
            shorter_than_month: 1,
            longer_than_month: 0,
        };
        let options = distribution_chart_options(&build_distribution(&stats));

        let series = &options["series"][0];
        assert_eq!(series["type"], "pie");
        assert_eq!(series["label"]["formatter"], "{b}: {d}%");
        assert_eq!(series["data"].as_array().unwrap().len(), 3);
        assert_eq!(series["data"][0]["name"], "Shorter than a Day");
        assert_eq!(series["data"][0]["value"], 1);
    }

    #[test]
    fn test_scatter_options_carry_tooltips() {
        let options = scatter_chart_options(&build_scatter(&activities(), ScatterMode::Direct));

        let data = options["series"][0]["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["value"], json!([0, 1, 0.5]));
        assert!(data[1]["tooltip"]["formatter"]
            .as_str()
            .unwrap()
            .starts_with("Activity: 2<br>"));
        assert_eq!(options["xAxis"]["name"], "Prerequisites");
    }

    #[test]
    fn test_timeline_options() {
        let options = timeline_chart_options(&build_timeline(&activities()));

        assert_eq!(
            options["xAxis"]["data"],
            json!(["2024-01-01", "2024-01-08", "2024-01-15"])
        );
        assert_eq!(options["series"][0]["data"], json!([2, 1, 1]));
        assert_eq!(options["series"][0]["type"], "line");
    }

    #[test]
    fn test_graph_options() {
        let layout = ForceLayout {
            repulsion: 150.0,
            edge_length: 80.0,
        };
        let activities = activities();
        let options = graph_chart_options(&build_graph(&activities, layout), &activities);

        let series = &options["series"][0];
        assert_eq!(series["layout"], "force");
        assert_eq!(series["force"]["repulsion"], 150.0);
        assert_eq!(series["force"]["edgeLength"], 80.0);
        assert_eq!(series["links"], json!([{ "source": "1", "target": "2" }]));
        assert_eq!(series["data"][0]["name"], "Act. 1");
    }
}
