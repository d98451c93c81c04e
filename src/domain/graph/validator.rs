//! Structural validation of decision graphs.
//!
//! The validator walks the graph depth-first from every node id and collects
//! every structural problem in one pass. Cycles are detected by membership in
//! the current recursion stack only, so a subtree shared by two parents
//! (diamond reuse) is legal while an edge back to an ancestor is not.

use std::collections::HashSet;
use thiserror::Error;

use super::node::{DecisionGraph, DecisionNode};
use crate::domain::foundation::ROOT_NODE_ID;
use crate::ports::{DiagnosticLevel, DiagnosticSink};

/// A structural problem that makes a graph unusable for traversal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralViolation {
    #[error("No root node defined")]
    MissingRoot,

    #[error(
        "Circular reference detected at node '{}' in path: {}",
        .node_id,
        .path.join(" -> ")
    )]
    Cycle { node_id: String, path: Vec<String> },

    #[error("Missing node: '{node_id}'")]
    MissingNode {
        node_id: String,
        referenced_by: Option<String>,
    },

    #[error("Invalid node type '{node_type}' for node '{node_id}'")]
    InvalidType { node_id: String, node_type: String },

    #[error("Non-terminus node '{node_id}' has no children")]
    MissingChildren { node_id: String },

    #[error("Invalid or missing default child for node '{node_id}'")]
    InvalidDefault {
        node_id: String,
        default: Option<String>,
    },
}

impl StructuralViolation {
    /// The node the violation is reported against, if any.
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Self::MissingRoot => None,
            Self::Cycle { node_id, .. }
            | Self::MissingNode { node_id, .. }
            | Self::InvalidType { node_id, .. }
            | Self::MissingChildren { node_id }
            | Self::InvalidDefault { node_id, .. } => Some(node_id),
        }
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle { .. })
    }
}

/// Result of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<StructuralViolation>,
    warnings: Vec<String>,
}

impl ValidationReport {
    /// True when no violation was found. Warnings do not fail validation.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in discovery order.
    pub fn violations(&self) -> &[StructuralViolation] {
        &self.violations
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Writes one diagnostic per problem followed by the pass/fail summary.
    pub fn emit(&self, sink: &dyn DiagnosticSink) {
        for warning in &self.warnings {
            sink.log(DiagnosticLevel::Warning, warning);
        }
        for violation in &self.violations {
            sink.log(DiagnosticLevel::Error, &violation.to_string());
        }
        let verdict = if self.is_valid() { "Passed" } else { "Failed" };
        sink.log(
            DiagnosticLevel::Info,
            &format!("Decision tree validation: {}", verdict),
        );
    }
}

/// Depth-first structural checker for decision graphs.
pub struct GraphValidator;

impl GraphValidator {
    /// Validates the graph and reports through `sink`.
    ///
    /// Never fails: the caller decides what to do with `false`.
    pub fn validate(graph: &DecisionGraph, sink: &dyn DiagnosticSink) -> bool {
        let report = Self::check(graph);
        report.emit(sink);
        report.is_valid()
    }

    /// Validates the graph and returns every violation found.
    pub fn check(graph: &DecisionGraph) -> ValidationReport {
        let mut walk = Walk::new(graph);

        if !graph.contains(ROOT_NODE_ID) {
            walk.record(StructuralViolation::MissingRoot);
        }

        for node_id in graph.ids() {
            walk.visit(node_id, None);
        }

        walk.into_report()
    }
}

struct Walk<'g> {
    graph: &'g DecisionGraph,
    on_stack: HashSet<&'g str>,
    path: Vec<&'g str>,
    report: ValidationReport,
}

impl<'g> Walk<'g> {
    fn new(graph: &'g DecisionGraph) -> Self {
        Self {
            graph,
            on_stack: HashSet::new(),
            path: Vec::new(),
            report: ValidationReport::default(),
        }
    }

    fn into_report(self) -> ValidationReport {
        self.report
    }

    fn record(&mut self, violation: StructuralViolation) {
        if !self.report.violations.contains(&violation) {
            self.report.violations.push(violation);
        }
    }

    fn visit(&mut self, node_id: &'g str, parent: Option<&'g str>) {
        // (a) back-edge to an ancestor
        if self.on_stack.contains(node_id) {
            let mut path: Vec<String> = self.path.iter().map(|id| id.to_string()).collect();
            path.push(node_id.to_string());
            self.record(StructuralViolation::Cycle {
                node_id: node_id.to_string(),
                path,
            });
            return;
        }

        // (b) referential integrity
        let Some(node) = self.graph.get(node_id) else {
            self.record(StructuralViolation::MissingNode {
                node_id: node_id.to_string(),
                referenced_by: parent.map(str::to_string),
            });
            return;
        };

        // (c) node type legality, (d) edge completeness
        if let Some(children) = self.check_node(node_id, node) {
            self.on_stack.insert(node_id);
            self.path.push(node_id);
            for child_id in children {
                self.visit(child_id, Some(node_id));
            }
            self.path.pop();
            self.on_stack.remove(node_id);
        }

    }

    /// Checks a single node and returns the children to descend into.
    fn check_node(&mut self, node_id: &'g str, node: &'g DecisionNode) -> Option<Vec<&'g str>> {
        let Some(kind) = node.kind() else {
            self.record(StructuralViolation::InvalidType {
                node_id: node_id.to_string(),
                node_type: node.node_type.clone(),
            });
            return None;
        };

        if node.is_terminus() {
            if node.children.is_some() || node.default.is_some() {
                let warning = format!(
                    "Terminus node '{}' declares edges that will be ignored",
                    node_id
                );
                if !self.report.warnings.contains(&warning) {
                    self.report.warnings.push(warning);
                }
            }
            return None;
        }

        let children = match &node.children {
            Some(children) if !children.is_empty() => children,
            _ => {
                self.record(StructuralViolation::MissingChildren {
                    node_id: node_id.to_string(),
                });
                return None;
            }
        };

        if node.default_child().is_none() {
            self.record(StructuralViolation::InvalidDefault {
                node_id: node_id.to_string(),
                default: node.default.clone(),
            });
            return None;
        }

        tracing::trace!(node_id, kind = %kind, edges = children.len(), "node checked");
        Some(children.values().map(String::as_str).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::diagnostics::MemorySink;

    /// root -> node_2A -> node_3A -> end, with side branches to a shared exit.
    fn valid_graph() -> DecisionGraph {
        DecisionGraph::new()
            .with_node(
                "root",
                DecisionNode::question("How was your weekend?")
                    .with_child("positive", "node_2A")
                    .with_child("neutral", "node_2B")
                    .with_child("negative", "end")
                    .with_default("neutral"),
            )
            .with_node(
                "node_2A",
                DecisionNode::question("What made it great?")
                    .with_child("positive", "node_3A")
                    .with_default("positive"),
            )
            .with_node(
                "node_2B",
                DecisionNode::response("Fair enough.")
                    .with_child("neutral", "end")
                    .with_default("neutral"),
            )
            .with_node(
                "node_3A",
                DecisionNode::question("Would you do it again?")
                    .with_child("positive", "end")
                    .with_default("positive"),
            )
            .with_node("end", DecisionNode::terminus("Thanks!"))
    }

    mod valid_graphs {
        use super::*;

        #[test]
        fn well_formed_graph_passes() {
            let report = GraphValidator::check(&valid_graph());
            assert!(report.is_valid(), "{:?}", report.violations());
        }

        #[test]
        fn diamond_reuse_is_not_a_cycle() {
            let graph = DecisionGraph::new()
                .with_node(
                    "root",
                    DecisionNode::question("Q")
                        .with_child("positive", "left")
                        .with_child("negative", "right")
                        .with_default("positive"),
                )
                .with_node(
                    "left",
                    DecisionNode::response("L")
                        .with_child("neutral", "shared")
                        .with_default("neutral"),
                )
                .with_node(
                    "right",
                    DecisionNode::response("R")
                        .with_child("neutral", "shared")
                        .with_default("neutral"),
                )
                .with_node(
                    "shared",
                    DecisionNode::question("S")
                        .with_child("neutral", "end")
                        .with_default("neutral"),
                )
                .with_node("end", DecisionNode::terminus(""));

            assert!(GraphValidator::check(&graph).is_valid());
        }

        #[test]
        fn edges_into_a_terminus_never_form_a_cycle() {
            let graph = DecisionGraph::new()
                .with_node(
                    "root",
                    DecisionNode::question("Q")
                        .with_child("positive", "end")
                        .with_default("positive"),
                )
                .with_node(
                    "end",
                    DecisionNode::terminus("").with_child("again", "root"),
                );

            let report = GraphValidator::check(&graph);
            assert!(report.is_valid());
            assert_eq!(report.warnings().len(), 1);
        }

        #[test]
        fn validate_logs_passed_summary() {
            let sink = MemorySink::new();
            assert!(GraphValidator::validate(&valid_graph(), &sink));
            assert_eq!(
                sink.messages(),
                vec!["Decision tree validation: Passed".to_string()]
            );
        }
    }

    mod invalid_graphs {
        use super::*;

        #[test]
        fn missing_root_fails() {
            let mut graph = valid_graph();
            graph.remove("root");

            let report = GraphValidator::check(&graph);
            assert!(!report.is_valid());
            assert_eq!(report.violations()[0], StructuralViolation::MissingRoot);
        }

        #[test]
        fn dangling_child_fails() {
            let mut graph = valid_graph();
            graph.insert(
                "node_2A",
                DecisionNode::question("What made it great?")
                    .with_child("positive", "missing_node")
                    .with_default("positive"),
            );

            let report = GraphValidator::check(&graph);
            assert_eq!(
                report.violations(),
                &[StructuralViolation::MissingNode {
                    node_id: "missing_node".to_string(),
                    referenced_by: Some("node_2A".to_string()),
                }]
            );
        }

        #[test]
        fn back_edge_to_ancestor_fails() {
            let mut graph = valid_graph();
            graph.insert(
                "node_3A",
                DecisionNode::question("Again?")
                    .with_child("positive", "root")
                    .with_default("positive"),
            );

            let report = GraphValidator::check(&graph);
            assert!(!report.is_valid());
            let cycle = report
                .violations()
                .iter()
                .find(|v| v.is_cycle())
                .expect("cycle violation");
            let message = cycle.to_string();
            assert!(message.contains("Circular reference detected"));
            assert!(message.contains("root"));
            assert!(message.contains("node_3A"));
        }

        #[test]
        fn cycle_is_reported_at_the_ancestor_even_when_a_descendant_sorts_first() {
            // "a" is walked before "root" in id order
            let graph = DecisionGraph::new()
                .with_node(
                    "root",
                    DecisionNode::question("Q")
                        .with_child("positive", "a")
                        .with_default("positive"),
                )
                .with_node(
                    "a",
                    DecisionNode::question("A")
                        .with_child("positive", "root")
                        .with_default("positive"),
                );

            let report = GraphValidator::check(&graph);

            assert!(report.violations().contains(&StructuralViolation::Cycle {
                node_id: "root".to_string(),
                path: vec!["root".to_string(), "a".to_string(), "root".to_string()],
            }));
        }

        #[test]
        fn self_loop_fails() {
            let graph = DecisionGraph::new().with_node(
                "root",
                DecisionNode::question("Q")
                    .with_child("neutral", "root")
                    .with_default("neutral"),
            );

            let report = GraphValidator::check(&graph);
            assert_eq!(
                report.violations(),
                &[StructuralViolation::Cycle {
                    node_id: "root".to_string(),
                    path: vec!["root".to_string(), "root".to_string()],
                }]
            );
        }

        #[test]
        fn illegal_type_fails() {
            let mut graph = valid_graph();
            graph.get_mut("node_2B").unwrap().node_type = "branch".to_string();

            let report = GraphValidator::check(&graph);
            assert_eq!(
                report.violations(),
                &[StructuralViolation::InvalidType {
                    node_id: "node_2B".to_string(),
                    node_type: "branch".to_string(),
                }]
            );
        }

        #[test]
        fn non_terminus_without_children_fails() {
            let mut graph = valid_graph();
            graph.insert("node_2B", DecisionNode::response("Fair enough."));

            let report = GraphValidator::check(&graph);
            assert_eq!(
                report.violations(),
                &[StructuralViolation::MissingChildren {
                    node_id: "node_2B".to_string()
                }]
            );
        }

        #[test]
        fn empty_children_map_fails() {
            let mut graph = valid_graph();
            graph.get_mut("node_2B").unwrap().children = Some(Default::default());

            let report = GraphValidator::check(&graph);
            assert!(matches!(
                report.violations(),
                [StructuralViolation::MissingChildren { .. }]
            ));
        }

        #[test]
        fn default_must_name_an_existing_edge() {
            let mut graph = valid_graph();
            graph.get_mut("node_2A").unwrap().default = Some("neutral".to_string());

            let report = GraphValidator::check(&graph);
            assert_eq!(
                report.violations(),
                &[StructuralViolation::InvalidDefault {
                    node_id: "node_2A".to_string(),
                    default: Some("neutral".to_string()),
                }]
            );
        }

        #[test]
        fn missing_default_fails() {
            let mut graph = valid_graph();
            graph.get_mut("node_3A").unwrap().default = None;

            let report = GraphValidator::check(&graph);
            assert!(matches!(
                report.violations(),
                [StructuralViolation::InvalidDefault { default: None, .. }]
            ));
        }

        #[test]
        fn every_problem_is_reported_in_one_pass() {
            let mut graph = valid_graph();
            graph.remove("root");
            graph.get_mut("node_2B").unwrap().node_type = "branch".to_string();
            graph.get_mut("node_3A").unwrap().default = None;

            let report = GraphValidator::check(&graph);
            assert_eq!(report.violations().len(), 3);
        }

        #[test]
        fn shared_missing_node_is_reported_once_per_parent() {
            let graph = DecisionGraph::new().with_node(
                "root",
                DecisionNode::question("Q")
                    .with_child("positive", "ghost")
                    .with_child("negative", "ghost")
                    .with_default("positive"),
            );

            let report = GraphValidator::check(&graph);
            assert_eq!(report.violations().len(), 1);
        }

        #[test]
        fn validate_logs_each_violation_and_failed_summary() {
            let mut graph = valid_graph();
            graph.remove("root");
            graph.get_mut("node_3A").unwrap().default = None;
            let sink = MemorySink::new();

            assert!(!GraphValidator::validate(&graph, &sink));

            let errors = sink.entries_at(DiagnosticLevel::Error);
            assert_eq!(errors.len(), 2);
            assert_eq!(
                sink.messages().last().map(String::as_str),
                Some("Decision tree validation: Failed")
            );
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        const LABELS: [&str; 3] = ["positive", "neutral", "negative"];

        fn node_id(index: usize) -> String {
            if index == 0 {
                ROOT_NODE_ID.to_string()
            } else {
                format!("n{}", index)
            }
        }

        /// Builds a layered graph: every non-terminus node has a chain edge to
        /// its successor plus extra edges that only point forward.
        fn forward_graph(raw_edges: &[Vec<usize>]) -> DecisionGraph {
            let last = raw_edges.len();
            let mut graph = DecisionGraph::new();
            for (index, extras) in raw_edges.iter().enumerate() {
                let mut node = DecisionNode::question(format!("Q{}", index))
                    .with_child(LABELS[0], node_id(index + 1))
                    .with_default(LABELS[0]);
                let span = last - index;
                for (slot, raw) in extras.iter().enumerate() {
                    let target = index + 1 + raw % span;
                    node = node.with_child(LABELS[1 + slot % 2], node_id(target));
                }
                graph.insert(node_id(index), node);
            }
            graph.insert(node_id(last), DecisionNode::terminus("done"));
            graph
        }

        fn raw_edges() -> impl Strategy<Value = Vec<Vec<usize>>> {
            prop::collection::vec(prop::collection::vec(0usize..64, 0..3), 1..10)
        }

        proptest! {
            #[test]
            fn forward_only_graphs_validate(edges in raw_edges()) {
                let graph = forward_graph(&edges);
                let report = GraphValidator::check(&graph);
                prop_assert!(report.is_valid(), "{:?}", report.violations());
            }

            #[test]
            fn any_back_edge_to_an_ancestor_fails(
                edges in raw_edges(),
                from in 0usize..64,
                to in 0usize..64,
            ) {
                let mut graph = forward_graph(&edges);
                let from = from % edges.len();
                let to = to % (from + 1);
                let source = graph.get(&node_id(from)).unwrap().clone();
                graph.insert(node_id(from), source.with_child("loop", node_id(to)));

                let report = GraphValidator::check(&graph);
                prop_assert!(!report.is_valid());
                let ancestor = node_id(to);
                prop_assert!(
                    report
                        .violations()
                        .iter()
                        .any(|v| v.is_cycle() && v.node_id() == Some(ancestor.as_str())),
                    "{:?}",
                    report.violations()
                );
            }

            #[test]
            fn graphs_without_root_always_fail(edges in raw_edges()) {
                let mut graph = forward_graph(&edges);
                graph.remove(ROOT_NODE_ID);
                prop_assert!(!GraphValidator::check(&graph).is_valid());
            }
        }
    }
}
