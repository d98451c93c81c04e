//! Traversal engine.
//!
//! Walks a validated decision graph: at each node it asks for an answer,
//! classifies it, records a learning example and follows the matching edge.
//! At a terminus it asks for a yes/no confirmation and labels the last
//! example of the run.

use std::sync::Arc;

use tracing::Instrument;

use super::report::{TraversalEnd, TraversalReport};
use crate::domain::classification::{AttributeExtractor, Classification, ResponseClassifier};
use crate::domain::foundation::{RunId, EXIT_NODE_ID, OUTCOME_PROMPT_ID, ROOT_NODE_ID};
use crate::domain::graph::{DecisionGraph, DecisionNode, GraphValidator};
use crate::domain::learning::{LearningDataset, LearningExample, Outcome};
use crate::ports::{DiagnosticSink, ResponseProvider, Trainer};

/// Action recorded when a node has neither a matching nor a default edge.
const FALLBACK_ACTION: &str = "neutral";

/// Drives traversals over decision graphs.
pub struct TraversalEngine {
    responses: Arc<dyn ResponseProvider>,
    sink: Arc<dyn DiagnosticSink>,
    trainer: Option<Arc<dyn Trainer>>,
    classifier: ResponseClassifier,
    extractor: AttributeExtractor,
}

impl TraversalEngine {
    pub fn new(responses: Arc<dyn ResponseProvider>, sink: Arc<dyn DiagnosticSink>) -> Self {
        let classifier = ResponseClassifier::new();
        Self {
            responses,
            sink,
            trainer: None,
            classifier,
            extractor: AttributeExtractor::new(classifier),
        }
    }

    /// Attaches a trainer that is offered the dataset after every step.
    pub fn with_trainer(mut self, trainer: Arc<dyn Trainer>) -> Self {
        self.trainer = Some(trainer);
        self
    }

    /// Runs a traversal from the root node.
    pub async fn run(&self, graph: &DecisionGraph, dataset: &mut LearningDataset) -> TraversalReport {
        self.run_from(ROOT_NODE_ID, graph, dataset).await
    }

    /// Runs a traversal from `start`.
    ///
    /// Validates the graph first; an invalid graph is rejected without asking
    /// for any response. Examples are appended to `dataset`.
    pub async fn run_from(
        &self,
        start: &str,
        graph: &DecisionGraph,
        dataset: &mut LearningDataset,
    ) -> TraversalReport {
        let run_id = RunId::new();
        let span = tracing::info_span!("traversal", run_id = %run_id, start);
        self.walk(run_id, start, graph, dataset).instrument(span).await
    }

    async fn walk(
        &self,
        run_id: RunId,
        start: &str,
        graph: &DecisionGraph,
        dataset: &mut LearningDataset,
    ) -> TraversalReport {
        if !GraphValidator::validate(graph, self.sink.as_ref()) {
            self.sink.error("Cannot traverse invalid tree");
            return TraversalReport::rejected(run_id);
        }

        let mut current = start.to_string();
        let mut path = Vec::new();
        let mut steps = 0;
        let mut outcome = None;

        let end = loop {
            let node = graph.get(&current);
            if current == EXIT_NODE_ID && !node.is_some_and(DecisionNode::is_terminus) {
                // The exit sentinel only continues into a terminus.
                self.sink.info("Reached exit without a terminus node");
                break TraversalEnd::Unresolved { node_id: current };
            }
            let Some(node) = node else {
                self.sink
                    .warn(&format!("Node '{}' not found, ending traversal", current));
                break TraversalEnd::Unresolved { node_id: current };
            };

            path.push(current.clone());
            self.present(node);

            if node.is_terminus() {
                outcome = self.confirm_outcome(dataset, steps).await;
                break TraversalEnd::Terminus { node_id: current };
            }

            let answer = self
                .responses
                .respond(&current)
                .await
                .filter(|text| !text.is_empty());
            let Some(text) = answer else {
                self.sink
                    .info(&format!("No response received, moving to {}", EXIT_NODE_ID));
                current = EXIT_NODE_ID.to_string();
                continue;
            };

            let scored = self.classifier.score(&text);
            let classification = scored.classification();
            self.sink.info(&format!(
                "Response: '{}' -> Score: {}, Classified as: {}",
                text,
                scored.value(),
                classification
            ));

            let attributes = self.extractor.extract_with(&text, classification);
            let edge = self.route(&current, node, classification);
            let action = edge.unwrap_or(FALLBACK_ACTION);

            dataset.push(LearningExample::new(text, attributes, action));
            steps += 1;
            tracing::debug!(node_id = %current, action, "example recorded");

            self.offer_training(dataset.len()).await;

            current = edge.unwrap_or(EXIT_NODE_ID).to_string();
        };

        let counts = dataset.outcome_counts();
        self.sink.info(&format!(
            "Collected learning data: {} examples ({} success, {} failure, {} pending)",
            dataset.len(),
            counts.success,
            counts.failure,
            counts.pending
        ));

        TraversalReport {
            run_id,
            end,
            path,
            steps,
            outcome,
        }
    }

    fn present(&self, node: &DecisionNode) {
        if !node.content.is_empty() {
            self.sink.info(&format!("Send/Say: {}", node.content));
        }
        if let Some(test) = &node.test {
            self.sink.info(&format!("Evaluation Guide: {}", test));
        }
    }

    /// Picks the edge for `classification`, falling back to the default edge.
    fn route<'n>(
        &self,
        node_id: &str,
        node: &'n DecisionNode,
        classification: Classification,
    ) -> Option<&'n str> {
        if let Some(target) = node.child(classification.label()) {
            return Some(target);
        }

        match node.default_child() {
            Some(target) => {
                self.sink.info(&format!(
                    "No '{}' edge on node '{}', using default edge to '{}'",
                    classification, node_id, target
                ));
                Some(target)
            }
            None => {
                self.sink.warn(&format!(
                    "No '{}' or default edge on node '{}'",
                    classification, node_id
                ));
                None
            }
        }
    }

    /// Asks for the end-of-run confirmation and labels this run's last example.
    async fn confirm_outcome(&self, dataset: &mut LearningDataset, steps: usize) -> Option<Outcome> {
        self.sink.info("End of questionnaire.");
        self.sink.info("Was the overall outcome successful? (yes/no): ");

        let Some(answer) = self.responses.respond(OUTCOME_PROMPT_ID).await else {
            self.sink
                .warn("No outcome confirmation received, last example left unlabeled");
            return None;
        };

        if steps == 0 {
            self.sink.info("No learning example recorded in this run to label");
            return None;
        }

        let outcome = Outcome::from_confirmation(&answer);
        match dataset.record_outcome(outcome) {
            Ok(()) => Some(outcome),
            Err(err) => {
                self.sink
                    .error(&format!("Could not record outcome '{}': {}", outcome, err));
                None
            }
        }
    }

    async fn offer_training(&self, dataset_size: usize) {
        let Some(trainer) = &self.trainer else {
            return;
        };
        if let Some(artifact) = trainer.train(dataset_size).await {
            tracing::debug!(model = %artifact.model, examples = artifact.examples_seen, "trainer produced artifact");
            self.sink.info("Learned suggestion: Using default action for now.");
        }
    }
}
