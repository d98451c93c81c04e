//! RunQuestionnaireHandler - Command handler for a single questionnaire run.
//!
//! Loads the graph, optionally resumes a stored dataset, walks the graph and
//! persists the examples it collected. The diagnostic sink is closed once the
//! command finishes, whatever the result.

use std::sync::Arc;

use crate::domain::foundation::ROOT_NODE_ID;
use crate::domain::learning::LearningDataset;
use crate::domain::traversal::{TraversalEngine, TraversalReport};
use crate::ports::{
    DatasetStore, DatasetStoreError, DiagnosticSink, GraphSource, GraphSourceError,
    ResponseProvider, Trainer,
};

/// Errors that end a questionnaire command.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    GraphSource(#[from] GraphSourceError),

    #[error(transparent)]
    DatasetStore(#[from] DatasetStoreError),

    #[error("Decision tree failed validation, traversal refused")]
    InvalidGraph,
}

/// Command to run one questionnaire.
#[derive(Debug, Clone)]
pub struct RunQuestionnaireCommand {
    /// Node id the traversal starts from.
    pub start_node: String,
    /// Continue the dataset held by the store instead of starting empty.
    pub resume_dataset: bool,
}

impl Default for RunQuestionnaireCommand {
    fn default() -> Self {
        Self {
            start_node: ROOT_NODE_ID.to_string(),
            resume_dataset: false,
        }
    }
}

/// Result of a completed questionnaire.
#[derive(Debug, Clone)]
pub struct RunQuestionnaireResult {
    pub report: TraversalReport,
    pub dataset: LearningDataset,
}

/// Handler for running questionnaires.
pub struct RunQuestionnaireHandler {
    graph_source: Arc<dyn GraphSource>,
    responses: Arc<dyn ResponseProvider>,
    sink: Arc<dyn DiagnosticSink>,
    trainer: Option<Arc<dyn Trainer>>,
    store: Option<Arc<dyn DatasetStore>>,
}

impl RunQuestionnaireHandler {
    pub fn new(
        graph_source: Arc<dyn GraphSource>,
        responses: Arc<dyn ResponseProvider>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            graph_source,
            responses,
            sink,
            trainer: None,
            store: None,
        }
    }

    pub fn with_trainer(mut self, trainer: Arc<dyn Trainer>) -> Self {
        self.trainer = Some(trainer);
        self
    }

    /// Persist the dataset after each run.
    pub fn with_store(mut self, store: Arc<dyn DatasetStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub async fn handle(
        &self,
        cmd: RunQuestionnaireCommand,
    ) -> Result<RunQuestionnaireResult, RunError> {
        let result = self.execute(cmd).await;
        if let Err(err) = &result {
            self.sink.error(&err.to_string());
        }
        self.sink.close();
        result
    }

    async fn execute(
        &self,
        cmd: RunQuestionnaireCommand,
    ) -> Result<RunQuestionnaireResult, RunError> {
        // 1. Load graph
        let graph = self.graph_source.load().await?;

        // 2. Start or resume dataset
        let mut dataset = match (&self.store, cmd.resume_dataset) {
            (Some(store), true) => store.load().await?,
            _ => LearningDataset::new(),
        };

        // 3. Walk
        let mut engine = TraversalEngine::new(self.responses.clone(), self.sink.clone());
        if let Some(trainer) = &self.trainer {
            engine = engine.with_trainer(trainer.clone());
        }
        let report = engine.run_from(&cmd.start_node, &graph, &mut dataset).await;
        if report.was_rejected() {
            return Err(RunError::InvalidGraph);
        }

        // 4. Persist
        if let Some(store) = &self.store {
            store.save(&dataset).await?;
        }

        Ok(RunQuestionnaireResult { report, dataset })
    }
}
