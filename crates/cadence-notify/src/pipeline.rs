//! NotificationPipeline: build context → evaluate rules → deliver.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;

use cadence_context::{ContextBuilder, ContextInputs, RuleContext};
use cadence_core::config::CadenceConfig;
use cadence_core::models::Trigger;
use cadence_core::traits::NotificationStore;
use cadence_observability::{events, pipeline_span};
use cadence_rules::{EvaluationReport, RuleCatalog, RuleEngine};

use crate::sink::{DeliveryReport, NotificationSink};

/// Everything one trigger pass produced, for logging and inspection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineOutcome {
    pub user_id: String,
    pub trigger: Trigger,
    pub context: RuleContext,
    pub evaluation: EvaluationReport,
    pub delivery: DeliveryReport,
}

impl PipelineOutcome {
    pub fn persisted_count(&self) -> usize {
        self.delivery.persisted_count()
    }
}

#[derive(Clone)]
pub struct NotificationPipeline {
    builder: ContextBuilder,
    engine: RuleEngine,
    sink: NotificationSink,
}

impl NotificationPipeline {
    /// Wire all three stages against one store.
    pub fn new(config: &CadenceConfig, catalog: RuleCatalog, store: Arc<dyn NotificationStore>) -> Self {
        Self {
            builder: ContextBuilder::new(&config.cycle),
            engine: RuleEngine::new(catalog, Arc::clone(&store)),
            sink: NotificationSink::new(store, &config.notifications),
        }
    }

    pub fn from_parts(builder: ContextBuilder, engine: RuleEngine, sink: NotificationSink) -> Self {
        Self {
            builder,
            engine,
            sink,
        }
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    pub fn sink(&self) -> &NotificationSink {
        &self.sink
    }

    /// Run one trigger for one user. Failures degrade to "no notification".
    pub fn run(&self, trigger: Trigger, inputs: &ContextInputs<'_>) -> PipelineOutcome {
        let user_id = inputs.profile.user_id.clone();
        let span = pipeline_span!(user_id, trigger);
        let _guard = span.enter();

        let context = self.builder.build(inputs);
        let evaluation = self.engine.evaluate(trigger, &context);
        let delivery = self
            .sink
            .deliver(&user_id, evaluation.candidates, inputs.now);

        PipelineOutcome {
            user_id,
            trigger,
            context,
            evaluation: evaluation.report,
            delivery,
        }
    }

    /// Run the same trigger for many users in parallel. Passes are
    /// independent; output order matches `batch`.
    pub fn run_many(&self, trigger: Trigger, batch: &[ContextInputs<'_>]) -> Vec<PipelineOutcome> {
        let outcomes: Vec<PipelineOutcome> = batch
            .par_iter()
            .map(|inputs| self.run(trigger, inputs))
            .collect();

        let persisted = outcomes.iter().map(PipelineOutcome::persisted_count).sum();
        events::batch_completed(trigger.as_str(), outcomes.len(), persisted);
        outcomes
    }
}
