/// Rule catalog construction errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate rule id: {rule_id}")]
    DuplicateRuleId { rule_id: String },

    #[error("rule {rule_id} has no triggers")]
    EmptyTriggerSet { rule_id: String },

    #[error("rule id must not be empty")]
    EmptyRuleId,
}
