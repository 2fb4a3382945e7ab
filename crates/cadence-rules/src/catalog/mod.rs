//! RuleCatalog: an immutable, shareable rule registry.
//!
//! The standard catalog is grouped by the trigger family that activates it:
//! - [`profile`]: F0 profile creation and edits
//! - [`daily_log`]: single-day observations on log save
//! - [`windowed`]: trailing 3/7/14-day aggregates
//! - [`periodic`]: once-daily scheduled pass
//! - [`learning`]: lesson completion and consultation forms

pub mod daily_log;
pub mod learning;
pub mod periodic;
pub mod profile;
pub mod windowed;

mod dates;

use std::collections::HashSet;
use std::sync::Arc;

use cadence_core::errors::CatalogError;
use cadence_core::models::Trigger;

use crate::rule::Rule;

#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Arc<[Rule]>,
}

impl RuleCatalog {
    /// Validate and freeze `rules`. Catalog order is the tie-break order for
    /// equal-priority candidates.
    pub fn new(rules: Vec<Rule>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            if rule.id.trim().is_empty() {
                return Err(CatalogError::EmptyRuleId);
            }
            if rule.triggers.is_empty() {
                return Err(CatalogError::EmptyTriggerSet {
                    rule_id: rule.id.clone(),
                });
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(CatalogError::DuplicateRuleId {
                    rule_id: rule.id.clone(),
                });
            }
        }
        Ok(Self {
            rules: rules.into(),
        })
    }

    /// The built-in rule set.
    pub fn standard() -> Self {
        Self {
            rules: standard_rules().into(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Rules registered for `trigger`, in catalog order.
    pub fn rules_for(&self, trigger: Trigger) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter().filter(move |r| r.applies_to(trigger))
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_rules() -> Vec<Rule> {
    let mut rules = Vec::new();
    rules.extend(profile::rules());
    rules.extend(daily_log::rules());
    rules.extend(windowed::rules());
    rules.extend(periodic::rules());
    rules.extend(learning::rules());
    rules
}

#[cfg(test)]
mod tests {
    use cadence_core::models::{NotificationKind, Priority};

    use super::*;
    use crate::rule::RuleMessage;

    fn noop(id: &str, triggers: &[Trigger]) -> Rule {
        Rule::new(
            id,
            triggers,
            NotificationKind::Tip,
            Priority::Low,
            0,
            |_| true,
            |_| RuleMessage::new("t", "m"),
        )
    }

    #[test]
    fn standard_catalog_passes_validation() {
        let rules = standard_rules();
        let n = rules.len();
        let catalog = RuleCatalog::new(rules).unwrap();
        assert_eq!(catalog.len(), n);
    }

    #[test]
    fn every_trigger_has_rules() {
        let catalog = RuleCatalog::standard();
        for trigger in [
            Trigger::F0Create,
            Trigger::F0Update,
            Trigger::DailyLogSave,
            Trigger::DailyCheck,
            Trigger::LessonCompleted,
            Trigger::FormSubmitted,
        ] {
            assert!(catalog.rules_for(trigger).next().is_some(), "{trigger}");
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = RuleCatalog::new(vec![
            noop("A", &[Trigger::DailyCheck]),
            noop("A", &[Trigger::F0Create]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateRuleId { rule_id } if rule_id == "A"));
    }

    #[test]
    fn rejects_empty_triggers_and_ids() {
        let err = RuleCatalog::new(vec![noop("A", &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTriggerSet { .. }));
        let err = RuleCatalog::new(vec![noop(" ", &[Trigger::DailyCheck])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyRuleId));
    }

    #[test]
    fn rules_for_keeps_catalog_order() {
        let catalog = RuleCatalog::new(vec![
            noop("B", &[Trigger::DailyCheck]),
            noop("X", &[Trigger::F0Create]),
            noop("A", &[Trigger::DailyCheck, Trigger::F0Create]),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog
            .rules_for(Trigger::DailyCheck)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert!(catalog.get("X").is_some());
        assert!(catalog.get("Y").is_none());
    }
}
