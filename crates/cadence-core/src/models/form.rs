use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Consultation form stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormKind {
    /// Baseline fertility profile.
    F0,
    /// Hormonal and gynecological history.
    F1,
    /// Lifestyle questionnaire.
    F2,
    /// Lab exam results.
    F3,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [FormKind::F0, FormKind::F1, FormKind::F2, FormKind::F3];
}

/// A submitted consultation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationForm {
    pub user_id: String,
    pub kind: FormKind,
    pub submitted_at: DateTime<Utc>,
}
