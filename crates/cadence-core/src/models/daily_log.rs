use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SCALE_SCORE, MIN_SCALE_SCORE};
use crate::errors::{CadenceError, CadenceResult};

/// Cervical mucus observation, from least to most fertile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CervicalMucus {
    Dry,
    Sticky,
    Creamy,
    Watery,
    EggWhite,
}

impl CervicalMucus {
    /// Watery and egg-white mucus indicate the fertile window.
    pub fn is_fertile(self) -> bool {
        matches!(self, CervicalMucus::Watery | CervicalMucus::EggWhite)
    }
}

/// Ovulation (LH) test strip result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LhTestResult {
    Negative,
    Positive,
    Inconclusive,
}

/// One user's observations for one calendar date. Upsert key is `(user_id, date)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub user_id: String,
    pub date: NaiveDate,

    // Biomarkers
    pub basal_temperature: Option<f64>,
    pub cervical_mucus: Option<CervicalMucus>,
    pub lh_test: Option<LhTestResult>,

    // Lifestyle
    pub sleep_hours: Option<f64>,
    /// 1 (poor) ..= 5 (excellent).
    pub sleep_quality: Option<u8>,
    /// 1 (calm) ..= 5 (overwhelmed).
    pub stress_level: Option<u8>,
    pub activity_minutes: Option<u32>,
    pub sun_minutes: Option<u32>,
    pub water_glasses: Option<u32>,
    pub veggie_servings: Option<u32>,
    #[serde(default)]
    pub alcohol: bool,

    #[serde(default)]
    pub symptoms: Vec<String>,
}

impl DailyLog {
    /// An empty log for `date`; every observation unset.
    pub fn new(user_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            user_id: user_id.into(),
            date,
            basal_temperature: None,
            cervical_mucus: None,
            lh_test: None,
            sleep_hours: None,
            sleep_quality: None,
            stress_level: None,
            activity_minutes: None,
            sun_minutes: None,
            water_glasses: None,
            veggie_servings: None,
            alcohol: false,
            symptoms: Vec::new(),
        }
    }

    /// Check value ranges. Logs failing this never reach a rule context.
    pub fn validate(&self) -> CadenceResult<()> {
        if let Some(hours) = self.sleep_hours {
            if !(0.0..=24.0).contains(&hours) {
                return Err(self.invalid(format!("sleep_hours {hours} outside 0..=24")));
            }
        }
        for (name, score) in [
            ("sleep_quality", self.sleep_quality),
            ("stress_level", self.stress_level),
        ] {
            if let Some(s) = score {
                if !(MIN_SCALE_SCORE..=MAX_SCALE_SCORE).contains(&s) {
                    return Err(self.invalid(format!(
                        "{name} {s} outside {MIN_SCALE_SCORE}..={MAX_SCALE_SCORE}"
                    )));
                }
            }
        }
        if let Some(t) = self.basal_temperature {
            if !(34.0..=43.0).contains(&t) {
                return Err(self.invalid(format!("basal_temperature {t} outside 34..=43")));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> CadenceError {
        CadenceError::InvalidDailyLog {
            user_id: self.user_id.clone(),
            date: self.date.to_string(),
            reason,
        }
    }
}
