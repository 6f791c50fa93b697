//! Request and response shapes for the ideation endpoints.
//!
//! Every value here is request-scoped; nothing outlives a single HTTP call.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Years of experience as submitted by the client. Callers send either a
/// bare number or a string, so both forms deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Experience {
    Years(serde_json::Number),
    Text(String),
}

impl Experience {
    fn is_empty(&self) -> bool {
        match self {
            Experience::Years(_) => false,
            Experience::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Experience::Years(n) => write!(f, "{}", n),
            Experience::Text(s) => f.write_str(s),
        }
    }
}

/// Founder profile submitted to `POST /generate`. All four fields are
/// required; no defaults, no normalization.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub category: Option<String>,
    pub experience: Option<Experience>,
    pub mode: Option<String>,
    pub goals: Option<String>,
}

impl GenerateRequest {
    /// All four profile fields, or `None` when any is missing or empty.
    pub fn fields(&self) -> Option<(&str, &Experience, &str, &str)> {
        let category = self.category.as_deref().filter(|s| !s.trim().is_empty())?;
        let experience = self.experience.as_ref().filter(|e| !e.is_empty())?;
        let mode = self.mode.as_deref().filter(|s| !s.trim().is_empty())?;
        let goals = self.goals.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((category, experience, mode, goals))
    }
}

/// One generated problem statement. The service passes the upstream array
/// through without inspecting it; this shape is the contract callers rely on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemStatement {
    pub s_no: i64,
    pub business_title: String,
    pub detail: String,
}

/// Input to `POST /generate-detail`: one previously generated statement plus
/// the founder profile it was generated from. `user_data` is opaque and is
/// re-serialized verbatim into the prompt.
#[derive(Debug, Deserialize)]
pub struct DetailRequest {
    pub business_title: Option<String>,
    pub user_data: Option<serde_json::Value>,
}

impl DetailRequest {
    pub fn fields(&self) -> Option<(&str, &serde_json::Value)> {
        let title = self
            .business_title
            .as_deref()
            .filter(|s| !s.trim().is_empty())?;
        let user_data = self.user_data.as_ref()?;
        Some((title, user_data))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DetailResponse {
    pub detailed_analysis: String,
}
