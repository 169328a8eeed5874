use serde::{Deserialize, Serialize};

use super::{AgentRole, Specialty};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Consultation,
    Appointment,
    ServiceInfo,
    FollowUp,
    Billing,
    Other,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Consultation => "consultation",
            IssueType::Appointment => "appointment",
            IssueType::ServiceInfo => "service_info",
            IssueType::FollowUp => "follow_up",
            IssueType::Billing => "billing",
            IssueType::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "consultation" => Some(IssueType::Consultation),
            "appointment" => Some(IssueType::Appointment),
            "service_info" => Some(IssueType::ServiceInfo),
            "follow_up" => Some(IssueType::FollowUp),
            "billing" => Some(IssueType::Billing),
            "other" => Some(IssueType::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallRequest {
    pub patient_name: String,
    pub phone_number: String,
    pub issue_type: IssueType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<String>,
    #[serde(default)]
    pub preferred_time: Option<String>,
}

impl CallRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.patient_name.is_empty() {
            return Err("patient_name must not be empty".to_string());
        }
        if !looks_like_phone(&self.phone_number) {
            return Err(format!(
                "phone_number {:?} is not a phone number",
                self.phone_number
            ));
        }
        Ok(())
    }
}

/// Loose shape check: optional leading `+`, then digits, dashes, spaces
/// and parentheses, with at least one digit.
fn looks_like_phone(s: &str) -> bool {
    let s = s.trim();
    let rest = s.strip_prefix('+').unwrap_or(s);
    rest.chars().any(|c| c.is_ascii_digit())
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c == '(' || c == ')' || c.is_whitespace())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallResponse {
    pub call_id: String,
    pub status: String,
    pub assistant_response: String,
    pub next_steps: Vec<String>,
    pub specialty: Specialty,
    pub routed_to: AgentRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_context: Option<String>,
}
