use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    ConsultationAgent,
    AppointmentAgent,
    ServiceInfoAgent,
}

impl AgentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::ConsultationAgent => "consultation_agent",
            AgentRole::AppointmentAgent => "appointment_agent",
            AgentRole::ServiceInfoAgent => "service_info_agent",
        }
    }
}

/// Role description handed to the orchestration engine.
#[derive(Debug, Clone, Serialize)]
pub struct AgentProfile {
    pub id: AgentRole,
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
    pub tools: Vec<ToolSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSummary {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentTask {
    pub task_id: String,
    pub task_type: String,
    pub description: String,
    pub expected_output: &'static str,
    pub created_at: NaiveDateTime,
}

/// A single-agent crew: who handles the call and what they are asked to do.
#[derive(Debug, Clone, Serialize)]
pub struct CrewPlan {
    pub agent: AgentProfile,
    pub task: AgentTask,
}
