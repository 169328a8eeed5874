pub mod tools;

use chrono::Utc;

use crate::models::{
    AgentProfile, AgentRole, AgentTask, CallRequest, CrewPlan, IssueType, ToolSummary,
};
use tools::{AgentTool, BookAppointment, CheckDoctorAvailability, GetServiceInfo, ScheduleCallback};

pub const ALL_ROLES: [AgentRole; 3] = [
    AgentRole::ConsultationAgent,
    AgentRole::AppointmentAgent,
    AgentRole::ServiceInfoAgent,
];

pub fn role_for(issue_type: IssueType) -> AgentRole {
    match issue_type {
        IssueType::Consultation | IssueType::FollowUp | IssueType::Other => {
            AgentRole::ConsultationAgent
        }
        IssueType::Appointment => AgentRole::AppointmentAgent,
        IssueType::ServiceInfo | IssueType::Billing => AgentRole::ServiceInfoAgent,
    }
}

/// Routes a raw issue label; anything unrecognised goes to consultation.
pub fn route(issue_type: &str) -> AgentRole {
    IssueType::parse(issue_type)
        .map(role_for)
        .unwrap_or(AgentRole::ConsultationAgent)
}

pub fn toolset(role: AgentRole) -> Vec<Box<dyn AgentTool>> {
    match role {
        AgentRole::ConsultationAgent => {
            vec![Box::new(CheckDoctorAvailability), Box::new(ScheduleCallback)]
        }
        AgentRole::AppointmentAgent => {
            vec![Box::new(CheckDoctorAvailability), Box::new(BookAppointment)]
        }
        AgentRole::ServiceInfoAgent => vec![Box::new(GetServiceInfo)],
    }
}

pub fn profile(role: AgentRole) -> AgentProfile {
    let (title, goal, backstory) = match role {
        AgentRole::ConsultationAgent => (
            "Medical Consultation Coordinator",
            "Guide patients through medical consultations and help schedule appropriate doctor appointments",
            "You are an experienced medical consultation coordinator with deep knowledge of patient care \
             processes and medical services. You listen carefully to patient symptoms and concerns, ask \
             clarifying questions, and recommend appropriate medical services and doctor specialties.",
        ),
        AgentRole::AppointmentAgent => (
            "Appointment Booking Specialist",
            "Efficiently book and manage patient appointments with doctors and medical services",
            "You are a professional appointment scheduler with expertise in calendar management and \
             patient scheduling. You confirm patient availability, check doctor schedules, and book \
             appointments with attention to detail. You always provide confirmation numbers and send reminders.",
        ),
        AgentRole::ServiceInfoAgent => (
            "Medical Services Information Specialist",
            "Provide comprehensive, accurate information about available medical services, procedures, and costs",
            "You are knowledgeable about all medical services offered, procedures, duration, costs, and \
             availability. You explain services clearly to patients, answer questions about benefits and \
             contraindications, and help patients choose the right services for their needs.",
        ),
    };

    AgentProfile {
        id: role,
        role: title,
        goal,
        backstory,
        tools: toolset(role)
            .iter()
            .map(|t| ToolSummary {
                name: t.name(),
                description: t.description(),
            })
            .collect(),
    }
}

/// Builds the single-task crew for a call. Execution belongs to the
/// orchestration engine; this only decides who does what.
pub fn plan(request: &CallRequest) -> CrewPlan {
    let role = role_for(request.issue_type);
    let name = match request.patient_name.trim() {
        "" => "Unknown",
        trimmed => trimmed,
    };

    let (description, expected_output) = match request.issue_type {
        IssueType::Consultation => (
            format!("Handle consultation request for patient: {name}"),
            "Consultation guidance and recommended next steps",
        ),
        IssueType::Appointment => (
            format!(
                "Book appointment for patient: {name} on {}",
                request.preferred_date.as_deref().unwrap_or("available date")
            ),
            "Appointment confirmation with details",
        ),
        IssueType::ServiceInfo => (
            format!(
                "Provide service information for patient inquiry: {}",
                request.description.as_deref().unwrap_or("general inquiry")
            ),
            "Detailed service information and recommendations",
        ),
        _ => (
            format!("Handle general inquiry for patient: {name}"),
            "Guidance and recommended actions",
        ),
    };

    CrewPlan {
        agent: profile(role),
        task: AgentTask {
            task_id: uuid::Uuid::new_v4().to_string(),
            task_type: request.issue_type.as_str().to_string(),
            description,
            expected_output,
            created_at: Utc::now().naive_utc(),
        },
    }
}
