use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// A capability the orchestration engine may invoke on an agent's behalf.
///
/// All bundled tools are stubs: they validate their arguments and answer
/// with fixed text, without touching any calendar or callback system.
#[async_trait]
pub trait AgentTool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    async fn execute(&self, params: Value) -> anyhow::Result<String>;
}

fn parse_params<T: DeserializeOwned>(tool: &str, params: Value) -> anyhow::Result<T> {
    serde_json::from_value(params).with_context(|| format!("invalid parameters for {tool}"))
}

pub struct CheckDoctorAvailability;

#[derive(Deserialize)]
struct AvailabilityParams {
    date: String,
    time: String,
    #[allow(dead_code)]
    doctor_id: Option<String>,
}

#[async_trait]
impl AgentTool for CheckDoctorAvailability {
    fn name(&self) -> &'static str {
        "check_doctor_availability"
    }

    fn description(&self) -> &'static str {
        "Check doctor availability for a specific date and time"
    }

    async fn execute(&self, params: Value) -> anyhow::Result<String> {
        let p: AvailabilityParams = parse_params(self.name(), params)?;
        Ok(format!(
            "Doctor availability checked for {} at {}. Status: Available",
            p.date, p.time
        ))
    }
}

pub struct BookAppointment;

#[derive(Deserialize)]
struct BookingParams {
    patient_name: String,
    doctor_id: String,
    date: String,
    time: String,
}

#[async_trait]
impl AgentTool for BookAppointment {
    fn name(&self) -> &'static str {
        "book_appointment"
    }

    fn description(&self) -> &'static str {
        "Book an appointment with a doctor"
    }

    async fn execute(&self, params: Value) -> anyhow::Result<String> {
        let p: BookingParams = parse_params(self.name(), params)?;
        Ok(format!(
            "Appointment booked for {} with doctor {} on {} at {}",
            p.patient_name, p.doctor_id, p.date, p.time
        ))
    }
}

pub struct GetServiceInfo;

#[derive(Deserialize)]
struct ServiceInfoParams {
    service_type: String,
}

#[async_trait]
impl AgentTool for GetServiceInfo {
    fn name(&self) -> &'static str {
        "get_service_info"
    }

    fn description(&self) -> &'static str {
        "Get information about medical services"
    }

    async fn execute(&self, params: Value) -> anyhow::Result<String> {
        let p: ServiceInfoParams = parse_params(self.name(), params)?;
        let info = match p.service_type.as_str() {
            "consultation" => "General consultation - 30 mins - $50",
            "dental" => "Dental checkup - 45 mins - $75",
            "lab_tests" => "Lab tests - 15 mins - $100",
            "follow_up" => "Follow-up visit - 20 mins - $30",
            _ => "Service not found",
        };
        Ok(info.to_string())
    }
}

pub struct ScheduleCallback;

#[derive(Deserialize)]
struct CallbackParams {
    patient_name: String,
    phone: String,
    callback_time: String,
}

#[async_trait]
impl AgentTool for ScheduleCallback {
    fn name(&self) -> &'static str {
        "schedule_callback"
    }

    fn description(&self) -> &'static str {
        "Schedule a callback for the patient"
    }

    async fn execute(&self, params: Value) -> anyhow::Result<String> {
        let p: CallbackParams = parse_params(self.name(), params)?;
        Ok(format!(
            "Callback scheduled for {} ({}) at {}",
            p.patient_name, p.phone, p.callback_time
        ))
    }
}
