pub mod agent;
pub mod call;
pub mod service;
pub mod session;
pub mod specialty;

pub use agent::{AgentProfile, AgentRole, AgentTask, CrewPlan, ToolSummary};
pub use call::{CallRequest, CallResponse, IssueType};
pub use service::{Service, SERVICE_CATALOG};
pub use session::{Session, SessionHistory, Turn};
pub use specialty::Specialty;
