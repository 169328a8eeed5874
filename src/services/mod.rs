pub mod agents;
pub mod call;
pub mod classifier;
pub mod responder;
pub mod session;
