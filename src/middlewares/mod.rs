pub mod inject_user_agent;
pub mod retry_transport;
