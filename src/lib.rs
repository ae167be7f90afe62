pub mod agent;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod memory;
pub mod model;
pub mod progress;
pub mod protocol;
pub mod tools;
pub mod validation;

pub use agent::{BrowserAgent, SessionHandle, TaskHandle};
pub use error::{AgentError, AgentResult};
