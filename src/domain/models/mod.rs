pub mod invocation;
pub mod status;
pub mod status_record;

pub use invocation::{InvocationBody, InvocationResult};
pub use status::ServiceStatus;
pub use status_record::StatusRecord;
