// Models module

pub mod contact;
pub mod diagnostic;
pub mod school;

// Re-export commonly used types
pub use contact::{ContactAck, ContactRequest, ReceivedContact};
pub use diagnostic::DiagnosticReport;
pub use school::SchoolInfo;
