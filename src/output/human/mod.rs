pub mod header;
pub mod progress;
pub mod refusal;
pub mod report;
