pub mod access_decisions;
pub mod enums;
pub mod gate_messages;
pub mod gate_options;
pub mod subscribers;
