//! Infrastructure concerns shared by the library and the binary

pub mod log_messages;
