pub mod codec;
pub mod scheduler;
