mod user_service_memory;

pub use user_service_memory::*;
