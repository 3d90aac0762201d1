pub mod dependency_injection;
pub mod fallback;
pub mod server;
