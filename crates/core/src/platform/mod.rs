//! Platform module - detail gateway backed by the platform management API.

mod platform_gateway;


// Re-export the public interface
pub use platform_gateway::PlatformGateway;
