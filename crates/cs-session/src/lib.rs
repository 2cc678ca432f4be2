pub mod auth_session_manager;
pub mod error;
pub mod feature_gate;
pub mod file_store;
pub mod identity_provider;
pub mod key_value_store;
pub mod memory_store;
pub mod mock_identity_provider;
pub mod route_guard;
pub mod session_store;

pub use auth_session_manager::AuthSessionManager;
pub use error::{Result, SessionError};
pub use feature_gate::{FeatureGate, GateDecision};
pub use file_store::FileStore;
pub use identity_provider::IdentityProvider;
pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryStore;
pub use mock_identity_provider::MockIdentityProvider;
pub use route_guard::{GuardDecision, RouteGuard};
pub use session_store::SessionStore;

#[cfg(test)]
mod tests;
