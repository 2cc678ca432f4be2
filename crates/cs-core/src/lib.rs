pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::auth_state::AuthState;
pub use models::feature::Feature;
pub use models::plan_tier::PlanTier;
pub use models::route::Route;
pub use models::session::Session;

#[cfg(test)]
mod tests;
