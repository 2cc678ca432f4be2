pub mod auth_state;
pub mod feature;
pub mod plan_tier;
pub mod route;
pub mod session;
