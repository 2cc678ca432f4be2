mod auth_state;
mod feature;
mod plan_tier;
mod route;
mod session;
