use crate::{Commands, Result as CliResult};

use cs_config::Config;
use cs_core::{Feature, Route};
use cs_session::{AuthSessionManager, FileStore, MockIdentityProvider, SessionStore};

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use log::info;
use serde_json::{Value, json};

/// One host process: a started session manager plus the consumers that read it.
pub struct App {
    manager: AuthSessionManager,
}

impl App {
    /// Builds the file-backed session core described by `config`.
    pub fn from_config(config: &Config, session_dir: Option<PathBuf>) -> CliResult<Self> {
        let dir = match session_dir {
            Some(dir) => dir,
            None => config.session_dir()?,
        };
        info!("Session slots in {}", dir.display());

        let store = SessionStore::new(Arc::new(FileStore::new(dir)), config.session.key.clone());
        let provider = Arc::new(MockIdentityProvider::from_config(&config.auth));

        Ok(Self::new(AuthSessionManager::start(store, provider)))
    }

    pub fn new(manager: AuthSessionManager) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &AuthSessionManager {
        &self.manager
    }

    pub async fn run(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Status => Ok(self.status()),
            Commands::Login { email, password } => {
                self.manager.login(&email, &password).await?;
                Ok(self.status())
            }
            Commands::Signup {
                name,
                email,
                password,
            } => {
                self.manager.signup(&name, &email, &password).await?;
                Ok(self.status())
            }
            Commands::Logout => {
                self.manager.logout();
                Ok(self.status())
            }
            Commands::Open { path } => {
                let route = Route::from_str(&path)?;
                let decision = self.manager.route_guard().resolve(route).await;
                Ok(json!({
                    "route": route.path(),
                    "protected": route.is_protected(),
                    "guard": decision,
                }))
            }
            Commands::Feature { name } => {
                let feature = Feature::from_str(&name)?;
                Ok(self.feature_entry(feature))
            }
            Commands::Features => {
                let entries: Vec<Value> = Feature::ALL
                    .into_iter()
                    .map(|feature| self.feature_entry(feature))
                    .collect();
                Ok(json!({
                    "pro_badge": self.manager.feature_gate().show_pro_badge(),
                    "features": entries,
                }))
            }
        }
    }

    fn status(&self) -> Value {
        let state = self.manager.state();
        let plan = state.session().map(|session| {
            json!({
                "tier": session.plan,
                "label": session.plan.label(),
                "summary": session.plan.summary(),
            })
        });

        json!({
            "state": state.name(),
            "session": state.session(),
            "plan": plan,
            "premium": self.manager.is_premium_plan(),
        })
    }

    fn feature_entry(&self, feature: Feature) -> Value {
        json!({
            "feature": feature.slug(),
            "title": feature.title(),
            "description": feature.description(),
            "premium_only": feature.requires_premium(),
            "gate": self.manager.feature_gate().evaluate(feature),
        })
    }
}
