use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the current session state
    Status,

    /// Sign in (any password is accepted by the demo provider)
    Login { email: String, password: String },

    /// Create an account on the free plan
    Signup {
        name: String,
        email: String,
        password: String,
    },

    /// Sign out and forget the persisted session
    Logout,

    /// Ask the route guard whether a path may be opened
    Open {
        /// e.g. /dashboard/analysis
        path: String,
    },

    /// Ask the feature gate about one feature
    Feature {
        /// e.g. anomaly-detection
        name: String,
    },

    /// List every feature with its gate decision
    Features,
}
