use crate::{Cli, Commands};

use std::path::PathBuf;

use clap::Parser;

#[test]
fn given_login_args_when_parse_then_login_command() {
    let cli = Cli::try_parse_from(["chartsight", "login", "alice@x.com", "pw"]).unwrap();

    assert_eq!(
        cli.command,
        Commands::Login {
            email: "alice@x.com".into(),
            password: "pw".into(),
        }
    );
    assert!(!cli.pretty);
}

#[test]
fn given_global_flags_after_subcommand_when_parse_then_applied() {
    let cli = Cli::try_parse_from([
        "chartsight",
        "open",
        "/dashboard",
        "--pretty",
        "--session-dir",
        "/tmp/cs",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Commands::Open {
            path: "/dashboard".into()
        }
    );
    assert!(cli.pretty);
    assert_eq!(cli.session_dir, Some(PathBuf::from("/tmp/cs")));
}

#[test]
fn given_signup_without_password_when_parse_then_error() {
    assert!(Cli::try_parse_from(["chartsight", "signup", "Bob", "bob@x.com"]).is_err());
}
