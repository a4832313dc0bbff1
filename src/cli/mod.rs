//! Command-line interface
//!
//! `serve` runs the HTTP service; the other subcommands run one administration
//! operation against the configured store and exit.

mod commands;

pub use commands::run;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// identity-admin - user and role administration
#[derive(Parser, Debug)]
#[command(name = "identity-admin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a YAML configuration file; without it the configuration is read
    /// from `IDENTITY_ADMIN_*` environment variables
    #[arg(short, long, global = true, env = "IDENTITY_ADMIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured log filter (e.g. `debug`, `identity_admin=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve,

    /// Create or upgrade the database schema and bootstrap roles
    Migrate,

    /// Role administration
    #[command(subcommand)]
    Role(RoleCommands),

    /// User administration
    #[command(subcommand)]
    User(UserCommands),

    /// Password reset flow
    #[command(subcommand)]
    Password(PasswordCommands),
}

#[derive(Subcommand, Debug)]
pub enum RoleCommands {
    /// Create a role
    Create {
        /// Role name
        name: String,
    },

    /// Rename a role
    Rename {
        /// Role id
        id: String,
        /// New role name
        name: String,
    },

    /// Delete a role nobody holds
    Delete {
        /// Role id
        id: String,
    },

    /// List roles with member counts
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Create a user
    Create(CreateUserArgs),

    /// List users with their roles
    #[command(alias = "ls")]
    List,

    /// Delete a user
    Delete {
        /// User id
        id: String,
    },

    /// Show every role and whether the user holds it
    Roles {
        /// User id
        id: String,
    },

    /// Make the user's roles exactly the given set
    Assign {
        /// User id
        id: String,
        /// Role names; none removes every role
        roles: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct CreateUserArgs {
    /// Email address
    #[arg(long)]
    pub email: String,

    /// Initial password
    #[arg(long, env = "IDENTITY_ADMIN_USER_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// First name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Role to hold from the start
    #[arg(long)]
    pub role: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum PasswordCommands {
    /// Issue a reset token and print the reset link
    Forgot {
        /// Account email
        email: String,
    },

    /// Set a new password using a reset token
    Reset {
        /// Account email
        #[arg(long)]
        email: String,
        /// Token from the reset link
        #[arg(long)]
        token: String,
        /// New password
        #[arg(long, env = "IDENTITY_ADMIN_NEW_PASSWORD", hide_env_values = true)]
        password: String,
    },
}
