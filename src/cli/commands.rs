//! Subcommand execution

use super::{Cli, Commands, CreateUserArgs, PasswordCommands, RoleCommands, UserCommands};
use crate::auth::ResetPasswordRequest;
use crate::config::Config;
use crate::core::models::UserProfile;
use crate::server::{AppState, run_server};
use crate::storage::open_store;
use crate::utils::logging::init_logging;
use anyhow::{Context, Result};
use tracing::info;

/// Load configuration, initialize logging and run the selected subcommand
pub async fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(&cli).await?;
    if let Some(level) = cli.log_level {
        config.service.logging.level = level;
    }
    init_logging(config.logging()).context("Failed to initialize logging")?;

    match cli.command {
        Commands::Serve => run_server(config).await.context("Server failed"),
        Commands::Migrate => migrate(config).await,
        Commands::Role(command) => role(connect(config).await?, command).await,
        Commands::User(command) => user(connect(config).await?, command).await,
        Commands::Password(command) => password(connect(config).await?, command).await,
    }
}

async fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Config::from_env().context("Failed to load configuration from the environment"),
    }
}

/// Open the store (migrating SQL backends) and wire the services
async fn connect(config: Config) -> Result<AppState> {
    let store = open_store(config.storage())
        .await
        .context("Failed to open the identity store")?;
    Ok(AppState::new(config, store))
}

async fn migrate(config: Config) -> Result<()> {
    let state = connect(config).await?;
    let created = state.bootstrap().await?;

    println!("Schema is up to date ({})", state.store.backend_name());
    for id in created {
        println!("Created bootstrap role {}", id);
    }
    Ok(())
}

async fn role(state: AppState, command: RoleCommands) -> Result<()> {
    match command {
        RoleCommands::Create { name } => {
            let id = state.rbac.create_role(&name).await?;
            println!("{}", id);
        }
        RoleCommands::Rename { id, name } => {
            state.rbac.rename_role(&id, &name).await?;
            println!("Role {} renamed to {}", id, name);
        }
        RoleCommands::Delete { id } => {
            state.rbac.delete_role(&id).await?;
            println!("Role {} deleted", id);
        }
        RoleCommands::List => {
            for entry in state.rbac.list_roles().await? {
                println!(
                    "{}\t{}\t{} member(s)",
                    entry.role.id, entry.role.name, entry.member_count
                );
            }
        }
    }
    Ok(())
}

async fn user(state: AppState, command: UserCommands) -> Result<()> {
    match command {
        UserCommands::Create(args) => create_user(&state, args).await?,
        UserCommands::List => {
            for entry in state.rbac.list_users_with_roles().await? {
                println!(
                    "{}\t{}\t{}\t{}",
                    entry.user.id,
                    entry.user.email,
                    entry.user.display_name(),
                    entry.roles.join(",")
                );
            }
        }
        UserCommands::Delete { id } => {
            state.rbac.delete_user(&id).await?;
            println!("User {} deleted", id);
        }
        UserCommands::Roles { id } => {
            for role in state.rbac.assignable_roles_for_user(&id).await? {
                let mark = if role.selected { "x" } else { " " };
                println!("[{}] {}\t{}", mark, role.role_name, role.role_id);
            }
        }
        UserCommands::Assign { id, roles } => {
            let applied = state.rbac.replace_user_roles(&id, &roles).await?;
            println!("User {} now holds: {}", id, applied.join(", "));
        }
    }
    Ok(())
}

async fn create_user(state: &AppState, args: CreateUserArgs) -> Result<()> {
    let profile = UserProfile {
        email: args.email,
        first_name: args.first_name,
        last_name: args.last_name,
    }
    .normalized();

    let id = state
        .rbac
        .create_user(profile, &args.password, args.role.as_deref())
        .await?;
    info!("User {} created from the command line", id);
    println!("{}", id);
    Ok(())
}

async fn password(state: AppState, command: PasswordCommands) -> Result<()> {
    match command {
        PasswordCommands::Forgot { email } => {
            match state.accounts.forgot_password(&email).await? {
                Some(link) => println!("{}", link),
                None => println!("No account is registered for {}", email),
            }
        }
        PasswordCommands::Reset {
            email,
            token,
            password,
        } => {
            let request = ResetPasswordRequest {
                email,
                token,
                confirm_password: password.clone(),
                password,
            };
            state.accounts.reset_password(&request).await?;
            println!("Password has been reset");
        }
    }
    Ok(())
}
