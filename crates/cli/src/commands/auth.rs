// Authentication commands

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;
use siteline_client::{ApiClient, SessionFile};

use super::yes_no;
use crate::output::{print_field, OutputFormat};
use crate::session;

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "SITELINE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,
}

pub async fn run(
    command: AuthCommand,
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
    session_file: &Path,
) -> Result<()> {
    match command {
        AuthCommand::Login { email, password } => {
            let auth = client.login(&email, &password).await?;
            session::save(session_file, &auth)?;
            tracing::info!(path = %session_file.display(), "Session stored");

            if !output.is_text() {
                return output.print_value(&auth.user);
            }
            if !quiet {
                println!("Logged in as {} ({})", auth.user.name, auth.user.email);
                if !auth.user.is_admin() {
                    println!("Note: this account has no admin privileges");
                }
            }
            Ok(())
        }
        AuthCommand::Logout => {
            let removed = session::clear(session_file)?;
            if !output.is_text() {
                return output.print_value(&serde_json::json!({ "logged_out": removed }));
            }
            if !quiet {
                if removed {
                    println!("Logged out");
                } else {
                    println!("Not logged in");
                }
            }
            Ok(())
        }
        AuthCommand::Whoami => {
            let stored = SessionFile::new(session_file).load();
            let Some(user) = stored.and_then(|s| s.user) else {
                anyhow::bail!("Not logged in. Run `siteline auth login` first.");
            };

            if !output.is_text() {
                return output.print_value(&user);
            }
            print_field("ID", &user.id);
            print_field("Name", &user.name);
            print_field("Email", &user.email);
            print_field("Role", &user.role);
            print_field("Admin", yes_no(user.is_admin()));
            Ok(())
        }
    }
}
