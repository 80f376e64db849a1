use anyhow::{anyhow, bail, Context};
use api::api::start_server;
use clap::{Parser, Subcommand};

use crate::config::{API_URL, DEFAULT_LOG_FILTER};
use crate::form::{FormSubmitter, HttpTransport};
use crate::utils::{base_url, is_server_running};

mod api;
mod config;
mod errors;
mod form;
mod models;
mod todo_commands;
mod utils;

#[derive(Debug, Subcommand)]
enum Commands {
    #[clap(alias = "c")]
    Create,
    #[clap(alias = "u")]
    Update {
        id: String,
    },
    #[clap(alias = "ls")]
    List,
    Toggle {
        id: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = "Manage todos through the todo form backend")]
struct TodoArgs {
    #[clap(short = 's', long = "start-server")]
    start_server: bool,

    /// Backend address, overrides ~/todo/config.json and API_URL
    #[clap(long = "api-url")]
    api_url: Option<String>,

    #[clap(subcommand)]
    command: Option<Commands>,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .try_init()
        .ok();

    let args = TodoArgs::parse();

    if args.start_server {
        if is_server_running(API_URL.as_str()) {
            bail!("Server already running on {}", API_URL.as_str());
        }

        println!("Starting Server on {}", API_URL.as_str());
        start_server().context("Server stopped with an error")?;
    }

    let command = match args.command {
        Some(command) => command,
        None => return Ok(()),
    };

    let transport = match &args.api_url {
        Some(api_url) => HttpTransport::new(&base_url(api_url)),
        None => HttpTransport::from_config().context("Failed to load todo config")?,
    };
    log::debug!("Using backend at {}", transport.base_url());

    let res: Result<(), Box<dyn std::error::Error>> = match command {
        Commands::Create => todo_commands::create_new_todo(&FormSubmitter::new(transport)),
        Commands::Update { id } => todo_commands::update_todo(&FormSubmitter::new(transport), &id),
        Commands::List => todo_commands::list_todos(&transport).map_err(Into::into),
        Commands::Toggle { id } => todo_commands::toggle_todo(&transport, &id).map_err(Into::into),
        Commands::Delete { id } => todo_commands::delete_todo(&transport, &id).map_err(Into::into),
    };

    command_result(res)
}

/// Failed commands exit non-zero with the error message.
/// The prompt errors are not Send + Sync, so anyhow gets their message.
fn command_result(res: Result<(), Box<dyn std::error::Error>>) -> anyhow::Result<()> {
    res.map_err(|e| anyhow!("{}", e))
}

#[cfg(test)]
mod main_test {
    use super::command_result;
    use crate::{errors::TodoError, form::submitter::ValidationError};

    #[test]
    fn test_failed_commands_become_errors() {
        let rejected = command_result(Err(Box::new(ValidationError::TitleRequired)));
        let status = command_result(Err(Box::new(TodoError::Status {
            status: 404,
            body: String::from("Todo not found\n"),
        })));

        assert_eq!(rejected.unwrap_err().to_string(), "Title is required!");
        assert_eq!(
            status.unwrap_err().to_string(),
            "Server responded with 404: Todo not found"
        );
        assert_eq!(command_result(Ok(())).is_ok(), true);
    }
}
