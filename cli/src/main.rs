use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use todo_cli::{command::HELP, parse_command, render, Command};
use todo_core::{ClientConfig, OwnerId, RemoteTodoService, StoreError, TodoAction, TodoStore};

/// Interactive todo list backed by a remote REST collection.
#[derive(Parser, Debug)]
#[command(name = "todo", version, about)]
struct Cli {
    /// Base URL of the todo API (overrides TODO_API_URL).
    #[arg(long)]
    base_url: Option<String>,

    /// User id stamped on new todos (overrides TODO_OWNER_ID).
    #[arg(long)]
    owner: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env().context("reading client configuration")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(owner) = cli.owner {
        config.owner = OwnerId(owner);
    }
    tracing::info!(base_url = %config.base_url, owner = %config.owner, "starting");

    let store = TodoStore::new(RemoteTodoService::from_config(&config));
    let mut stdout = tokio::io::stdout();

    // Failures are already recorded in the store state, which is rendered below.
    let _ = store.dispatch(TodoAction::LoadAll).await;
    stdout.write_all(render(&store.snapshot()).as_bytes()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let output = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => format!("{HELP}\n"),
            Ok(Command::Show) => render(&store.snapshot()),
            Ok(Command::Action(action)) => match store.dispatch(action).await {
                // Remote failures show up in the rendered state.
                Ok(()) | Err(StoreError::Network(_)) => render(&store.snapshot()),
                Err(err) => format!("{err}\n"),
            },
            Err(todo_cli::ParseError::Empty) => continue,
            Err(err) => format!("{err}\n"),
        };
        stdout.write_all(output.as_bytes()).await?;
    }
    Ok(())
}
