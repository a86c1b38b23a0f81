//! `tama`: play the pet game in a terminal.
//!
//! Config is read from the path in `TAMA_CONFIG`, else the first argument,
//! else built-in defaults. Logs go to stderr; set `RUST_LOG` to override the
//! configured level.

use std::path::PathBuf;

use anyhow::Context;
use tama_core::config::{GeneralConfig, TamaConfig};
use tama_names::NameClient;
use tama_runtime::terminal::{self, Input, TerminalHooks};
use tama_runtime::{GameHandle, GameLoop, RuntimeError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    init_tracing(&config.general);

    let names = NameClient::from_config(&config.names);
    let (game, handle) = GameLoop::new(&config, names, TerminalHooks::stdout());
    let task = game.spawn();

    println!("{}", terminal::HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        match terminal::parse_line(&line) {
            Ok(Input::Quit) => break,
            Ok(input) => run_input(&handle, input).await?,
            Err(message) => println!("{message}"),
        }
    }

    handle.shutdown().await;
    task.await.context("game loop panicked")?;
    Ok(())
}

async fn run_input(handle: &GameHandle, input: Input) -> anyhow::Result<()> {
    let outcome = match input {
        Input::Create { source, animal } => handle.create_pet(source, animal).await.map(|_| ()),
        Input::Act { pet, action } => handle.act(pet, action).await.map(|_| ()),
        Input::Restart => handle.restart().await,
        Input::List => {
            let snapshot = handle.snapshot().await?;
            if snapshot.pets.is_empty() {
                println!("No pets yet. Try `new dog`.");
            }
            for pet in &snapshot.pets {
                println!("{}", terminal::describe_pet(pet));
            }
            println!("{}/{} pets", snapshot.pets.len(), snapshot.capacity);
            Ok(())
        }
        Input::Help => {
            println!("{}", terminal::HELP);
            Ok(())
        }
        Input::Quit | Input::Nothing => Ok(()),
    };

    match outcome {
        Ok(()) => Ok(()),
        Err(RuntimeError::Closed) => Err(RuntimeError::Closed.into()),
        // Already shown through the alert hook.
        Err(RuntimeError::Core(err)) if err.is_user_facing() => Ok(()),
        Err(RuntimeError::Core(err)) => {
            println!("{err}");
            Ok(())
        }
    }
}

fn load_config() -> anyhow::Result<TamaConfig> {
    let path = std::env::var_os("TAMA_CONFIG")
        .map(PathBuf::from)
        .or_else(|| std::env::args_os().nth(1).map(PathBuf::from));

    match path {
        Some(path) => TamaConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(TamaConfig::default()),
    }
}

fn init_tracing(general: &GeneralConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&general.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if general.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}
