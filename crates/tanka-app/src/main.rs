use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tanka_types::{PhraseClass, PhraseSubmission};
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod bootstrap;
pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;
pub mod ui;


use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "tanka", about = "Compose tanka from shared 5- and 7-mora phrases")]
struct Args {
    /// Config JSON to use instead of the profile directory
    #[arg(long, env = "TANKA_CONFIG")]
    config: Option<PathBuf>,

    /// Profile name under <data_dir>/profiles
    #[arg(long, default_value = "main")]
    profile: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive session with live updates from the shared collection
    Run,
    /// Print composed tanka and exit
    Generate {
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
    /// Submit one phrase and exit
    Add {
        /// 5 or 7
        class: PhraseClass,
        phrase: String,
        /// Hiragana reading; derived from the phrase when omitted
        #[arg(short, long)]
        reading: Option<String>,
    },
    /// Write the effective config as a named profile
    SaveProfile { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(args.log_json);

    let config = profile::load_config(args.config.as_deref(), &args.profile)?;
    tracing::info!(
        data_dir = %config.storage.data_dir,
        policy = ?config.validation.policy,
        rate_limit_seconds = config.submission.rate_limit_seconds,
        remote = config.remote.is_active(),
        "loaded tanka config"
    );

    if let Some(Command::SaveProfile { name }) = &args.command {
        let dir = config.storage.profiles_dir();
        let file = profile::save_profile(&dir, name, &config)?;
        println!("{}", file.display());
        return Ok(());
    }

    let state = Arc::new(bootstrap::bootstrap(config).await?);

    match args.command.unwrap_or(Command::Run) {
        Command::Run => run(state).await,
        Command::Generate { count } => {
            for i in 0..count {
                if i > 0 {
                    println!();
                }
                let tanka = state.tanka.compose().await?;
                println!("{}", ui::render_tanka(&tanka));
            }
            Ok(())
        }
        Command::Add {
            class,
            phrase,
            reading,
        } => {
            let submission = PhraseSubmission {
                class,
                text: phrase,
                reading,
            };
            match state.submitter.submit(submission).await {
                Ok(accepted) => println!("{}", accepted.message()),
                Err(rejection) => println!("{}", rejection),
            }
            Ok(())
        }
        Command::SaveProfile { .. } => Ok(()),
    }
}

/// Logs go to stderr, stdout carries the poems
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

pub async fn run(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        _ = controller.cancelled() => {
            tracing::info!("Session ended");
        }
    }

    controller.shutdown();

    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task exited with error: {e}"),
            Err(e) => tracing::error!("task panicked: {e}"),
        }
    }

    Ok(())
}
