use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use gitgate_backend::{GitCliBackend, ObjectBackend};
use gitgate_server::{GatewayConfig, GatewayServer};

/// Exit code when the repository directory cannot be entered.
const EXIT_BAD_REPO_DIR: i32 = 2;
/// Exit code when the directory is not a usable repository.
const EXIT_NOT_A_REPO: i32 = 3;

#[derive(Parser)]
#[command(
    name = "gitgate",
    about = "Read-only HTTP gateway over a git repository",
    version,
)]
pub struct Cli {
    /// Git repository to serve.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0")]
    pub listen: IpAddr,

    /// Port to listen on.
    #[arg(long, default_value_t = 6504)]
    pub port: u16,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let repo = match cli.repo.canonicalize() {
        Ok(repo) => repo,
        Err(err) => {
            tracing::error!("cannot enter repository {}: {err}", cli.repo.display());
            std::process::exit(EXIT_BAD_REPO_DIR);
        }
    };

    let backend = GitCliBackend::new(repo);
    if let Err(err) = backend.probe_repo().await {
        tracing::error!("{} is not a usable repository: {err}", cli.repo.display());
        std::process::exit(EXIT_NOT_A_REPO);
    }

    let config = GatewayConfig {
        listen: cli.listen,
        port: cli.port,
        repo_path: backend.repo_dir().to_path_buf(),
    };
    GatewayServer::new(config, Arc::new(backend)).serve().await?;
    Ok(())
}
