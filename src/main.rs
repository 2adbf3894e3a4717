//! spoctl - SharePoint Online site group CLI

use clap::Parser;
use log::{debug, info};

use spoctl::{run_group_user_add_command, Cli, Command, GroupResource, GroupUserAction};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.effective_log_level()),
    )
    .init();

    info!("Starting spoctl v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: {:?}", cli.command);

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("Completed successfully");
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Group {
            resource: GroupResource::User { action },
        } => match action {
            GroupUserAction::Add(args) => run_group_user_add_command(cli, args).await,
        },
    }
}
