use clap::Parser;

use golinks::cli::{Cli, Commands};
use golinks::config::StaticConfig;
use golinks::runtime::modes;
use golinks::system::logging::init_logging;

#[actix_web::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = StaticConfig::load(cli.config.as_deref());

    let ok = match cli.selected_command() {
        Commands::Serve => {
            let guard = match init_logging(&config.logging) {
                Ok(guard) => guard,
                Err(e) => {
                    eprintln!("Failed to initialize logging: {:#}", e);
                    std::process::exit(1);
                }
            };

            let result = modes::run_server(&config).await;
            if let Err(ref e) = result {
                tracing::error!("{:#}", e);
            }
            // flush buffered log lines before exiting
            drop(guard);
            result.map_err(|e| eprintln!("{:#}", e)).is_ok()
        }
        cmd => modes::run_cli(cmd, &config)
            .await
            .map_err(|e| eprintln!("{}", e.format_colored()))
            .is_ok(),
    };

    if !ok {
        std::process::exit(1);
    }
}
