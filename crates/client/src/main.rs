//! logit-client CLI entry point.

use clap::Parser;
use logit_client::cli::health::HealthAction;
use logit_client::cli::logs::LogsAction;
use logit_client::cli::{Cli, Commands, OutputFormat};
use logit_client::output::{format_output, pretty};
use logit_client::LogitClient;
use logit_core::log::ListLogsQuery;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = LogitClient::new(&cli.base_url);

    match cli.command {
        Commands::Welcome => {
            let welcome = client.welcome().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&welcome, cli.format)),
                OutputFormat::Pretty => println!("{}", welcome.message),
            }
        }
        Commands::Logs(logs_cmd) => match logs_cmd.action {
            LogsAction::List { skip, limit } => {
                let logs = client.list_logs(ListLogsQuery::new(skip, limit)).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&logs, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_logs(&logs)),
                }
            }
            LogsAction::Create(fields) => {
                let log = client.create_log(&fields.into()).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&log, cli.format)),
                    OutputFormat::Pretty => println!("Created:\n{}", pretty::format_log(&log)),
                }
            }
            LogsAction::Get { id } => {
                let log = client.get_log(id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&log, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_log(&log)),
                }
            }
            LogsAction::Update { id, fields } => {
                let log = client.update_log(id, &fields.into()).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&log, cli.format)),
                    OutputFormat::Pretty => println!("Updated:\n{}", pretty::format_log(&log)),
                }
            }
            LogsAction::Delete { id } => {
                let confirmation = client.delete_log(id).await?;
                match cli.format {
                    OutputFormat::Json => {
                        println!("{}", format_output(&confirmation, cli.format))
                    }
                    OutputFormat::Pretty => {
                        if !cli.quiet {
                            println!("Deleted log {}", id);
                        }
                    }
                }
            }
        },
        Commands::Health(health_cmd) => match health_cmd.action {
            HealthAction::Live => {
                client.livez().await?;
                if !cli.quiet {
                    println!("Server is live");
                }
            }
            HealthAction::Ready => {
                let readiness = client.readyz().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&readiness, cli.format)),
                    OutputFormat::Pretty => println!(
                        "Ready:\n  Healthy: {}\n  Logs stored: {}",
                        readiness.healthy, readiness.logs
                    ),
                }
            }
        },
    }

    Ok(())
}
