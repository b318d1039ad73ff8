use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use intake_server::{IntakeServer, ServerConfig};
use intake_types::{InboundAction, Logger, SubmissionKind};
use intake_validate::{Rejection, SanitizedRecord, Validator};
use serde_json::json;

use crate::cli::{Cli, Command, ConfigArgs, OutputFormat, ServeArgs, ValidateArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Validate(args) => cmd_validate(args, &cli.format),
        Command::Config(args) => cmd_config(args, &cli.format),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => Ok(ServerConfig::load(path)?),
        None => Ok(ServerConfig::default()),
    }
}

fn serve_config(args: ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = serve_config(args)?;
    tracing::debug!(
        bind_addr = %config.bind_addr,
        data_dir = %config.data_dir.display(),
        max_body_bytes = config.max_body_bytes,
        sync_writes = config.sync_writes,
        "loaded server configuration"
    );
    println!(
        "Intake listening on {} (data: {})",
        config.bind_addr.to_string().bold(),
        config.data_dir.display()
    );
    let server = IntakeServer::new(config, Logger::tracing("intake"));
    let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn validate_file(
    kind: SubmissionKind,
    path: &Path,
) -> anyhow::Result<Result<SanitizedRecord, Rejection>> {
    let body =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let validator = Validator::for_kind(kind, &Default::default(), Logger::tracing("validate"));
    Ok(validator.validate(&InboundAction::Create, &body))
}

fn cmd_validate(args: ValidateArgs, format: &OutputFormat) -> anyhow::Result<()> {
    match validate_file(args.kind, &args.file)? {
        Ok(record) => {
            match format {
                OutputFormat::Json => {
                    let out = json!({"ok": true, "kind": args.kind, "record": record});
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
                OutputFormat::Text => {
                    println!("{} Valid {} submission", "✓".green().bold(), args.kind);
                    println!("{}", serde_json::to_string_pretty(&record)?);
                }
            }
            Ok(())
        }
        Err(rejection) => {
            match format {
                OutputFormat::Json => {
                    let out = json!({
                        "ok": false,
                        "kind": args.kind,
                        "field": rejection.field(),
                        "message": rejection.to_string(),
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
                OutputFormat::Text => {
                    println!("{} Rejected: {}", "✗".red().bold(), rejection);
                }
            }
            anyhow::bail!("{} submission rejected", args.kind)
        }
    }
}

fn cmd_config(args: ConfigArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Text => print!("{}", config.to_toml_string()?),
    }
    Ok(())
}
