//! `grantdesk` - CLI for the scholarship program administrative console
//!
//! This binary wires the store, dashboard, and attachment opener into the
//! console's subcommands. One store connection is opened per run and shared
//! by whatever the command touches.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};

use clap::Parser;

use grantdesk::cli::{
    ApplicantCommand, Cli, Command, ConfigCommand, DashboardCommand, DbCommand, MaintainerCommand,
    OutputFormat,
};
use grantdesk::opener::{self, OpenOptions};
use grantdesk::records::DocumentKind;
use grantdesk::store::CourseCount;
use grantdesk::{init_logging, Config, DashboardSummary, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Dashboard(cmd) => handle_dashboard(&config, &cmd),
        Command::Maintainers(cmd) => handle_maintainers(&config, cmd).await,
        Command::Applicants(cmd) => handle_applicants(&config, &cmd),
        Command::Db(cmd) => handle_db(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn open_store(config: &Config) -> grantdesk::Result<Store> {
    Store::open(config.database_path(), config.busy_timeout())
}

fn handle_dashboard(config: &Config, cmd: &DashboardCommand) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let summary = DashboardSummary::collect(&store);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Scholarship Program Overview");
    println!("============================");
    println!("  Applicants:   {}", summary.total_applicants);
    println!("  Maintainers:  {}", summary.total_maintainers);
    println!();
    println!(
        "  Accepted: {}   Pending: {}   Rejected: {}",
        summary.accepted, summary.pending, summary.rejected
    );
    println!();
    println!("Applicants by course");
    render_distribution(&summary.applicants_by_course);
    println!();
    println!("Maintainers by course");
    render_distribution(&summary.maintainers_by_course);
    Ok(())
}

/// Render a course distribution as labeled bars.
fn render_distribution(rows: &[CourseCount]) {
    if rows.is_empty() {
        println!("  (no data)");
        return;
    }

    let max = rows.iter().map(|r| r.count).max().unwrap_or(1).max(1);
    let label_width = rows.iter().map(|r| r.course.len()).max().unwrap_or(0);

    for row in rows {
        let bar_len = usize::try_from((row.count * 24) / max).unwrap_or(1).max(1);
        println!(
            "  {:<label_width$}  {} {}",
            row.course,
            "#".repeat(bar_len),
            row.count
        );
    }
}

async fn handle_maintainers(config: &Config, cmd: MaintainerCommand) -> anyhow::Result<()> {
    let store = open_store(config)?;

    match cmd {
        MaintainerCommand::List { format } => {
            let maintainers = store.list_maintainers()?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&maintainers)?);
                }
                OutputFormat::Table => {
                    println!(
                        "{:<12} {:<24} {:<16} {:<28} {:<16}",
                        "ID", "NAME", "USERNAME", "EMAIL", "STATUS"
                    );
                    for m in &maintainers {
                        println!(
                            "{:<12} {:<24} {:<16} {:<28} {:<16}",
                            m.id,
                            m.name,
                            m.username,
                            m.email,
                            m.status.to_string()
                        );
                    }
                    println!();
                    println!("{} maintainer(s)", maintainers.len());
                }
            }
        }
        MaintainerCommand::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete maintainer {id}?"))? {
                println!("Delete cancelled.");
                return Ok(());
            }
            if store.delete_maintainer(&id)? {
                println!("Deleted maintainer {id}.");
            } else {
                println!("No maintainer with id {id}; nothing deleted.");
            }
        }
        MaintainerCommand::Requirements { id, json } => {
            let set = store.attachments(&id)?;
            if json {
                let entries: Vec<_> = DocumentKind::ALL
                    .into_iter()
                    .map(|kind| {
                        serde_json::json!({
                            "document": kind.label(),
                            "present": set.get(kind).is_some(),
                            "bytes": set.get(kind).map(<[u8]>::len),
                            "kind": set.get(kind).map(grantdesk::classify),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if set.is_empty() {
                println!("No requirements uploaded for {id}.");
            } else {
                println!("Requirements for {id}:");
                for kind in DocumentKind::ALL {
                    match set.get(kind) {
                        Some(buffer) => println!(
                            "  {:<28} {} ({} bytes)",
                            kind.to_string(),
                            grantdesk::classify(buffer),
                            buffer.len()
                        ),
                        None => println!("  {:<28} not uploaded", kind.to_string()),
                    }
                }
            }
        }
        MaintainerCommand::Open { id, document } => {
            handle_open(config, &store, &id, document.into()).await?;
        }
    }
    Ok(())
}

async fn handle_open(
    config: &Config,
    store: &Store,
    id: &str,
    kind: DocumentKind,
) -> anyhow::Result<()> {
    let set = store.attachments(id)?;
    let Some(buffer) = set.get(kind) else {
        println!("{kind} for {id} has not been uploaded.");
        return Ok(());
    };

    // Transient indicator; a completion line prints on every path below.
    println!("Opening {kind}...");

    let options = OpenOptions {
        timeout: config.open_timeout(),
        temp_dir: config.opener.temp_dir.clone(),
    };
    match opener::open_attachment(kind.label(), buffer.to_vec(), &options).await {
        Ok(path) => println!("Opened {} ({}).", kind, path.display()),
        Err(e) => println!("Could not open {kind}: {e}"),
    }
    Ok(())
}

fn handle_applicants(config: &Config, cmd: &ApplicantCommand) -> anyhow::Result<()> {
    let store = open_store(config)?;

    match cmd {
        ApplicantCommand::List { format } => {
            let applicants = store.list_applicants()?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&applicants)?);
                }
                OutputFormat::Table => {
                    println!(
                        "{:<12} {:<24} {:<16} {:<16}",
                        "ID", "NAME", "COURSE", "STATUS"
                    );
                    for a in &applicants {
                        println!(
                            "{:<12} {:<24} {:<16} {:<16}",
                            a.id,
                            a.name,
                            a.course.as_deref().unwrap_or("Unknown"),
                            a.status.as_deref().unwrap_or("-")
                        );
                    }
                    println!();
                    println!("{} applicant(s)", applicants.len());
                }
            }
        }
        ApplicantCommand::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete applicant {id}?"))? {
                println!("Delete cancelled.");
                return Ok(());
            }
            if store.delete_applicant(id)? {
                println!("Deleted applicant {id}.");
            } else {
                println!("No applicant with id {id}; nothing deleted.");
            }
        }
    }
    Ok(())
}

fn handle_db(config: &Config, cmd: &DbCommand) -> anyhow::Result<()> {
    match cmd {
        DbCommand::Init { yes } => {
            let path = config.database_path();
            if path.exists() {
                println!("Database already exists at {}.", path.display());
                return Ok(());
            }
            if !yes && !confirm(&format!("Create database at {}?", path.display()))? {
                println!("Init cancelled.");
                return Ok(());
            }
            let store = Store::create(&path, config.busy_timeout())?;
            println!("Created database at {}.", store.path().display());
        }
        DbCommand::Path => {
            println!("{}", config.database_path().display());
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Store]");
                println!("  Database path:    {}", config.database_path().display());
                println!("  Busy timeout:     {} ms", config.store.busy_timeout_ms);
                println!();
                println!("[Opener]");
                println!("  Platform:         {}", opener::platform_name());
                println!(
                    "  Open timeout:     {} s",
                    config.opener.open_timeout_secs
                );
                match &config.opener.temp_dir {
                    Some(dir) => println!("  Temp dir:         {}", dir.display()),
                    None => println!("  Temp dir:         (system default)"),
                }
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

/// Ask a yes/no question on stdin; anything but y/yes declines.
fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
