use anyhow::Context;
use clap::{Parser, Subcommand};
use mwcheck_application::use_cases::{
    PostcheckArpUseCase, PostcheckPingUseCase, PrecheckArpUseCase, PrecheckPingUseCase,
    ReportOutput, ReportUseCase,
};
use mwcheck_domain::{CliOverrides, SnapshotTable};
use std::path::Path;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "mwcheck")]
#[command(version)]
#[command(about = "Before/after reachability validation for router maintenance windows")]
struct Cli {
    /// Router under maintenance
    router: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Capture the pre-maintenance snapshot
    Precheck {
        #[command(subcommand)]
        task: PrecheckTask,
    },
    /// Capture the post-maintenance snapshot
    Postcheck {
        #[command(subcommand)]
        task: PostcheckTask,
    },
    /// Reconcile a snapshot pair and emit the regression report
    Report {
        /// Precheck table id
        #[arg(long, default_value_t = 0)]
        precheck: u32,
        /// Postcheck table id
        #[arg(long, default_value_t = 0)]
        postcheck: u32,
    },
}

#[derive(Subcommand)]
enum PrecheckTask {
    /// Fetch the ARP table into the precheck snapshot
    Arp {
        /// Device login; falls back to device.username from the config
        #[arg(long)]
        user: Option<String>,
        /// Precheck table id
        #[arg(long, default_value_t = 0)]
        dest: u32,
        /// Device port (default from config)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Probe the hosts discovered by the ARP capture
    Ping {
        /// Precheck table id
        #[arg(long, default_value_t = 0)]
        dest: u32,
        /// Bridge-interface pattern, trailing * for substrings (irb.101*)
        #[arg(long)]
        irb: Option<String>,
        /// Logical-interface pattern, trailing * for substrings (ge-0/0/1*)
        #[arg(long)]
        ifl: Option<String>,
    },
    /// ARP capture followed by probing
    All {
        #[arg(long)]
        user: Option<String>,
        #[arg(long, default_value_t = 0)]
        dest: u32,
        #[arg(long)]
        port: Option<u16>,
        #[arg(long)]
        irb: Option<String>,
        #[arg(long)]
        ifl: Option<String>,
    },
}

#[derive(Subcommand)]
enum PostcheckTask {
    /// Merge the post-maintenance ARP table into the postcheck snapshot
    Arp {
        #[arg(long)]
        user: Option<String>,
        /// Postcheck table id
        #[arg(long, default_value_t = 0)]
        dest: u32,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Re-probe the hosts that were reachable before the window
    Ping {
        /// Source precheck table id
        #[arg(long, default_value_t = 0)]
        source: u32,
        /// Postcheck table id
        #[arg(long, default_value_t = 0)]
        dest: u32,
    },
    /// Re-probing followed by the ARP merge
    All {
        #[arg(long)]
        user: Option<String>,
        #[arg(long, default_value_t = 0)]
        source: u32,
        #[arg(long, default_value_t = 0)]
        dest: u32,
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: None,
        username: None,
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), &overrides)?;
    bootstrap::init_logging(&config.logging.level);

    info!("mwcheck v{} starting", env!("CARGO_PKG_VERSION"));

    let db_path = mwcheck_infrastructure::database::database_path(
        config.database.directory.as_deref().map(Path::new),
        &cli.router,
    );
    let pool = bootstrap::init_database(&db_path).await?;
    let services = di::Services::new(pool, &config);
    let db_file_name = db_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("mwcheck")
        .to_string();

    match cli.command {
        Command::Precheck { task } => match task {
            PrecheckTask::Arp { user, dest, port } => {
                let credentials = device_credentials(&services, &cli.router, user)?;
                run_precheck_arp(&services, &cli.router, credentials, dest, port).await?;
            }
            PrecheckTask::Ping { dest, irb, ifl } => {
                run_precheck_ping(&services, dest, irb.as_deref(), ifl.as_deref()).await?;
            }
            PrecheckTask::All {
                user,
                dest,
                port,
                irb,
                ifl,
            } => {
                let credentials = device_credentials(&services, &cli.router, user)?;
                run_precheck_arp(&services, &cli.router, credentials, dest, port).await?;
                run_precheck_ping(&services, dest, irb.as_deref(), ifl.as_deref()).await?;
            }
        },
        Command::Postcheck { task } => match task {
            PostcheckTask::Arp { user, dest, port } => {
                let credentials = device_credentials(&services, &cli.router, user)?;
                run_postcheck_arp(&services, &cli.router, credentials, dest, port).await?;
            }
            PostcheckTask::Ping { source, dest } => {
                run_postcheck_ping(&services, source, dest).await?;
            }
            PostcheckTask::All {
                user,
                source,
                dest,
                port,
            } => {
                // One prompt covers both tasks.
                let credentials = device_credentials(&services, &cli.router, user)?;
                run_postcheck_ping(&services, source, dest).await?;
                run_postcheck_arp(&services, &cli.router, credentials, dest, port).await?;
            }
        },
        Command::Report {
            precheck,
            postcheck,
        } => {
            let use_case = ReportUseCase::new(
                services.store.clone(),
                services.report_writer.clone(),
                db_file_name,
            );
            let output = use_case
                .execute(
                    SnapshotTable::precheck(precheck),
                    SnapshotTable::postcheck(postcheck),
                )
                .await?;
            print_summary(&output);
        }
    }

    Ok(())
}

async fn run_precheck_arp(
    services: &di::Services,
    router: &str,
    credentials: (String, String),
    dest: u32,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let (user, password) = credentials;
    let reader = services.arp_reader(router, &user, port, password);
    let use_case = PrecheckArpUseCase::new(reader, services.store.clone());

    let table = SnapshotTable::precheck(dest);
    let entries = use_case.execute(table).await?;
    println!("captured {entries} ARP entries into {table}");
    Ok(())
}

async fn run_precheck_ping(
    services: &di::Services,
    dest: u32,
    irb: Option<&str>,
    ifl: Option<&str>,
) -> anyhow::Result<()> {
    let use_case = PrecheckPingUseCase::new(services.store.clone(), services.prober.clone());

    let table = SnapshotTable::precheck(dest);
    let probed = use_case.execute(table, irb, ifl).await?;
    println!("probed {probed} hosts in {table}");
    Ok(())
}

async fn run_postcheck_ping(
    services: &di::Services,
    source: u32,
    dest: u32,
) -> anyhow::Result<()> {
    let use_case = PostcheckPingUseCase::new(services.store.clone(), services.prober.clone());

    let source = SnapshotTable::precheck(source);
    let dest = SnapshotTable::postcheck(dest);
    let probed = use_case.execute(source, dest).await?;
    println!("re-probed {probed} hosts into {dest}");
    Ok(())
}

async fn run_postcheck_arp(
    services: &di::Services,
    router: &str,
    credentials: (String, String),
    dest: u32,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let (user, password) = credentials;
    let reader = services.arp_reader(router, &user, port, password);
    let use_case = PostcheckArpUseCase::new(reader, services.store.clone());

    let table = SnapshotTable::postcheck(dest);
    let entries = use_case.execute(table).await?;
    println!("merged {entries} ARP entries into {table}");
    Ok(())
}

fn device_credentials(
    services: &di::Services,
    router: &str,
    user: Option<String>,
) -> anyhow::Result<(String, String)> {
    let user = user
        .or_else(|| services.default_username().map(str::to_string))
        .context("no device login: pass --user or set device.username in the config")?;
    let password = dialoguer::Password::new()
        .with_prompt(format!("Password for {user}@{router}"))
        .interact()
        .context("failed to read password")?;
    Ok((user, password))
}

fn print_summary(output: &ReportOutput) {
    let summary = &output.summary;
    println!("precheck_reachable {}", summary.precheck.reachable);
    println!("precheck_unreachable {}", summary.precheck.unreachable);
    println!("precheck_probed {}", summary.precheck.probed);
    println!("postcheck_reachable {}", summary.postcheck.reachable);
    println!("postcheck_unreachable {}", summary.postcheck.unreachable);
    println!("postcheck_probed {}", summary.postcheck.probed);
    match &output.artifact {
        Some(path) => println!("regression report: {}", path.display()),
        None => println!("no regressed hosts"),
    }
}
