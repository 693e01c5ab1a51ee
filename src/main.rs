//! nginx-switch
//!
//! Toggles apps between their `dev` and `prod` endpoints, regenerates the
//! nginx variables snippet and reloads nginx.
//!
//! ```text
//!   argv ──▶ clap ──▶ ConfigStore::load ──▶ --nginx-conf (optional)
//!                                               │
//!            ┌──────────────┬──────────────┬────┴─────────┐
//!            ▼              ▼              ▼              ▼
//!         switch         getdev          init           show
//!   validate → swap   print dev path   prompt → save   print JSON
//!   → render → save
//!   → write snippet
//!   → nginx -s reload
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};

use nginx_switch::commands::{self, CommandError, Prompter};
use nginx_switch::config::ConfigStore;
use nginx_switch::nginx::NginxReloader;
use nginx_switch::observability::init_logging;

#[derive(Parser)]
#[command(name = "nginx-switch", version)]
#[command(about = "Switch apps between dev and prod endpoints behind nginx", long_about = None)]
struct Cli {
    /// Config file (JSON, or TOML with a .toml extension)
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Set the path of the generated nginx conf file and save it
    #[arg(long, value_name = "PATH")]
    nginx_conf: Option<PathBuf>,

    /// nginx binary used for `-s reload`
    #[arg(long, default_value = "nginx")]
    nginx_bin: String,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Switch between dev and prod for the specified apps
    #[command(visible_alias = "s")]
    Switch {
        #[arg(required = true, value_name = "APP")]
        apps: Vec<String>,
    },
    /// Print the dev path of an app
    #[command(visible_alias = "g")]
    Getdev {
        #[arg(value_name = "APP")]
        app: String,
    },
    /// Initialize root and nginx conf path in the config file
    Init,
    /// Print the config file
    Show,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if cli.command.is_none() && cli.nginx_conf.is_none() {
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let store = ConfigStore::new(&cli.config);
    let mut doc = match cli.command {
        Some(Commands::Init) => store.load_or_default()?,
        _ => store.load()?,
    };

    if let Some(path) = cli.nginx_conf {
        let shown = path.display().to_string();
        commands::set_output_path(&store, &mut doc, path)?;
        println!("Nginx conf file path is set to: {}", shown);
    }

    match cli.command {
        None => {}
        Some(Commands::Switch { apps }) => {
            let reloader = NginxReloader::new(cli.nginx_bin);
            let report = commands::switch(&store, &mut doc, apps.as_slice(), &reloader).await?;
            println!(
                "Switched {}; {} has been updated and nginx reloaded",
                report.switched.join(", "),
                report.snippet_path.display()
            );
        }
        Some(Commands::Getdev { app }) => {
            println!("{}", commands::dev_path(&doc, &app)?.display());
        }
        Some(Commands::Init) => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            commands::init(&store, &mut doc, &mut prompter)?;
            println!("Initialized successfully. Current config file is:");
            println!("{}", commands::document_json(&doc)?);
        }
        Some(Commands::Show) => {
            println!("{}", commands::document_json(&doc)?);
        }
    }

    Ok(())
}
