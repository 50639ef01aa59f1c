#![allow(clippy::module_inception)]
use crate::cli::cli::{Cli, Commands, GetFieldArg};
use crate::config::app_config::{config_file_path, Config};
use crate::manager::handlers::{AddOptions, EditOptions, GetField, Manager};
use crate::tui;
use clap::Parser;
use std::path::PathBuf;

pub mod cli;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::create(cli.db.map(PathBuf::from))?;

    match cli.command {
        Commands::Add {
            service,
            url,
            login,
            password,
        } => {
            let manager = Manager::open(&config)?;
            manager
                .handle_add(AddOptions {
                    service,
                    url,
                    login,
                    password,
                })
                .await?;
        }
        Commands::Edit {
            service,
            rename,
            url,
            login,
            password,
        } => {
            let manager = Manager::open(&config)?;
            manager
                .handle_edit(
                    &service,
                    EditOptions {
                        rename,
                        url,
                        login,
                        password,
                    },
                )
                .await?;
        }
        Commands::Show {
            service,
            reveal_password,
        } => {
            let manager = Manager::open(&config)?;
            manager.handle_show(&service, reveal_password).await?;
        }
        Commands::Get {
            service,
            field,
            no_copy,
            echo,
            ttl,
        } => {
            let manager = Manager::open(&config)?;
            let field = match field {
                GetFieldArg::Password => GetField::Password,
                GetFieldArg::Login => GetField::Login,
                GetFieldArg::Url => GetField::Url,
            };
            manager
                .handle_get(&service, field, no_copy, ttl, echo)
                .await?;
        }
        Commands::List { query, json } => {
            let manager = Manager::open(&config)?;
            manager.handle_list(query, json).await?;
        }
        Commands::Rm { service, yes } => {
            let manager = Manager::open(&config)?;
            manager.handle_rm(&service, yes).await?;
        }
        Commands::Clear { yes } => {
            let manager = Manager::open(&config)?;
            manager.handle_clear(yes).await?;
        }
        Commands::Export { path } => {
            let manager = Manager::open(&config)?;
            manager.handle_export(PathBuf::from(path)).await?;
        }
        Commands::Import { path } => {
            let manager = Manager::open(&config)?;
            manager.handle_import(PathBuf::from(path)).await?;
        }
        Commands::Open { service } => {
            let manager = Manager::open(&config)?;
            manager.handle_open(&service).await?;
        }
        Commands::Tui => {
            tui::launch(&config).await?;
        }
        Commands::Config => {
            handle_config(&config)?;
        }
    }

    Ok(())
}

fn handle_config(config: &Config) -> anyhow::Result<()> {
    let path = config_file_path();
    if path.exists() {
        println!("# config file: {}", path.display());
    } else {
        println!("# config file: {} (not present)", path.display());
    }
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
