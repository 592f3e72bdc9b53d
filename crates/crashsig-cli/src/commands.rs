use super::args::{Cli, Commands, CrashCommand, IndexCommand, ProviderCommand, SignatureCommand};
use super::handlers;
use crate::config::{CONFIG_FILE, Config, DB_FILE, resolve_data_dir};
use anyhow::{Context, Result};
use crashsig_index::Database;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&data_dir, cli.format);
    };

    let config_path = data_dir.join(CONFIG_FILE);
    let config = Config::load_from(&config_path)?;
    if !config_path.exists() {
        config
            .save_to(&config_path)
            .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        debug!(path = %config_path.display(), "wrote default config");
    }
    let db_path = data_dir.join(DB_FILE);
    let open_db = || {
        Database::open(&db_path)
            .with_context(|| format!("Failed to open database: {}", db_path.display()))
    };

    let format = cli.format;

    match command {
        Commands::Signature { command } => {
            let db = open_db()?;

            match command {
                SignatureCommand::List {
                    all,
                    watched,
                    view_mode,
                } => handlers::signature::list(&db, &config, all, watched, format, &view_mode),
                SignatureCommand::Show { id, view_mode } => {
                    handlers::signature::show(&db, &config, id, format, &view_mode)
                }
                SignatureCommand::New {
                    signature,
                    short_description,
                    frequent,
                    permanent,
                } => handlers::signature::create(
                    &db,
                    &signature,
                    short_description,
                    frequent,
                    permanent,
                    format,
                ),
                SignatureCommand::Edit {
                    id,
                    signature,
                    short_description,
                } => handlers::signature::edit(
                    &db,
                    id,
                    signature.as_deref(),
                    short_description.as_deref(),
                    format,
                ),
                SignatureCommand::Delete { id } => handlers::signature::delete(&db, id, format),
                SignatureCommand::LinkBug {
                    id,
                    provider,
                    external_id,
                    closed,
                } => handlers::signature::link_bug(
                    &db,
                    id,
                    &provider,
                    &external_id,
                    closed,
                    format,
                ),
                SignatureCommand::UnlinkBug { id } => {
                    handlers::signature::unlink_bug(&db, id, format)
                }
                SignatureCommand::CloseBug { id, reopen } => {
                    handlers::signature::close_bug(&db, id, reopen, format)
                }
                SignatureCommand::Optimize {
                    id,
                    signature,
                    clear: _,
                } => handlers::signature::optimize(&db, id, signature.as_deref(), format),
                SignatureCommand::Watch { id } => {
                    handlers::signature::watch(&db, &config, id, format)
                }
                SignatureCommand::Unwatch { id } => {
                    handlers::signature::unwatch(&db, &config, id, format)
                }
            }
        }

        Commands::Crash { command } => {
            let db = open_db()?;

            match command {
                CrashCommand::List { view_mode } => handlers::crash::list(&db, format, &view_mode),
                CrashCommand::Add {
                    product,
                    product_version,
                    platform,
                    os,
                    quality,
                    bucket,
                    short_signature,
                    stdout_file,
                    stderr_file,
                    crashdata_file,
                } => handlers::crash::add(
                    &db,
                    handlers::crash::CrashSubmission {
                        product,
                        version: product_version,
                        platform,
                        os,
                        quality,
                        bucket,
                        short_signature,
                        stdout_file,
                        stderr_file,
                        crashdata_file,
                    },
                    format,
                ),
                CrashCommand::Assign { crash_id, bucket } => {
                    handlers::crash::assign(&db, crash_id, bucket, format)
                }
            }
        }

        Commands::Provider { command } => {
            let db = open_db()?;

            match command {
                ProviderCommand::Add {
                    hostname,
                    url_template,
                    classname,
                } => handlers::provider::add(&db, &hostname, &url_template, &classname, format),
                ProviderCommand::List => handlers::provider::list(&db, format, &Default::default()),
            }
        }

        Commands::Index { command } => {
            let db = open_db()?;

            match command {
                IndexCommand::Vacuum => handlers::index::vacuum(&db, format),
            }
        }

        Commands::Serve { bind_address, port } => {
            handlers::serve::handle(&data_dir, &config, bind_address, port)
        }
    }
}
