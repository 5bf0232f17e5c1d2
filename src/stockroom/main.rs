use clap::Parser;
use colored::Colorize;
use stockroom::api::{ConfigAction, SearchQuery, StockApi};
use stockroom::commands;
use stockroom::config::StockConfig;
use stockroom::error::Result;
use stockroom::model::{Product, ProductUpdate};
use stockroom::store::fs_backend::FsBackend;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::{Cli, Commands};
use cli::print::{eprint_messages, format_plain, print_messages, print_products};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "stockroom=debug"
    } else {
        "stockroom=error"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct AppContext {
    api: StockApi<FsBackend>,
    config: StockConfig,
}

fn run(cli: Cli) -> Result<()> {
    let config_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Config never needs the inventory file, so it works even when that is unreadable.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_dir, key.clone(), value.clone());
    }

    let mut ctx = init_context(&config_dir, cli.file)?;

    match cli.command {
        Some(Commands::List { json, plain }) => handle_list(&ctx, json, plain),
        Some(Commands::Add {
            id,
            name,
            quantity,
            price,
        }) => handle_add(&mut ctx, Product::new(id, name, quantity, price)),
        Some(Commands::Search {
            id,
            term,
            all,
            json,
        }) => {
            let query = match (id, term) {
                (Some(id), _) => SearchQuery::Id(id),
                (None, term) => SearchQuery::Name {
                    term: term.unwrap_or_default(),
                    all,
                },
            };
            handle_search(&ctx, &query, json)
        }
        Some(Commands::Update {
            id,
            name,
            quantity,
            price,
        }) => handle_update(
            &mut ctx,
            id,
            ProductUpdate {
                name,
                quantity,
                price,
            },
        ),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&ctx, false, false),
    }
}

fn init_context(config_dir: &Path, file: Option<PathBuf>) -> Result<AppContext> {
    let config = StockConfig::load(config_dir)?;
    let data_path = file.unwrap_or_else(|| config.data_path(config_dir));

    let api = StockApi::open(FsBackend::new(data_path))?;
    let summary = api.load_summary();
    if !summary.is_clean() {
        eprint_messages(&summary.messages());
    }

    Ok(AppContext { api, config })
}

fn handle_list(ctx: &AppContext, json: bool, plain: bool) -> Result<()> {
    let result = ctx.api.list_products()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.listed_products)?);
    } else if plain {
        for line in format_plain(&result.listed_products) {
            println!("{}", line);
        }
    } else if result.listed_products.is_empty() {
        println!("{}", "No products registered.".dimmed());
    } else {
        print_products(&result.listed_products, &ctx.config.currency);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, product: Product) -> Result<()> {
    let result = ctx.api.add_product(product)?;
    ctx.api.save()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: &SearchQuery, json: bool) -> Result<()> {
    let result = ctx.api.search_products(query)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.listed_products)?);
        return Ok(());
    }
    print_products(&result.listed_products, &ctx.config.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: i64, update: ProductUpdate) -> Result<()> {
    let result = ctx.api.update_product(id, &update)?;
    if result.is_mutation() {
        ctx.api.save()?;
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api.remove_product(id)?;
    ctx.api.save()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(config_dir, action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        for key in StockConfig::KEYS {
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }
    }
    print_messages(&result.messages);
    Ok(())
}
