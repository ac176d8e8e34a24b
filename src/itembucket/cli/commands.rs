use super::render::{print_config, print_listings, print_messages};
use super::setup::{init_logging, Cli, Commands};
use clap::Parser;
use itembucket::api::{self, CmdResult, ConfigAction, ItemBucketApi, StoragePaths};
use itembucket::config::{resolve_storage_dir, IbConfig, HOME_ENV};
use itembucket::error::Result;
use itembucket::model::BucketKey;
use itembucket::store::fs::FileStore;

struct AppContext {
    api: ItemBucketApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = resolve_paths(&cli)?;

    // These never touch the item store, so they work even when it is unreadable.
    match &cli.command {
        Some(Commands::Path) => return handle_path(&paths),
        Some(Commands::Config { key, value }) => {
            return handle_config(&paths, key.clone(), value.clone())
        }
        _ => {}
    }

    let mut ctx = init_context(paths)?;

    match cli.command {
        Some(Commands::Add { title, today }) => handle_add(&mut ctx, title, today),
        Some(Commands::List { bucket }) => handle_list(&ctx, bucket),
        Some(Commands::Toggle { id }) => handle_toggle(&mut ctx, id),
        Some(Commands::Move { id, bucket }) => handle_move(&mut ctx, id, bucket),
        Some(Commands::EmptyToday) => handle_empty_today(&mut ctx),
        Some(Commands::Cleanup) => handle_cleanup(&mut ctx),
        Some(Commands::Edit { id, text }) => handle_edit(&mut ctx, id, text),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Compact) => handle_compact(&mut ctx),
        Some(Commands::Path) | Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&ctx, None),
    }
}

fn resolve_paths(cli: &Cli) -> Result<StoragePaths> {
    let dir = resolve_storage_dir(cli.storage_path.clone(), std::env::var_os(HOME_ENV))?;
    let config = IbConfig::load(&dir)?;
    Ok(StoragePaths::new(dir, &config))
}

fn init_context(paths: StoragePaths) -> Result<AppContext> {
    let store = FileStore::new(paths.file);
    let api = ItemBucketApi::new(store)?;
    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, title: Vec<String>, today: bool) -> Result<()> {
    let bucket = if today {
        BucketKey::Today
    } else {
        BucketKey::General
    };
    let result = ctx.api.add_item(&title.join(" "), bucket.as_str())?;
    print_result(&result);
    Ok(())
}

fn handle_list(ctx: &AppContext, bucket: Option<String>) -> Result<()> {
    let result = ctx.api.list_items(bucket.as_deref())?;
    print_result(&result);
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api.toggle_item(id)?;
    print_result(&result);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, id: i64, bucket: String) -> Result<()> {
    let result = ctx.api.move_item(id, &bucket)?;
    print_result(&result);
    Ok(())
}

fn handle_empty_today(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.empty_today()?;
    print_result(&result);
    Ok(())
}

fn handle_cleanup(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.cleanup()?;
    print_result(&result);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: i64, text: Vec<String>) -> Result<()> {
    let result = ctx.api.edit_item(id, &text.join(" "))?;
    print_result(&result);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api.delete_item(id)?;
    print_result(&result);
    Ok(())
}

fn handle_compact(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.compact()?;
    print_result(&result);
    Ok(())
}

fn handle_path(paths: &StoragePaths) -> Result<()> {
    let result = api::storage_path(paths)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(paths: &StoragePaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = api::config(paths, action)?;
    print_messages(&result.messages);

    // Listing all keys has no message, only the config itself.
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    Ok(())
}

fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
    print_listings(&result.listings);
}
