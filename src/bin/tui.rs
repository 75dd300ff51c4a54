use anyhow::Result;
use frigo::context::{AppContext, StandardContext};
use frigo::storage::{KEY_FOOD_ITEMS, LocalStore};
use frigo::store::InventoryStore;
use simplelog::{LevelFilter, WriteLogger};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Handle help flag
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        frigo::cli::print_help("frigo");
        return Ok(());
    }

    // Optional data/config root override: frigo --root <path>
    let mut override_root: Option<PathBuf> = None;
    let mut rest: Vec<&str> = Vec::new();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--root" | "-r" => {
                if i + 1 >= args.len() {
                    eprintln!("--root requires a path argument");
                    std::process::exit(1);
                }
                override_root = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            other => {
                rest.push(other);
                i += 1;
            }
        }
    }

    let ctx: Arc<dyn AppContext> = Arc::new(StandardContext::new(override_root));

    // CLI Command: frigo export
    if rest.first() == Some(&"export") {
        let inventory = InventoryStore::load(ctx.as_ref());
        println!("{}", serde_json::to_string_pretty(&inventory.items)?);
        return Ok(());
    }

    // The TUI owns the terminal, so logging goes to a file under the data dir.
    if let Some(log_path) = ctx.get_log_file_path()
        && let Ok(file) = std::fs::File::create(&log_path)
    {
        let _ = WriteLogger::init(LevelFilter::Info, simplelog::Config::default(), file);
    }
    log::info!(
        "frigo v{} starting (store: {:?})",
        env!("CARGO_PKG_VERSION"),
        LocalStore::get_path(ctx.as_ref(), KEY_FOOD_ITEMS).ok()
    );

    // Normal TUI startup
    frigo::tui::run(ctx)
}
