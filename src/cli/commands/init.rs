use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped with `--test`)
///  - the base directory with `data/`, `archived/` and `state/`
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.base.clone(), cli.test)?;
    let base = cfg.base_path();

    println!("⚙️  Initializing statlog…");
    let store = Store::open(&base)?;

    println!("📂 Data      : {}", store.layout.data_dir.display());
    println!("🗄️  Archive   : {}", store.layout.archive_dir.display());
    println!("📌 State     : {}", store.layout.state_dir.display());

    store
        .journal
        .record("init", "", &format!("Base directory initialized at {}", base.display()));

    println!("🎉 statlog initialization completed!");
    Ok(())
}
