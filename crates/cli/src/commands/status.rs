//! `studycast status` — show config and registry state.

use studycast_config::AppConfig;
use studycast_engine::registry::RegistryStore;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    println!("📘 studycast Status");
    println!("===================");
    println!("  Config dir:   {}", AppConfig::config_dir().display());
    println!("  Data dir:     {}", config.data_dir.display());
    println!("  Banks:        {}", config.banks.join(", "));
    println!(
        "  Channel:      {}",
        config.channel.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  Bot token:    {}",
        if config.bot_token.is_some() { "set" } else { "(not set)" }
    );
    println!("  Parse mode:   {}", config.parse_mode);
    println!("  UTC offset:   {} minutes", config.utc_offset_minutes);

    let store = RegistryStore::new(config.registry_path());
    let today = super::run_date(&config);
    if store.path().exists() {
        match store.load(today) {
            Ok(registry) => {
                println!("\n  Registry:     {}", store.path().display());
                println!("  Last reset:   {}", registry.date());
                println!("  Posted keys:  {}", registry.len());
                if registry.date() != today {
                    println!("  ⏳ Stale — next run will reset for {today}");
                }
            }
            Err(e) => println!("\n  ⚠️  Registry unreadable: {e}"),
        }
    } else {
        println!("\n  Registry:     (none yet — first run will create it)");
    }

    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — run `studycast onboard` first");
    }

    Ok(())
}
