//! `studycast preview` — assemble a bulletin without sending or persisting.

use rand::SeedableRng;
use rand::rngs::StdRng;
use studycast_config::AppConfig;
use studycast_engine::assembler::assemble;
use studycast_engine::registry::RegistryStore;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let banks = studycast_banks::load_all(&config.data_dir, &config.banks)
        .map_err(|e| format!("Failed to load banks: {e}"))?;

    let store = RegistryStore::new(config.registry_path());
    let today = super::run_date(&config);
    let registry = store.load(today)?.reset_if_stale(today);

    let handle = config.channel.as_deref().unwrap_or("@your-channel");
    let mut rng = StdRng::from_entropy();
    let assembly = assemble(&banks, &registry, &mut rng, handle);

    match assembly.bulletin {
        Some(bulletin) => {
            println!("📝 Preview ({} new question(s), nothing sent):\n", assembly.new_count);
            println!("{bulletin}");
        }
        None => {
            println!("💤 Nothing new — every candidate is already in today's registry");
        }
    }

    Ok(())
}
