//! `studycast post` — run one selection/delivery cycle.
//!
//! This is the scheduler entry point: an external timer (cron, systemd)
//! invokes it once per logical run. At-most-one-concurrent-run is the
//! scheduler's guarantee, not enforced here.

use rand::SeedableRng;
use rand::rngs::StdRng;
use studycast_channels::{TelegramChannel, TelegramConfig};
use studycast_config::AppConfig;
use studycast_engine::registry::RegistryStore;
use studycast_engine::run::{RunOutcome, run_once};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let (token, destination) = config
        .ensure_ready()
        .map_err(|e| format!("Not ready to post: {e}"))?;

    let banks = studycast_banks::load_all(&config.data_dir, &config.banks)
        .map_err(|e| format!("Failed to load banks: {e}"))?;

    let channel = TelegramChannel::new(TelegramConfig::new(token))?;
    let store = RegistryStore::new(config.registry_path());
    let today = super::run_date(&config);
    let mut rng = StdRng::from_entropy();

    let outcome = run_once(
        &banks,
        &store,
        &channel,
        destination,
        super::parse_mode(&config),
        &mut rng,
        today,
    )
    .await?;

    match outcome {
        RunOutcome::Posted { new_count } => {
            println!("✅ Posted {new_count} new question(s) to {destination}");
        }
        RunOutcome::NothingNew => {
            println!("💤 Nothing new to post today — registry left untouched");
        }
    }

    Ok(())
}
