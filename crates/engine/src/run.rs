//! The per-run driver.
//!
//! One run is strictly sequential: load → reset-check → assemble →
//! deliver → persist. Persistence happens once, at the very end, and only
//! after delivery is confirmed — the registry must never advance past
//! content that was not actually sent. Any failure on the way leaves the
//! stored registry byte-identical to before the run. Concurrent runs are
//! excluded by the external scheduler, not here.

use crate::assembler::assemble;
use crate::registry::RegistryStore;
use chrono::NaiveDate;
use rand::Rng;
use studycast_core::{Bank, Channel, Error, ParseMode};
use tracing::info;

/// Terminal state of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A bulletin was delivered and the registry committed.
    Posted { new_count: usize },
    /// Every candidate was already posted; nothing sent, nothing persisted.
    NothingNew,
}

/// Execute one complete run against already-loaded banks.
pub async fn run_once<R: Rng>(
    banks: &[Bank],
    store: &RegistryStore,
    channel: &dyn Channel,
    destination: &str,
    mode: ParseMode,
    rng: &mut R,
    today: NaiveDate,
) -> Result<RunOutcome, Error> {
    let registry = store.load(today)?;
    let registry = registry.reset_if_stale(today);

    let assembly = assemble(banks, &registry, rng, destination);

    let Some(bulletin) = assembly.bulletin else {
        info!("Nothing new to post; registry left untouched");
        return Ok(RunOutcome::NothingNew);
    };

    channel.send(destination, &bulletin, mode).await?;
    store.persist(&assembly.registry)?;

    info!(
        new_count = assembly.new_count,
        destination = %destination,
        "Bulletin delivered and registry committed"
    );
    Ok(RunOutcome::Posted {
        new_count: assembly.new_count,
    })
}
