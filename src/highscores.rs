//! Best score across sessions
//!
//! A single base-10 integer under one key. Anything unreadable counts as
//! "no high score yet", so the next finished run always claims it.

use crate::persistence::KeyValueStore;

/// Storage key for the high score
pub const STORAGE_KEY: &str = "highscore";

/// Read the stored high score, if there is a usable one.
///
/// Only a whole base-10 integer counts: values such as `"12abc"` or `"3.7"`
/// read as no high score and get overwritten by the next finished run.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Option<u64> {
    store.get(STORAGE_KEY)?.trim().parse().ok()
}

/// Record a finished run's score and return the high score to display.
///
/// The score is written when nothing usable is stored or when it is at least
/// the stored value (ties overwrite).
pub fn record<S: KeyValueStore + ?Sized>(store: &mut S, score: u64) -> u64 {
    if let Some(best) = load(&*store).filter(|&best| score < best) {
        return best;
    }

    match store.set(STORAGE_KEY, &score.to_string()) {
        Ok(()) => log::info!("High score saved ({})", score),
        Err(e) => log::warn!("Could not save high score: {}", e),
    }

    load(&*store).unwrap_or(score)
}
