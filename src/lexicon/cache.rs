//! Per-lexicon index cache
//!
//! Building an index is the most expensive step, so each name is built at
//! most once per cache. Callers asking for a name that is mid-build block on
//! that name's slot until the build finishes; other names are unaffected.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;
use tracing::debug;

use super::loader::LexiconSource;
use super::trie::LexiconIndex;
use crate::error::LexiconResult;

type Slot = Arc<Mutex<Option<Arc<LexiconIndex>>>>;

/// Lexicon indexes keyed by name, built on first use
pub struct LexiconCache<S> {
    source: S,
    slots: Mutex<FxHashMap<String, Slot>>,
    /// Names whose build finished; never locked while waiting on a slot
    loaded: Mutex<BTreeSet<String>>,
}

impl<S: LexiconSource> LexiconCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            slots: Mutex::new(FxHashMap::default()),
            loaded: Mutex::new(BTreeSet::new()),
        }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// The index for `name`, building it if this cache has not yet done so
    ///
    /// Names are case-insensitive. A failed build is not remembered; the next
    /// call retries.
    ///
    /// # Errors
    /// Propagates the source's `LexiconError`.
    pub fn get(&self, name: &str) -> LexiconResult<Arc<LexiconIndex>> {
        let key = name.to_uppercase();
        let slot = {
            let mut slots = lock(&self.slots);
            Arc::clone(slots.entry(key.clone()).or_default())
        };

        let mut built = lock(&slot);
        if let Some(index) = built.as_ref() {
            debug!(lexicon = %key, "lexicon cache hit");
            return Ok(Arc::clone(index));
        }

        debug!(lexicon = %key, "lexicon cache miss, building");
        let index = Arc::new(self.source.build(&key)?);
        *built = Some(Arc::clone(&index));
        lock(&self.loaded).insert(key);
        Ok(index)
    }

    /// Whether `name` has a finished index
    pub fn is_loaded(&self, name: &str) -> bool {
        lock(&self.loaded).contains(&name.to_uppercase())
    }

    /// Names with a finished index, sorted
    pub fn loaded_names(&self) -> Vec<String> {
        lock(&self.loaded).iter().cloned().collect()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
