use super::{Kind, Lexicon, Locale};
use compact_str::CompactString;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::debug;

const DEFAULT_CAPACITY: usize = 32;

type Key = (CompactString, Kind);

#[derive(Debug)]
struct Entry {
    lexicon: Arc<Lexicon>,
    used: u64,
}

#[derive(Debug, Default)]
struct Table {
    entries: FxHashMap<Key, Entry>,
    clock: u64,
}

impl Table {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

/// Bounded memo of lexicons keyed by locale identifier and kind.
///
/// Styles are rebuilt whenever a locale changes, and building a lexicon validates
/// every table, so styles share one cache through an [`Arc`]. When full, the entry
/// used longest ago is evicted. Two threads missing the same key both build it and
/// the later insert wins.
#[derive(Debug)]
pub struct LexiconCache {
    capacity: usize,
    table: Mutex<Table>,
}

impl Default for LexiconCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl LexiconCache {
    /// Cache holding at most `capacity` lexicons (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            table: Mutex::new(Table::default()),
        }
    }

    /// Default-sized cache, ready to hand to style constructors.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.table.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lexicon(&self, locale: &Locale, kind: &Kind) -> Arc<Lexicon> {
        let key: Key = (locale.identifier().into(), kind.clone());

        {
            let mut table = self.table.lock();
            let now = table.tick();
            if let Some(entry) = table.entries.get_mut(&key) {
                entry.used = now;
                return entry.lexicon.clone();
            }
        }

        debug!(locale = locale.identifier(), ?kind, "lexicon cache miss");
        let lexicon = Arc::new(Lexicon::new(locale.clone(), kind.clone()));

        let mut table = self.table.lock();
        if table.entries.len() >= self.capacity && !table.entries.contains_key(&key) {
            let oldest = table
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.used)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                debug!(locale = %oldest.0, "evicting lexicon");
                table.entries.remove(&oldest);
            }
        }
        let used = table.tick();
        table.entries.insert(
            key,
            Entry {
                lexicon: lexicon.clone(),
                used,
            },
        );
        lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Currency;

    #[test]
    fn hits_share_the_lexicon() {
        let cache = LexiconCache::default();
        let locale = Locale::new("en_US").unwrap();
        let first = cache.lexicon(&locale, &Kind::Number);
        let second = cache.lexicon(&locale, &Kind::Number);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn kinds_are_cached_separately() {
        let cache = LexiconCache::default();
        let locale = Locale::new("en_US").unwrap();
        cache.lexicon(&locale, &Kind::Number);
        cache.lexicon(&locale, &Kind::Percent);
        cache.lexicon(&locale, &Kind::Currency(Currency::new("USD")));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let cache = LexiconCache::new(2);
        let us = Locale::new("en_US").unwrap();
        let de = Locale::new("de_DE").unwrap();
        let fr = Locale::new("fr_FR").unwrap();

        let kept = cache.lexicon(&us, &Kind::Number);
        cache.lexicon(&de, &Kind::Number);
        cache.lexicon(&us, &Kind::Number);
        cache.lexicon(&fr, &Kind::Number);

        assert_eq!(cache.len(), 2);
        assert!(Arc::ptr_eq(&kept, &cache.lexicon(&us, &Kind::Number)));
        let rebuilt = cache.lexicon(&de, &Kind::Number);
        assert_eq!(rebuilt.locale().identifier(), "de_DE");
    }
}
