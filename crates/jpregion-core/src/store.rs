// crates/jpregion-core/src/store.rs

//! # Definition Store
//!
//! Memoizes [`DefinitionSource`] reads per [`Scope`] for the lifetime of the
//! store and turns every read failure into an empty [`DefinitionSet`].

use crate::error::{RegionError, Result};
use crate::loader::DEFAULT_COUNTRY;
use crate::model::DefinitionSet;
use crate::scope::Scope;
use crate::traits::DefinitionSource;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, warn};

pub struct DefinitionStore<S> {
    source: S,
    default_country: String,
    cache: RwLock<HashMap<Scope, Arc<DefinitionSet>>>,
    // One guard per scope being loaded; removed once the load finishes.
    loading: Mutex<HashMap<Scope, Arc<Mutex<()>>>>,
}

impl<S: DefinitionSource> DefinitionStore<S> {
    pub fn new(source: S) -> Self {
        DefinitionStore {
            source,
            default_country: DEFAULT_COUNTRY.to_string(),
            cache: RwLock::new(HashMap::new()),
            loading: Mutex::new(HashMap::new()),
        }
    }

    /// Country used when a load names none.
    pub fn with_default_country(mut self, country_code: impl Into<String>) -> Self {
        self.default_country = country_code.into();
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn default_country(&self) -> &str {
        &self.default_country
    }

    /// Returns the definitions for `(country_code, parent_id)`.
    ///
    /// A missing or empty country code means the default country. Never
    /// fails: unreadable, unparseable or foreign-scope resources yield an
    /// empty set and are retried on the next call.
    pub fn load_definitions(
        &self,
        country_code: Option<&str>,
        parent_id: Option<&str>,
    ) -> Arc<DefinitionSet> {
        let country_code = country_code
            .filter(|c| !c.is_empty())
            .unwrap_or(self.default_country.as_str());
        self.load_scope(&Scope::new(country_code, parent_id))
    }

    pub fn load_scope(&self, scope: &Scope) -> Arc<DefinitionSet> {
        if let Some(set) = self.cached(scope) {
            return set;
        }

        // Concurrent first access to one scope performs a single load; the
        // cache lock itself is never held across the read.
        let guard = self.loading_guard(scope);
        let _loading = guard.lock().unwrap_or_else(PoisonError::into_inner);
        let set = match self.cached(scope) {
            Some(set) => set,
            None => self.read_into_cache(scope),
        };

        self.loading
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(scope);
        set
    }

    fn read_into_cache(&self, scope: &Scope) -> Arc<DefinitionSet> {
        match self.read_checked(scope) {
            Ok(set) => {
                debug!(%scope, regions = set.len(), "cached region definitions");
                let set = Arc::new(set);
                self.cache
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(scope.clone(), Arc::clone(&set));
                set
            }
            Err(RegionError::NotFound(msg)) => {
                debug!(%scope, "{msg}");
                Arc::new(DefinitionSet::empty(scope))
            }
            Err(e) => {
                warn!(%scope, error = %e, "region definitions unavailable");
                Arc::new(DefinitionSet::empty(scope))
            }
        }
    }

    /// Number of scopes currently cached.
    pub fn cached_scopes(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn loading_guard(&self, scope: &Scope) -> Arc<Mutex<()>> {
        let mut loading = self.loading.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(loading.entry(scope.clone()).or_default())
    }

    fn cached(&self, scope: &Scope) -> Option<Arc<DefinitionSet>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(scope)
            .cloned()
    }

    fn read_checked(&self, scope: &Scope) -> Result<DefinitionSet> {
        let set = self.source.read_definitions(scope)?;
        if !set.matches_scope(scope) {
            return Err(RegionError::ScopeMismatch {
                requested: scope.to_string(),
                found: set.scope().to_string(),
            });
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::StaticSource;
    use crate::model::RawRegionDefinition;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn jp_set() -> DefinitionSet {
        let mut set = DefinitionSet::empty(&Scope::root("JP"));
        set.locale = "ja".into();
        set.regions
            .insert("JP-13".into(), RawRegionDefinition::new("東京都"));
        set
    }

    /// Counts reads and fails the first `failures` of them.
    struct CountingSource {
        inner: StaticSource,
        reads: AtomicUsize,
        failures: usize,
    }

    impl CountingSource {
        fn new(failures: usize) -> Self {
            CountingSource {
                inner: StaticSource::new().with_set(jp_set()),
                reads: AtomicUsize::new(0),
                failures,
            }
        }

        fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }
    }

    impl DefinitionSource for CountingSource {
        fn read_definitions(&self, scope: &Scope) -> Result<DefinitionSet> {
            let n = self.reads.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                return Err(RegionError::Io(std::io::Error::other("flaky")));
            }
            self.inner.read_definitions(scope)
        }
    }

    #[test]
    fn loads_once_per_scope() {
        let store = DefinitionStore::new(CountingSource::new(0));
        let a = store.load_definitions(Some("JP"), None);
        let b = store.load_definitions(Some("JP"), None);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(store.source().reads(), 1);
        assert_eq!(store.cached_scopes(), 1);
    }

    #[test]
    fn missing_country_uses_default() {
        let store = DefinitionStore::new(CountingSource::new(0));
        assert_eq!(store.load_definitions(None, None).len(), 1);
        assert_eq!(store.load_definitions(Some(""), None).len(), 1);
        assert_eq!(store.source().reads(), 1);
    }

    #[test]
    fn failures_are_empty_and_not_cached() {
        let store = DefinitionStore::new(CountingSource::new(1));
        assert!(store.load_definitions(Some("JP"), None).is_empty());
        assert_eq!(store.cached_scopes(), 0);

        assert_eq!(store.load_definitions(Some("JP"), None).len(), 1);
        assert_eq!(store.source().reads(), 2);
    }

    #[test]
    fn unknown_scope_is_empty() {
        let store = DefinitionStore::new(StaticSource::new().with_set(jp_set()));
        let set = store.load_definitions(Some("US"), None);
        assert!(set.is_empty());
        assert_eq!(set.country_code, "US");
    }

    #[test]
    fn foreign_scope_is_rejected() {
        struct Liar;
        impl DefinitionSource for Liar {
            fn read_definitions(&self, _scope: &Scope) -> Result<DefinitionSet> {
                Ok(jp_set())
            }
        }

        let store = DefinitionStore::new(Liar);
        assert!(store.load_definitions(Some("US"), None).is_empty());
        assert!(store
            .load_definitions(Some("JP"), Some("JP-13"))
            .is_empty());
        assert_eq!(store.load_definitions(Some("JP"), None).len(), 1);
    }

    #[test]
    fn concurrent_first_access_reads_once() {
        let store = Arc::new(DefinitionStore::new(CountingSource::new(0)));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.load_definitions(Some("JP"), None).len())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 1);
        }
        assert_eq!(store.source().reads(), 1);
    }

    #[test]
    fn slow_misses_do_not_block_cached_scopes() {
        use std::sync::mpsc;

        /// Serves JP at once; blocks reads of any other scope until released.
        struct GatedSource {
            inner: StaticSource,
            entered: Mutex<mpsc::Sender<()>>,
            release: Mutex<mpsc::Receiver<()>>,
        }

        impl DefinitionSource for GatedSource {
            fn read_definitions(&self, scope: &Scope) -> Result<DefinitionSet> {
                if scope.country_code != "JP" {
                    self.entered.lock().unwrap().send(()).unwrap();
                    self.release.lock().unwrap().recv().unwrap();
                }
                self.inner.read_definitions(scope)
            }
        }

        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let store = Arc::new(DefinitionStore::new(GatedSource {
            inner: StaticSource::new().with_set(jp_set()),
            entered: Mutex::new(entered_tx),
            release: Mutex::new(release_rx),
        }));
        assert_eq!(store.load_definitions(Some("JP"), None).len(), 1);

        let slow = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.load_definitions(Some("ZZ"), None).len())
        };
        entered_rx.recv().unwrap();

        // The ZZ read is in flight; JP is still served from the cache.
        assert_eq!(store.load_definitions(Some("JP"), None).len(), 1);
        assert_eq!(store.cached_scopes(), 1);

        release_tx.send(()).unwrap();
        assert_eq!(slow.join().unwrap(), 0);
    }
}
