//! Opaque asset handles and the loading-queue boundary.
//!
//! The layout engine never loads or decodes assets; it consumes textures and
//! fonts exclusively through [`Resource<T>`] handles obtained from an
//! [`AssetCache`] by path, and dereferences them only at render-command
//! emission time. Decoding lives with the host application, which may fill
//! handles synchronously ([`AssetCache::insert`]) or through the three-stage
//! path: request a pending handle, decode on a worker thread, push the result
//! into the mutex-guarded finish queue ([`AssetCache::queue_finish`]), and
//! drain it on the main thread ([`AssetCache::finish_loading`]). The split
//! exists because object finalization is main-thread-affine in the host
//! renderer; this crate only fixes the handoff protocol.
//!
//! A handle that is still pending (or was never filled) reads as `None`;
//! downstream sinks render missing textures as untextured quads and missing
//! fonts through approximate metrics.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use draft_common::warning::warn_once;

/// Texture metadata. Pixel data stays with the host renderer; layout only
/// needs the dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Font metrics metadata. Glyph data stays with the host text renderer;
/// layout only needs enough to measure text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Average glyph advance as a fraction of the font size.
    pub char_width_ratio: f32,
    /// Line height as a fraction of the font size.
    pub line_height_ratio: f32,
}

impl Default for Font {
    fn default() -> Self {
        // Typical proportional Latin body text.
        Self {
            char_width_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

/// An opaque, possibly-deferred handle to an asset.
///
/// Handles are cheap to clone and share one slot: when the cache finishes a
/// pending load, every clone sees the value. `get` returns `None` until
/// then (or forever, for assets that never resolve).
#[derive(Debug)]
pub struct Resource<T> {
    slot: Arc<RwLock<Option<Arc<T>>>>,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Resource<T> {
    /// A handle that already holds a value.
    #[must_use]
    pub fn ready(value: T) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(Arc::new(value)))),
        }
    }

    /// An empty handle awaiting a value.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// The current value, or `None` while pending/missing.
    ///
    /// # Panics
    /// Panics if the slot lock is poisoned.
    #[must_use]
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.read().unwrap().clone()
    }

    /// Whether the handle holds a value yet.
    ///
    /// # Panics
    /// Panics if the slot lock is poisoned.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.slot.read().unwrap().is_some()
    }

    fn fill(&self, value: T) {
        *self.slot.write().unwrap() = Some(Arc::new(value));
    }
}

/// Path-keyed handle table for one asset type.
#[derive(Debug)]
struct Store<T> {
    entries: RwLock<HashMap<String, Resource<T>>>,
}

// Derived `Default` would demand `T: Default`; the empty table needs no such
// bound.
impl<T> Default for Store<T> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Store<T> {
    fn handle(&self, path: &str, create_pending: bool) -> Resource<T> {
        if let Some(existing) = self.entries.read().unwrap().get(path) {
            return existing.clone();
        }
        if create_pending {
            let mut entries = self.entries.write().unwrap();
            // Double-checked: another caller may have raced the upgrade.
            entries
                .entry(path.to_string())
                .or_insert_with(Resource::pending)
                .clone()
        } else {
            warn_once("Assets", &format!("no asset registered for '{path}'"));
            Resource::pending()
        }
    }

    fn insert(&self, path: &str, value: T) {
        let mut entries = self.entries.write().unwrap();
        entries
            .entry(path.to_string())
            .or_insert_with(Resource::pending)
            .fill(value);
    }
}

/// An asset type the cache can hold. Maps the type to its store and gives
/// the finish queue a way to deposit decoded values.
pub trait Asset: Send + Sync + Sized + 'static {
    /// The cache's store for this asset type.
    fn store(cache: &AssetCache) -> &StoreHandle<Self>;
}

/// Public face of a typed store (keeps `Store` itself private).
#[derive(Debug)]
pub struct StoreHandle<T> {
    inner: Store<T>,
}

impl<T> Default for StoreHandle<T> {
    fn default() -> Self {
        Self {
            inner: Store::default(),
        }
    }
}

impl Asset for Texture {
    fn store(cache: &AssetCache) -> &StoreHandle<Self> {
        &cache.textures
    }
}

impl Asset for Font {
    fn store(cache: &AssetCache) -> &StoreHandle<Self> {
        &cache.fonts
    }
}

/// A deferred stage-2 result waiting for the main thread.
type FinishJob = Box<dyn FnOnce(&AssetCache) + Send>;

/// Path-keyed asset registry with a deferred-finish queue.
///
/// All handle lookups may happen from the UI thread at any time; the finish
/// queue is the only cross-thread channel and is guarded by a single mutex,
/// with a shared progress fraction for load screens.
#[derive(Default)]
pub struct AssetCache {
    textures: StoreHandle<Texture>,
    fonts: StoreHandle<Font>,
    finish_queue: Mutex<Vec<FinishJob>>,
    /// (finished, submitted) counters behind the same lock discipline.
    progress: Mutex<(u32, u32)>,
}

impl AssetCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the handle registered under `path`.
    ///
    /// With `create_pending`, an unknown path registers and returns a
    /// pending handle that a later [`AssetCache::queue_finish`] +
    /// [`AssetCache::finish_loading`] will fill. Without it, an unknown
    /// path warns once and returns a dead handle that always reads `None`.
    #[must_use]
    pub fn get<T: Asset>(&self, path: &str, create_pending: bool) -> Resource<T> {
        T::store(self).inner.handle(path, create_pending)
    }

    /// Register a finished asset synchronously (the blocking load path).
    pub fn insert<T: Asset>(&self, path: &str, value: T) {
        T::store(self).inner.insert(path, value);
    }

    /// Stage 2: deposit a decoded asset from any thread. The value is not
    /// visible to handles until the main thread drains the queue.
    ///
    /// # Panics
    /// Panics if the queue mutex is poisoned.
    pub fn queue_finish<T: Asset>(&self, path: &str, value: T) {
        let path = path.to_string();
        self.finish_queue
            .lock()
            .unwrap()
            .push(Box::new(move |cache| cache.insert(&path, value)));
        self.progress.lock().unwrap().1 += 1;
    }

    /// Stage 3: drain the finish queue. Must be called from the thread that
    /// owns finalization (the UI/render thread). Returns how many assets
    /// were finished.
    ///
    /// # Panics
    /// Panics if the queue mutex is poisoned.
    pub fn finish_loading(&self) -> usize {
        let jobs: Vec<FinishJob> = std::mem::take(&mut *self.finish_queue.lock().unwrap());
        let count = jobs.len();
        for job in jobs {
            job(self);
        }
        self.progress.lock().unwrap().0 += u32::try_from(count).unwrap_or(u32::MAX);
        count
    }

    /// Fraction of submitted deferred loads that have been finished
    /// (1.0 when idle).
    ///
    /// # Panics
    /// Panics if the progress mutex is poisoned.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let (finished, submitted) = *self.progress.lock().unwrap();
        if submitted == 0 {
            1.0
        } else {
            finished as f32 / submitted as f32
        }
    }
}
