use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identifier of a native object
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandleId(u64);

impl HandleId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a native object represents
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Geometry,
    Volume,
    Renderer,
}

#[derive(Debug, Default)]
struct TableInner {
    next: u64,
    live: HashMap<HandleId, HandleKind>,
}

/// Registry of live native objects
///
/// Every `NativeHandle` is allocated here and removes itself on drop, so
/// `live_count` observes leaks directly.
#[derive(Debug, Clone, Default)]
pub struct HandleTable {
    inner: Arc<Mutex<TableInner>>,
}

impl HandleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&self, kind: HandleKind) -> NativeHandle {
        let mut inner = self.inner.lock();
        inner.next += 1;
        let id = HandleId(inner.next);
        inner.live.insert(id, kind);

        NativeHandle {
            id,
            kind,
            table: Arc::clone(&self.inner),
        }
    }

    pub fn live_count(&self) -> usize {
        self.inner.lock().live.len()
    }

    pub fn is_live(&self, id: HandleId) -> bool {
        self.inner.lock().live.contains_key(&id)
    }
}

/// Owning handle to a native object, released when dropped
pub struct NativeHandle {
    id: HandleId,
    kind: HandleKind,
    table: Arc<Mutex<TableInner>>,
}

impl NativeHandle {
    pub fn id(&self) -> HandleId {
        self.id
    }

    pub fn kind(&self) -> HandleKind {
        self.kind
    }
}

impl fmt::Debug for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeHandle")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}

impl Drop for NativeHandle {
    fn drop(&mut self) {
        self.table.lock().live.remove(&self.id);
    }
}
