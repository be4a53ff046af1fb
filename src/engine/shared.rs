//! SharedEngine - The geometry engine shared by a builder and its Nodes.
//!
//! Nodes release their handles when dropped. A Node can be dropped while the
//! engine is borrowed (a caller holding a guard, or unwinding out of a
//! render), so releases that cannot run immediately are queued and applied
//! on the next borrow.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::layout::GeometryEngine;
use crate::types::Handle;

#[derive(Clone)]
pub struct SharedEngine {
    engine: Rc<RefCell<dyn GeometryEngine>>,
    released: Rc<RefCell<Vec<Handle>>>,
}

impl SharedEngine {
    pub fn new<E: GeometryEngine + 'static>(engine: E) -> Self {
        Self {
            engine: Rc::new(RefCell::new(engine)),
            released: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Borrow the engine for reading, applying queued releases first if possible.
    ///
    /// # Panics
    ///
    /// If the engine is mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, dyn GeometryEngine + 'static> {
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            self.flush_released(&mut *engine);
        }
        self.engine.borrow()
    }

    /// Borrow the engine for writing, applying queued releases first.
    ///
    /// # Panics
    ///
    /// If the engine is already borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, dyn GeometryEngine + 'static> {
        let mut engine = self.engine.borrow_mut();
        self.flush_released(&mut *engine);
        engine
    }

    /// Number of releases waiting for the engine to become free.
    pub fn pending_releases(&self) -> usize {
        self.released.borrow().len()
    }

    /// Whether both values refer to the same engine.
    pub fn same_engine(&self, other: &SharedEngine) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.engine), Rc::as_ptr(&other.engine))
    }

    /// Release `handle` now, or queue it if the engine is borrowed.
    pub(super) fn release(&self, handle: Handle) {
        match self.engine.try_borrow_mut() {
            Ok(mut engine) => {
                self.flush_released(&mut *engine);
                engine.release(handle);
            }
            Err(_) => {
                tracing::warn!(handle = %handle, "engine busy, deferring handle release");
                self.released.borrow_mut().push(handle);
            }
        }
    }

    fn flush_released(&self, engine: &mut dyn GeometryEngine) {
        for handle in self.released.borrow_mut().drain(..) {
            engine.release(handle);
        }
    }
}
