//! Keeps a layout up to date with the size of the element it is shown in.
//!
//! A [`ResizeSource`] reports the content size of an element and notifies
//! observers when it changes. [`attach()`] runs a solver on every change and
//! publishes the result through a [`LayoutHandle`], but only when it differs
//! from the previous layout.
//!
//! Everything here is single-threaded: notifications are delivered one after
//! the other, and each one recomputes the layout synchronously.

use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::ContainerSize;

pub type ResizeListener = Rc<dyn Fn(ContainerSize)>;

/// Identifies one observer registered with a [`ResizeSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Something with a size that can change, e.g. an on-screen element or a terminal.
pub trait ResizeSource {
    /// The current content-box size, excluding borders and padding.
    fn content_size(&self) -> ContainerSize;

    /// Calls `listener` with the new size after every size change, until
    /// [`unobserve()`](ResizeSource::unobserve) is called with the returned id.
    fn observe(&self, listener: ResizeListener) -> ObserverId;

    fn unobserve(&self, id: ObserverId);
}

/// A [`ResizeSource`] whose size is set by calling [`resize()`](Self::resize).
#[derive(Default)]
pub struct ManualResizeSource {
    size: Cell<ContainerSize>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ObserverId, ResizeListener)>>,
}

impl ManualResizeSource {
    pub fn new(size: ContainerSize) -> Self {
        Self {
            size: Cell::new(size),
            ..Self::default()
        }
    }

    /// Sets the size and notifies all observers, even if the size didn't change.
    pub fn resize(&self, size: ContainerSize) {
        self.size.set(size);
        // Listeners may (un)register observers, so don't hold the borrow while calling them
        let listeners: Vec<ResizeListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(size);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ResizeSource for ManualResizeSource {
    fn content_size(&self) -> ContainerSize {
        self.size.get()
    }

    fn observe(&self, listener: ResizeListener) -> ObserverId {
        let id = ObserverId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unobserve(&self, id: ObserverId) {
        self.listeners.borrow_mut().retain(|(other, _)| *other != id);
    }
}

type Solver<L> = Box<dyn Fn(ContainerSize) -> L>;
type Callback<L> = Box<dyn FnMut(&L)>;

struct DriverState<L> {
    solver: Solver<L>,
    size: ContainerSize,
    layout: L,
    callbacks: Vec<Callback<L>>,
}

/// A layout that follows the size of a [`ResizeSource`].
///
/// The handle stops observing its source when it is dropped or
/// [detached](Self::detach).
pub struct LayoutHandle<L> {
    state: Rc<RefCell<DriverState<L>>>,
    source: Rc<dyn ResizeSource>,
    observer: Option<ObserverId>,
}

/// Computes the layout for the current size of `source`, and recomputes it
/// whenever the size changes.
pub fn attach<L, F>(source: Rc<dyn ResizeSource>, solver: F) -> LayoutHandle<L>
where
    L: Clone + PartialEq + Debug + 'static,
    F: Fn(ContainerSize) -> L + 'static,
{
    let size = source.content_size();
    let layout = solver(size);
    debug!(?size, ?layout, "Attached layout driver");
    let state = Rc::new(RefCell::new(DriverState {
        solver: Box::new(solver),
        size,
        layout,
        callbacks: Vec::new(),
    }));
    let observer = Some(observe(&*source, &state));
    LayoutHandle {
        state,
        source,
        observer,
    }
}

fn observe<L>(source: &dyn ResizeSource, state: &Rc<RefCell<DriverState<L>>>) -> ObserverId
where
    L: Clone + PartialEq + Debug + 'static,
{
    let weak: Weak<RefCell<DriverState<L>>> = Rc::downgrade(state);
    source.observe(Rc::new(move |size| {
        if let Some(state) = weak.upgrade() {
            recompute(&state, Some(size));
        }
    }))
}

/// Runs the solver and notifies the callbacks if the layout changed.
fn recompute<L>(state: &RefCell<DriverState<L>>, size: Option<ContainerSize>)
where
    L: Clone + PartialEq + Debug,
{
    let mut layout = {
        let mut state = state.borrow_mut();
        if let Some(size) = size {
            state.size = size;
        }
        let layout = (state.solver)(state.size);
        if layout == state.layout {
            trace!(size = ?state.size, "Layout unchanged");
            return;
        }
        debug!(size = ?state.size, ?layout, "Publishing layout");
        state.layout = layout.clone();
        layout
    };

    // Callbacks may call back into the handle, and even publish a newer layout
    let mut callbacks = std::mem::take(&mut state.borrow_mut().callbacks);
    loop {
        for callback in &mut callbacks {
            callback(&layout);
            if state.borrow().layout != layout {
                break;
            }
        }
        let current = state.borrow().layout.clone();
        if current == layout {
            break;
        }
        trace!(?current, "Layout changed while publishing");
        layout = current;
    }
    let mut state = state.borrow_mut();
    callbacks.append(&mut state.callbacks);
    state.callbacks = callbacks;
}

impl<L> LayoutHandle<L>
where
    L: Clone + PartialEq + Debug + 'static,
{
    /// The most recently published layout.
    pub fn current_layout(&self) -> L {
        self.state.borrow().layout.clone()
    }

    /// The size the current layout was computed for.
    pub fn container_size(&self) -> ContainerSize {
        self.state.borrow().size
    }

    pub fn is_attached(&self) -> bool {
        self.observer.is_some()
    }

    /// Registers a callback that is called with every newly published layout.
    pub fn on_change(&self, callback: impl FnMut(&L) + 'static) {
        self.state.borrow_mut().callbacks.push(Box::new(callback));
    }

    /// Replaces the solver, e.g. because the number of cards changed, and
    /// recomputes the layout for the last known size.
    pub fn set_solver(&self, solver: impl Fn(ContainerSize) -> L + 'static) {
        self.state.borrow_mut().solver = Box::new(solver);
        recompute(&self.state, None);
    }

    /// Stops observing the current source and follows `source` instead.
    pub fn reattach(&mut self, source: Rc<dyn ResizeSource>) {
        self.release();
        self.source = source;
        self.observer = Some(observe(&*self.source, &self.state));
        debug!("Reattached layout driver");
        recompute(&self.state, Some(self.source.content_size()));
    }

    /// Stops observing the source. Same as dropping the handle.
    pub fn detach(self) {}
}

impl<L> LayoutHandle<L> {
    fn release(&mut self) {
        if let Some(id) = self.observer.take() {
            self.source.unobserve(id);
            debug!("Detached layout driver");
        }
    }
}

impl<L> Drop for LayoutHandle<L> {
    fn drop(&mut self) {
        self.release();
    }
}
