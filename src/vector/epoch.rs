use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub(crate) type EpochPointer<T> = Rc<Epoch<T>>;

/// The triple describing one committed mutation: the buffer base observed
/// right after it, the boundary position it acted on, and the shift it
/// applied to every position at or past that boundary.
pub(crate) struct EpochRecord<T> {
    pub data: *mut T,
    pub index: usize,
    pub offset: isize,
}

/// One link of the forward-only mutation chain. A record is written once
/// per life (`store`), linked to its successor once (`link`), and after
/// that only fusion may rewrite it. `prev` is a weak backref used solely
/// to prove that a trailing record's second strong reference is its
/// predecessor's `next` and not a parked cursor; fusion is refused
/// without that proof.
pub(crate) struct Epoch<T> {
    data: Cell<*mut T>,
    index: Cell<usize>,
    offset: Cell<isize>,
    next: RefCell<Option<EpochPointer<T>>>,
    prev: RefCell<Weak<Epoch<T>>>,
}

impl<T> Epoch<T> {
    pub(crate) fn new(data: *mut T, index: usize, offset: isize) -> Self {
        Self {
            data: Cell::new(data),
            index: Cell::new(index),
            offset: Cell::new(offset),
            next: RefCell::new(None),
            prev: RefCell::new(Weak::new()),
        }
    }

    pub(crate) fn data(&self) -> *mut T {
        self.data.get()
    }

    pub(crate) fn index(&self) -> usize {
        self.index.get()
    }

    pub(crate) fn offset(&self) -> isize {
        self.offset.get()
    }

    pub(crate) fn next(&self) -> Option<EpochPointer<T>> {
        self.next.borrow().clone()
    }

    /// Overwrites a fresh or recycled record. Any successor left over from
    /// the record's previous life is detached and loses its backref, since
    /// that successor is now the head of whatever chain survives it.
    pub(crate) fn store(&self, record: EpochRecord<T>) {
        self.data.set(record.data);
        self.index.set(record.index);
        self.offset.set(record.offset);
        if let Some(stale) = self.next.borrow_mut().take() {
            *stale.prev.borrow_mut() = Weak::new();
        }
        *self.prev.borrow_mut() = Weak::new();
    }

    /// Appends `next` after the record behind `this`.
    pub(crate) fn link(this: &EpochPointer<T>, next: EpochPointer<T>) {
        debug_assert!(
            this.next.borrow().is_none(),
            "Invariant violation: epoch linked twice without an intervening store."
        );
        *next.prev.borrow_mut() = Rc::downgrade(this);
        *this.next.borrow_mut() = Some(next);
    }

    /// True when `this` still has a live predecessor whose `next` points
    /// at it. Together with a strong count of 2 this accounts for every
    /// handle on `this`, ruling out a cursor parked exactly here.
    pub(crate) fn has_chained_predecessor(this: &EpochPointer<T>) -> bool {
        this.prev
            .borrow()
            .upgrade()
            .is_some_and(|prev| prev.next().is_some_and(|next| Rc::ptr_eq(&next, this)))
    }

    /// Re-establishes `next`'s backref after a fusion rewired `this`'s
    /// successor link around the record that was folded in.
    pub(crate) fn relink_after_fuse(this: &EpochPointer<T>, next: &EpochPointer<T>) {
        *next.prev.borrow_mut() = Rc::downgrade(this);
    }

    /// Folds the immediate successor `x` into `self`: `self` keeps its own
    /// boundary, sums the offsets, and adopts `x`'s buffer pointer and
    /// successor, leaving `x` detached for recycling. Legal only when
    /// `x`'s boundary lies inside the region `self` already stretched (or
    /// exactly on `self`'s boundary when `self` contracted); two records
    /// acting on disjoint parts of the index line cannot be combined
    /// without mistranslating positions between them.
    pub(crate) fn try_fuse(&self, x: &Epoch<T>) -> bool {
        let index = self.index.get();
        let offset = self.offset.get();
        let fusable = if offset <= 0 {
            x.index.get() == index
        } else {
            x.index.get() >= index && x.index.get() <= index + offset as usize
        };
        if fusable {
            self.data.set(x.data.get());
            self.offset.set(offset + x.offset.get());
            *self.next.borrow_mut() = x.next.borrow_mut().take();
            true
        } else {
            false
        }
    }
}

impl<T> Default for Epoch<T> {
    fn default() -> Self {
        Self::new(std::ptr::null_mut(), 0, 0)
    }
}

impl<T> Drop for Epoch<T> {
    /* prevents recursive destruction of long chains */
    fn drop(&mut self) {
        let mut next = self.next.borrow_mut().take();
        while let Some(handle) = next {
            match Rc::try_unwrap(handle) {
                Ok(epoch) => next = epoch.next.borrow_mut().take(),
                Err(_) => break,
            }
        }
    }
}
