use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::epoch::EpochPointer;
use super::Vector;

/// ### -> `Cursor<T>` - A semistable position into a [`Vector<T>`].
///
/// A `Cursor` remembers which *element* it was aimed at, not which buffer
/// slot. It holds an index together with a shared handle into the vector's
/// mutation chain; whenever the cursor is used, it walks that chain forward
/// and shifts its index across every mutation committed since it last
/// looked. The result is that a cursor keeps referring to the same logical
/// element across reallocations, insertions, and erasures elsewhere in the
/// sequence, for as long as that element itself survives.
///
/// Cursors do not borrow the vector. Reading an element therefore goes
/// through [`Cursor::get`]/[`Cursor::get_mut`], which take the container
/// explicitly and bounds-check the translated position; a cursor whose
/// element has been erased, overwritten, or truncated away simply resolves
/// to `None`.
///
/// ### -> `Usage`
///
/// ```
/// use semivec::vector::prelude::*;
///
/// let mut values = Vector::from(vec![10, 20, 30]);
/// let second = values.cursor(1);
///
/// values.insert(0, 5);
/// values.reserve(1_000); // reallocation does not disturb the cursor
///
/// assert_eq!(second.position(), 2);
/// assert_eq!(second.get(&values), Some(&20));
/// ```
pub struct Cursor<T> {
    idx: Cell<usize>,
    pe: RefCell<EpochPointer<T>>,
}

impl<T> Cursor<T> {
    pub(crate) fn new(idx: usize, pe: EpochPointer<T>) -> Self {
        Self {
            idx: Cell::new(idx),
            pe: RefCell::new(pe),
        }
    }

    /// Walks forward to the current chain tail, shifting the held index
    /// across each record whose boundary it does not strictly precede.
    fn update(&self) {
        let mut pe = self.pe.borrow_mut();
        while let Some(next) = pe.next() {
            if self.idx.get() >= next.index() {
                self.idx.set(self.idx.get().wrapping_add_signed(next.offset()));
            }
            *pe = next;
        }
    }

    /// The element's current position in the sequence. A position at or
    /// past the vector's length means the referenced element is gone.
    pub fn position(&self) -> usize {
        self.update();
        self.idx.get()
    }

    /// Resolves the cursor against `vector`, returning the referenced
    /// element if it still exists there.
    pub fn get<'a>(&self, vector: &'a Vector<T>) -> Option<&'a T> {
        vector.as_slice().get(self.position())
    }

    /// Mutable counterpart of [`Cursor::get`].
    pub fn get_mut<'a>(&self, vector: &'a mut Vector<T>) -> Option<&'a mut T> {
        let position = self.position();
        vector.as_mut_slice().get_mut(position)
    }

    /// Raw pointer to the referenced slot. Valid only until the next
    /// mutation that reallocates the buffer, and not dereferenceable
    /// without the usual raw-pointer care.
    pub fn raw(&self) -> *mut T {
        self.update();
        self.pe.borrow().data().wrapping_add(self.idx.get())
    }

    /// Moves the cursor by `count` positions (negative moves it back).
    pub fn advance(&mut self, count: isize) {
        self.update();
        self.idx.set(self.idx.get().wrapping_add_signed(count));
    }

    /// Signed distance from `other` to `self`, in elements.
    pub fn offset_from(&self, other: &Self) -> isize {
        self.position().wrapping_sub(other.position()) as isize
    }

    #[cfg(test)]
    pub(crate) fn chain_len(&self) -> usize {
        let mut length = 1;
        let mut pe = self.pe.borrow().clone();
        while let Some(next) = pe.next() {
            length += 1;
            pe = next;
        }
        length
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self {
            idx: self.idx.clone(),
            pe: RefCell::new(self.pe.borrow().clone()),
        }
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("idx", &self.idx.get())
            .finish_non_exhaustive()
    }
}

impl<T> Add<isize> for &Cursor<T> {
    type Output = Cursor<T>;

    fn add(self, count: isize) -> Cursor<T> {
        self.update();
        Cursor::new(
            self.idx.get().wrapping_add_signed(count),
            self.pe.borrow().clone(),
        )
    }
}

impl<T> Sub<isize> for &Cursor<T> {
    type Output = Cursor<T>;

    fn sub(self, count: isize) -> Cursor<T> {
        self + count.wrapping_neg()
    }
}

impl<T> AddAssign<isize> for Cursor<T> {
    fn add_assign(&mut self, count: isize) {
        self.advance(count);
    }
}

impl<T> SubAssign<isize> for Cursor<T> {
    fn sub_assign(&mut self, count: isize) {
        self.advance(count.wrapping_neg());
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position() == other.position()
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> PartialOrd for Cursor<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position().cmp(&other.position())
    }
}
