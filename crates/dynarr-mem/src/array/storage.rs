use core::{
    mem::MaybeUninit,
    ptr,
    slice,
};

/// Fixed size slot buffer. Tracks no length: callers pass the number of
/// leading initialized slots to every operation that reads them.
pub(crate) struct Storage<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> Storage<T> {

    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Box::new_uninit_slice(capacity),
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Moves the first `len` elements into a new buffer of `capacity` slots.
    ///
    /// # Safety
    /// The first `len` slots must be initialized and `len <= capacity`.
    pub unsafe fn relocate(&mut self, len: usize, capacity: usize) {
        debug_assert!(len <= capacity && len <= self.capacity());
        let mut slots = Box::new_uninit_slice(capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.slots.as_ptr(), slots.as_mut_ptr(), len);
        }
        self.slots = slots;
    }

    /// # Safety
    /// `index` must be an uninitialized slot, or its value must already be moved out.
    #[inline(always)]
    pub unsafe fn write(&mut self, index: usize, value: T) {
        self.slots[index].write(value);
    }

    /// Shifts `[index, len)` one slot right and writes `value` at `index`.
    ///
    /// # Safety
    /// The first `len` slots must be initialized, `index <= len` and `len < capacity`.
    pub unsafe fn insert_element(&mut self, value: T, index: usize, len: usize) {
        debug_assert!(index <= len && len < self.capacity());
        unsafe {
            let base = self.slots.as_mut_ptr();
            ptr::copy(base.add(index), base.add(index + 1), len - index);
        }
        self.slots[index].write(value);
    }

    /// Moves the element at `index` out and shifts `[index + 1, len)` one
    /// slot left, leaving slot `len - 1` uninitialized.
    ///
    /// # Safety
    /// The first `len` slots must be initialized and `index < len`.
    pub unsafe fn remove_element(&mut self, index: usize, len: usize) -> T {
        debug_assert!(index < len && len <= self.capacity());
        unsafe {
            let value = self.slots[index].assume_init_read();
            let base = self.slots.as_mut_ptr();
            ptr::copy(base.add(index + 1), base.add(index), len - index - 1);
            value
        }
    }

    /// # Safety
    /// The first `len` slots must be initialized.
    #[inline(always)]
    pub unsafe fn as_slice(&self, len: usize) -> &[T] {
        debug_assert!(len <= self.capacity());
        unsafe { slice::from_raw_parts(self.slots.as_ptr() as *const T, len) }
    }

    /// # Safety
    /// The first `len` slots must be initialized.
    #[inline(always)]
    pub unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        debug_assert!(len <= self.capacity());
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr() as *mut T, len) }
    }

    /// Drops the first `len` elements, leaving their slots uninitialized.
    ///
    /// # Safety
    /// The first `len` slots must be initialized and must not be read again.
    pub unsafe fn drop_in_place(&mut self, len: usize) {
        unsafe {
            ptr::drop_in_place(self.as_mut_slice(len) as *mut [T]);
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn insert_and_remove_shift_neighbours() {
        let mut storage = Storage::new(4);
        unsafe {
            storage.write(0, 1);
            storage.write(1, 3);
            storage.insert_element(2, 1, 2);
            assert_eq!(storage.as_slice(3), &[1, 2, 3]);
            assert_eq!(storage.remove_element(0, 3), 1);
            assert_eq!(storage.as_slice(2), &[2, 3]);
        }
    }

    #[test]
    fn relocate_keeps_prefix() {
        let mut storage = Storage::new(2);
        unsafe {
            storage.write(0, String::from("a"));
            storage.write(1, String::from("b"));
            storage.relocate(2, 5);
            assert_eq!(storage.capacity(), 5);
            assert_eq!(storage.as_slice(2), &["a", "b"]);
            storage.drop_in_place(2);
        }
    }
}
