mod storage;
mod sort;

use core::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::Index,
};

use dynarr_log::{debug, trace, warn};

use crate::{
    ArrayConfig,
    ArrayError,
    GrowthFactor,
    Result,
    Source,
    config::DEFAULT_CAPACITY,
};

use storage::Storage;

use ArrayError::{IndexOutOfRange, InvalidCapacity, NotComparable, NullInput};

/// Growable array with an explicit growth factor.
///
/// A full array grows to `floor(capacity * growth_factor) + 1` slots before
/// accepting another element. Capacity only shrinks through [`trim`].
///
/// Elements are reachable by index only. [`get`] hands out shared
/// references and [`to_array`] copies; nothing gives out a mutable alias
/// into the buffer. The array is not synchronized: shared mutation across
/// threads needs an external lock.
///
/// [`trim`]: DynamicArray::trim
/// [`get`]: DynamicArray::get
/// [`to_array`]: DynamicArray::to_array
pub struct DynamicArray<T> {
    storage: Storage<T>,
    len: usize,
    growth: GrowthFactor,
}

impl<T> DynamicArray<T> {

    /// Capacity 10, growth factor 1.5.
    pub fn new() -> Self {
        Self::with_storage(DEFAULT_CAPACITY, GrowthFactor::DEFAULT)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::from_config(&ArrayConfig::default().with_capacity(capacity))
    }

    pub fn with_growth(capacity: usize, growth_factor: f64) -> Result<Self> {
        Self::from_config(&ArrayConfig::new(capacity, growth_factor))
    }

    pub fn from_config(config: &ArrayConfig) -> Result<Self> {
        let growth = config.validate().inspect_err(|err| {
            warn!("rejected array config: {}", err);
        })?;
        Ok(Self::with_storage(config.capacity, growth))
    }

    /// Copies every element of `source`. Capacity equals the element count.
    pub fn from_source<S: Source<T>>(source: S) -> Result<Self> {
        Self::from_source_with_growth(source, GrowthFactor::DEFAULT.get())
    }

    pub fn from_source_with_growth<S: Source<T>>(source: S, growth_factor: f64) -> Result<Self> {
        let growth = GrowthFactor::new(growth_factor)?;
        let Some(count) = source.count() else {
            warn!("array source was absent");
            return Err(NullInput)
        };
        let mut array = Self::with_storage(count, growth);
        source.drain(|value| array.add(value));
        Ok(array)
    }

    fn with_storage(capacity: usize, growth: GrowthFactor) -> Self {
        Self {
            storage: Storage::new(capacity),
            len: 0,
            growth,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    #[inline(always)]
    pub fn growth_factor(&self) -> f64 {
        self.growth.get()
    }

    #[inline(always)]
    pub(crate) fn as_slice(&self) -> &[T] {
        unsafe { self.storage.as_slice(self.len) }
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { self.storage.as_mut_slice(self.len) }
    }

    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(IndexOutOfRange { index, bound: self.len })
        }
        Ok(())
    }

    fn relocate(&mut self, capacity: usize) {
        debug!("relocating array of {} elements: capacity {} -> {}", self.len, self.capacity(), capacity);
        unsafe { self.storage.relocate(self.len, capacity) };
    }

    #[inline]
    fn grow_if_full(&mut self) {
        if self.len == self.capacity() {
            self.relocate(self.growth.next_capacity(self.capacity()));
        }
    }

    /// Appends `value`, growing first if the array is full.
    pub fn add(&mut self, value: T) {
        self.grow_if_full();
        unsafe { self.storage.write(self.len, value) };
        self.len += 1;
    }

    /// Inserts `value` at `index`, shifting later elements right. `index`
    /// may equal [`len`](Self::len).
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(IndexOutOfRange { index, bound: self.len + 1 })
        }
        self.grow_if_full();
        unsafe { self.storage.insert_element(value, index, self.len) };
        self.len += 1;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let value = unsafe { self.storage.remove_element(index, self.len) };
        self.len -= 1;
        Ok(value)
    }

    /// Overwrites the element at `index` and returns the previous one.
    pub fn replace(&mut self, index: usize, value: T) -> Result<T> {
        self.check_index(index)?;
        Ok(core::mem::replace(&mut self.as_mut_slice()[index], value))
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        unsafe { self.storage.drop_in_place(len) };
    }

    /// Appends every element of `source`.
    ///
    /// Grows at most once, to `floor(capacity * growth_factor) + 1` or to
    /// the exact total if that is not enough. An absent source leaves the
    /// array untouched.
    pub fn add_all<S: Source<T>>(&mut self, source: S) -> Result<()> {
        let Some(count) = source.count() else {
            warn!("array source was absent");
            return Err(NullInput)
        };
        let required = self.len.saturating_add(count);
        if let Some(capacity) = self.growth.grow(self.capacity(), required) {
            self.relocate(capacity);
        }
        source.drain(|value| self.add(value));
        Ok(())
    }

    /// Grows the buffer to exactly `capacity` slots.
    pub fn grow_to(&mut self, capacity: usize) -> Result<()> {
        if capacity <= self.capacity() {
            return Err(InvalidCapacity { requested: capacity, current: Some(self.capacity()) })
        }
        self.relocate(capacity);
        Ok(())
    }

    /// Shrinks the buffer to exactly [`len`](Self::len) slots.
    pub fn trim(&mut self) {
        if self.capacity() != self.len {
            self.relocate(self.len);
        }
    }

    /// Sorts in place by `compare`. Not stable.
    pub fn sort_by<F>(&mut self, mut compare: F)
        where
            F: FnMut(&T, &T) -> Ordering,
    {
        trace!("sorting {} elements", self.len);
        sort::quicksort(self.as_mut_slice(), &mut compare);
    }

    /// Sorts in place by the natural order of `T`. Not stable.
    pub fn sort(&mut self)
        where
            T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Sorts in place by `T`'s partial order.
    ///
    /// Fails without touching the array if some element is not comparable
    /// with itself, such as a NaN float. Two distinct elements without an
    /// ordering between them are treated as the pivot being the smaller.
    pub fn try_sort(&mut self) -> Result<()>
        where
            T: PartialOrd,
    {
        if self.as_slice().iter().any(|value| value.partial_cmp(value).is_none()) {
            warn!("refusing to sort: element has no ordering");
            return Err(NotComparable)
        }
        self.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Less));
        Ok(())
    }

    /// Copies the elements into a new `Vec`.
    pub fn to_array(&self) -> Vec<T>
        where
            T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Copies the elements over the front of `destination` and returns it,
    /// keeping anything past [`len`](Self::len). A destination shorter than
    /// the array is replaced by a fresh copy.
    pub fn to_array_into(&self, mut destination: Vec<T>) -> Vec<T>
        where
            T: Clone,
    {
        if destination.len() < self.len {
            return self.to_array()
        }
        destination[..self.len].clone_from_slice(self.as_slice());
        destination
    }
}

impl<T> Drop for DynamicArray<T> {

    fn drop(&mut self) {
        unsafe { self.storage.drop_in_place(self.len) };
    }
}

impl<T> Default for DynamicArray<T> {

    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {

    fn clone(&self) -> Self {
        let mut array = Self::with_storage(self.capacity(), self.growth);
        for value in self.as_slice() {
            array.add(value.clone());
        }
        array
    }
}

impl<T> Index<usize> for DynamicArray<T> {

    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {

    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {

    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Debug> Debug for DynamicArray<T> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Display> Display for DynamicArray<T> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.as_slice().iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use std::{cell::Cell, rc::Rc};

    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {

        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn growth_keeps_elements_in_place() {
        let mut array = DynamicArray::with_growth(4, 2.0).unwrap();
        for i in 0..4 {
            array.add(i);
        }
        assert_eq!(array.capacity(), 4);
        array.add(4);
        assert_eq!(array.capacity(), 9);
        assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn insert_into_full_array_grows_first() {
        let mut array = DynamicArray::with_capacity(2).unwrap();
        array.add('a');
        array.add('c');
        array.insert(1, 'b').unwrap();
        assert_eq!(array.capacity(), 4);
        assert_eq!(array.as_slice(), &['a', 'b', 'c']);
    }

    #[test]
    fn remove_replace_and_clear_drop_exactly_once() {
        let drops = Rc::new(Cell::new(0));
        let mut array = DynamicArray::new();
        for _ in 0..5 {
            array.add(DropCounter(drops.clone()));
        }
        drop(array.remove(0).unwrap());
        assert_eq!(drops.get(), 1);
        drop(array.replace(1, DropCounter(drops.clone())).unwrap());
        assert_eq!(drops.get(), 2);
        array.clear();
        assert_eq!(drops.get(), 6);
        assert_eq!(array.capacity(), 10);
        array.add(DropCounter(drops.clone()));
        drop(array);
        assert_eq!(drops.get(), 7);
    }

    #[test]
    fn relocation_does_not_drop_moved_elements() {
        let drops = Rc::new(Cell::new(0));
        let mut array = DynamicArray::with_capacity(1).unwrap();
        for _ in 0..20 {
            array.add(DropCounter(drops.clone()));
        }
        array.trim();
        array.grow_to(40).unwrap();
        assert_eq!(drops.get(), 0);
        drop(array);
        assert_eq!(drops.get(), 20);
    }

    #[test]
    fn add_all_grows_once() {
        let mut array = DynamicArray::with_capacity(10).unwrap();
        array.add_all(&[0; 8]).unwrap();
        assert_eq!(array.capacity(), 10);
        array.add_all(&[0; 4]).unwrap();
        assert_eq!(array.capacity(), 16);
        array.add_all(&[0; 30]).unwrap();
        assert_eq!(array.capacity(), 42);
        assert_eq!(array.len(), 42);
    }

    #[test]
    fn add_all_filling_exactly_does_not_grow() {
        let mut array = DynamicArray::with_capacity(3).unwrap();
        array.add(1);
        array.add_all(vec![2, 3]).unwrap();
        assert_eq!(array.capacity(), 3);
        assert_eq!(array.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn empty_source_then_add() {
        let mut array = DynamicArray::<u8>::from_source(Vec::new()).unwrap();
        assert_eq!(array.capacity(), 0);
        array.add(7);
        assert_eq!(array.capacity(), 1);
        assert_eq!(array.as_slice(), &[7]);
    }

    #[test]
    fn clone_keeps_capacity_and_growth() {
        let mut array = DynamicArray::with_growth(8, 1.25).unwrap();
        array.add(String::from("x"));
        let cloned = array.clone();
        assert_eq!(cloned.capacity(), 8);
        assert_eq!(cloned.growth_factor(), 1.25);
        assert_eq!(cloned, array);
    }

    #[test]
    fn zero_sized_elements() {
        let mut array = DynamicArray::with_capacity(1).unwrap();
        for _ in 0..100 {
            array.add(());
        }
        array.insert(50, ()).unwrap();
        array.remove(0).unwrap();
        assert_eq!(array.len(), 100);
        array.trim();
        assert_eq!(array.capacity(), 100);
    }
}
