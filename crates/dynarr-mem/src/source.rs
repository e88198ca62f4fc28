use crate::DynamicArray;

/// Anything a [`DynamicArray`] can be built from or extended with.
///
/// `Option<S>` is a source too, with `None` standing for an absent input that
/// operations reject with [`ArrayError::NullInput`](crate::ArrayError::NullInput).
pub trait Source<T> {

    /// Number of elements [`drain`](Source::drain) yields, `None` if the
    /// source is absent.
    fn count(&self) -> Option<usize>;

    /// Passes every element to `sink`, in order.
    fn drain(self, sink: impl FnMut(T));
}

impl<T: Clone> Source<T> for &[T] {

    #[inline(always)]
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }

    fn drain(self, mut sink: impl FnMut(T)) {
        for value in self {
            sink(value.clone())
        }
    }
}

impl<T: Clone, const N: usize> Source<T> for &[T; N] {

    #[inline(always)]
    fn count(&self) -> Option<usize> {
        Some(N)
    }

    fn drain(self, sink: impl FnMut(T)) {
        self.as_slice().drain(sink)
    }
}

impl<T, const N: usize> Source<T> for [T; N] {

    #[inline(always)]
    fn count(&self) -> Option<usize> {
        Some(N)
    }

    fn drain(self, sink: impl FnMut(T)) {
        self.into_iter().for_each(sink)
    }
}

impl<T> Source<T> for Vec<T> {

    #[inline(always)]
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }

    fn drain(self, sink: impl FnMut(T)) {
        self.into_iter().for_each(sink)
    }
}

impl<T: Clone> Source<T> for &Vec<T> {

    #[inline(always)]
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }

    fn drain(self, sink: impl FnMut(T)) {
        self.as_slice().drain(sink)
    }
}

impl<T: Clone> Source<T> for &DynamicArray<T> {

    #[inline(always)]
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }

    fn drain(self, sink: impl FnMut(T)) {
        self.as_slice().drain(sink)
    }
}

impl<T, S: Source<T>> Source<T> for Option<S> {

    #[inline(always)]
    fn count(&self) -> Option<usize> {
        self.as_ref()?.count()
    }

    fn drain(self, sink: impl FnMut(T)) {
        if let Some(source) = self {
            source.drain(sink)
        }
    }
}

/// Slice with gaps. Only the present elements are yielded, in their original
/// relative order, wherever the gaps are.
#[derive(Clone, Copy, Debug)]
pub struct Sparse<'a, T>(pub &'a [Option<T>]);

impl<T: Clone> Source<T> for Sparse<'_, T> {

    fn count(&self) -> Option<usize> {
        Some(self.0.iter().filter(|slot| slot.is_some()).count())
    }

    fn drain(self, mut sink: impl FnMut(T)) {
        for value in self.0.iter().flatten() {
            sink(value.clone())
        }
    }
}
