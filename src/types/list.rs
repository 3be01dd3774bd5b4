use core::fmt;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Index;
use std::slice::Iter;
use std::vec::IntoIter;
use log::{error, trace};

///
/// Ordered container with value-equality lookup.
/// Duplicates are kept, lookups and removals act on the lowest matching index.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<T> {
    data: Vec<T>,
}

pub enum ListError {
    IndexOutOfRange { index: usize, len: usize },
}

impl Debug for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ListError::IndexOutOfRange { index, len } => write!(
                f,
                "the given index ({}) is higher than the length ({})",
                index, len
            ),
        }
    }
}

impl Error for ListError {}

fn fatal<R>(result: Result<R, ListError>) -> R {
    match result {
        Ok(x) => x,
        Err(e) => {
            error!("List access rejected ({}).", e);
            panic!("{}", e)
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index >= self.data.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> &T {
        fatal(self.try_get(index))
    }

    pub fn try_get(&self, index: usize) -> Result<&T, ListError> {
        self.check_index(index)?;
        Ok(&self.data[index])
    }

    pub fn insert(&mut self, v: T) {
        self.data.push(v);
    }

    pub fn clear(&mut self) {
        trace!("Clearing list ({} elements).", self.data.len());
        self.data.clear();
    }

    ///
    /// Removes the element at `index` and shifts the rest down by one.
    /// The index is validated before anything moves, a bad index panics
    /// and leaves the list untouched.
    ///
    pub fn pop(&mut self, index: usize) -> T {
        fatal(self.try_pop(index))
    }

    pub fn try_pop(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;
        trace!("Popping index {} (len={}).", index, self.data.len());
        Ok(self.data.remove(index))
    }

    /// Panics on an empty list.
    pub fn last(&self) -> &T {
        fatal(self.try_last())
    }

    pub fn try_last(&self) -> Result<&T, ListError> {
        // An empty list reports index 0, the smallest index it would need.
        self.data.last().ok_or(ListError::IndexOutOfRange { index: 0, len: 0 })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: PartialEq> List<T> {
    /// Lowest index holding a value equal to `v`.
    pub fn get_index(&self, v: &T) -> Option<usize> {
        self.data.iter().position(|x| x == v)
    }

    /// Drops the first element equal to `v`, if any.
    pub fn remove(&mut self, v: &T) {
        if let Some(index) = self.get_index(v) {
            self.data.remove(index);
            trace!("Removed first match at index {}.", index);
        }
    }

    pub fn contains(&self, v: &T) -> bool {
        self.get_index(v).is_some()
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
