#![warn(missing_docs)]
#![doc(test(attr(deny(warnings))))]

//! A double-ended queue of linked nodes, each node allocated through a
//! pluggable allocator.
//!
//! # [`LinkedDeque`] vs [`VecDeque`]
//!
//! ## Stability of elements
//!
//! The standard [`VecDeque`] keeps its elements in a ring buffer, moving them
//! around whenever the buffer grows. Every element of a [`LinkedDeque`] lives
//! in its own node and never moves until it is popped.
//!
//! ## Splicing
//!
//! Appending a whole [`VecDeque`] to another one moves every element.
//! [`LinkedDeque::append`] relinks the two boundary nodes instead, so it runs
//! in constant time no matter how long either deque is.
//!
//! ## Allocation
//!
//! Each push asks the deque's [`NodeAllocator`] for exactly one node, and
//! each pop gives exactly one node back. The default allocator, [`Heap`],
//! forwards to the global allocator; any other strategy can be plugged in
//! through [`LinkedDeque::new_in`].
//!
//! [`VecDeque`]: std::collections::VecDeque

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

pub use crate::alloc::{Heap, NodeAllocator};
pub use crate::cursor::{Cursor, CursorMut, RevCursor, RevCursorMut};
pub use crate::error::{Error, Result};
pub use crate::iter::{IntoIter, Iter, IterMut};

mod alloc;
mod cursor;
mod error;
mod iter;

#[cfg(test)]
mod tracker;

/// A non-owning link to a neighbor node. `None` marks a chain boundary.
type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    prev: Link<T>,
    next: Link<T>,
}

/// A double-ended queue implemented as a doubly-linked list.
///
/// A `LinkedDeque` with a known list of items can be initialized from an array:
///
/// ```
/// use linked_deque::LinkedDeque;
///
/// let deq = LinkedDeque::from([-1, 0, 1]);
/// assert_eq!(deq, [-1, 0, 1]);
/// ```
///
/// The second type parameter is the allocator every node is obtained from.
pub struct LinkedDeque<T, A: NodeAllocator = Heap> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    alloc: A,
    marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send, A: NodeAllocator + Send> Send for LinkedDeque<T, A> {}
unsafe impl<T: Sync, A: NodeAllocator + Sync> Sync for LinkedDeque<T, A> {}

impl<T> LinkedDeque<T> {
    /// Creates an empty deque backed by the global heap.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let deque: LinkedDeque<u32> = LinkedDeque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::new_in(Heap)
    }
}

impl<T, A: NodeAllocator> LinkedDeque<T, A> {
    /// Creates an empty deque that obtains its nodes from `alloc`.
    ///
    /// Nothing is allocated until the first element is pushed.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::{Heap, LinkedDeque};
    ///
    /// let mut deque = LinkedDeque::new_in(Heap);
    /// deque.push_back('a');
    /// assert_eq!(deque.len(), 1);
    /// ```
    pub fn new_in(alloc: A) -> Self {
        LinkedDeque {
            head: None,
            tail: None,
            len: 0,
            alloc,
            marker: PhantomData,
        }
    }

    /// Creates a deque holding the items of `iter`, in order, with nodes
    /// obtained from `alloc`.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::{Heap, LinkedDeque};
    ///
    /// let deque = LinkedDeque::from_iter_in(1..=3, Heap);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn from_iter_in<I: IntoIterator<Item = T>>(iter: I, alloc: A) -> Self {
        let mut deque = Self::new_in(alloc);
        deque.extend(iter);
        deque
    }

    /// Returns a reference to the underlying allocator.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns the number of elements in the deque.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let mut deque = LinkedDeque::new();
    /// assert_eq!(deque.len(), 0);
    /// deque.push_back(1);
    /// assert_eq!(deque.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque holds no elements.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let mut deque = LinkedDeque::new();
    /// assert!(deque.is_empty());
    /// deque.push_front(1);
    /// assert!(!deque.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Provides a reference to the front element.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyContainer`] if the deque is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::{Error, LinkedDeque};
    ///
    /// let mut d = LinkedDeque::new();
    /// assert_eq!(d.peek_front(), Err(Error::EmptyContainer));
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    /// assert_eq!(d.peek_front(), Ok(&1));
    /// ```
    pub fn peek_front(&self) -> Result<&T> {
        self.head
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(Error::EmptyContainer)
    }

    /// Provides a reference to the back element.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyContainer`] if the deque is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::{Error, LinkedDeque};
    ///
    /// let mut d = LinkedDeque::new();
    /// assert_eq!(d.peek_back(), Err(Error::EmptyContainer));
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    /// assert_eq!(d.peek_back(), Ok(&2));
    /// ```
    pub fn peek_back(&self) -> Result<&T> {
        self.tail
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(Error::EmptyContainer)
    }

    /// Provides a mutable reference to the front element.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyContainer`] if the deque is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let mut d = LinkedDeque::from([1, 2]);
    /// if let Ok(x) = d.front_mut() {
    ///     *x = 9;
    /// }
    /// assert_eq!(d.peek_front(), Ok(&9));
    /// ```
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.head
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
            .ok_or(Error::EmptyContainer)
    }

    /// Provides a mutable reference to the back element.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyContainer`] if the deque is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let mut d = LinkedDeque::from([1, 2]);
    /// if let Ok(x) = d.back_mut() {
    ///     *x = 9;
    /// }
    /// assert_eq!(d.peek_back(), Ok(&9));
    /// ```
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.tail
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
            .ok_or(Error::EmptyContainer)
    }

    /// Prepends an element to the deque.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let mut d = LinkedDeque::new();
    /// d.push_front(1);
    /// d.push_front(2);
    /// assert_eq!(d.peek_front(), Ok(&2));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let node = alloc::emplace(
            &mut self.alloc,
            Node {
                value,
                prev: None,
                next: self.head,
            },
        );

        match self.head {
            Some(head) => unsafe { (*head.as_ptr()).prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends an element to the back of the deque.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let mut buf = LinkedDeque::new();
    /// buf.push_back(1);
    /// buf.push_back(3);
    /// assert_eq!(buf.peek_back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let node = alloc::emplace(
            &mut self.alloc,
            Node {
                value,
                prev: self.tail,
                next: None,
            },
        );

        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Prepends a clone of `value` to the deque, leaving `value` untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let name = String::from("front");
    /// let mut d = LinkedDeque::new();
    /// d.push_front_cloned(&name);
    /// assert_eq!(d, [name]);
    /// ```
    pub fn push_front_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push_front(value.clone());
    }

    /// Appends a clone of `value` to the back of the deque, leaving `value`
    /// untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let name = String::from("back");
    /// let mut d = LinkedDeque::new();
    /// d.push_back_cloned(&name);
    /// assert_eq!(d, [name]);
    /// ```
    pub fn push_back_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push_back(value.clone());
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyContainer`] if the deque is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::{Error, LinkedDeque};
    ///
    /// let mut d = LinkedDeque::new();
    /// d.push_back(1);
    /// d.push_back(2);
    ///
    /// assert_eq!(d.pop_front(), Ok(1));
    /// assert_eq!(d.pop_front(), Ok(2));
    /// assert_eq!(d.pop_front(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::EmptyContainer)?;
        let node = unsafe { alloc::vacate(&mut self.alloc, head) };

        self.head = node.next;
        match node.next {
            Some(next) => unsafe { (*next.as_ptr()).prev = None },
            None => self.tail = None,
        }
        self.len -= 1;

        Ok(node.value)
    }

    /// Removes the last element from the deque and returns it.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyContainer`] if the deque is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::{Error, LinkedDeque};
    ///
    /// let mut buf = LinkedDeque::new();
    /// assert_eq!(buf.pop_back(), Err(Error::EmptyContainer));
    /// buf.push_back(1);
    /// buf.push_back(3);
    /// assert_eq!(buf.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::EmptyContainer)?;
        let node = unsafe { alloc::vacate(&mut self.alloc, tail) };

        self.tail = node.prev;
        match node.prev {
            Some(prev) => unsafe { (*prev.as_ptr()).next = None },
            None => self.head = None,
        }
        self.len -= 1;

        Ok(node.value)
    }

    /// Clears the deque, dropping every element and releasing every node.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let mut deque = LinkedDeque::new();
    /// deque.push_back(1);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// ```
    pub fn clear(&mut self) {
        while self.pop_back().is_ok() {}
    }

    /// Moves all the elements of `other` to the back of `self`, leaving
    /// `other` empty.
    ///
    /// Only the boundary links are rewritten: no element is moved, cloned or
    /// reallocated, so this runs in *O*(1).
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let mut a = LinkedDeque::from([1, 2, 3]);
    /// let mut b = LinkedDeque::from([4, 5]);
    ///
    /// a.append(&mut b);
    /// assert_eq!(a, [1, 2, 3, 4, 5]);
    /// assert!(b.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        let Some(other_head) = other.head.take() else {
            return;
        };

        match self.tail {
            Some(tail) => unsafe {
                (*tail.as_ptr()).next = Some(other_head);
                (*other_head.as_ptr()).prev = Some(tail);
            },
            None => self.head = Some(other_head),
        }
        self.tail = other.tail.take();
        self.len += mem::replace(&mut other.len, 0);
    }

    /// Appends a clone of every element of `other`, in order, to the back of
    /// `self`. `other` is left unchanged.
    ///
    /// Runs in *O*(*m*), *m* being the length of `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let mut a = LinkedDeque::from([1, 2]);
    /// let b = LinkedDeque::from([3, 4]);
    ///
    /// a.append_cloned(&b);
    /// assert_eq!(a, [1, 2, 3, 4]);
    /// assert_eq!(b, [3, 4]);
    /// ```
    pub fn append_cloned<B: NodeAllocator>(&mut self, other: &LinkedDeque<T, B>)
    where
        T: Clone,
    {
        for value in other {
            self.push_back_cloned(value);
        }
    }

    /// Drops the current contents of `self`, then takes over the nodes of
    /// `other`, leaving it empty.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let mut a = LinkedDeque::from([1, 2, 3]);
    /// let mut b = LinkedDeque::from([7, 8]);
    ///
    /// a.take_from(&mut b);
    /// assert_eq!(a, [7, 8]);
    /// assert!(b.is_empty());
    /// ```
    pub fn take_from(&mut self, other: &mut Self) {
        self.clear();
        self.append(other);
    }

    /// Returns `true` if the deque contains an element equal to `x`.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let deque = LinkedDeque::from([0, 1, 2]);
    /// assert!(deque.contains(&1));
    /// assert!(!deque.contains(&10));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let deque = LinkedDeque::from([5, 3, 4]);
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = deque.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.tail, self.len)
    }

    /// Returns a front-to-back iterator that allows modifying each value.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let mut deque = LinkedDeque::from([5, 3, 4]);
    /// for num in deque.iter_mut() {
    ///     *num -= 2;
    /// }
    /// assert_eq!(deque, [3, 1, 2]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head, self.tail, self.len)
    }

    /// Returns a cursor on the front element, or on the end sentinel if the
    /// deque is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let deque = LinkedDeque::from([1, 2]);
    /// let mut cursor = deque.begin();
    /// let mut seen = Vec::new();
    /// while cursor != deque.end() {
    ///     seen.push(*cursor.current()?);
    ///     cursor.move_next()?;
    /// }
    /// assert_eq!(seen, [1, 2]);
    /// # Ok::<(), linked_deque::Error>(())
    /// ```
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.head)
    }

    /// Returns a cursor on the end sentinel, one past the back element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(None)
    }

    /// Returns a cursor on the front element that can modify the values it
    /// visits.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let mut deque = LinkedDeque::from([1, 2, 3]);
    /// let mut cursor = deque.begin_mut();
    /// while !cursor.is_end() {
    ///     *cursor.current_mut()? *= 10;
    ///     cursor.move_next()?;
    /// }
    /// assert_eq!(deque, [10, 20, 30]);
    /// # Ok::<(), linked_deque::Error>(())
    /// ```
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.head)
    }

    /// Returns a cursor on the back element that walks toward the front, or
    /// on the sentinel if the deque is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let deque = LinkedDeque::from([1, 2, 3]);
    /// let mut cursor = deque.rbegin();
    /// let mut seen = Vec::new();
    /// while cursor != deque.rend() {
    ///     seen.push(*cursor.current()?);
    ///     cursor.move_next()?;
    /// }
    /// assert_eq!(seen, [3, 2, 1]);
    /// # Ok::<(), linked_deque::Error>(())
    /// ```
    pub fn rbegin(&self) -> RevCursor<'_, T> {
        RevCursor::new(self.tail)
    }

    /// Returns a reverse cursor on the sentinel before the front element.
    pub fn rend(&self) -> RevCursor<'_, T> {
        RevCursor::new(None)
    }

    /// Returns a cursor on the back element that walks toward the front and
    /// can modify the values it visits.
    ///
    /// # Example
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let mut deque = LinkedDeque::from([1, 2, 3]);
    /// let mut cursor = deque.rbegin_mut();
    /// let mut next = 0;
    /// while !cursor.is_end() {
    ///     next += 1;
    ///     *cursor.current_mut()? = next;
    ///     cursor.move_next()?;
    /// }
    /// assert_eq!(deque, [3, 2, 1]);
    /// # Ok::<(), linked_deque::Error>(())
    /// ```
    pub fn rbegin_mut(&mut self) -> RevCursorMut<'_, T> {
        RevCursorMut::new(self.tail)
    }

    /// Walks the chain both ways and checks it against `head`, `tail` and
    /// `len`.
    #[cfg(test)]
    fn assert_linked(&self) {
        assert_eq!(self.head.is_none(), self.tail.is_none(), "head/tail");
        assert_eq!(self.head.is_none(), self.len == 0, "head/len");

        let mut count = 0;
        let mut prev: Link<T> = None;
        let mut cur = self.head;
        while let Some(node) = cur {
            let node_ref = unsafe { node.as_ref() };
            assert_eq!(node_ref.prev, prev, "prev link of node {count}");
            prev = cur;
            cur = node_ref.next;
            count += 1;
        }
        assert_eq!(prev, self.tail, "tail");
        assert_eq!(count, self.len, "forward walk");

        let mut count = 0;
        let mut cur = self.tail;
        while let Some(node) = cur {
            cur = unsafe { node.as_ref().prev };
            count += 1;
        }
        assert_eq!(count, self.len, "backward walk");
    }
}

impl<T, A: NodeAllocator + Default> Default for LinkedDeque<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T, A: NodeAllocator> Drop for LinkedDeque<T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, A: NodeAllocator + Clone> Clone for LinkedDeque<T, A> {
    fn clone(&self) -> Self {
        let mut deque = Self::new_in(self.alloc.clone());
        deque.append_cloned(self);
        deque
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.append_cloned(source);
    }
}

impl<T: fmt::Debug, A: NodeAllocator> fmt::Debug for LinkedDeque<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Writes every element followed by a space, front to back, then a line
/// break.
///
/// ```
/// use linked_deque::LinkedDeque;
///
/// let deque = LinkedDeque::from([1, 2, 3]);
/// assert_eq!(deque.to_string(), "1 2 3 \n");
/// ```
impl<T: fmt::Display, A: NodeAllocator> fmt::Display for LinkedDeque<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{value} ")?;
        }
        writeln!(f)
    }
}

impl<T, A: NodeAllocator> IntoIterator for LinkedDeque<T, A> {
    type Item = T;

    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, A: NodeAllocator> IntoIterator for &'a LinkedDeque<T, A> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: NodeAllocator> IntoIterator for &'a mut LinkedDeque<T, A> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

macro_rules! impl_partial_eq {
    ([$($n:tt)*] $rhs:ty) => {
        impl<T, U, A: NodeAllocator, $($n)*> PartialEq<$rhs> for LinkedDeque<T, A>
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: & $rhs) -> bool {
                self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
            }
        }
    };
}

impl_partial_eq!([const N: usize] [U; N]);
impl_partial_eq!([const N: usize] &[U; N]);
impl_partial_eq!([const N: usize] &mut [U; N]);
impl_partial_eq!([] & [U]);
impl_partial_eq!([] &mut [U]);
impl_partial_eq!([] Vec<U>);
impl_partial_eq!([B: NodeAllocator] LinkedDeque<U, B>);

impl<T: Eq, A: NodeAllocator> Eq for LinkedDeque<T, A> {}

impl<T: PartialOrd, A: NodeAllocator> PartialOrd for LinkedDeque<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, A: NodeAllocator> Ord for LinkedDeque<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, A: NodeAllocator> Hash for LinkedDeque<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T, A: NodeAllocator> Extend<T> for LinkedDeque<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: 'a + Clone, A: NodeAllocator> Extend<&'a T> for LinkedDeque<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back_cloned(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedDeque<T> {
    /// Converts a `[T; N]` into a `LinkedDeque<T>`, pushing the items back in
    /// order.
    ///
    /// ```
    /// use linked_deque::LinkedDeque;
    ///
    /// let deq = LinkedDeque::from([1, 2, 3, 4]);
    /// assert_eq!(deq, [1, 2, 3, 4]);
    /// ```
    fn from(value: [T; N]) -> Self {
        Self::from_iter(value)
    }
}

impl<T> From<Vec<T>> for LinkedDeque<T> {
    /// Turn a [`Vec<T>`] into a [`LinkedDeque<T>`].
    fn from(value: Vec<T>) -> Self {
        Self::from_iter(value)
    }
}

impl<T> FromIterator<T> for LinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_in(iter, Heap)
    }
}
