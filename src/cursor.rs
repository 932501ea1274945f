//! Position-based traversal of a [`LinkedDeque`].
//!
//! A cursor sits either on a node or on the sentinel past the last node it
//! can reach. Cursors borrow the deque they were obtained from, so no node
//! they point to can be removed while they are alive.
//!
//! [`LinkedDeque`]: crate::LinkedDeque

use std::fmt;
use std::marker::PhantomData;

use crate::{Error, Link, Node, Result};

macro_rules! shared_cursor {
    ($(#[$attr:meta])* $name:ident, $step:ident) => {
        $(#[$attr])*
        pub struct $name<'a, T: 'a> {
            node: Link<T>,
            marker: PhantomData<&'a Node<T>>,
        }

        impl<'a, T> $name<'a, T> {
            pub(crate) fn new(node: Link<T>) -> Self {
                $name {
                    node,
                    marker: PhantomData,
                }
            }

            /// Returns the element under the cursor.
            ///
            /// # Errors
            ///
            /// Fails with [`Error::InvalidIteratorAccess`] on the sentinel.
            pub fn current(&self) -> Result<&'a T> {
                self.node
                    .map(|node| unsafe { &(*node.as_ptr()).value })
                    .ok_or(Error::InvalidIteratorAccess)
            }

            /// Moves the cursor one node further.
            ///
            /// # Errors
            ///
            /// Fails with [`Error::InvalidIteratorAccess`] on the sentinel,
            /// leaving the cursor where it is.
            pub fn move_next(&mut self) -> Result<()> {
                let node = self.node.ok_or(Error::InvalidIteratorAccess)?;
                self.node = unsafe { (*node.as_ptr()).$step };
                Ok(())
            }

            /// Returns `true` if the cursor is on the sentinel.
            pub fn is_end(&self) -> bool {
                self.node.is_none()
            }
        }

        impl<T> Clone for $name<'_, T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<'_, T> {}

        impl<T> PartialEq for $name<'_, T> {
            fn eq(&self, other: &Self) -> bool {
                self.node == other.node
            }
        }

        impl<T> Eq for $name<'_, T> {}

        impl<T: fmt::Debug> fmt::Debug for $name<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.current().ok())
                    .finish()
            }
        }

        unsafe impl<T: Sync> Send for $name<'_, T> {}
        unsafe impl<T: Sync> Sync for $name<'_, T> {}
    };
}

shared_cursor! {
    /// A read-only cursor walking from the front toward the back.
    ///
    /// Created by [`LinkedDeque::begin`] and [`LinkedDeque::end`]. Two
    /// cursors are equal when they sit on the same node, or both sit on the
    /// sentinel.
    ///
    /// [`LinkedDeque::begin`]: crate::LinkedDeque::begin
    /// [`LinkedDeque::end`]: crate::LinkedDeque::end
    Cursor, next
}

shared_cursor! {
    /// A read-only cursor walking from the back toward the front.
    ///
    /// Created by [`LinkedDeque::rbegin`] and [`LinkedDeque::rend`].
    ///
    /// [`LinkedDeque::rbegin`]: crate::LinkedDeque::rbegin
    /// [`LinkedDeque::rend`]: crate::LinkedDeque::rend
    RevCursor, prev
}

macro_rules! mut_cursor {
    ($(#[$attr:meta])* $name:ident, $step:ident) => {
        $(#[$attr])*
        pub struct $name<'a, T: 'a> {
            node: Link<T>,
            marker: PhantomData<&'a mut Node<T>>,
        }

        impl<'a, T> $name<'a, T> {
            pub(crate) fn new(node: Link<T>) -> Self {
                $name {
                    node,
                    marker: PhantomData,
                }
            }

            /// Returns the element under the cursor.
            ///
            /// # Errors
            ///
            /// Fails with [`Error::InvalidIteratorAccess`] on the sentinel.
            pub fn current(&self) -> Result<&T> {
                self.node
                    .map(|node| unsafe { &(*node.as_ptr()).value })
                    .ok_or(Error::InvalidIteratorAccess)
            }

            /// Returns the element under the cursor for modification.
            ///
            /// # Errors
            ///
            /// Fails with [`Error::InvalidIteratorAccess`] on the sentinel.
            pub fn current_mut(&mut self) -> Result<&mut T> {
                self.node
                    .map(|node| unsafe { &mut (*node.as_ptr()).value })
                    .ok_or(Error::InvalidIteratorAccess)
            }

            /// Moves the cursor one node further.
            ///
            /// # Errors
            ///
            /// Fails with [`Error::InvalidIteratorAccess`] on the sentinel.
            pub fn move_next(&mut self) -> Result<()> {
                let node = self.node.ok_or(Error::InvalidIteratorAccess)?;
                self.node = unsafe { (*node.as_ptr()).$step };
                Ok(())
            }

            /// Returns `true` if the cursor is on the sentinel.
            pub fn is_end(&self) -> bool {
                self.node.is_none()
            }
        }

        impl<T: fmt::Debug> fmt::Debug for $name<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.current().ok())
                    .finish()
            }
        }

        unsafe impl<T: Send> Send for $name<'_, T> {}
        unsafe impl<T: Sync> Sync for $name<'_, T> {}
    };
}

mut_cursor! {
    /// A cursor walking from the front toward the back, with write access to
    /// the elements it visits.
    ///
    /// Created by [`LinkedDeque::begin_mut`]. Unlike [`Cursor`], it cannot be
    /// copied: two copies could hand out aliasing `&mut T`.
    ///
    /// [`LinkedDeque::begin_mut`]: crate::LinkedDeque::begin_mut
    CursorMut, next
}

mut_cursor! {
    /// A cursor walking from the back toward the front, with write access to
    /// the elements it visits.
    ///
    /// Created by [`LinkedDeque::rbegin_mut`].
    ///
    /// [`LinkedDeque::rbegin_mut`]: crate::LinkedDeque::rbegin_mut
    RevCursorMut, prev
}
