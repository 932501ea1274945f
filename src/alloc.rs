//! The allocator seam used by [`LinkedDeque`] to obtain node storage.
//!
//! The deque only asks for raw bytes: it writes the node into the block it
//! gets back from [`NodeAllocator::allocate`], and drops the node in place
//! before handing the block back through [`NodeAllocator::release`].
//!
//! [`LinkedDeque`]: crate::LinkedDeque

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// A source of raw memory blocks for deque nodes.
///
/// # Safety
///
/// Implementors must return from [`allocate`] either null or a pointer to a
/// block of at least `layout.size()` bytes aligned to `layout.align()`, valid
/// until it is passed to [`release`].
///
/// A block allocated by one instance may be released through any other
/// instance of the same type, since [`LinkedDeque::append`] moves nodes
/// between deques without reallocating them.
///
/// [`allocate`]: NodeAllocator::allocate
/// [`release`]: NodeAllocator::release
/// [`LinkedDeque::append`]: crate::LinkedDeque::append
pub unsafe trait NodeAllocator {
    /// Allocates a block described by `layout`, returning null on failure.
    fn allocate(&mut self, layout: Layout) -> *mut u8;

    /// Returns a block to the allocator.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by [`allocate`](NodeAllocator::allocate)
    /// with the same `layout`, and must not have been released already.
    unsafe fn release(&mut self, ptr: NonNull<u8>, layout: Layout);
}

/// The default allocator, passing every request straight to the global heap.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Heap;

unsafe impl NodeAllocator for Heap {
    #[inline]
    fn allocate(&mut self, layout: Layout) -> *mut u8 {
        unsafe { alloc::alloc(layout) }
    }

    #[inline]
    unsafe fn release(&mut self, ptr: NonNull<u8>, layout: Layout) {
        alloc::dealloc(ptr.as_ptr(), layout)
    }
}

unsafe impl<A: NodeAllocator + ?Sized> NodeAllocator for &mut A {
    #[inline]
    fn allocate(&mut self, layout: Layout) -> *mut u8 {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn release(&mut self, ptr: NonNull<u8>, layout: Layout) {
        (**self).release(ptr, layout)
    }
}

/// Allocates storage for one `T` through `alloc` and moves `value` into it.
///
/// Allocation failure diverges through [`alloc::handle_alloc_error`].
pub(crate) fn emplace<T, A: NodeAllocator + ?Sized>(alloc: &mut A, value: T) -> NonNull<T> {
    let layout = Layout::new::<T>();
    debug_assert!(layout.size() != 0, "nodes always carry their links");

    let ptr = match NonNull::new(alloc.allocate(layout) as *mut T) {
        Some(p) => p,
        None => alloc::handle_alloc_error(layout),
    };
    unsafe { ptr.as_ptr().write(value) };
    ptr
}

/// Moves the `T` out of `ptr` and returns its storage to `alloc`.
///
/// # Safety
///
/// `ptr` must come from [`emplace`] with an allocator of the same type, and
/// must not be used again afterwards.
pub(crate) unsafe fn vacate<T, A: NodeAllocator + ?Sized>(alloc: &mut A, ptr: NonNull<T>) -> T {
    let value = ptr.as_ptr().read();
    alloc.release(ptr.cast(), Layout::new::<T>());
    value
}
