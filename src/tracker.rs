use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

struct Log<T> {
    dropped: Option<Vec<T>>,
    clones: usize,
}

/// Records the drops and clones of the values it wraps.
pub struct Tracker<T> {
    log: Rc<RefCell<Log<T>>>,
}

impl<T: Clone> Tracker<T> {
    pub fn new() -> Self {
        Tracker {
            log: Rc::new(RefCell::new(Log {
                dropped: None,
                clones: 0,
            })),
        }
    }

    pub fn wrap(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            log: Rc::clone(&self.log),
        }
    }

    pub fn wrap_all<I: IntoIterator<Item = T>>(&self, values: I) -> Vec<Tracked<T>> {
        values.into_iter().map(|value| self.wrap(value)).collect()
    }

    /// Runs `f`, returning the values dropped meanwhile in drop order.
    pub fn track<F: FnOnce() -> R, R>(&self, f: F) -> (Vec<T>, R) {
        self.log.borrow_mut().dropped = Some(Vec::new());
        let result = f();
        let dropped = self.log.borrow_mut().dropped.take().unwrap_or_default();
        (dropped, result)
    }

    /// Total number of clones made of any wrapped value.
    pub fn clones(&self) -> usize {
        self.log.borrow().clones
    }
}

pub struct Tracked<T: Clone> {
    value: T,
    log: Rc<RefCell<Log<T>>>,
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.log.borrow_mut().clones += 1;
        Tracked {
            value: self.value.clone(),
            log: Rc::clone(&self.log),
        }
    }
}

impl<T: Clone> Drop for Tracked<T> {
    fn drop(&mut self) {
        if let Some(ref mut dropped) = self.log.borrow_mut().dropped {
            dropped.push(self.value.clone());
        }
    }
}

impl<T: Clone + PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
