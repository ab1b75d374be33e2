use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    capacity: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(capacity: usize, overflow_message: &'static str) -> Stack<T> {
        Stack {
            overflow_message,
            capacity,
            vec: Vec::with_capacity(capacity),
        }
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.capacity
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    /// Refuses the value when full; the stack is left unchanged.
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(error!(OutOfMemory; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }
}
