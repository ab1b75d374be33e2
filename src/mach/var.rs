use crate::lang::{Ident, Value};

/// ## Variable memory
///
/// One slot per letter, all starting at zero.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Var {
    vars: [Value; Ident::COUNT],
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars = [0; Ident::COUNT];
    }

    pub fn fetch(&self, ident: Ident) -> Value {
        self.vars[ident.index()]
    }

    pub fn store(&mut self, ident: Ident, value: Value) {
        self.vars[ident.index()] = value;
    }

    /// Reads by name; anything but a letter reads as zero.
    pub fn get(&self, name: char) -> Value {
        match Ident::from_char(name) {
            Some(ident) => self.fetch(ident),
            None => 0,
        }
    }

    /// Writes by name; anything but a letter is ignored.
    pub fn set(&mut self, name: char, value: Value) {
        if let Some(ident) = Ident::from_char(name) {
            self.store(ident, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_fold_case() {
        let mut v = Var::new();
        v.set('A', 7);
        assert_eq!(v.get('a'), 7);
        assert_eq!(v.get('z'), 0);
    }

    #[test]
    fn test_out_of_range_names() {
        let mut v = Var::new();
        v.set('?', 3);
        v.set('1', 3);
        assert_eq!(v, Var::new());
        assert_eq!(v.get('@'), 0);
    }
}
