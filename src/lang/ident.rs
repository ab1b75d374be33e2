// Used in both Token and the variable store

/// A single-letter variable name, folded to a slot `0..26`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Ident(u8);

impl Ident {
    pub const COUNT: usize = 26;

    pub fn from_char(ch: char) -> Option<Ident> {
        if ch.is_ascii_alphabetic() {
            Some(Ident(ch.to_ascii_lowercase() as u8 - b'a'))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn name(self) -> char {
        char::from(b'a' + self.0)
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name().to_ascii_uppercase())
    }
}
