use crate::lang::{Error, Value};

/// ## Host callbacks
///
/// Everything the interpreter needs from the outside world. Every method
/// has a default that does nothing, so a host only overrides the calls it
/// cares about. The implementing value is the host's own context and is
/// owned by the [`Runtime`](struct.Runtime.html).
///
/// `PRINT` calls `print_begin`, then one call per item, then `print_end`.
/// `USER` does the same through the `user_*` methods.
pub trait Host {
    fn print_begin(&mut self) {}
    fn print_number(&mut self, _value: Value) {}
    fn print_string(&mut self, _text: &str) {}
    fn print_separator(&mut self, _separator: char) {}
    fn print_end(&mut self) {}

    /// `INPUT prompt, v`. Returning `None` leaves `v` unchanged.
    fn input(&mut self, _prompt: Value) -> Option<Value> {
        None
    }

    /// `PEEK address, v`. Returning `None` leaves `v` unchanged.
    fn peek(&mut self, _address: Value) -> Option<Value> {
        None
    }

    fn poke(&mut self, _address: Value, _value: Value) {}

    fn user_begin(&mut self) {}
    fn user_number(&mut self, _value: Value) {}
    fn user_string(&mut self, _text: &str) {}
    fn user_separator(&mut self, _separator: char) {}
    fn user_end(&mut self) {}

    /// A GOSUB or FOR that overflowed its stack, a RETURN without GOSUB,
    /// or a NEXT that does not match the innermost loop. Execution carries
    /// on after the call.
    fn diagnostic(&mut self, _error: &Error) {}
}

impl Host for () {}

impl<H: Host + ?Sized> Host for &mut H {
    fn print_begin(&mut self) {
        (**self).print_begin()
    }
    fn print_number(&mut self, value: Value) {
        (**self).print_number(value)
    }
    fn print_string(&mut self, text: &str) {
        (**self).print_string(text)
    }
    fn print_separator(&mut self, separator: char) {
        (**self).print_separator(separator)
    }
    fn print_end(&mut self) {
        (**self).print_end()
    }
    fn input(&mut self, prompt: Value) -> Option<Value> {
        (**self).input(prompt)
    }
    fn peek(&mut self, address: Value) -> Option<Value> {
        (**self).peek(address)
    }
    fn poke(&mut self, address: Value, value: Value) {
        (**self).poke(address, value)
    }
    fn user_begin(&mut self) {
        (**self).user_begin()
    }
    fn user_number(&mut self, value: Value) {
        (**self).user_number(value)
    }
    fn user_string(&mut self, text: &str) {
        (**self).user_string(text)
    }
    fn user_separator(&mut self, separator: char) {
        (**self).user_separator(separator)
    }
    fn user_end(&mut self) {
        (**self).user_end()
    }
    fn diagnostic(&mut self, error: &Error) {
        (**self).diagnostic(error)
    }
}
