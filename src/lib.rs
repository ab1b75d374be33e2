//! # Tiny BASIC
//!
//! A small integer BASIC interpreter meant to be embedded in a host
//! program. The interpreter walks the program text directly; there is
//! no compile step and no token buffer. All I/O goes through a
//! [`Host`](mach/trait.Host.html) implemented by the embedding program.
//!
//! ```
//! use basic::mach::{Host, Runtime};
//!
//! #[derive(Default)]
//! struct Screen(String);
//!
//! impl Host for Screen {
//!     fn print_number(&mut self, value: i32) {
//!         self.0.push_str(&value.to_string());
//!     }
//!     fn print_string(&mut self, text: &str) {
//!         self.0.push_str(text);
//!     }
//!     fn print_end(&mut self) {
//!         self.0.push('\n');
//!     }
//! }
//!
//! let program = "10 for i=1 to 3\n20 print \"i=\";i\n30 next i\n";
//! let mut runtime = Runtime::new(program, Screen::default());
//! runtime.run().unwrap();
//! assert_eq!(runtime.host().0, "i=1\ni=2\ni=3\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
