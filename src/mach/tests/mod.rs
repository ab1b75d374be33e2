use crate::mach::{Host, Runtime};

mod for_test;

#[derive(Debug, Default)]
struct Printed(Vec<i32>);

impl Host for Printed {
    fn print_number(&mut self, value: i32) {
        self.0.push(value);
    }
}

fn run(program: &str) -> Runtime<'_, Printed> {
    let mut r = Runtime::new(program, Printed::default());
    r.run().unwrap();
    r
}
