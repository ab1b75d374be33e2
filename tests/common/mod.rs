#![allow(dead_code)]

use basic::lang::{Error, Value};
use basic::mach::{Config, Host, Runtime};
use std::collections::{HashMap, VecDeque};

/// Renders PRINT the way a terminal would and keeps everything else
/// for inspection.
#[derive(Debug, Default)]
pub struct Recorder {
    pub output: String,
    pub user: Vec<String>,
    pub inputs: VecDeque<Value>,
    pub prompts: Vec<Value>,
    pub memory: HashMap<Value, Value>,
    pub pokes: Vec<(Value, Value)>,
    pub diagnostics: Vec<Error>,
}

impl Recorder {
    pub fn with_inputs(inputs: &[Value]) -> Recorder {
        Recorder {
            inputs: inputs.iter().copied().collect(),
            ..Recorder::default()
        }
    }
}

impl Host for Recorder {
    fn print_number(&mut self, value: Value) {
        self.output.push_str(&value.to_string());
    }
    fn print_string(&mut self, text: &str) {
        self.output.push_str(text);
    }
    fn print_separator(&mut self, _separator: char) {
        self.output.push(' ');
    }
    fn print_end(&mut self) {
        self.output.push('\n');
    }
    fn input(&mut self, prompt: Value) -> Option<Value> {
        self.prompts.push(prompt);
        self.inputs.pop_front()
    }
    fn peek(&mut self, address: Value) -> Option<Value> {
        self.memory.get(&address).copied()
    }
    fn poke(&mut self, address: Value, value: Value) {
        self.pokes.push((address, value));
        self.memory.insert(address, value);
    }
    fn user_begin(&mut self) {
        self.user.push("begin".to_string());
    }
    fn user_number(&mut self, value: Value) {
        self.user.push(format!("number {}", value));
    }
    fn user_string(&mut self, text: &str) {
        self.user.push(format!("string {}", text));
    }
    fn user_separator(&mut self, separator: char) {
        self.user.push(format!("separator {}", separator));
    }
    fn user_end(&mut self) {
        self.user.push("end".to_string());
    }
    fn diagnostic(&mut self, error: &Error) {
        self.diagnostics.push(error.clone());
    }
}

/// Runs `program` to completion and returns what it printed. A runtime
/// error is appended to the output on its own line.
pub fn exec(program: &str) -> String {
    exec_with(program, Recorder::default()).output
}

pub fn exec_with(program: &str, host: Recorder) -> Recorder {
    exec_config(program, host, Config::default())
}

pub fn exec_config(program: &str, host: Recorder, config: Config) -> Recorder {
    let mut runtime = Runtime::with_config(program, host, config);
    let result = runtime.execute(5000);
    let mut host = runtime.into_host();
    match result {
        Ok(_) => {}
        Err(error) => host.output.push_str(&format!("{}\n", error)),
    }
    host
}

/// Runs `program` and returns the final value of variable `name`.
pub fn variable(program: &str, name: char) -> Value {
    let mut runtime = Runtime::new(program, ());
    runtime.execute(5000).unwrap();
    runtime.variable(name)
}
