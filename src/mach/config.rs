/// ## Runtime limits
///
/// The control-flow stacks are bounded. Running past a bound is not an
/// error; the GOSUB or FOR is dropped and reported as a diagnostic.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Pending GOSUB returns.
    pub gosub_depth: usize,
    /// Active FOR loops.
    pub for_depth: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            gosub_depth: 10,
            for_depth: 4,
        }
    }
}
