/// Port the server listens on. Fixed at startup.
pub const DEFAULT_PORT: u16 = 6789;

/// How accepted connections are handed to their handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// One task per connection, no cap on how many run at once.
    Unbounded,
    /// At most `n` handlers in flight; accepting pauses until one finishes.
    Bounded(usize),
}

/// Byte layout of the response head separator and the 404 page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Bare `\n` after the headers, 404 page as UTF-16BE.
    Legacy,
    /// `\r\n` after the headers, 404 page as ASCII.
    Standard,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub dispatch: Dispatch,
    pub framing: Framing,
}

impl Config {
    pub fn load() -> Self {
        Self {
            listen_addr: format!("0.0.0.0:{}", DEFAULT_PORT),
            dispatch: Dispatch::Unbounded,
            framing: Framing::Legacy,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load()
    }
}
