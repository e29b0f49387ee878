pub use anstream::println as aprintln;

/// Tokyo Night color palette
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const GREEN: &str = "\x1b[38;2;158;206;106m"; // #9ece6a
    pub const YELLOW: &str = "\x1b[38;2;224;175;104m"; // #e0af68
    pub const BLUE: &str = "\x1b[38;2;122;162;247m"; // #7aa2f7
    pub const CYAN: &str = "\x1b[38;2;125;207;255m"; // #7dcfff
}

/// Wrap text in green.
pub fn p_g(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}

/// Wrap text in yellow.
pub fn p_y(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Wrap text in blue.
pub fn p_b(text: &str) -> String {
    format!("{}{}{}", colors::BLUE, text, colors::RESET)
}

/// Wrap text in cyan.
pub fn p_c(text: &str) -> String {
    format!("{}{}{}", colors::CYAN, text, colors::RESET)
}
