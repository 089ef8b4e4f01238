use owo_colors::OwoColorize;
use tracing::debug;

use crate::models::ColorChoice;

/// What we know about the terminal we are printing to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalInfo {
    pub is_tty: bool,
    pub no_color: bool,
    pub dumb: bool,
}

impl TerminalInfo {
    pub fn detect() -> Self {
        Self {
            is_tty: atty::is(atty::Stream::Stdout),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            dumb: std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styling {
    pub enabled: bool,
    /// Styling was wanted but the terminal cannot render it.
    pub degraded: bool,
}

pub fn resolve_styling(choice: ColorChoice, terminal: &TerminalInfo) -> Styling {
    let wanted = match choice {
        ColorChoice::Never => false,
        ColorChoice::Always => true,
        ColorChoice::Auto => terminal.is_tty && !terminal.no_color,
    };

    if wanted && terminal.dumb {
        return Styling {
            enabled: false,
            degraded: true,
        };
    }

    Styling {
        enabled: wanted,
        degraded: false,
    }
}

/// Prints the human-readable progress messages, styled or plain.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    styled: bool,
}

impl Console {
    pub fn new(choice: ColorChoice) -> Self {
        Self::with_terminal(choice, &TerminalInfo::detect())
    }

    pub fn with_terminal(choice: ColorChoice, terminal: &TerminalInfo) -> Self {
        let styling = resolve_styling(choice, terminal);
        if styling.degraded {
            eprintln!("Warning: terminal does not support colors, falling back to plain output");
        }
        debug!(?choice, styled = styling.enabled, "console styling resolved");
        Self {
            styled: styling.enabled,
        }
    }

    pub fn plain() -> Self {
        Self { styled: false }
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }

    pub fn status(&self, message: &str) {
        if self.styled {
            println!("{}", message.cyan());
        } else {
            println!("{}", message);
        }
    }

    pub fn success(&self, message: &str) {
        if self.styled {
            println!("{}", message.green());
        } else {
            println!("{}", message);
        }
    }

    pub fn failure(&self, message: &str) {
        if self.styled {
            eprintln!("{}", message.bright_red());
        } else {
            eprintln!("{}", message);
        }
    }
}
