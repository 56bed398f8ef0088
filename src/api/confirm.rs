use std::io::{self, BufRead, Write};

/// Yes/no question asked before a destructive request
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Accept every question without asking
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Ask on the terminal, blocking until a line is read
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirm;

impl TerminalConfirm {
    fn ask(message: &str, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
        write!(output, "{} [y/N] ", message)?;
        output.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;

        Ok(is_yes(&answer))
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        match Self::ask(message, &mut stdin.lock(), &mut stdout) {
            Ok(answer) => answer,
            Err(error) => {
                warn!(error = %error, "failed to read confirmation");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
