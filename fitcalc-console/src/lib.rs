use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};

use log::debug;

#[derive(Debug)]
pub enum ConsoleError {
    Closed,
    IoFailure(String),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for ConsoleError {}

#[mockall::automock]
pub trait Console: Send + Sync {
    fn write_line(&self, text: &str) -> Result<(), ConsoleError>;
    fn prompt(&self, question: &str) -> Result<String, ConsoleError>;
}

struct ConsoleImpl;

impl Console for ConsoleImpl {
    fn write_line(&self, text: &str) -> Result<(), ConsoleError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text).map_err(|e| ConsoleError::IoFailure(e.to_string()))
    }

    fn prompt(&self, question: &str) -> Result<String, ConsoleError> {
        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", question).map_err(|e| ConsoleError::IoFailure(e.to_string()))?;
            stdout
                .flush()
                .map_err(|e| ConsoleError::IoFailure(e.to_string()))?;
        }

        let mut line = String::new();
        let bytes_read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| ConsoleError::IoFailure(e.to_string()))?;
        if bytes_read == 0 {
            return Err(ConsoleError::Closed);
        }

        let line = line.trim_end_matches(['\r', '\n']).to_string();
        debug!("Read {:?} for prompt {:?}", line, question);
        Ok(line)
    }
}

pub fn create_console() -> Box<dyn Console> {
    Box::new(ConsoleImpl)
}
