pub mod eval;
pub mod fitness;
pub mod state;
pub mod validate;

use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use fitcalc_console::{Console, ConsoleError};
use log::{debug, info};

use crate::state::State;

pub struct Shell {
    console: Box<dyn Console>,
    running: Arc<AtomicBool>,
}

impl Shell {
    pub fn new(console: Box<dyn Console>, running: Arc<AtomicBool>) -> Self {
        Self { console, running }
    }

    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        info!("Starting interactive session");
        self.console.write_line("Welcome to the Calculator App!")?;

        let mut state = State::Menu;
        while self.running.load(Ordering::Relaxed) && state != State::Done {
            for line in state.banner() {
                self.console.write_line(line)?;
            }

            let input = match self.console.prompt(state.question()) {
                Ok(input) => input,
                Err(ConsoleError::Closed) => {
                    info!("Input stream closed, terminating session");
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            debug!("Handling input in state {:?}", state);
            let (next, messages) = state.step(input.trim());
            for message in &messages {
                self.console.write_line(message)?;
            }
            state = next;
        }

        info!("Session finished");
        Ok(())
    }
}
