use std::error::Error;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use log::info;

use fitcalc_shell::Shell;

fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    info!("Opening terminal session");
    let console = fitcalc_console::create_console();

    let running = Arc::new(AtomicBool::new(true));
    let shell = Shell::new(console, running.clone());
    ctrlc::set_handler(move || running.store(false, Ordering::Relaxed))?;

    shell.run()
}
