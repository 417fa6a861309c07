//! `myapp` entry-point: build the grouped help, parse arguments, print a report.

use std::io;

use myapp::error::Result;
use myapp::{Settings, build_program, write_report};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<()> {
    let mut program = build_program();
    let matches = program.parse()?;
    let settings = Settings::from_matches(&matches);
    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &settings)?;
    Ok(())
}
