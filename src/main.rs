// #![forbid(unsafe_code)]
// #![deny(non_upper_case_globals)]
// #![deny(non_camel_case_types)]
// #![deny(non_snake_case)]
// #![deny(unused_mut)]
// #![deny(unused_variables)]
// #![deny(dead_code)]
// #![deny(unused_imports)]
//#![deny(missing_docs)]
//#![deny(warnings)]

extern crate chrono;
extern crate derivative;
extern crate reqwest;
extern crate serde_derive;

#[macro_use]
extern crate log;

mod app;
mod configuration;
mod connection;
mod error;
mod model;

use log::LevelFilter;
use reqwest::blocking::Client;
use signal_hook::{iterator::Signals, SIGINT};
use std::{io, path::PathBuf, process::exit, thread, time::Duration};
use structopt::StructOpt;

use self::app::App;
use self::{
    configuration::command_line::Opt,
    configuration::settings::Settings,
    error::Result,
};

fn main() {
    let mut options = Opt::from_args();

    let level = options
        .logging
        .take()
        .map(Into::into)
        .unwrap_or(LevelFilter::Warn);
    if let Err(e) = init_logging(level, &options.log_output_file) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    match Signals::new(&[SIGINT]) {
        Ok(signals) => {
            thread::spawn(move || {
                for sig in signals.forever() {
                    info!("Received signal {:?}, stopping", sig);
                    exit(130);
                }
            });
        }
        Err(e) => warn!("Cannot listen for SIGINT: {}", e),
    }

    if let Err(e) = run(options) {
        error!("{}", e);
        exit(1);
    }
}

fn run(options: Opt) -> Result<()> {
    let settings = Settings::load(options.config.as_ref())?;
    debug!("Initiated configuration {:#?} with {:#?}", settings, options);

    let client = Client::builder().timeout(None::<Duration>).build()?;
    let app = App::new(options, &settings, client)?;
    let stdout = io::stdout();
    let result = app.run(stdout.lock());
    result
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> std::result::Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        // stdout carries the report
        .chain(std::io::stderr());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}
