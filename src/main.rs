mod compose;
mod config;
mod encode;
mod error;
mod layout;
mod loader;
mod timer;

use crate::{
    config::{ Args, Config },
    timer::Timer,
};

use anyhow::Context;

use clap::Parser;

use std::process::ExitCode;

pub fn main() -> ExitCode {
    let args = Args::parse_from(config::normalize_args(std::env::args_os()));

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match Config::from_args(args).map_err(anyhow::Error::from).and_then(|config| run(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let mut timer = Timer::new();

    let images = loader::load_all(&config.inputs)?;
    timer.lap("Load");

    let canvas = compose::compose(&images, config.side)?;
    let (w, h) = canvas.dimensions();
    timer.lap("Compose");
    // sources are no longer needed once painted
    drop(images);

    encode::encode(canvas, config.format, &config.out)
        .with_context(|| format!("writing {} as {}", config.out.display(), config.format))?;
    timer.lap("Encode");

    log::info!("wrote {} ({w}x{h}) in {}ms", config.out.display(), timer.total());
    Ok(())
}
