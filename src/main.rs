/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use eye_blink::clock::{ManualClock, TimeSource};
use eye_blink::config::BlinkConfig;
use eye_blink::error::BlinkError;
use eye_blink::eye_blink::EyeBlink;
use eye_blink::parameter::ParameterMap;
use eye_blink::random::{SeededRandom, ThreadRandom};
use eye_blink::units::Milliseconds;

/// Step a blinking pair of eyes frame by frame and print the parameter values as CSV
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: usize,

    /// Milliseconds between frames
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Seed for a reproducible blink schedule
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with blink configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mean milliseconds between blinks
    #[arg(long)]
    interval: Option<u64>,

    #[arg(long)]
    closing: Option<u64>,

    #[arg(long)]
    closed: Option<u64>,

    #[arg(long)]
    opening: Option<u64>,

    /// Eye parameters read 1 as closed
    #[arg(long)]
    closed_at_one: bool,
}

impl Args {
    fn blink_config(&self) -> Result<BlinkConfig, BlinkError> {
        let mut config = match &self.config {
            Some(path) => BlinkConfig::load(path)?,
            None => BlinkConfig::default(),
        };
        if let Some(interval) = self.interval {
            config = config.interval(Milliseconds(interval));
        }
        let closing = self.closing.map(Milliseconds).unwrap_or(config.closing);
        let closed = self.closed.map(Milliseconds).unwrap_or(config.closed);
        let opening = self.opening.map(Milliseconds).unwrap_or(config.opening);
        config = config.eye_motion(closing, closed, opening);
        if self.closed_at_one {
            config = config.closed_at_one();
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    env_logger::init();
    if let Err(error) = run(Args::parse()) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = args.blink_config()?;
    let mut model =
        ParameterMap::with_parameters([config.eye_id_left.as_str(), config.eye_id_right.as_str()], 1.0);
    let mut blink = match args.seed {
        Some(seed) => EyeBlink::with_config(config, SeededRandom::new(seed))?,
        None => EyeBlink::with_config(config, ThreadRandom::new())?,
    };
    blink.set_enabled(true);

    let clock = ManualClock::default();
    let frame = Milliseconds(args.frame_ms);
    let config = blink.config().clone();
    println!("time_ms,state,{},{}", config.eye_id_left, config.eye_id_right);
    for _ in 0..args.frames {
        blink.update_param(&clock, &mut model)?;
        println!(
            "{},{},{},{}",
            *clock.now(),
            blink.state(),
            model.get(&config.eye_id_left).unwrap_or_default(),
            model.get(&config.eye_id_right).unwrap_or_default(),
        );
        clock.advance(frame);
    }
    log::info!("{} parameter writes over {} frames", model.writes(), args.frames);
    Ok(())
}
