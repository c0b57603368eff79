/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

pub mod clock;
pub mod config;
pub mod error;
pub mod eye_blink;
pub mod parameter;
pub mod random;
pub mod units;

pub use config::BlinkConfig;
pub use error::BlinkError;
pub use eye_blink::{EyeBlink, EyeState};
