// Copyright 2020 bmc::labs Gmbh. All rights reserved.
//
// Author: Florian Eich <florian@bmc-labs.com>

mod fubar;
mod service;

pub mod app;
pub mod config;
pub mod race_data;
pub mod racer;
pub mod render;
pub mod report;
pub mod roster;
pub mod timing;

pub use config::Config;
pub use fubar::{Fubar, Result};
pub use race_data::RaceData;
pub use racer::Racer;
pub use report::Order;
