mod lib;
pub mod seed;

pub use lib::*;
