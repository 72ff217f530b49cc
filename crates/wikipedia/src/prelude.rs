pub use crate::error::Error;

pub use anstream::eprintln;
pub use anstream::print;
pub use color_eyre::eyre::{Context, Result};
