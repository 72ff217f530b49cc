pub mod install;
pub mod lint;

pub use install::install;
