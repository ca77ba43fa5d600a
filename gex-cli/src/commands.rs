mod merge;

pub use self::merge::{Config, merge};
