mod share;

pub use share::{NewShare, Share};
