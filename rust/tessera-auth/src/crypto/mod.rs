mod key;
mod signature;

pub use key::*;
pub use signature::*;
