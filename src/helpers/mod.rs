pub(crate) mod transduce;

pub use transduce::*;
