mod aggregator;
mod kebab;
mod path;
mod term;

pub use aggregator::*;
pub use kebab::*;
pub use path::*;
pub use term::*;
