mod article;
mod front_matter;

pub use article::*;
pub use front_matter::*;
