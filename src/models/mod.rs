mod envelope;
mod product;

pub use envelope::*;
pub use product::*;
