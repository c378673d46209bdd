pub mod calculation;
pub mod resolver;
pub mod validation;

pub use calculation::*;
pub use resolver::*;
pub use validation::*;
