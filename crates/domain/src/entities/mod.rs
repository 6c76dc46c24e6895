pub mod input_parameters;

pub use input_parameters::{InputParameters, PartialParameters};
