mod store;
#[cfg(test)]
mod tests;
mod types;

pub use store::{ParameterSink, ParameterStore, ShaderGlobals};
pub use types::{ParameterFamily, ParameterId, ParameterRange, ParameterValues};
