pub mod generate;
pub mod methods;

pub use generate::{generate, GenerateArgs};
pub use methods::{methods, MethodsArgs};
