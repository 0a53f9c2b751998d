pub mod product;

pub use product::{NameField, Product};
