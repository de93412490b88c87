pub mod value;

pub use value::{Map, Value};
