pub mod libs;

pub use crate::libs::io::{read_text, reader, writer};
