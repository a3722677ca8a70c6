pub mod alignment;
pub mod blosum;
pub mod io;
