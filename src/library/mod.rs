pub mod index;
pub mod scanner;
pub mod video;
