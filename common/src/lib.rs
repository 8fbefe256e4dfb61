pub mod buffer2;
pub mod file_format;
pub mod log_setup;

pub use buffer2::Buffer2;
