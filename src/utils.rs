pub mod file;
pub mod icon;
pub mod json;
pub mod process;
pub mod thread;
