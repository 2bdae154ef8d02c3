pub mod constants;
pub mod topology;
