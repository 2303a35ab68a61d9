pub mod dashboard;
pub mod funda;
pub mod scoring;
