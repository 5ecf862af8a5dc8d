//! Parsing of job list files

pub mod job_file;

pub use job_file::{load_job_file, parse_job_list};
