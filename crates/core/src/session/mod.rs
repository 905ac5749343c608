//! Session access for authenticated calls

pub mod ports;
