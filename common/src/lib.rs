pub mod booking;
pub mod catalog;
pub mod contact;
pub mod currency;
pub mod handoff;
pub mod pricing;
pub mod samples;
pub mod showcase;
