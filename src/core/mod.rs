pub mod calendar;
pub mod cancel;
pub mod clock;
pub mod config;
pub mod decompose;
pub mod log;
pub mod pause;
pub mod report;
pub mod schedule;
pub mod selection;
pub mod span;
pub mod submit;
