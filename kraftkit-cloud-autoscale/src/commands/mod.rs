//! Commands module - service layer behind `kraft cloud scale`

mod remove;

pub use remove::RemoveOptions;
