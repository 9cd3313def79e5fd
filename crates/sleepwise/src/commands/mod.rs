pub mod run;
pub mod train;
pub mod version;
