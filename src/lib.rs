// Catalog working-set engine: load a static media feed once, then
// filter, sort, incrementally render and letter-jump against it without
// ever re-reading the rendered output.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
