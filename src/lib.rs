pub mod loaders;
pub mod report;
