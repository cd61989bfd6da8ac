pub mod config_ops;
pub mod group_ops;
