pub mod handoff;
pub mod static_map;
