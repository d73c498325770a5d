pub mod field_map;
pub mod gf2n;
pub mod poly;
