pub mod plant_mapper;

pub use plant_mapper::PlantMapper;
