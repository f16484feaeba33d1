pub mod plant_repository;

pub use plant_repository::PlantRepository;
