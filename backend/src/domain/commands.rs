//! Domain-level command types.
//!
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the DTOs in the `shared`
//! crate to these types.

pub mod plants {
    /// Input for adding a new plant. Values are raw user input; the service
    /// validates them.
    #[derive(Debug, Clone, Default)]
    pub struct CreatePlantCommand {
        pub name: Option<String>,
        pub species: Option<String>,
        pub watering_frequency: Option<String>,
    }
}
