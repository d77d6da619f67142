pub mod environmental;
pub mod generic;
pub mod labor;
pub mod political;

pub use environmental::EnvironmentalPolicy;
pub use generic::GenericPolicy;
pub use labor::LaborPolicy;
pub use political::PoliticalPolicy;
