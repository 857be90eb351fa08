pub mod geopolitical_risks;
pub mod manufacturers;
pub mod projects;
pub mod suppliers;

pub use geopolitical_risks::Entity as GeopoliticalRisks;
pub use geopolitical_risks::Model as GeopoliticalRisk;
pub use manufacturers::Entity as Manufacturers;
pub use manufacturers::Model as Manufacturer;
pub use projects::Entity as Projects;
pub use projects::Model as Project;
pub use suppliers::Entity as Suppliers;
pub use suppliers::Model as Supplier;
