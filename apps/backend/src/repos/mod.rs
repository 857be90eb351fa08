//! SeaORM query layer. Functions here return `DbErr`; the service layer maps
//! upward into `AppError`.

pub mod geopolitical_risks;
pub mod manufacturers;
pub mod projects;
pub mod suppliers;
