//! Domain services: validation and the few business rules the app has.
//! Services take the request transaction, call into `repos`, and map
//! `DbErr` into `AppError`.

pub mod geopolitical;
pub mod manufacturers;
pub mod occupation;
pub mod projects;
pub mod suppliers;
