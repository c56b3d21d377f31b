pub mod notifiers;
pub mod scenario;
