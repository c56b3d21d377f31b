pub mod notification;
pub mod product;
