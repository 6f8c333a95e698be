//! Domain types shared across SwiftCart components.

mod category;
mod id;
mod product;

pub use category::CategorySelection;
pub use id::ProductId;
pub use product::{Product, Rating};
