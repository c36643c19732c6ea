mod item;
mod presence;
mod product;

pub use item::{Item, ItemQuery};
pub use presence::Presence;
pub use product::Product;
