pub mod cart;
pub mod category;
pub mod hero_slide;
pub mod price;
pub mod product;
pub mod reel;
pub mod session;

pub use cart::{Cart, CartLine, Favorites};
pub use category::Category;
pub use hero_slide::{slides_or_default, HeroSlide};
pub use price::Price;
pub use product::Product;
pub use reel::{compact_count, Reel};
pub use session::Session;
