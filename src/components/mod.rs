pub mod cart;
pub mod category_carousel;
pub mod hero_slider;
pub mod home;
pub mod navigation;
pub mod product_card;
pub mod product_feed;
pub mod reels;

pub use cart::CartScreen;
pub use category_carousel::CategoryCarousel;
pub use hero_slider::HeroSlider;
pub use home::HomeScreen;
pub use navigation::NavigationBar;
pub use product_card::ProductCard;
pub use product_feed::ProductFeed;
pub use reels::ReelsScreen;
