pub mod deferred;
pub mod footer;
pub mod gallery;
pub mod menu;
pub mod particles;
pub mod price_card;
pub mod profile_card;
pub mod scroll_showcase;
pub mod theme_toggle;
pub mod timeline;
