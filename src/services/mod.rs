pub mod filter_service;
pub mod lightbox_service;
pub mod notification_service;
pub mod reveal_service;
pub mod scroll_service;
