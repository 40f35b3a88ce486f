mod gracefullshutdown;
mod logs;
mod presentation;
mod random_string;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::presentation::{product_image_url, slugify};
pub use self::random_string::generate_digit_id;
