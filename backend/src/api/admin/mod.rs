//! Admin console endpoints. All of these require a staff bearer token.

mod orders;
pub use orders::get_all_orders;

mod users;
pub use users::get_all_users;

mod reviews;
pub use reviews::get_all_reviews;

mod product_images;
pub use product_images::{delete_product_image, upload_product_images};
