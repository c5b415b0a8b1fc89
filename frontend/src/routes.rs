use dioxus::prelude::*;

use crate::components::admin_shell::AdminShell;
use crate::components::store_shell::StoreShell;

use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::products_page::ProductsPage;
use crate::pages::product_view_page::ProductViewPage;
use crate::pages::login_page::LoginPage;
use crate::pages::register_page::RegisterPage;
use crate::pages::admin::dashboard_page::AdminDashboardPage;
use crate::pages::admin::products_page::AdminProductsPage;
use crate::pages::admin::product_images_page::AdminProductImagesPage;
use crate::pages::admin::orders_page::AdminOrdersPage;
use crate::pages::admin::users_page::AdminUsersPage;
use crate::pages::admin::reviews_page::AdminReviewsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(StoreShell)]


    #[route("/")]
    HomePage {},


    #[route("/products?:search")]
    ProductsPage { search: String },

    #[route("/products/:product_id")]
    ProductViewPage { product_id: String },


    #[route("/login")]
    LoginPage {},

    #[route("/register")]
    RegisterPage {},


    #[nest("/admin")]
    #[layout(AdminShell)]

    #[route("/")]
    AdminDashboardPage {},

    #[route("/products")]
    AdminProductsPage {},

    #[route("/products/:product_id/images")]
    AdminProductImagesPage { product_id: String },

    #[route("/orders/:selected_order")]
    AdminOrdersPage { selected_order: UrlParam<Option<String>> },

    #[route("/users")]
    AdminUsersPage {},

    #[route("/reviews")]
    AdminReviewsPage {},

}

impl Route {
    pub fn products_page() -> Self {
        Self::ProductsPage {
            search: String::new(),
        }
    }

    pub fn admin_orders_page() -> Self {
        Self::AdminOrdersPage {
            selected_order: UrlParam::from(None),
        }
    }
}
