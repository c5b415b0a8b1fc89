//! Product browsing page: the consumer of the facet catalog and filter
//! evaluator.

use dioxus::prelude::*;

use common::facets::{FacetCatalog, FacetKey};
use common::filter::{SelectionState, filter_products};
use common::product::Product;
use common::reference::ReferenceEntity;

use crate::api::catalog_api::{
    get_categories, get_collections, get_designers, get_products, get_skill_levels,
};
use crate::components::product_components::filter_accordion::FilterAccordion;
use crate::components::product_components::product_grid::ProductGrid;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::components::toast::ToastManager;


/// Products page
#[component]
pub fn ProductsPage(search: String) -> Element {
    rsx! {
        Title { "Modelcraft - Products" }
        ProductsPageRoot { search }
    }
}

fn loaded_list<T: Clone>(resource: &Option<Result<Vec<T>, ServerFnError>>) -> Vec<T> {
    // a failed or in-flight fetch degrades to an empty list; the failure
    // itself is surfaced separately as a toast
    match resource {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    }
}

#[component]
fn ProductsPageRoot(search: ReadSignal<String>) -> Element {
    let products = use_resource(move || {
        let search = search.read().clone();
        get_products(search)
    });
    let categories = use_resource(move || get_categories());
    let collections = use_resource(move || get_collections());
    let skill_levels = use_resource(move || get_skill_levels());
    let designers = use_resource(move || get_designers());

    let mut toasts = use_context::<ToastManager>();
    use_effect(move || {
        let failures: [(&str, bool); 5] = [
            ("Failed to load categories.", matches!(&*categories.read(), Some(Err(_)))),
            ("Failed to load collections.", matches!(&*collections.read(), Some(Err(_)))),
            ("Failed to load skill levels.", matches!(&*skill_levels.read(), Some(Err(_)))),
            ("Failed to load designers.", matches!(&*designers.read(), Some(Err(_)))),
            (
                "An error occurred while fetching products.",
                matches!(&*products.read(), Some(Err(_))),
            ),
        ];
        for (message, failed) in failures {
            if failed {
                toasts.error(message);
            }
        }
    });

    let catalog = use_memo(move || {
        FacetCatalog::build(
            &loaded_list::<ReferenceEntity>(&categories.read()),
            &loaded_list::<ReferenceEntity>(&collections.read()),
            &loaded_list::<ReferenceEntity>(&skill_levels.read()),
            &loaded_list::<ReferenceEntity>(&designers.read()),
        )
    });

    let mut selection = use_signal(SelectionState::default);
    // explicit re-seed: a rebuilt catalog resets the selection to all-empty
    use_effect(move || {
        let catalog = catalog.read();
        selection.set(catalog.default_selection());
    });

    let product_list = use_memo(move || loaded_list::<Product>(&products.read()));
    let filtered_products =
        use_memo(move || filter_products(&product_list.read(), &selection.read()));

    let on_toggle = Callback::new(move |(key, value): (FacetKey, String)| {
        let result = selection.write().toggle(key, &value);
        if let Err(e) = result {
            toasts.error(e.to_string());
        }
    });

    let is_product_loading = products.read().is_none();

    rsx! {
        if is_product_loading {
            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    min-height: 60vh;
                ",
                LoadingIndicator {}
            }
        } else {
            div {
                id: "x-products-page",
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 24px;
                    padding: 24px 28px;
                    align-items: flex-start;
                ",

                div {
                    id: "x-products-filter-panel",
                    style: "
                        width: 280px;
                        flex-shrink: 0;
                        position: sticky;
                        top: 24px;
                    ",
                    h2 { style: "font-size: 20px; color: #e8eaf0; margin: 0 0 12px 0;", "Filters" }
                    FilterAccordion {
                        catalog,
                        selection,
                        on_toggle,
                    }
                }

                div {
                    style: "flex-grow: 1;",
                    ProductGrid { products: filtered_products.read().clone() }
                }
            }
        }
    }
}
