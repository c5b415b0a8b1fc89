//! Filter accordion: one collapsible section per facet, checkbox per option.

use std::collections::BTreeSet;

use dioxus::prelude::*;

use common::facets::{FacetCatalog, FacetKey, FacetOption};
use common::filter::SelectionState;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdExpandLess, MdExpandMore};
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};


#[derive(Clone, Copy)]
struct AccordionContext {
    selection: ReadSignal<SelectionState>,
    on_toggle: Callback<(FacetKey, String)>,
    open_sections: Signal<BTreeSet<FacetKey>>,
}

#[component]
pub fn FilterAccordion(
    catalog: ReadSignal<FacetCatalog>,
    selection: ReadSignal<SelectionState>,
    on_toggle: Callback<(FacetKey, String)>,
) -> Element {
    let mut open_sections = use_signal(|| BTreeSet::from(FacetKey::ALL));
    // a rebuilt catalog re-opens every section, matching the selection re-seed
    use_effect(move || {
        let _ = catalog.read();
        open_sections.set(BTreeSet::from(FacetKey::ALL));
    });

    use_context_provider(|| AccordionContext {
        selection,
        on_toggle,
        open_sections,
    });

    rsx! {
        div {
            id: "x-filter-accordion",
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                width: 100%;
            ",
            for key in FacetKey::ALL {
                FacetSection {
                    key: "{key:?}",
                    facet_key: key,
                    options: catalog.read().options(key).to_vec(),
                }
            }
        }
    }
}

#[component]
fn FacetSection(facet_key: FacetKey, options: ReadSignal<Vec<FacetOption>>) -> Element {
    let mut accordion = use_context::<AccordionContext>();
    let is_open = use_memo(move || accordion.open_sections.read().contains(&facet_key));
    let section_title = facet_key.display_name();

    rsx! {
        div {
            style: "
                border: 1px solid #2a3147;
                border-radius: 8px;
                overflow: hidden;
            ",

            button {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    width: 100%;
                    padding: 10px 12px;
                    background-color: #181e2e;
                    border: none;
                    color: #e8eaf0;
                    font-size: 16px;
                    font-weight: 600;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    let mut open = accordion.open_sections.write();
                    if open.contains(&facet_key) {
                        open.remove(&facet_key);
                    } else {
                        open.insert(facet_key);
                    }
                },
                "{section_title}"
                if is_open() {
                    Icon { icon: MdExpandLess, style: "width: 20px; height: 20px;" }
                } else {
                    Icon { icon: MdExpandMore, style: "width: 20px; height: 20px;" }
                }
            }

            if is_open() {
                if options.read().is_empty() {
                    div {
                        style: "padding: 10px 12px; font-size: 14px; color: #7d8497;",
                        "No options available"
                    }
                } else {
                    ul {
                        style: "padding: 4px 0;",
                        for option in options.read().iter().cloned() {
                            li {
                                key: "{option.value}",
                                FacetCheckboxRow { facet_key, option }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FacetCheckboxRow(facet_key: FacetKey, option: ReadSignal<FacetOption>) -> Element {
    let accordion = use_context::<AccordionContext>();
    let is_checked = use_memo(move || {
        accordion
            .selection
            .read()
            .is_selected(facet_key, &option.read().value)
    });
    let label = option.read().label.clone();

    rsx! {
        div {
            class: "x-facet-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                padding: 6px 12px;
                cursor: pointer;
            ",
            onclick: move |_| {
                accordion
                    .on_toggle
                    .call((facet_key, option.read().value.clone()));
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: #e05252; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: #7d8497; flex-shrink: 0;" }
            }

            div {
                style: "
                    font-size: 15px;
                    color: #e8eaf0;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{label}"
            }
        }
    }
}
