use dioxus::prelude::*;

use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_toggle_icons::{MdStar, MdStarBorder, MdStarHalf};

/// Five-star rating strip. Half stars show for fractional ratings of 0.5
/// and up.
#[component]
pub fn StarRating(rating: ReadSignal<f64>) -> Element {
    let rating = rating.read().clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = rating - rating.floor() >= 0.5;
    let empty = 5 - full - usize::from(half);

    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center;",
            for i in 0..full {
                Icon { key: "f{i}", icon: MdStar, style: "width: 18px; height: 18px; color: #f0b429;" }
            }
            if half {
                Icon { icon: MdStarHalf, style: "width: 18px; height: 18px; color: #f0b429;" }
            }
            for i in 0..empty {
                Icon { key: "e{i}", icon: MdStarBorder, style: "width: 18px; height: 18px; color: #7d8497;" }
            }
        }
    }
}
