use leptos::prelude::*;
use tracing::debug;
use versus::{float_fmt, pairing, ComparisonPair, Selection, Target};

use super::image_button::ImageButton;

const CONTAINER_STYLE: &str = "display: flex; text-align: center;";
const TILE_STYLE: &str = "margin: auto; padding: 10px; height: 100%; max-width: 45%;";

fn first(pair: &ComparisonPair) -> &Target {
    &pair.target1
}

fn second(pair: &ComparisonPair) -> &Target {
    &pair.target2
}

/// Hosts both tiles and turns a click-by-name into a winner/loser pair.
#[component]
pub(super) fn MainView(
    #[prop(into)] pair: Signal<Option<ComparisonPair>>,
    #[prop(into)] disabled: Signal<bool>,
    on_select: Callback<Selection>,
    rate_decimals: usize,
) -> impl IntoView {
    let on_tile = Callback::new(move |name: String| {
        let current = pair.get_untracked();
        match pairing::resolve(current.as_ref(), &name) {
            Some(selection) => on_select.run(selection),
            None => debug!(%name, "tile click not attributable to the shown pair"),
        }
    });

    let tile = move |pick: fn(&ComparisonPair) -> &Target| {
        let name = Signal::derive(move || {
            pair.with(|p| p.as_ref().map(|p| ComparisonPair::tile_name(pick(p))))
                .unwrap_or_default()
        });
        let src = Signal::derive(move || {
            pair.with(|p| p.as_ref().map(|p| pick(p).src.clone()))
                .unwrap_or_default()
        });
        let rate = move || {
            pair.with(|p| p.as_ref().map(|p| float_fmt::fixed(pick(p).rate, rate_decimals)))
                .unwrap_or_default()
        };

        view! {
            <div class="tile" style=TILE_STYLE title=rate>
                <ImageButton name=name src=src disabled=disabled on_click=on_tile />
            </div>
        }
    };

    view! {
        <div class="main-view" style=CONTAINER_STYLE>
            {tile(first)}
            {tile(second)}
        </div>
    }
}
