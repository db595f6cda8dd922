use leptos::prelude::*;

const BUTTON_STYLE: &str = "height: 100%; width: 100%; margin: 10px; padding: 10px; \
     text-align: center; vertical-align: middle;";
const IMAGE_STYLE: &str = "margin: auto; max-width: 100%;";

/// A clickable image tile. Reports only its own `name`; the parent decides
/// what the click means.
#[component]
pub(super) fn ImageButton(
    #[prop(into)] name: Signal<String>,
    #[prop(into)] src: Signal<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <button
            class="btn btn-outline-success image-button"
            style=BUTTON_STYLE
            name=move || name.get()
            disabled=move || disabled.get()
            on:click=move |_| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(cb) = on_click {
                    cb.run(name.get_untracked());
                }
            }
        >
            <img src=move || src.get() alt=move || name.get() style=IMAGE_STYLE />
        </button>
    }
}
