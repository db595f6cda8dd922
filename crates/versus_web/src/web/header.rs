use leptos::prelude::*;
use versus::{float_fmt, Progress};

const CONTAINER_STYLE: &str = "display: flex; background: #1f3134; padding: 20px;";
const PROGRESS_STYLE: &str = "width: 90%; margin: auto;";

/// Progress bar plus the undo control. Undo always fires; the shell decides
/// whether it is accepted.
#[component]
pub(super) fn Header(#[prop(into)] progress: Signal<Progress>, on_undo: Callback<()>) -> impl IntoView {
    view! {
        <header class="header" style=CONTAINER_STYLE>
            <div class="progress" style=PROGRESS_STYLE title=move || progress.get().title()>
                <div
                    class="progress-bar progress-bar-striped progress-bar-animated"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuenow=move || progress.get().now.to_string()
                    aria-valuemax=move || progress.get().total.to_string()
                    style=move || format!("width: {}%;", float_fmt::fixed(progress.get().bar_width(), 2))
                >
                    {move || progress.get().label()}
                </div>
            </div>
            <button class="btn btn-primary" on:click=move |_| on_undo.run(())>
                "undo"
            </button>
        </header>
    }
}
