use leptos::prelude::*;
use tracing::{error, info, warn};
use versus::{AppShell, ClientConfig, ComparisonPair, Progress, Selection, ViewState};

mod header;
mod image_button;
mod main_view;
mod socket;
mod storage;

use header::Header;
use main_view::MainView;
use socket::{SocketEvents, WsChannel};

pub fn start() {
    console_error_panic_hook::set_once();

    let stored = storage::load_client_config();
    let config = stored
        .as_ref()
        .and_then(|r| r.as_ref().ok())
        .cloned()
        .unwrap_or_default();

    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.level())
            .build(),
    );
    if let Some(Err(e)) = stored {
        warn!("ignoring stored client config: {}", e);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}

/// Owns the socket and the canonical state; children only see snapshots.
#[component]
fn App(config: ClientConfig) -> impl IntoView {
    let shell = StoredValue::new_local(AppShell::<WsChannel>::new());
    let view_state = RwSignal::new(ViewState::default());

    let refresh = move || view_state.set(shell.with_value(|s| s.snapshot()));

    match storage::page_location() {
        Some((protocol, host)) => {
            let url = config.endpoint(&protocol, &host);
            match WsChannel::open(&url) {
                Ok(channel) => {
                    info!(%url, "opening voting channel");
                    channel.listen(SocketEvents {
                        on_open: Box::new(move || {
                            shell.update_value(|s| s.on_open());
                            refresh();
                        }),
                        on_text: Box::new(move |text: String| {
                            shell.update_value(|s| {
                                s.on_message(&text);
                            });
                            refresh();
                        }),
                        on_close: Box::new(move || {
                            shell.update_value(|s| s.on_close());
                            refresh();
                        }),
                    });
                    shell.update_value(|s| s.attach(channel));
                    refresh();
                }
                Err(e) => error!(%url, "could not open voting channel: {}", e),
            }
        }
        None => error!("page location unavailable; no voting channel"),
    }

    let on_select = Callback::new(move |selection: Selection| {
        shell.update_value(|s| {
            s.select(selection);
        });
        refresh();
    });

    let on_undo = Callback::new(move |_: ()| {
        shell.update_value(|s| {
            s.undo();
        });
        refresh();
    });

    let progress: Memo<Progress> = Memo::new(move |_| view_state.with(|v| v.progress));
    let pair: Memo<Option<ComparisonPair>> = Memo::new(move |_| view_state.with(|v| v.pair.clone()));
    let disabled = Memo::new(move |_| view_state.with(|v| v.disabled));

    view! {
        <div class="app">
            <Header progress=progress on_undo=on_undo />
            <MainView
                pair=pair
                disabled=disabled
                on_select=on_select
                rate_decimals=config.rate_decimals
            />
        </div>
    }
}
