use tracing::{debug, warn};
use versus::{Channel, ChannelError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

pub(super) struct SocketEvents {
    pub(super) on_open: Box<dyn FnMut()>,
    pub(super) on_text: Box<dyn FnMut(String)>,
    pub(super) on_close: Box<dyn FnMut()>,
}

/// The browser WebSocket to the voting server. No reconnect on close.
pub(super) struct WsChannel {
    socket: WebSocket,
}

impl WsChannel {
    pub(super) fn open(url: &str) -> Result<Self, String> {
        let socket = WebSocket::new(url).map_err(|e| format!("websocket: {e:?}"))?;
        Ok(Self { socket })
    }

    /// Registers the handlers for the socket's lifetime.
    pub(super) fn listen(&self, events: SocketEvents) {
        let SocketEvents {
            mut on_open,
            mut on_text,
            mut on_close,
        } = events;

        let onopen = Closure::wrap(Box::new(move |_ev: Event| on_open()) as Box<dyn FnMut(_)>);
        self.socket.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        onopen.forget();

        let onmessage = Closure::wrap(Box::new(move |ev: MessageEvent| {
            match ev.data().as_string() {
                Some(text) => on_text(text),
                None => warn!("ignoring non-text frame from voting server"),
            }
        }) as Box<dyn FnMut(_)>);
        self.socket
            .set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        onmessage.forget();

        // An error event is always followed by close; only note it here.
        let onerror = Closure::wrap(Box::new(move |_ev: Event| {
            debug!("websocket error event");
        }) as Box<dyn FnMut(_)>);
        self.socket.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        let onclose = Closure::wrap(Box::new(move |ev: CloseEvent| {
            debug!(code = ev.code(), reason = %ev.reason(), "websocket closed");
            on_close();
        }) as Box<dyn FnMut(_)>);
        self.socket.set_onclose(Some(onclose.as_ref().unchecked_ref()));
        onclose.forget();
    }
}

impl Channel for WsChannel {
    fn send_text(&self, text: &str) -> Result<(), ChannelError> {
        match self.socket.ready_state() {
            WebSocket::OPEN => self
                .socket
                .send_with_str(text)
                .map_err(|e| ChannelError::Send(format!("{e:?}"))),
            WebSocket::CONNECTING => Err(ChannelError::NotConnected),
            _ => Err(ChannelError::Closed),
        }
    }
}
