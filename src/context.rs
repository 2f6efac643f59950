//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::DndSignals;

use crate::config::{ApiConfig, NOTICE_DISMISS_MS};
use crate::models::InventoryKind;
use crate::trade::SlotRef;

/// A dragged item card: collection plus index in it
pub type DragKey = (InventoryKind, usize);

pub type TradeDnd = DndSignals<DragKey, SlotRef>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend location, resolved once at start-up
    pub api: StoredValue<ApiConfig>,
    /// Status line under the trade controls - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Status line under the trade controls - write
    set_notice: WriteSignal<Option<Notice>>,
    notice_seq: StoredValue<u32>,
    /// Item card drag state
    pub dnd: TradeDnd,
}

impl AppContext {
    pub fn new(api: ApiConfig, notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>), dnd: TradeDnd) -> Self {
        Self {
            api: StoredValue::new(api),
            notice: notice.0,
            set_notice: notice.1,
            notice_seq: StoredValue::new(0),
            dnd,
        }
    }

    pub fn api(&self) -> ApiConfig {
        self.api.get_value()
    }

    /// Show a status message; it clears itself unless replaced first
    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        self.notice_seq.update_value(|seq| *seq = seq.wrapping_add(1));
        let id = self.notice_seq.get_value();
        self.set_notice.set(Some(Notice { id, kind, text: text.into() }));

        let notice = self.notice;
        let set_notice = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DISMISS_MS).await;
            if notice.get_untracked().is_some_and(|n| n.id == id) {
                set_notice.set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        self.set_notice.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
