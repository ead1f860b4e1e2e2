//! Transient success banners.

use leptos::prelude::*;

use crate::router::{Notice, NoticeKind};

#[component]
pub fn NoticeBanner(notice: Notice) -> impl IntoView {
    let classes = match notice.kind {
        NoticeKind::Success => "notice notice-success",
    };

    view! {
        <div class=classes role="status">
            {notice.message}
        </div>
    }
}
