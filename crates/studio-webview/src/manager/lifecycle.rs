use std::borrow::Cow;
use std::sync::Arc;

use studio_common::PACKAGED_SCHEME;
use tracing::{debug, warn};
use wry::http::{header::CONTENT_TYPE, Response};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::ContentProvider;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the webview as a child of `window`, positioned at `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_focused(true)
            .with_initialization_script(&config.init_script);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events));
        builder = Self::attach_title_handler(builder, Arc::clone(&events));
        builder =
            Self::attach_navigation_handler(builder, Arc::clone(&events), config.policy.clone());
        builder = Self::attach_new_window_handler(builder, Arc::clone(&events));
        builder = self.attach_custom_protocol(builder);

        let initial_url = config.url.clone().unwrap_or_else(|| "about:blank".into());
        builder = builder.with_url(&initial_url);

        let webview = builder.build_as_child(window)?;

        debug!(url = %initial_url, devtools = config.devtools, "webview created");

        Ok(WebViewHandle {
            webview,
            current_url: initial_url,
            zoom: 1.0,
        })
    }

    /// Set the content provider for serving packaged assets via `studio://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    pub fn content_provider(&self) -> Option<&ContentProvider> {
        self.content_provider.as_deref()
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let Some(provider) = &self.content_provider else {
            return builder;
        };
        let cp = Arc::clone(provider);
        builder.with_custom_protocol(PACKAGED_SCHEME.to_string(), move |_wv_id, request| {
            let path = request.uri().path().to_string();
            match cp.resolve(&path) {
                Some((mime, data)) => protocol_response(200, &mime, data),
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    protocol_response(404, "text/plain", b"Not Found".to_vec())
                }
            }
        })
    }
}

fn protocol_response(status: u16, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, mime)
        .body(Cow::Owned(body))
        .unwrap_or_else(|e| {
            warn!(error = %e, "custom protocol: malformed response");
            let mut fallback = Response::new(Cow::Borrowed(&b""[..]));
            *fallback.status_mut() = wry::http::StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_response_sets_status_and_type() {
        let resp = protocol_response(200, "text/html", b"<html></html>".to_vec());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/html");
        assert_eq!(resp.body().as_ref(), b"<html></html>");
    }

    #[test]
    fn invalid_mime_falls_back_to_server_error() {
        let resp = protocol_response(200, "bad\nheader", Vec::new());
        assert_eq!(resp.status(), 500);
    }
}
