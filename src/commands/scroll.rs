//! Scroll command handlers.
//!
//! One handler per direction. Each invocation re-reads the configured
//! ratio and hands the host a scroll request; nothing waits for the
//! scroll to complete.

use std::sync::Arc;

use futures::future::BoxFuture;
use log::debug;

use crate::commands::{CommandError, CommandHandler};
use crate::core::settings::RatioSetting;
use crate::host::{ScrollDirection, ScrollRequest, Viewport};

/// Builds the handler for one scroll direction.
pub fn scroll_handler(
    direction: ScrollDirection,
    ratio: RatioSetting,
    viewport: Arc<dyn Viewport>,
) -> CommandHandler {
    Box::new(move || -> BoxFuture<'static, Result<(), CommandError>> {
        let ratio = ratio.clone();
        let viewport = Arc::clone(&viewport);
        Box::pin(async move {
            let request = ScrollRequest { to: direction, value: ratio.read() };
            debug!("scroll {} by {}", request.to, request.value);
            viewport.scroll(request);
            Ok(())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryConfigStore;
    use crate::test_support::RecordingViewport;

    fn fixture(direction: ScrollDirection) -> (RatioSetting, Arc<RecordingViewport>, CommandHandler) {
        let ratio = RatioSetting::new(Arc::new(MemoryConfigStore::new()));
        let viewport = Arc::new(RecordingViewport::default());
        let handler = scroll_handler(direction, ratio.clone(), viewport.clone());
        (ratio, viewport, handler)
    }

    #[tokio::test]
    async fn test_handler_forwards_direction_and_configured_ratio() {
        let (ratio, viewport, handler) = fixture(ScrollDirection::Up);
        ratio.write(0.5).unwrap();

        handler().await.unwrap();

        let requests = viewport.requests();
        assert_eq!(requests, vec![ScrollRequest { to: ScrollDirection::Up, value: 0.5 }]);
    }

    #[tokio::test]
    async fn test_handler_rereads_ratio_on_every_invocation() {
        let (ratio, viewport, handler) = fixture(ScrollDirection::Down);
        ratio.write(0.5).unwrap();
        handler().await.unwrap();

        ratio.write(0.8).unwrap();
        handler().await.unwrap();

        let values: Vec<f64> = viewport.requests().iter().map(|r| r.value).collect();
        assert_eq!(values, vec![0.5, 0.8]);
    }
}
