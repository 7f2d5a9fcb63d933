use std::time::Duration;

use doma_core::{AuctionGateway, AuctionId, AuctionView, watch::AuctionWatcher};
use futures::StreamExt;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy)]
pub struct WatchOptions {
    pub interval: Duration,
    pub until_end: bool,
}

/// Poll `id` until Ctrl-C (or its end, with `until_end`), handing every
/// snapshot to `render`. Failed polls are logged and skipped.
pub async fn watch<G, F>(gateway: G, id: AuctionId, options: WatchOptions, mut render: F)
where
    G: AuctionGateway + 'static,
    F: FnMut(&AuctionView),
{
    let mut views = AuctionWatcher::new(gateway, id)
        .with_interval(options.interval)
        .stop_at_terminal(options.until_end)
        .into_stream();

    info!(auction = %id, interval_secs = options.interval.as_secs(), "watching auction");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("stopped by user");
                break;
            }
            next = views.next() => match next {
                Some(Ok(view)) => render(&view),
                Some(Err(err)) => warn!(auction = %id, %err, "poll failed"),
                None => {
                    info!(auction = %id, "auction finished");
                    break;
                }
            }
        }
    }
}
