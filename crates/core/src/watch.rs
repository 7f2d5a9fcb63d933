use std::time::Duration;

use futures::{
    StreamExt,
    stream::{self, BoxStream},
};
use tokio::time::{Interval, MissedTickBehavior, interval};
use tracing::{debug, warn};

use crate::{
    error::Error,
    gateway::traits::AuctionGateway,
    projection,
    types::{
        params::AuctionParameters,
        primitives::{AuctionId, Timestamp},
        view::AuctionView,
    },
};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

pub type ViewStreamItem = Result<AuctionView, Error>;

pub type BoxViewStream = BoxStream<'static, ViewStreamItem>;

/// Polls one auction on a fixed interval and yields a fresh projection per
/// tick. Dropping the stream stops polling.
pub struct AuctionWatcher<G> {
    gateway: G,
    id: AuctionId,
    poll_interval: Duration,
    stop_at_terminal: bool,
}

struct PollState<G> {
    watcher: AuctionWatcher<G>,
    ticker: Interval,
    params: Option<AuctionParameters>,
    finished: bool,
}

impl<G> AuctionWatcher<G>
where
    G: AuctionGateway + 'static,
{
    pub fn new(gateway: G, id: AuctionId) -> Self {
        Self {
            gateway,
            id,
            poll_interval: DEFAULT_POLL_INTERVAL,
            stop_at_terminal: false,
        }
    }

    pub fn with_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// End the stream after the first cleared or expired snapshot.
    pub fn stop_at_terminal(mut self, stop: bool) -> Self {
        self.stop_at_terminal = stop;
        self
    }

    pub fn into_stream(self) -> BoxViewStream {
        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let state = PollState {
            watcher: self,
            ticker,
            params: None,
            finished: false,
        };

        stream::unfold(state, |mut poll| async move {
            if poll.finished {
                return None;
            }

            poll.ticker.tick().await;
            let item = poll.next_view().await;

            if let Ok(view) = &item {
                if poll.watcher.stop_at_terminal && view.phase.is_terminal() {
                    debug!(auction = %poll.watcher.id, "auction reached a terminal phase");
                    poll.finished = true;
                }
            }

            Some((item, poll))
        })
        .boxed()
    }
}

impl<G> PollState<G>
where
    G: AuctionGateway,
{
    // Parameters never change after creation, so they are read once.
    async fn next_view(&mut self) -> ViewStreamItem {
        let id = self.watcher.id;

        let params = match self.params.clone() {
            Some(params) => params,
            None => {
                let params = self.watcher.gateway.read_auction_parameters(id).await?;
                self.params = Some(params.clone());
                params
            }
        };

        let state = self
            .watcher
            .gateway
            .read_auction_state(id)
            .await
            .inspect_err(|err| warn!(auction = %id, %err, "failed to poll auction state"))?;

        Ok(projection::project(&params, &state, Timestamp::now()))
    }
}
