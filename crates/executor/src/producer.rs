use tokio::sync::mpsc::Sender;
use tracing::debug;

use super::{
    error::Error,
    types::{QueryRecord, QueryStreamer},
};

pub struct Producer<S: QueryStreamer> {
    streamer: S,
}

impl<S> Producer<S>
where
    S: QueryStreamer,
{
    pub fn new(streamer: S) -> Self {
        Producer { streamer }
    }

    pub fn spawn(self, sender: Sender<QueryRecord>) -> tokio::task::JoinHandle<Result<(), Error>> {
        debug!("Producer ready.");
        tokio::spawn(async move { self.streamer.run_stream(sender).await })
    }
}
