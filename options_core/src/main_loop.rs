use crate::action::OptionsAction;
use crate::state::OptionsState;
use crate::store::OptionsStore;
use crossbeam_channel::{Receiver, Sender, TryRecvError, TrySendError};

pub const INBOUND_CAP: usize = 256;
pub const OUTBOUND_CAP: usize = 256;

#[derive(Debug)]
pub enum InboundMsg {
    Dispatch { action: OptionsAction },
    RequestSnapshot,
}

#[derive(Debug, Clone)]
pub enum OutboundMsg {
    Snapshot {
        revision: u64,
        state: Box<OptionsState>,
    },
}

/// Applies dispatched actions one at a time and publishes whole snapshots.
pub struct MainLoop {
    inbound_rx: Receiver<InboundMsg>,
    outbound_tx: Sender<OutboundMsg>,
    store: OptionsStore,
}

impl MainLoop {
    pub fn new(inbound_rx: Receiver<InboundMsg>, outbound_tx: Sender<OutboundMsg>) -> Self {
        Self::with_store(OptionsStore::new(), inbound_rx, outbound_tx)
    }

    pub fn with_store(
        store: OptionsStore,
        inbound_rx: Receiver<InboundMsg>,
        outbound_tx: Sender<OutboundMsg>,
    ) -> Self {
        Self {
            inbound_rx,
            outbound_tx,
            store,
        }
    }

    pub fn store(&self) -> &OptionsStore {
        &self.store
    }

    /// Drains everything queued without blocking. Publishes at most one
    /// snapshot, and only if something changed or a snapshot was requested.
    pub fn tick(&mut self) {
        let mut changed = false;
        let mut snapshot_requested = false;

        loop {
            match self.inbound_rx.try_recv() {
                Ok(msg) => match msg {
                    InboundMsg::Dispatch { action } => {
                        self.store.dispatch(action);
                        changed = true;
                    }
                    InboundMsg::RequestSnapshot => snapshot_requested = true,
                },
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }

        if changed || snapshot_requested {
            self.publish();
        }
    }

    /// Blocks until every sender is gone, then publishes the final state.
    pub fn run(&mut self) {
        while let Ok(msg) = self.inbound_rx.recv() {
            match msg {
                InboundMsg::Dispatch { action } => {
                    self.store.dispatch(action);
                }
                InboundMsg::RequestSnapshot => self.publish(),
            }
        }
        tracing::debug!(revision = self.store.revision(), "inbound closed");
        self.publish();
    }

    pub fn into_store(self) -> OptionsStore {
        self.store
    }

    fn publish(&mut self) {
        let msg = OutboundMsg::Snapshot {
            revision: self.store.revision(),
            state: Box::new(self.store.state().clone()),
        };
        // Best-effort; a slow reader only misses intermediate snapshots.
        match self.outbound_tx.try_send(msg) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => tracing::warn!("outbound full; snapshot dropped"),
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!("outbound closed; snapshot dropped")
            }
        }
    }
}
