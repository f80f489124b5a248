use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work that touches the network and therefore cannot run inside a key
/// handler. Handlers enqueue, the event loop drains and awaits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Action {
    StopTimer,
    SubmitManualEntry,
    RefreshData,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
