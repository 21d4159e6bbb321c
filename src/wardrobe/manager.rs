use crate::error::WardrobeError;
use crate::wardrobe::item::WardrobeItem;
use indexmap::IndexMap;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

pub enum WardrobeCommand {
    AddItem {
        item: WardrobeItem,
        responder: oneshot::Sender<Uuid>,
    },
    RemoveItem {
        id: Uuid,
        responder: oneshot::Sender<bool>,
    },
    GetItems {
        ids: Vec<Uuid>,
        responder: oneshot::Sender<Vec<WardrobeItem>>,
    },
    ListItems {
        responder: oneshot::Sender<Vec<WardrobeItem>>,
    },
    Clear {
        responder: oneshot::Sender<()>,
    },
    Len {
        responder: oneshot::Sender<usize>,
    },
}

/// Owns the session working set. All mutation goes through the command
/// channel, so there is exactly one writer and no locking.
pub struct Wardrobe {
    items: IndexMap<Uuid, WardrobeItem>,
    command_rx: mpsc::Receiver<WardrobeCommand>,
}

impl Wardrobe {
    pub fn spawn(buffer: usize) -> (WardrobeHandle, JoinHandle<()>) {
        let (command_tx, command_rx) = mpsc::channel(buffer);
        let mut wardrobe = Wardrobe {
            items: IndexMap::new(),
            command_rx,
        };
        let task = tokio::spawn(async move {
            wardrobe.run().await;
        });
        (WardrobeHandle { command_tx }, task)
    }

    async fn run(&mut self) {
        while let Some(command) = self.command_rx.recv().await {
            self.handle(command);
        }
        debug!("Wardrobe task stopping");
    }

    fn handle(&mut self, command: WardrobeCommand) {
        match command {
            WardrobeCommand::AddItem { item, responder } => {
                let id = item.id;
                debug!("Adding wardrobe item {} ({})", id, item.original_name);
                self.items.insert(id, item);
                let _ = responder.send(id);
            }
            WardrobeCommand::RemoveItem { id, responder } => {
                // shift_remove keeps the remaining items in upload order.
                let removed = self.items.shift_remove(&id).is_some();
                debug!("Removing wardrobe item {}: present={}", id, removed);
                let _ = responder.send(removed);
            }
            WardrobeCommand::GetItems { ids, responder } => {
                let items = ids
                    .iter()
                    .filter_map(|id| self.items.get(id).cloned())
                    .collect();
                let _ = responder.send(items);
            }
            WardrobeCommand::ListItems { responder } => {
                let _ = responder.send(self.items.values().cloned().collect());
            }
            WardrobeCommand::Clear { responder } => {
                self.items.clear();
                let _ = responder.send(());
            }
            WardrobeCommand::Len { responder } => {
                let _ = responder.send(self.items.len());
            }
        }
    }
}

/// Cloneable handle to the wardrobe task.
#[derive(Clone)]
pub struct WardrobeHandle {
    command_tx: mpsc::Sender<WardrobeCommand>,
}

impl WardrobeHandle {
    pub async fn add_item(&self, item: WardrobeItem) -> Result<Uuid, WardrobeError> {
        let (responder, response_rx) = oneshot::channel();
        self.command_tx
            .send(WardrobeCommand::AddItem { item, responder })
            .await
            .map_err(|_| WardrobeError::ChannelClosed)?;
        response_rx.await.map_err(|_| WardrobeError::ChannelClosed)
    }

    /// Returns whether the item was present.
    pub async fn remove_item(&self, id: Uuid) -> Result<bool, WardrobeError> {
        let (responder, response_rx) = oneshot::channel();
        self.command_tx
            .send(WardrobeCommand::RemoveItem { id, responder })
            .await
            .map_err(|_| WardrobeError::ChannelClosed)?;
        response_rx.await.map_err(|_| WardrobeError::ChannelClosed)
    }

    /// Resolves ids against the working set, preserving request order.
    /// Unknown ids are silently absent from the result.
    pub async fn get_items(&self, ids: Vec<Uuid>) -> Result<Vec<WardrobeItem>, WardrobeError> {
        let (responder, response_rx) = oneshot::channel();
        self.command_tx
            .send(WardrobeCommand::GetItems { ids, responder })
            .await
            .map_err(|_| WardrobeError::ChannelClosed)?;
        response_rx.await.map_err(|_| WardrobeError::ChannelClosed)
    }

    pub async fn list_items(&self) -> Result<Vec<WardrobeItem>, WardrobeError> {
        let (responder, response_rx) = oneshot::channel();
        self.command_tx
            .send(WardrobeCommand::ListItems { responder })
            .await
            .map_err(|_| WardrobeError::ChannelClosed)?;
        response_rx.await.map_err(|_| WardrobeError::ChannelClosed)
    }

    pub async fn clear(&self) -> Result<(), WardrobeError> {
        let (responder, response_rx) = oneshot::channel();
        self.command_tx
            .send(WardrobeCommand::Clear { responder })
            .await
            .map_err(|_| WardrobeError::ChannelClosed)?;
        response_rx.await.map_err(|_| WardrobeError::ChannelClosed)
    }

    pub async fn len(&self) -> Result<usize, WardrobeError> {
        let (responder, response_rx) = oneshot::channel();
        self.command_tx
            .send(WardrobeCommand::Len { responder })
            .await
            .map_err(|_| WardrobeError::ChannelClosed)?;
        response_rx.await.map_err(|_| WardrobeError::ChannelClosed)
    }
}
