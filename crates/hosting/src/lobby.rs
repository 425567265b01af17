use ct_core::Geometry;
use ct_gameroom::Event;
use ct_gameroom::Room;
use ct_gameroom::TickConfig;
use ct_table::PlayerId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;

/// Manages active rooms and their lifecycles.
///
/// Rooms are keyed by the name in the URL: the first arrival creates the
/// room, later arrivals share it, and the entry is evicted when the room
/// task ends. A name can then be reused for a fresh room.
pub struct Lobby {
    geometry: Geometry,
    config: TickConfig,
    rooms: RwLock<HashMap<String, UnboundedSender<Event>>>,
}

impl Lobby {
    pub fn new(geometry: Geometry, config: TickConfig) -> Self {
        Self {
            geometry,
            config,
            rooms: RwLock::new(HashMap::new()),
        }
    }
    /// Gets or creates the named room, returning its inbox.
    ///
    /// A closed inbox means the room task already wound down but eviction
    /// has not run yet; entry replaces it rather than joining a corpse.
    pub async fn enter(self: &Arc<Self>, name: &str) -> UnboundedSender<Event> {
        let mut rooms = self.rooms.write().await;
        if let Some(tx) = rooms.get(name) {
            if !tx.is_closed() {
                return tx.clone();
            }
        }
        let (tx, done) = Room::spawn(name.to_string(), self.geometry, self.config);
        rooms.insert(name.to_string(), tx.clone());
        log::debug!("[lobby] created room {}", name);
        let lobby = self.clone();
        let name = name.to_string();
        tokio::spawn(async move {
            let _ = done.await;
            let mut rooms = lobby.rooms.write().await;
            if rooms.get(&name).is_some_and(|tx| tx.is_closed()) {
                rooms.remove(&name);
                log::info!("[lobby] room {} cleaned up", name);
            }
        });
        tx
    }
    pub async fn occupancy(&self) -> usize {
        self.rooms.read().await.len()
    }
}

impl Lobby {
    /// Spawns the WebSocket bridge for one connection.
    /// Join goes to the room before the loop starts, so the first frame the
    /// socket sees is its own fullupdate; Leave is the loop's one exit
    /// path, covering clean closes and transport errors alike.
    pub async fn bridge(
        self: &Arc<Self>,
        room: &str,
        mut session: actix_ws::Session,
        mut streams: actix_ws::MessageStream,
    ) -> anyhow::Result<()> {
        use futures::StreamExt;
        let id = PlayerId::default();
        let inbox = self.enter(room).await;
        let (outbox, mut rx) = tokio::sync::mpsc::unbounded_channel();
        inbox
            .send(Event::Join { id, outbox })
            .map_err(|_| anyhow::anyhow!("room closed during join"))?;
        log::debug!("[bridge {}] connected", id);
        actix_web::rt::spawn(async move {
            'sesh: loop {
                tokio::select! {
                    biased;
                    msg = rx.recv() => match msg {
                        Some(json) => if session.text(json).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    msg = streams.next() => match msg {
                        Some(Ok(actix_ws::Message::Text(text))) => if inbox.send(Event::Intent { id, text: text.to_string() }).is_err() { break 'sesh },
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            let _ = inbox.send(Event::Leave { id });
            log::debug!("[bridge {}] disconnected", id);
        });
        Ok(())
    }
}
