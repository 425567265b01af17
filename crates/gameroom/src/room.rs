use crate::Event;
use crate::Intent;
use crate::Protocol;
use crate::ServerMessage;
use crate::TickConfig;
use ct_core::Geometry;
use ct_table::PlayerId;
use ct_table::SortKey;
use ct_table::Table;
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::oneshot;

/// Live card room coordinator.
/// Single-writer actor: owns the Table, drains the inbox, and broadcasts
/// snapshots on a fixed cadence. All mutation happens on this task, so
/// the table never needs a lock.
pub struct Room {
    name: String,
    table: Table,
    inbox: UnboundedReceiver<Event>,
    outboxes: HashMap<PlayerId, UnboundedSender<String>>,
    config: TickConfig,
    dirty: bool,
}

impl Room {
    /// Spawns the room task. The returned sender is the only handle the
    /// rest of the system holds; the oneshot fires when the last player
    /// leaves and the task winds down.
    pub fn spawn(
        name: String,
        geometry: Geometry,
        config: TickConfig,
    ) -> (UnboundedSender<Event>, oneshot::Receiver<()>) {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let (done_tx, done_rx) = oneshot::channel();
        let room = Self {
            name,
            table: Table::new(geometry),
            inbox: rx,
            outboxes: HashMap::new(),
            config,
            dirty: false,
        };
        tokio::spawn(async move {
            room.run().await;
            let _ = done_tx.send(());
        });
        (tx, done_rx)
    }
    async fn run(mut self) {
        log::debug!("[room {}] opening", self.name);
        let mut ticker = self.config.interval();
        loop {
            tokio::select! {
                biased;
                event = self.inbox.recv() => match event {
                    Some(event) => {
                        if self.handle(event) {
                            break;
                        }
                    }
                    None => break,
                },
                _ = ticker.tick() => self.flush(),
            }
        }
        log::debug!("[room {}] closing", self.name);
    }
    /// Applies one event. Returns true when the room is empty and should
    /// shut down.
    fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::Join { id, outbox } => {
                log::info!("[room {}] player {} joined", self.name, id);
                self.table.connect(id);
                self.outboxes.insert(id, outbox);
                self.broadcast(ServerMessage::fullupdate(&self.table));
                self.dirty = false;
            }
            Event::Intent { id, text } => match Protocol::decode(&text) {
                Ok(intent) => self.apply(id, intent),
                Err(e) => log::warn!("[room {}] dropped frame from {}: {}", self.name, id, e),
            },
            Event::Leave { id } => {
                log::info!("[room {}] player {} left", self.name, id);
                self.table.disconnect(id);
                self.outboxes.remove(&id);
                if self.outboxes.is_empty() {
                    return true;
                }
                self.broadcast(ServerMessage::fullupdate(&self.table));
                self.dirty = false;
            }
        }
        false
    }
    fn apply(&mut self, id: PlayerId, intent: Intent) {
        match intent {
            Intent::Cursor {
                cursor_position,
                cursor_pressed,
            } => self.table.cursor(id, cursor_position, cursor_pressed),
            Intent::Card { card, movement } => self.table.move_card(id, card, movement, false),
            Intent::CardAll { card, movement } => self.table.move_card(id, card, movement, true),
            Intent::CardFlip { card } => self.table.flip(id, card),
            Intent::Selection { selection } => self.table.select(id, selection),
            Intent::EndSelection => self.table.end_selection(id),
            Intent::Deselect => self.table.deselect(id),
            Intent::Name { name } => self.table.rename(id, name),
            Intent::Reset => self.table.reset(),
            Intent::SortSuit => self.table.sort_hand(id, SortKey::Suit),
            Intent::SortRank => self.table.sort_hand(id, SortKey::Rank),
            Intent::Chat { message } => {
                // chat bypasses the tick so it lands exactly once
                if let Some(player) = self.table.players().get(&id) {
                    let name = player.name.clone();
                    self.broadcast(ServerMessage::chat(id, &name, &message));
                }
                return;
            }
        }
        self.dirty = true;
    }
    /// Tick handler. Idle rooms stay silent.
    fn flush(&mut self) {
        if self.dirty {
            self.broadcast(ServerMessage::fullupdate(&self.table));
            self.dirty = false;
        }
    }
    fn broadcast(&self, message: ServerMessage) {
        let json = message.to_json();
        for (id, outbox) in &self.outboxes {
            if outbox.send(json.clone()).is_err() {
                log::warn!("[room {}] outbox for {} is gone", self.name, id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn join(tx: &UnboundedSender<Event>) -> (PlayerId, UnboundedReceiver<String>) {
        let id = PlayerId::default();
        let (outbox, rx) = tokio::sync::mpsc::unbounded_channel();
        tx.send(Event::Join { id, outbox }).unwrap();
        (id, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn join_broadcasts_immediately() {
        let (tx, _done) = Room::spawn("t".into(), Geometry::default(), TickConfig::default());
        let (_, mut rx) = join(&tx);
        tokio::task::yield_now().await;
        let frame = rx.recv().await.unwrap();
        assert!(frame.contains(r#""type":"fullupdate""#));
    }
    #[tokio::test(start_paused = true)]
    async fn idle_ticks_send_nothing() {
        let (tx, _done) = Room::spawn("t".into(), Geometry::default(), TickConfig::default());
        let (_, mut rx) = join(&tx);
        tokio::task::yield_now().await;
        rx.recv().await.unwrap();
        tokio::time::advance(std::time::Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }
    #[tokio::test(start_paused = true)]
    async fn intent_flushes_on_next_tick() {
        let (tx, _done) = Room::spawn("t".into(), Geometry::default(), TickConfig::default());
        let (id, mut rx) = join(&tx);
        tokio::task::yield_now().await;
        rx.recv().await.unwrap();
        let text = r#"{"type":"cursor","cursorPosition":{"x":5.0,"y":5.0},"cursorPressed":false}"#;
        tx.send(Event::Intent { id, text: text.into() }).unwrap();
        tokio::time::advance(std::time::Duration::from_millis(10)).await;
        tokio::task::yield_now().await;
        let frame = rx.recv().await.unwrap();
        assert!(frame.contains(r#""cursorPosition":{"x":5.0,"y":5.0}"#));
        tokio::time::advance(std::time::Duration::from_millis(10)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }
    #[tokio::test(start_paused = true)]
    async fn chat_lands_exactly_once() {
        let (tx, _done) = Room::spawn("t".into(), Geometry::default(), TickConfig::default());
        let (id, mut rx) = join(&tx);
        tokio::task::yield_now().await;
        rx.recv().await.unwrap();
        let text = r#"{"type":"chat","message":"hi"}"#;
        tx.send(Event::Intent { id, text: text.into() }).unwrap();
        tokio::task::yield_now().await;
        let frame = rx.recv().await.unwrap();
        assert!(frame.contains(r#""type":"chat""#));
        assert!(frame.contains(r#""message":"hi""#));
        tokio::time::advance(std::time::Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }
    #[tokio::test(start_paused = true)]
    async fn malformed_frames_are_dropped() {
        let (tx, _done) = Room::spawn("t".into(), Geometry::default(), TickConfig::default());
        let (id, mut rx) = join(&tx);
        tokio::task::yield_now().await;
        rx.recv().await.unwrap();
        tx.send(Event::Intent { id, text: "garbage".into() }).unwrap();
        tokio::time::advance(std::time::Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }
    #[tokio::test(start_paused = true)]
    async fn leave_broadcasts_to_survivors() {
        let (tx, _done) = Room::spawn("t".into(), Geometry::default(), TickConfig::default());
        let (first, mut rx1) = join(&tx);
        let (_, mut rx2) = join(&tx);
        tokio::task::yield_now().await;
        rx1.recv().await.unwrap();
        rx1.recv().await.unwrap();
        rx2.recv().await.unwrap();
        tx.send(Event::Leave { id: first }).unwrap();
        tokio::task::yield_now().await;
        let frame = rx2.recv().await.unwrap();
        assert!(!frame.contains(&first.to_string()));
    }
    #[tokio::test(start_paused = true)]
    async fn last_leave_closes_room() {
        let (tx, done) = Room::spawn("t".into(), Geometry::default(), TickConfig::default());
        let (id, _rx) = join(&tx);
        tokio::task::yield_now().await;
        tx.send(Event::Leave { id }).unwrap();
        done.await.unwrap();
    }
}
