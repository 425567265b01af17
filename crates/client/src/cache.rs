use crate::Layout;
use ct_assignment::Costs;
use ct_cards::Card;
use ct_core::Point;
use ct_gameroom::CardRecord;
use ct_gameroom::Intent;
use ct_gameroom::PlayerRecord;
use ct_gameroom::ServerMessage;
use ct_table::PlayerId;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// A chat line surfaced to the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatLine {
    pub id: PlayerId,
    pub name: String,
    pub message: String,
}

/// Local mirror of the room.
///
/// Snapshots replace the whole mirror; there is nothing to merge and no
/// way to drift. Between snapshots the mirror is read-only except for the
/// drag latch, which is pure client intent and never part of server state.
pub struct Cache {
    me: PlayerId,
    players: HashMap<PlayerId, PlayerRecord>,
    cards: BTreeMap<Card, CardRecord>,
    dragging: Option<Card>,
}

impl Cache {
    pub fn new(me: PlayerId) -> Self {
        Self {
            me,
            players: HashMap::new(),
            cards: BTreeMap::new(),
            dragging: None,
        }
    }
    /// Applies one server frame. Chat passes through to the caller; state
    /// frames are absorbed silently.
    pub fn apply(&mut self, message: ServerMessage) -> Option<ChatLine> {
        match message {
            ServerMessage::Fullupdate { players, cards } => {
                self.players = players;
                self.cards = cards;
                None
            }
            ServerMessage::Chat { id, name, message } => Some(ChatLine { id, name, message }),
        }
    }
    pub fn me(&self) -> PlayerId {
        self.me
    }
    pub fn players(&self) -> &HashMap<PlayerId, PlayerRecord> {
        &self.players
    }
    pub fn cards(&self) -> &BTreeMap<Card, CardRecord> {
        &self.cards
    }
    /// Latches a card as pointer-held. Reconciliation leaves it alone so
    /// layout never fights the drag.
    pub fn grab(&mut self, card: Card) {
        self.dragging = Some(card);
    }
    pub fn release(&mut self) {
        self.dragging = None;
    }
    pub fn dragging(&self) -> Option<Card> {
        self.dragging
    }
    /// The local hand at authoritative positions, dragged card excluded.
    pub fn hand(&self) -> Vec<(Card, Point)> {
        self.cards
            .iter()
            .filter(|(_, record)| record.visible_only_to.owner() == Some(self.me))
            .filter(|(card, _)| Some(**card) != self.dragging)
            .map(|(card, record)| (*card, record.position))
            .collect()
    }
}

impl Cache {
    /// One layout frame: match hand cards to evenly spaced slots at minimal
    /// total squared travel, then nudge each unsettled card a fraction
    /// `1 - exp(-decay * dt)` of its residual. Settled cards (residual
    /// under the snap threshold) emit nothing and the server's hand
    /// renumbering keeps their stacking current. Everything is recomputed
    /// from the latest snapshot, so dropped or reordered intents cost one
    /// frame of smoothness and nothing else.
    pub fn reconcile(&self, layout: &Layout, dt: f32) -> Vec<Intent> {
        let hand = self.hand();
        if hand.is_empty() {
            return Vec::new();
        }
        let positions = hand.iter().map(|(_, p)| *p).collect::<Vec<_>>();
        let slots = layout.slots(hand.len());
        let matching = Costs::squared(&positions, &slots).minimize();
        let alpha = layout.alpha(dt);
        matching
            .pairs()
            .filter(|(row, col)| positions[*row].distance(&slots[*col]) >= layout.snap)
            .map(|(row, col)| Intent::Card {
                card: hand[row].0,
                movement: (slots[col] - positions[row]) * alpha,
            })
            .collect()
    }
}
