use super::CardState;
use super::Player;
use super::PlayerId;
use super::Visibility;
use ct_cards::Card;
use ct_core::Geometry;
use ct_core::Ordinal;
use ct_core::Point;
use ct_core::Z_DEAL_RANGE;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;

/// Which key `sortHand` orders by; the other key breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Suit,
    Rank,
}

/// The authoritative state of one room: all 52 cards and every connected
/// player, plus the monotone z-order counter and the room's RNG.
///
/// Exclusively owned by its room's processing task. Every public mutation
/// runs to completion synchronously, so intents are applied atomically in
/// arrival order and broadcast reads only ever see settled state.
#[derive(Debug)]
pub struct Table {
    geometry: Geometry,
    cards: BTreeMap<Card, CardState>,
    players: HashMap<PlayerId, Player>,
    stack: ct_core::ZIndex,
    joined: Ordinal,
    rng: SmallRng,
}

impl Table {
    /// Deals the full deck to the staging position with distinct randomized
    /// z-indices below the table band.
    pub fn new(geometry: Geometry) -> Self {
        let mut rng = SmallRng::from_os_rng();
        let zs = rand::seq::index::sample(&mut rng, Z_DEAL_RANGE as usize, 52);
        let cards = Card::deck()
            .zip(zs.iter())
            .map(|(card, z)| {
                let state = CardState::staged(geometry.staging, geometry.rotation, z as i32);
                (card, state)
            })
            .collect();
        Self {
            geometry,
            cards,
            players: HashMap::new(),
            stack: ct_core::Z_TABLE_BASE,
            joined: 0,
            rng,
        }
    }
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }
    pub fn cards(&self) -> &BTreeMap<Card, CardState> {
        &self.cards
    }
    pub fn players(&self) -> &HashMap<PlayerId, Player> {
        &self.players
    }
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }
    pub fn state(&self, card: &Card) -> Option<&CardState> {
        self.cards.get(card)
    }
    pub(crate) fn state_mut(&mut self, card: &Card) -> Option<&mut CardState> {
        self.cards.get_mut(card)
    }
    pub(crate) fn cards_mut(&mut self) -> &mut BTreeMap<Card, CardState> {
        &mut self.cards
    }
    pub(crate) fn players_mut(&mut self) -> &mut HashMap<PlayerId, Player> {
        &mut self.players
    }
    pub(crate) fn rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
    pub(crate) fn stack(&mut self) -> &mut ct_core::ZIndex {
        &mut self.stack
    }
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
    /// The given player's hand: cards privately visible to them.
    pub fn hand(&self, player: PlayerId) -> impl Iterator<Item = (&Card, &CardState)> {
        self.cards.iter().filter(move |(_, s)| s.held_by(player))
    }
}

/// Connection lifecycle.
impl Table {
    /// Seats a new connection with a generated display name.
    pub fn connect(&mut self, id: PlayerId) {
        self.joined += 1;
        let player = Player::new(self.joined);
        log::info!("[table] {} connected as {:?}", id, player.name);
        self.players.insert(id, player);
    }
    /// Tears down a connection: every card this player held or selected is
    /// released to shared space at the staging position and sunk into the
    /// reset band. Cards and players the departing player never touched are
    /// left alone. Safe to call for an already-removed id.
    pub fn disconnect(&mut self, id: PlayerId) {
        match self.players.remove(&id) {
            Some(player) => log::info!("[table] {} ({}) disconnected", id, player.name),
            None => log::warn!("[table] disconnect for unknown player {}", id),
        }
        let staging = self.geometry.staging;
        let rotation = self.geometry.rotation;
        let released = self
            .cards
            .iter()
            .filter(|(_, s)| s.held_by(id) || s.selected_by == Some(id))
            .map(|(card, _)| *card)
            .collect::<Vec<_>>();
        for card in released {
            let z_index = self.reset_z();
            let state = self.cards.get_mut(&card).expect("card keys are closed");
            state.visibility = Visibility::All;
            state.selected_by = None;
            state.position = staging;
            state.rotation = rotation;
            state.flipped = true;
            state.z_index = z_index;
        }
    }
}

/// Cursor and identity intents.
impl Table {
    pub fn cursor(&mut self, sender: PlayerId, position: Point, pressed: bool) {
        let Some(player) = self.players.get_mut(&sender) else {
            log::warn!("[table] cursor from unknown player {}", sender);
            return;
        };
        player.cursor_position = position;
        player.cursor_pressed = pressed;
    }
    pub fn rename(&mut self, sender: PlayerId, name: String) {
        let Some(player) = self.players.get_mut(&sender) else {
            log::warn!("[table] rename from unknown player {}", sender);
            return;
        };
        log::debug!("[table] {} renamed to {:?}", sender, name);
        player.name = name;
    }
}

/// Card motion.
impl Table {
    /// Applies a relative move to a card, or to the sender's whole
    /// selection when `group` is set and the named card belongs to it.
    /// Every moved card is clamped, has its visibility re-resolved from its
    /// new position, and is brought to the front of its band.
    pub fn move_card(&mut self, sender: PlayerId, card: Card, delta: Point, group: bool) {
        if !self.players.contains_key(&sender) {
            log::warn!("[table] move from unknown player {}", sender);
            return;
        }
        let Some(state) = self.cards.get(&card) else {
            return;
        };
        let moved = match group && state.selected_by == Some(sender) {
            true => self.selected(sender),
            false => vec![card],
        };
        // owners before and after decide which hand bands to renumber
        let mut owners = HashSet::new();
        for card in &moved {
            let state = self.cards.get_mut(card).expect("card keys are closed");
            owners.extend(state.visibility.owner());
            state.position = self.geometry.clamp(state.position + delta);
        }
        for card in &moved {
            self.resolve_visibility(sender, *card);
            owners.extend(self.cards[card].visibility.owner());
        }
        self.restack(&moved);
        for owner in owners {
            self.rehand(owner);
        }
    }
    /// Toggles a card face up or down. When the card is in the sender's
    /// selection the new face is applied uniformly to the whole selection.
    pub fn flip(&mut self, sender: PlayerId, card: Card) {
        let Some(state) = self.cards.get(&card) else {
            return;
        };
        let flipped = !state.flipped;
        let group = state.selected_by == Some(sender);
        let targets = match group {
            true => self.selected(sender),
            false => vec![card],
        };
        for card in targets {
            self.cards.get_mut(&card).expect("card keys are closed").flipped = flipped;
        }
    }
}

/// Bulk table operations.
impl Table {
    /// Returns every card to the staging position: shared, face down,
    /// unselected, randomized distinct reset-band z.
    pub fn reset(&mut self) {
        log::info!("[table] reset");
        let staging = self.geometry.staging;
        let rotation = self.geometry.rotation;
        let zs = self.reset_zs(self.cards.len());
        for (state, z_index) in self.cards.values_mut().zip(zs) {
            state.position = staging;
            state.rotation = rotation;
            state.flipped = true;
            state.visibility = Visibility::All;
            state.selected_by = None;
            state.z_index = z_index;
        }
    }
    /// Reorders the sender's hand across its existing x coordinates: the
    /// sorted cards are dealt onto the sorted x positions, so the hand's
    /// footprint on the table is preserved and only occupancy permutes.
    pub fn sort_hand(&mut self, sender: PlayerId, key: SortKey) {
        let mut hand = self
            .hand(sender)
            .map(|(card, state)| (*card, state.position.x))
            .collect::<Vec<_>>();
        let mut xs = hand.iter().map(|(_, x)| *x).collect::<Vec<_>>();
        xs.sort_by(f32::total_cmp);
        match key {
            SortKey::Suit => hand.sort_by_key(|(card, _)| card.by_suit()),
            SortKey::Rank => hand.sort_by_key(|(card, _)| card.by_rank()),
        }
        for ((card, _), x) in hand.into_iter().zip(xs) {
            self.cards.get_mut(&card).expect("card keys are closed").position.x = x;
        }
        self.rehand(sender);
    }
}

impl Table {
    /// Cards currently selected by the given player, in key order.
    pub(crate) fn selected(&self, player: PlayerId) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|(_, s)| s.selected_by == Some(player))
            .map(|(card, _)| *card)
            .collect()
    }
}
