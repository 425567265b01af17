use super::PlayerId;
use super::Table;
use super::Visibility;
use ct_cards::Card;
use ct_core::ZIndex;
use ct_core::Z_HAND_BASE;
use ct_core::Z_HAND_SPAN;
use ct_core::Z_RESET_MAX;
use ct_core::Z_RESET_MIN;
use ct_core::Z_STRIDE;
use ct_core::Z_TABLE_BASE;
use rand::Rng;

/// Z-order allocation. Three disjoint bands partition the stacking space:
/// the table band climbs from a per-room monotone counter, each player's
/// hand band is renumbered wholesale from a per-ordinal window, and reset
/// cards sink into a randomized negative band.
impl Table {
    /// Brings the touched table-band cards to the front, preserving their
    /// relative order (ascending prior z). The counter advances by the
    /// fixed stride per operation, not per card, leaving headroom between
    /// concurrently issued batches; operations that touch no table-band
    /// card (pure hand nudges) leave the counter alone. The counter is
    /// compacted before it could climb into the hand band.
    pub(crate) fn restack(&mut self, moved: &[Card]) {
        let mut touched = moved
            .iter()
            .filter(|card| {
                self.state(card)
                    .map(|s| s.visibility == Visibility::All)
                    .unwrap_or(false)
            })
            .map(|card| (self.state(card).expect("filtered above").z_index, *card))
            .collect::<Vec<_>>();
        if touched.is_empty() {
            return;
        }
        touched.sort();
        if *self.stack() + Z_STRIDE > Z_HAND_BASE {
            self.compact();
        }
        let base = *self.stack();
        for (offset, (_, card)) in touched.into_iter().enumerate() {
            let state = self.state_mut(&card).expect("card keys are closed");
            state.z_index = base + offset as ZIndex;
        }
        *self.stack() = base + Z_STRIDE;
    }
    /// Rewinds the table-band counter when it nears the hand band: every
    /// table-band card is renumbered consecutively from the band base,
    /// preserving relative order, and the counter restarts above them. Z
    /// distinctness holds throughout since the band never exceeds 52 cards.
    fn compact(&mut self) {
        let mut band = self
            .cards()
            .iter()
            .filter(|(_, s)| (Z_TABLE_BASE..Z_HAND_BASE).contains(&s.z_index))
            .map(|(card, s)| (s.z_index, *card))
            .collect::<Vec<_>>();
        band.sort();
        let count = band.len() as ZIndex;
        for (offset, (_, card)) in band.into_iter().enumerate() {
            let state = self.state_mut(&card).expect("card keys are closed");
            state.z_index = Z_TABLE_BASE + offset as ZIndex;
        }
        *self.stack() = Z_TABLE_BASE + count;
        log::debug!("[table] z counter compacted to {}", *self.stack());
    }
    /// Renumbers a player's entire hand left-to-right from their hand-band
    /// window, overwriting any prior hand-band indices. Called whenever
    /// hand membership or layout changes; a no-op for departed players.
    pub(crate) fn rehand(&mut self, owner: PlayerId) {
        let Some(player) = self.player(&owner) else {
            return;
        };
        let base = Z_HAND_BASE + player.ordinal as ZIndex * Z_HAND_SPAN;
        let mut hand = self
            .hand(owner)
            .map(|(card, state)| (state.position.x, *card))
            .collect::<Vec<_>>();
        hand.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        for (offset, (_, card)) in hand.into_iter().enumerate() {
            let state = self.state_mut(&card).expect("card keys are closed");
            state.z_index = base + offset as ZIndex;
        }
    }
    /// One fresh reset-band z-index, distinct from every index in play.
    pub(crate) fn reset_z(&mut self) -> ZIndex {
        loop {
            let z = self.rng().random_range(Z_RESET_MIN..Z_RESET_MAX);
            if self.cards().values().all(|s| s.z_index != z) {
                return z;
            }
        }
    }
    /// A batch of distinct reset-band z-indices, sampled without
    /// replacement across the whole band.
    pub(crate) fn reset_zs(&mut self, n: usize) -> Vec<ZIndex> {
        let width = (Z_RESET_MAX - Z_RESET_MIN) as usize;
        rand::seq::index::sample(self.rng(), width, n)
            .iter()
            .map(|offset| Z_RESET_MIN + offset as ZIndex)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_core::Geometry;
    use ct_core::Point;
    use ct_core::Z_TABLE_BASE;

    #[test]
    fn stride_advances_per_operation() {
        let mut table = Table::new(Geometry::default());
        let mover = PlayerId::default();
        table.connect(mover);
        let cards = table.cards().keys().copied().take(2).collect::<Vec<_>>();
        table.move_card(mover, cards[0], Point::new(10.0, 10.0), false);
        table.move_card(mover, cards[1], Point::new(20.0, 20.0), false);
        assert_eq!(table.state(&cards[0]).unwrap().z_index, Z_TABLE_BASE);
        assert_eq!(table.state(&cards[1]).unwrap().z_index, Z_TABLE_BASE + Z_STRIDE);
    }
    #[test]
    fn restack_preserves_relative_order() {
        let mut table = Table::new(Geometry::default());
        let mover = PlayerId::default();
        table.connect(mover);
        let cards = table.cards().keys().copied().take(3).collect::<Vec<_>>();
        let mut prior = cards
            .iter()
            .map(|c| (table.state(c).unwrap().z_index, *c))
            .collect::<Vec<_>>();
        prior.sort();
        table.restack(&cards);
        let mut after = cards
            .iter()
            .map(|c| (table.state(c).unwrap().z_index, *c))
            .collect::<Vec<_>>();
        after.sort();
        let prior = prior.into_iter().map(|(_, c)| c).collect::<Vec<_>>();
        let after = after.into_iter().map(|(_, c)| c).collect::<Vec<_>>();
        assert_eq!(prior, after);
    }
    #[test]
    fn hands_occupy_disjoint_windows() {
        let mut table = Table::new(Geometry::default());
        let a = PlayerId::default();
        let b = PlayerId::default();
        table.connect(a);
        table.connect(b);
        let cards = table.cards().keys().copied().take(4).collect::<Vec<_>>();
        table.move_card(a, cards[0], Point::new(50.0, 400.0), false);
        table.move_card(a, cards[1], Point::new(100.0, 400.0), false);
        table.move_card(b, cards[2], Point::new(50.0, 400.0), false);
        table.move_card(b, cards[3], Point::new(100.0, 400.0), false);
        let band = |card: &Card| (table.state(card).unwrap().z_index - Z_HAND_BASE) / Z_HAND_SPAN;
        assert_eq!(band(&cards[0]), band(&cards[1]));
        assert_eq!(band(&cards[2]), band(&cards[3]));
        assert_ne!(band(&cards[0]), band(&cards[2]));
    }
    #[test]
    fn hand_renumbers_left_to_right() {
        let mut table = Table::new(Geometry::default());
        let owner = PlayerId::default();
        table.connect(owner);
        let cards = table.cards().keys().copied().take(2).collect::<Vec<_>>();
        table.move_card(owner, cards[0], Point::new(300.0, 400.0), false);
        table.move_card(owner, cards[1], Point::new(100.0, 400.0), false);
        // cards[1] sits left of cards[0], so it takes the lower index
        assert!(
            table.state(&cards[1]).unwrap().z_index < table.state(&cards[0]).unwrap().z_index
        );
    }
    #[test]
    fn hand_nudges_leave_counter_alone() {
        let mut table = Table::new(Geometry::default());
        let owner = PlayerId::default();
        table.connect(owner);
        let card = *table.cards().keys().next().unwrap();
        table.move_card(owner, card, Point::new(50.0, 400.0), false);
        let before = *table.stack();
        // reconcile-style nudges of a hand card touch no table-band card
        table.move_card(owner, card, Point::new(1.0, 0.0), false);
        table.move_card(owner, card, Point::new(1.0, 0.0), false);
        assert_eq!(*table.stack(), before);
    }
    #[test]
    fn counter_compacts_below_hand_band() {
        let mut table = Table::new(Geometry::default());
        let owner = PlayerId::default();
        table.connect(owner);
        let cards = table.cards().keys().copied().take(2).collect::<Vec<_>>();
        table.move_card(owner, cards[0], Point::new(50.0, 400.0), false);
        table.move_card(owner, cards[1], Point::new(10.0, 10.0), false);
        // wind the counter to where one more stride would cross the band
        *table.stack() = Z_HAND_BASE - 1;
        table.move_card(owner, cards[1], Point::new(1.0, 1.0), false);
        let zs = table
            .cards()
            .values()
            .map(|s| s.z_index)
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(zs.len(), 52);
        assert!(table.state(&cards[1]).unwrap().z_index < Z_HAND_BASE);
        assert!(table.state(&cards[0]).unwrap().z_index >= Z_HAND_BASE);
        assert!(*table.stack() + Z_STRIDE <= Z_HAND_BASE);
    }
    #[test]
    fn compaction_preserves_table_order() {
        let mut table = Table::new(Geometry::default());
        let mover = PlayerId::default();
        table.connect(mover);
        let cards = table.cards().keys().copied().take(3).collect::<Vec<_>>();
        for (i, card) in cards.iter().enumerate() {
            table.move_card(mover, *card, Point::new(10.0 + i as f32, 10.0), false);
        }
        *table.stack() = Z_HAND_BASE - 1;
        // an unrelated move forces compaction of the whole table band
        let other = *table.cards().keys().last().unwrap();
        table.move_card(mover, other, Point::new(20.0, 20.0), false);
        let z = |card: &Card| table.state(card).unwrap().z_index;
        assert!(z(&cards[0]) < z(&cards[1]));
        assert!(z(&cards[1]) < z(&cards[2]));
        assert!(z(&cards[2]) < z(&other));
    }
    #[test]
    fn reset_band_is_distinct_and_low() {
        let mut table = Table::new(Geometry::default());
        let zs = table.reset_zs(52);
        let unique = zs.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(unique.len(), 52);
        assert!(zs.iter().all(|z| (Z_RESET_MIN..Z_RESET_MAX).contains(z)));
    }
}
