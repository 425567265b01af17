use super::PlayerId;
use super::Table;
use ct_core::Rect;

/// Selection management. The one invariant that matters: a card is selected
/// by nobody or by exactly one player, and no update may overwrite another
/// player's claim without an intervening release.
impl Table {
    /// Applies a selection rectangle update from a drag in progress.
    ///
    /// With a rectangle: unselected cards strictly inside it that the
    /// sender can see become theirs; the sender's cards now outside it are
    /// released. Cards selected by anyone else are never touched, so
    /// whichever rectangle is processed first wins a contested card.
    ///
    /// With `None`: the rectangle is cleared and selections stand.
    pub fn select(&mut self, sender: PlayerId, selection: Option<Rect>) {
        let Some(player) = self.players_mut().get_mut(&sender) else {
            log::warn!("[table] selection from unknown player {}", sender);
            return;
        };
        let Some(rect) = selection.map(Rect::normalized) else {
            player.selection = None;
            return;
        };
        player.selection = Some(rect);
        for state in self.cards_mut().values_mut() {
            let eligible = state.visibility.seen_by(sender);
            let inside = rect.contains(&state.position);
            match state.selected_by {
                None if inside && eligible => state.selected_by = Some(sender),
                Some(holder) if holder == sender && !inside => state.selected_by = None,
                _ => {}
            }
        }
    }
    /// End of drag: drop the rectangle, keep the selection.
    pub fn end_selection(&mut self, sender: PlayerId) {
        if let Some(player) = self.players_mut().get_mut(&sender) {
            player.selection = None;
        }
    }
    /// Releases everything the sender has selected, rectangle included.
    pub fn deselect(&mut self, sender: PlayerId) {
        if let Some(player) = self.players_mut().get_mut(&sender) {
            player.selection = None;
        }
        for state in self.cards_mut().values_mut() {
            if state.selected_by == Some(sender) {
                state.selected_by = None;
            }
        }
    }
}
