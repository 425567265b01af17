use super::Rank;
use super::Suit;
use ct_core::Arbitrary;

/// A card identity: suit plus rank.
///
/// Identities are closed and immutable for the life of a room. The wire key
/// (`"SUIT=VALUE"`) doubles as the JSON map key in snapshots, which is why
/// serde treats a card as a string rather than a struct.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
    /// The full 52-card deck in (suit, rank) order.
    pub fn deck() -> impl Iterator<Item = Card> {
        Suit::all()
            .into_iter()
            .flat_map(|suit| Rank::all().into_iter().map(move |rank| Card::new(suit, rank)))
    }
    /// Sort key for `sortSuit`: suit first, rank breaks ties.
    pub fn by_suit(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
    /// Sort key for `sortRank`: rank first, suit breaks ties.
    pub fn by_rank(&self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }
}

/// Error parsing a card key; carries the offending token.
#[derive(Debug, Clone)]
pub struct ParseCardError(pub String);

impl std::fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "not a card key: {}", self.0)
    }
}
impl std::error::Error for ParseCardError {}

/// str isomorphism, `"SUIT=VALUE"`
impl TryFrom<&str> for Card {
    type Error = ParseCardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (suit, rank) = s
            .split_once('=')
            .ok_or_else(|| ParseCardError(s.to_string()))?;
        Ok(Card::new(Suit::try_from(suit)?, Rank::try_from(rank)?))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.suit, self.rank)
    }
}

impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Card::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self::new(Suit::random(), Rank::random())
    }
}
