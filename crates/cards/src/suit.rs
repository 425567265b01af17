use ct_core::Arbitrary;

/// Card suit.
///
/// The ordering (C < H < D < S) follows the reference deck's suit array and
/// is what `sortSuit` uses as its primary key; it is a house convention, not
/// a statement about suit strength.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Heart = 1,
    Diamond = 2,
    Spade = 3,
}

impl Suit {
    /// All four suits in sort order.
    pub const fn all() -> [Suit; 4] {
        [Suit::Club, Suit::Heart, Suit::Diamond, Suit::Spade]
    }
    /// Wire token, as used in card keys.
    pub const fn token(&self) -> &'static str {
        match self {
            Suit::Club => "CLUB",
            Suit::Heart => "HEART",
            Suit::Diamond => "DIAMOND",
            Suit::Spade => "SPADE",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Heart,
            2 => Suit::Diamond,
            3 => Suit::Spade,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = super::ParseCardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "CLUB" => Ok(Suit::Club),
            "HEART" => Ok(Suit::Heart),
            "DIAMOND" => Ok(Suit::Diamond),
            "SPADE" => Ok(Suit::Spade),
            _ => Err(super::ParseCardError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl serde::Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.token())
    }
}
impl<'de> serde::Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Suit::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

impl Arbitrary for Suit {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..4u8))
    }
}
