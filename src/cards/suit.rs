/// Card suit: clubs, diamonds, hearts, spades.
///
/// The ordering (C < D < H < S) carries no strategic meaning.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "c" | "♣" | "club" | "clubs" => Ok(Suit::C),
            "d" | "♦" | "diamond" | "diamonds" => Ok(Suit::D),
            "h" | "♥" | "heart" | "hearts" => Ok(Suit::H),
            "s" | "♠" | "spade" | "spades" => Ok(Suit::S),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

/// Plural lowercase name, which is also the wire form.
impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::C => write!(f, "clubs"),
            Suit::D => write!(f, "diamonds"),
            Suit::H => write!(f, "hearts"),
            Suit::S => write!(f, "spades"),
        }
    }
}
