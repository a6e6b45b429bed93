use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use strum_macros::EnumIter;

use super::basic::{Card, ParseError, Rank};

pub const HAND_SIZE: usize = 5;

const WHEEL: [Rank; HAND_SIZE] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];

/// Strength class of a 5-card hand. Discriminants give the conventional
/// 1 (high card) through 10 (royal flush) ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }

    fn is_straight_type(self) -> bool {
        matches!(
            self,
            Category::Straight | Category::StraightFlush | Category::RoyalFlush
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::HighCard => "High Card",
                Category::Pair => "Pair",
                Category::TwoPair => "Two Pair",
                Category::ThreeOfAKind => "Three of a Kind",
                Category::Straight => "Straight",
                Category::Flush => "Flush",
                Category::FullHouse => "Full House",
                Category::FourOfAKind => "Four of a Kind",
                Category::StraightFlush => "Straight Flush",
                Category::RoyalFlush => "Royal Flush",
            }
        )
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

/// One rank group within a hand: how many cards of that rank it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupEntry {
    pub count: u8,
    pub rank: Rank,
}

impl fmt::Display for GroupEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.count, self.rank)
    }
}

/// Rank-to-count view of a hand, ordered by count descending then rank
/// descending. Both the classifier and the comparator read this one
/// structure; it is built once per hand and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    entries: Vec<GroupEntry>,
}

impl RankGroups {
    fn from_cards(cards: &[Card]) -> Self {
        let mut counts: HashMap<Rank, u8> = HashMap::new();
        for card in cards {
            *counts.entry(card.rank).or_insert(0) += 1;
        }

        let mut entries: Vec<GroupEntry> = counts
            .into_iter()
            .map(|(rank, count)| GroupEntry { count, rank })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(b.rank.cmp(&a.rank)));

        Self { entries }
    }

    pub fn entries(&self) -> &[GroupEntry] {
        &self.entries
    }

    fn has_count(&self, count: u8) -> bool {
        self.entries.iter().any(|entry| entry.count == count)
    }

    fn counts_ascending(&self) -> Vec<u8> {
        let mut counts: Vec<u8> = self.entries.iter().map(|entry| entry.count).collect();
        counts.sort_unstable();
        counts
    }
}

/// Category plus the tie-break data the comparator consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub groups: RankGroups,
    /// Effective top rank of a straight-type hand. The wheel tops out at
    /// Five, not Ace.
    pub straight_high: Option<Rank>,
}

/// Result of comparing two classified hands. `Ordering::Greater` means the
/// first hand wins. `decided_by` names the group that settled a
/// same-category tie-break, when one did; it is `None` when the category
/// alone decided or the hands tied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub ordering: Ordering,
    pub decided_by: Option<GroupEntry>,
}

impl Classification {
    pub fn compare(&self, other: &Self) -> Comparison {
        if self.category != other.category {
            return Comparison {
                ordering: self.category.cmp(&other.category),
                decided_by: None,
            };
        }

        // Straight-type hands compare by their effective top card alone
        if let (Some(a), Some(b)) = (self.straight_high, other.straight_high) {
            let ordering = a.cmp(&b);
            return Comparison {
                ordering,
                decided_by: (ordering != Ordering::Equal).then(|| GroupEntry {
                    count: 1,
                    rank: a.max(b),
                }),
            };
        }

        // Everything else: walk the groups positionally, count before rank.
        // With all counts 1 (flush, high card) this is plain kicker order.
        for (a, b) in self.groups.entries().iter().zip(other.groups.entries()) {
            let ordering = a.count.cmp(&b.count).then(a.rank.cmp(&b.rank));
            if ordering != Ordering::Equal {
                let winner = if ordering == Ordering::Greater { *a } else { *b };
                return Comparison {
                    ordering,
                    decided_by: Some(winner),
                };
            }
        }

        Comparison {
            ordering: Ordering::Equal,
            decided_by: None,
        }
    }
}

impl PartialOrd for Classification {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Classification {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other).ordering
    }
}

/// Five cards, order-irrelevant. Duplicate cards are accepted silently;
/// nothing here checks that a hand is drawable from one deck.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn from_cards(cards: &[Card]) -> Result<Self, ParseError> {
        if cards.len() != HAND_SIZE {
            return Err(ParseError::WrongCardCount(cards.len()));
        }

        Ok(Self {
            cards: cards.to_vec(),
        })
    }

    /// Parses 5 card tokens into a hand, failing on the first bad token.
    pub fn from_tokens(tokens: &[&str]) -> Result<Self, ParseError> {
        if tokens.len() != HAND_SIZE {
            return Err(ParseError::WrongCardCount(tokens.len()));
        }

        let cards = tokens
            .iter()
            .map(|token| Card::from_token(token))
            .collect::<Result<Vec<Card>, ParseError>>()?;

        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn classify(&self) -> Classification {
        let mut ranks: Vec<Rank> = self.cards.iter().map(|card| card.rank).collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let is_flush = self.cards.iter().all(|card| card.suit == self.cards[0].suit);
        let is_wheel = ranks == WHEEL;
        let is_straight =
            is_wheel || ranks.windows(2).all(|pair| pair[0].value() == pair[1].value() + 1);

        let groups = RankGroups::from_cards(&self.cards);

        let category = if is_flush && is_straight {
            // The wheel's ace plays low, so it is not a royal flush
            if ranks[0] == Rank::Ace && !is_wheel {
                Category::RoyalFlush
            } else {
                Category::StraightFlush
            }
        } else if groups.has_count(4) {
            Category::FourOfAKind
        } else if groups.counts_ascending() == [2, 3] {
            Category::FullHouse
        } else if is_flush {
            Category::Flush
        } else if is_straight {
            Category::Straight
        } else if groups.has_count(3) {
            Category::ThreeOfAKind
        } else if groups.counts_ascending() == [1, 2, 2] {
            Category::TwoPair
        } else if groups.has_count(2) {
            Category::Pair
        } else {
            Category::HighCard
        };

        let straight_high = category
            .is_straight_type()
            .then(|| if is_wheel { Rank::Five } else { ranks[0] });

        Classification {
            category,
            groups,
            straight_high,
        }
    }

    pub fn category(&self) -> Category {
        self.classify().category
    }

    /// Orders this hand against another. `Ordering::Greater` means this
    /// hand wins.
    pub fn compare(&self, other: &Hand) -> Ordering {
        self.showdown(other).ordering
    }

    /// Like [`Hand::compare`], but keeps the deciding group for diagnostics.
    pub fn showdown(&self, other: &Hand) -> Comparison {
        self.classify().compare(&other.classify())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
