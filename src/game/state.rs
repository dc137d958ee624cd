//! The `Game` aggregate and its builder.
//!
//! `Game` is the single authority over a game's state: piles, hands, plays,
//! scores, judge rotation, and the round lifecycle. Operations live in sibling
//! modules:
//!
//! - `players`: joining and leaving
//! - `round`: starting, playing, resolving, ending rounds and the game
//! - `judge`: judge rotation
//! - `house`: voting, gambling, point trading
//!
//! ## Invariants
//!
//! Between rounds no prompt is in play and nobody has played cards. With
//! fewer than two players the game is suspended. Every card the game was
//! built with is always in exactly one place: a draw pile, a discard pile,
//! a hand, a play, or the prompt slot.

use im::OrdSet;
use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::cards::{Card, CardId, CardKind, CardRegistry, CardSet, Deck};
use crate::core::config::HouseRules;
use crate::core::error::{ConditionError, GameError, RuleError};
use crate::core::id::{GameId, IdAllocator};
use crate::core::player::{PlayerId, Roster};
use crate::core::rng::GameRng;
use crate::piles::CardPile;

use super::outcome::Outcome;

/// Per-player state owned by the game.
#[derive(Clone, Debug, Default)]
pub(super) struct Seat {
    pub(super) hand: OrdSet<CardId>,
    pub(super) played: SmallVec<[CardId; 3]>,
    pub(super) last_played: Option<u32>,
    pub(super) score: u32,
}

/// A game in progress.
///
/// Build one with `GameBuilder` (or `Game::create`), then loop
/// `start_round` / `submit_play` / `end_round` until `end_round` reports the
/// game is over.
///
/// ## Example
///
/// ```
/// use party_cards::cards::{Card, Deck};
/// use party_cards::core::{HouseRules, PlayerId};
/// use party_cards::game::{GameBuilder, Outcome};
///
/// let deck = Deck::from_cards(
///     (0..4).map(|i| Card::prompt(format!("Prompt {i}"), 0, 1)),
///     (0..30).map(|i| Card::response(format!("Response {i}"))),
/// )
/// .unwrap();
///
/// let (alice, bob) = (PlayerId::new(1), PlayerId::new(2));
/// let mut game = GameBuilder::new("demo")
///     .deck(deck)
///     .players([alice, bob])
///     .rules(HouseRules::default().with_hand_size(5).with_max_score(Some(1)))
///     .seed(42)
///     .build()
///     .unwrap();
///
/// game.start_round().unwrap();
/// assert_eq!(game.judge(), Some(alice));
///
/// let card = game.hand(bob).unwrap()[0];
/// game.submit_play(bob, &[card]).unwrap();
///
/// let result = game.end_round(Some(bob)).unwrap();
/// assert_eq!(result.game(), Some(&Outcome::Winner(bob)));
/// assert!(game.is_finished());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) id: GameId,
    pub(super) name: String,
    pub(super) rules: HouseRules,
    pub(super) rng: GameRng,

    pub(super) registry: CardRegistry,
    pub(super) prompts: CardPile,
    pub(super) responses: CardPile,
    /// `None` once the game has been purged.
    pub(super) max_draw: Option<u32>,

    pub(super) players: Roster,
    pub(super) seats: FxHashMap<PlayerId, Seat>,

    pub(super) current_prompt: Option<CardId>,
    pub(super) judge: Option<PlayerId>,
    pub(super) judge_index: usize,
    pub(super) round_number: u32,

    /// Votes received, by player.
    pub(super) votes: FxHashMap<PlayerId, u32>,
    /// Ballots cast this round: voter to choice.
    pub(super) voters: FxHashMap<PlayerId, PlayerId>,
    pub(super) gamblers: FxHashSet<PlayerId>,
    /// Points awarded to each round winner.
    pub(super) point_grant: u32,
    /// Set once the current round has been scored.
    pub(super) resolution: Option<Outcome>,

    pub(super) in_round: bool,
    pub(super) suspended: bool,
    pub(super) finished: bool,
}

/// Builder for creating a `Game`.
pub struct GameBuilder {
    name: String,
    id: GameId,
    decks: Vec<Deck>,
    players: Vec<PlayerId>,
    rules: HouseRules,
    rng: Option<GameRng>,
}

impl GameBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: GameId::default(),
            decks: Vec::new(),
            players: Vec::new(),
            rules: HouseRules::default(),
            rng: None,
        }
    }

    pub fn id(mut self, id: GameId) -> Self {
        self.id = id;
        self
    }

    pub fn deck(mut self, deck: Deck) -> Self {
        self.decks.push(deck);
        self
    }

    pub fn decks(mut self, decks: impl IntoIterator<Item = Deck>) -> Self {
        self.decks.extend(decks);
        self
    }

    pub fn player(mut self, player: PlayerId) -> Self {
        self.players.push(player);
        self
    }

    pub fn players(mut self, players: impl IntoIterator<Item = PlayerId>) -> Self {
        self.players.extend(players);
        self
    }

    pub fn rules(mut self, rules: HouseRules) -> Self {
        self.rules = rules;
        self
    }

    /// Shuffle reproducibly from a seed instead of OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(GameRng::new(seed));
        self
    }

    pub fn rng(mut self, rng: GameRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Build the game, shuffle its piles, and seat the initial players in
    /// order.
    pub fn build(self) -> Result<Game, GameError> {
        self.rules.validate()?;

        let mut prompt_set = CardSet::new();
        let mut response_set = CardSet::new();
        for deck in &self.decks {
            prompt_set.extend(deck.prompt_cards());
            response_set.extend(deck.response_cards());
        }
        let max_draw = self.decks.iter().map(Deck::max_draw).max().unwrap_or(0);

        let mut registry = CardRegistry::new();
        let prompt_ids = register_all(&mut registry, prompt_set.as_slice());
        let response_ids = register_all(&mut registry, response_set.as_slice());

        let mut rng = self.rng.unwrap_or_default();
        let mut prompts = CardPile::new(CardKind::Prompt, prompt_ids);
        let mut responses = CardPile::new(CardKind::Response, response_ids);
        prompts.shuffle(&mut rng);
        responses.shuffle(&mut rng);

        let mut game = Game {
            id: self.id,
            name: self.name,
            rules: self.rules,
            rng,
            registry,
            prompts,
            responses,
            max_draw: Some(max_draw),
            players: Roster::new(),
            seats: FxHashMap::default(),
            current_prompt: None,
            judge: None,
            judge_index: 0,
            round_number: 0,
            votes: FxHashMap::default(),
            voters: FxHashMap::default(),
            gamblers: FxHashSet::default(),
            point_grant: 1,
            resolution: None,
            in_round: false,
            suspended: true,
            finished: false,
        };

        game.check_enough(self.players.len())?;
        for player in self.players {
            game.add_player(player)?;
        }

        info!(
            "{}: created {:?} with {} prompt and {} response cards, {} players",
            game.id,
            game.name,
            game.registry.count(CardKind::Prompt),
            game.registry.count(CardKind::Response),
            game.players.len()
        );
        Ok(game)
    }
}

fn register_all(registry: &mut CardRegistry, cards: &[Card]) -> Vec<CardId> {
    cards.iter().map(|c| registry.register(c.clone())).collect()
}

impl Game {
    /// Create a game with OS-seeded shuffling and an id minted from `ids`.
    pub fn create(
        ids: &IdAllocator,
        name: impl Into<String>,
        decks: impl IntoIterator<Item = Deck>,
        players: impl IntoIterator<Item = PlayerId>,
        rules: HouseRules,
    ) -> Result<Game, GameError> {
        GameBuilder::new(name)
            .id(ids.next_game())
            .decks(decks)
            .players(players)
            .rules(rules)
            .build()
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rules(&self) -> &HouseRules {
        &self.rules
    }

    /// Players in seating order.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        self.players.as_slice()
    }

    #[must_use]
    pub fn has_player(&self, player: PlayerId) -> bool {
        self.players.contains(player)
    }

    #[must_use]
    pub fn judge(&self) -> Option<PlayerId> {
        self.judge
    }

    /// Number of rounds started so far.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn current_prompt(&self) -> Option<&Card> {
        self.current_prompt.and_then(|id| self.registry.get(id))
    }

    #[must_use]
    pub fn current_prompt_id(&self) -> Option<CardId> {
        self.current_prompt
    }

    /// Look up any card this game was built with.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.registry.get(id)
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn pile(&self, kind: CardKind) -> &CardPile {
        match kind {
            CardKind::Prompt => &self.prompts,
            CardKind::Response => &self.responses,
        }
    }

    /// Largest draw count across the decks; `None` after a purge.
    #[must_use]
    pub fn max_draw(&self) -> Option<u32> {
        self.max_draw
    }

    /// Points the current round's winner will receive.
    #[must_use]
    pub fn point_grant(&self) -> u32 {
        self.point_grant
    }

    #[must_use]
    pub fn is_in_round(&self) -> bool {
        self.in_round
    }

    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// A player's hand, sorted by card text.
    pub fn hand(&self, player: PlayerId) -> Result<Vec<CardId>, RuleError> {
        let mut hand: Vec<CardId> = self.seat(player)?.hand.iter().copied().collect();
        hand.sort_by(|a, b| self.registry.get(*a).cmp(&self.registry.get(*b)));
        Ok(hand)
    }

    /// Cards a player has committed this round, in play order.
    pub fn played(&self, player: PlayerId) -> Result<&[CardId], RuleError> {
        Ok(&self.seat(player)?.played)
    }

    /// Every player's submission this round, in seating order, skipping
    /// players who haven't played.
    #[must_use]
    pub fn plays(&self) -> Vec<(PlayerId, &[CardId])> {
        self.players
            .iter()
            .filter_map(|p| {
                let seat = self.seats.get(&p)?;
                (!seat.played.is_empty()).then(|| (p, seat.played.as_slice()))
            })
            .collect()
    }

    /// Whether a player has played or passed in the current round.
    pub fn has_played(&self, player: PlayerId) -> Result<bool, RuleError> {
        let seat = self.seat(player)?;
        Ok(self.in_round && seat.last_played == Some(self.round_number))
    }

    pub fn score(&self, player: PlayerId) -> Result<u32, RuleError> {
        Ok(self.seat(player)?.score)
    }

    /// Players and scores, highest first; ties keep seating order.
    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, u32)> {
        let mut standings: Vec<_> = self
            .players
            .iter()
            .map(|p| (p, self.seats.get(&p).map_or(0, |s| s.score)))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1));
        standings
    }

    /// Recycle discard piles into empty draw piles.
    ///
    /// Does nothing to a kind whose draw pile still has cards. Fails without
    /// changing anything if either kind has no cards left at all.
    pub fn card_refill(&mut self) -> Result<(bool, bool), GameError> {
        for pile in [&self.prompts, &self.responses] {
            if pile.is_exhausted() {
                return Err(ConditionError::EmptyDecks(pile.kind()).into());
            }
        }
        let prompts = self.prompts.refill(&mut self.rng)?;
        let responses = self.responses.refill(&mut self.rng)?;
        Ok((prompts, responses))
    }

    // === Internals shared by the operation modules ===

    pub(super) fn seat(&self, player: PlayerId) -> Result<&Seat, RuleError> {
        self.seats.get(&player).ok_or(RuleError::UnknownPlayer(player))
    }

    pub(super) fn seat_mut(&mut self, player: PlayerId) -> Result<&mut Seat, RuleError> {
        self.seats.get_mut(&player).ok_or(RuleError::UnknownPlayer(player))
    }

    /// Play count of the prompt in play.
    pub(super) fn required_cards(&self) -> usize {
        self.current_prompt()
            .map_or(1, |prompt| prompt.play_count() as usize)
    }

    /// Hands must stay fillable on the worst-case draw round.
    pub(super) fn check_enough(&self, player_count: usize) -> Result<(), ConditionError> {
        let per_player = self.max_draw.unwrap_or(0) as usize + self.rules.hand_size;
        let needed = per_player * player_count;
        let available = self.registry.count(CardKind::Response);
        if needed > available {
            return Err(ConditionError::InsufficientCards { needed, available });
        }
        Ok(())
    }

    /// Deal `count` response cards to a player, all or nothing.
    pub(super) fn deal(&mut self, player: PlayerId, count: usize) -> Result<(), GameError> {
        if count == 0 {
            return Ok(());
        }
        if !self.seats.contains_key(&player) {
            return Err(RuleError::UnknownPlayer(player).into());
        }
        let cards = self.responses.draw_many(count, &mut self.rng)?;
        let seat = self.seat_mut(player)?;
        for card in cards {
            seat.hand.insert(card);
        }
        debug!("{}: dealt {} cards to {}", self.id, count, player);
        Ok(())
    }

    /// Cards needed to bring a player back up to a full hand.
    pub(super) fn shortfall(&self, player: PlayerId) -> usize {
        self.seats
            .get(&player)
            .map_or(0, |s| self.rules.hand_size.saturating_sub(s.hand.len()))
    }

    /// Check `cards` are distinct and all in the player's hand.
    pub(super) fn check_in_hand(seat: &Seat, cards: &[CardId]) -> Result<(), RuleError> {
        for (i, &card) in cards.iter().enumerate() {
            if !seat.hand.contains(&card) || cards[..i].contains(&card) {
                return Err(RuleError::CardNotInHand(card));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(prompts: u32, responses: u32, draw: u32) -> Deck {
        Deck::from_cards(
            (0..prompts).map(|i| Card::prompt(format!("p{i}"), draw, 1)),
            (0..responses).map(|i| Card::response(format!("r{i}"))),
        )
        .unwrap()
    }

    fn p(id: u64) -> PlayerId {
        PlayerId::new(id)
    }

    #[test]
    fn test_never_ending_game_rejected() {
        let err = GameBuilder::new("forever")
            .rules(HouseRules::default().with_max_score(None).with_max_rounds(None))
            .build()
            .unwrap_err();
        assert_eq!(err, GameError::Condition(ConditionError::NeverEnding));
    }

    #[test]
    fn test_insufficient_cards_rejected() {
        // (1 + 5) * 3 = 18 > 17
        let err = GameBuilder::new("short")
            .deck(deck(3, 17, 1))
            .players([p(1), p(2), p(3)])
            .rules(HouseRules::default().with_hand_size(5))
            .seed(1)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GameError::Condition(ConditionError::InsufficientCards { needed: 18, available: 17 })
        );

        let ok = GameBuilder::new("exact")
            .deck(deck(3, 18, 1))
            .players([p(1), p(2), p(3)])
            .rules(HouseRules::default().with_hand_size(5))
            .seed(1)
            .build();
        assert!(ok.is_ok());
    }

    #[test]
    fn test_build_deals_initial_hands() {
        let game = GameBuilder::new("g")
            .deck(deck(5, 40, 0))
            .players([p(1), p(2)])
            .rules(HouseRules::default().with_hand_size(7))
            .seed(9)
            .build()
            .unwrap();

        assert_eq!(game.hand(p(1)).unwrap().len(), 7);
        assert_eq!(game.hand(p(2)).unwrap().len(), 7);
        assert_eq!(game.pile(CardKind::Response).draw_pile().len(), 26);
        assert_eq!(game.pile(CardKind::Prompt).draw_pile().len(), 5);
        assert!(!game.is_suspended());
        assert_eq!(game.judge(), Some(p(1)));
    }

    #[test]
    fn test_decks_are_merged_without_duplicates() {
        let a = deck(2, 10, 0);
        let b = deck(3, 12, 2);
        let game = GameBuilder::new("g").decks([a, b]).seed(1).build().unwrap();

        assert_eq!(game.registry().count(CardKind::Prompt), 3);
        assert_eq!(game.registry().count(CardKind::Response), 12);
        assert_eq!(game.max_draw(), Some(2));
    }

    #[test]
    fn test_create_mints_distinct_ids() {
        let ids = IdAllocator::starting_at(10);
        let players = [ids.next_player(), ids.next_player()];
        let a = Game::create(&ids, "a", [deck(2, 30, 0)], players, HouseRules::default().with_hand_size(5)).unwrap();
        let b = Game::create(&ids, "b", [deck(2, 30, 0)], players, HouseRules::default().with_hand_size(5)).unwrap();

        assert_eq!(a.id(), GameId::new(12));
        assert_eq!(b.id(), GameId::new(13));
        assert_eq!(a.players(), &players);
    }

    #[test]
    fn test_empty_game_is_suspended() {
        let game = GameBuilder::new("g").deck(deck(1, 1, 0)).seed(1).build().unwrap();
        assert!(game.is_suspended());
        assert!(game.players().is_empty());
        assert_eq!(game.judge(), None);
    }

    #[test]
    fn test_duplicate_initial_player_rejected() {
        let err = GameBuilder::new("g")
            .deck(deck(2, 50, 0))
            .players([p(1), p(1)])
            .seed(1)
            .build()
            .unwrap_err();
        assert_eq!(err, GameError::Rule(RuleError::DuplicatePlayer(p(1))));
    }

    #[test]
    fn test_hand_is_sorted_by_text() {
        let game = GameBuilder::new("g")
            .deck(deck(2, 30, 0))
            .players([p(1), p(2)])
            .rules(HouseRules::default().with_hand_size(6))
            .seed(5)
            .build()
            .unwrap();

        let texts: Vec<_> = game
            .hand(p(1))
            .unwrap()
            .into_iter()
            .map(|id| game.card(id).unwrap().text().to_owned())
            .collect();
        let mut sorted = texts.clone();
        sorted.sort();
        assert_eq!(texts, sorted);
    }

    #[test]
    fn test_card_refill_is_noop_with_cards() {
        let mut game = GameBuilder::new("g").deck(deck(2, 10, 0)).seed(1).build().unwrap();
        assert_eq!(game.card_refill(), Ok((false, false)));
        assert_eq!(game.pile(CardKind::Response).draw_pile().len(), 10);
    }

    #[test]
    fn test_card_refill_fails_without_mutation() {
        let mut game = GameBuilder::new("g")
            .deck(Deck::from_cards(Vec::new(), vec![Card::response("only")]).unwrap())
            .seed(1)
            .build()
            .unwrap();

        let err = game.card_refill().unwrap_err();
        assert_eq!(err, GameError::Condition(ConditionError::EmptyDecks(CardKind::Prompt)));
        assert_eq!(game.pile(CardKind::Response).draw_pile().len(), 1);
    }
}
