//! Game driver: deal, opening, turn order, drawing, and the end.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{ConfigError, GameConfig, GameRng, PlayerId, PlayerKind, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::RulesError;
use crate::layout::{Layout, PlacedId, PlacementSite};
use crate::rules::{evaluate_end, has_legal_move, selected_turn, Outcome, Turn};
use crate::tiles::{Direction, Pips, Point, Tile, TileKey, MAX_PIPS};
use crate::zones::{DrawPile, Hand};

/// What one call to [`DominoGame::step`] did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// An automated player placed a tile.
    Played { player: PlayerId, turn: Turn },
    /// An automated player had no move and drew.
    Drew { player: PlayerId, tile: Tile },
    /// No move and nothing to draw; the turn moved on.
    Passed { player: PlayerId },
    /// An interactive player has a move and must submit a selection.
    AwaitingInput { player: PlayerId },
    /// An interactive player has no move and must draw.
    NeedsTile { player: PlayerId },
    /// The game is over.
    Finished(Outcome),
}

/// A game of dominoes from the deal to the outcome.
///
/// ## Flow
///
/// 1. Build with [`DominoGameBuilder`]; hands are dealt from the shuffled pile
/// 2. [`open`](Self::open) places the lowest tile held by anyone
/// 3. Call [`step`](Self::step) for the current player until it reports
///    `Finished`; interactive seats answer `AwaitingInput` with
///    [`submit_selection`](Self::submit_selection) and `NeedsTile` with
///    [`draw_for`](Self::draw_for)
///
/// Every mutating call checks its preconditions first and leaves the game
/// untouched when it returns an error.
#[derive(Clone, Debug)]
pub struct DominoGame {
    config: GameConfig,
    seats: PlayerMap<PlayerKind>,
    pile: DrawPile,
    hands: PlayerMap<Hand>,
    layout: Layout,
    current: PlayerId,
    needs_tile: bool,
    outcome: Option<Outcome>,
}

/// Builder for creating a `DominoGame`.
///
/// ```
/// use domino_rules::core::PlayerKind;
/// use domino_rules::games::DominoGameBuilder;
///
/// let game = DominoGameBuilder::new()
///     .players(vec![PlayerKind::Automated; 3])
///     .seed(11)
///     .build()
///     .unwrap();
/// assert_eq!(game.pile().len(), 28 - 3 * 7);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DominoGameBuilder {
    config: GameConfig,
    deal: Option<(Vec<Vec<Tile>>, Vec<Tile>)>,
}

impl DominoGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: GameConfig) -> Self {
        Self { config, deal: None }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn players(mut self, players: Vec<PlayerKind>) -> Self {
        self.config.players = players;
        self
    }

    pub fn tiles_per_hand(mut self, count: usize) -> Self {
        self.config.tiles_per_hand = count;
        self
    }

    pub fn max_pip(mut self, max_pip: Pips) -> Self {
        self.config.max_pip = max_pip;
        self
    }

    pub fn hand_width(mut self, width: i32) -> Self {
        self.config.hand_width = width;
        self
    }

    /// Skip the shuffle and deal exactly these hands, one per seat.
    ///
    /// The last tile of `pile` is the first one drawn. `build` refuses a deal
    /// that repeats a tile or uses pips above the configured `max_pip`.
    pub fn deal(mut self, hands: Vec<Vec<Tile>>, pile: Vec<Tile>) -> Self {
        self.deal = Some((hands, pile));
        self
    }

    /// Build the game with hands dealt.
    pub fn build(self) -> Result<DominoGame, ConfigError> {
        let config = self.config;
        let width = config.hand_width;

        let (hands, pile) = match self.deal {
            Some((hands, pile)) => {
                if config.max_pip > MAX_PIPS {
                    return Err(ConfigError::MaxPipTooHigh(config.max_pip));
                }
                if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&config.players.len()) {
                    return Err(ConfigError::PlayerCount(config.players.len()));
                }
                if hands.len() != config.players.len() {
                    return Err(ConfigError::DealMismatch {
                        hands: hands.len(),
                        players: config.players.len(),
                    });
                }
                if width <= 0 {
                    return Err(ConfigError::HandWidth(width));
                }
                let mut seen = FxHashSet::default();
                for tile in hands.iter().flatten().chain(pile.iter()) {
                    let key = tile.key();
                    if key.high > config.max_pip {
                        return Err(ConfigError::TileOutOfRange {
                            tile: key,
                            max_pip: config.max_pip,
                        });
                    }
                    if !seen.insert(key) {
                        return Err(ConfigError::DuplicateTile(key));
                    }
                }
                let hands: PlayerMap<Hand> = hands
                    .into_iter()
                    .map(|tiles| Hand::with_tiles(width, tiles))
                    .collect();
                (hands, DrawPile::from_tiles(pile))
            }
            None => {
                config.validate()?;
                let mut rng = GameRng::new(config.seed);
                let mut pile = DrawPile::full(config.max_pip);
                pile.shuffle(&mut rng);
                debug!(seed = rng.seed(), "shuffled");
                let hands: PlayerMap<Hand> = (0..config.players.len())
                    .map(|_| Hand::with_tiles(width, pile.deal(config.tiles_per_hand)))
                    .collect();
                (hands, pile)
            }
        };

        debug!(players = config.players.len(), pile = pile.len(), "dealt");

        let seats = PlayerMap::new(config.players.len(), |p| config.players[p.index()]);
        let mut game = DominoGame {
            config,
            seats,
            pile,
            hands,
            layout: Layout::new(),
            current: PlayerId::new(0),
            needs_tile: false,
            outcome: None,
        };
        game.check_end();
        Ok(game)
    }
}

impl DominoGame {
    /// Deal a game from `config`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        DominoGameBuilder::from_config(config).build()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    /// # Panics
    ///
    /// Panics if `player` has no seat in this game.
    #[must_use]
    pub fn player_kind(&self, player: PlayerId) -> PlayerKind {
        self.seats[player]
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// # Panics
    ///
    /// Panics if `player` has no seat in this game.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Hand> {
        &self.hands
    }

    #[must_use]
    pub fn pile(&self) -> &DrawPile {
        &self.pile
    }

    /// True while an interactive player has been told to draw.
    #[must_use]
    pub fn needs_tile(&self) -> bool {
        self.needs_tile
    }

    #[must_use]
    pub fn is_opened(&self) -> bool {
        !self.layout.is_empty()
    }

    /// The result, once the game is over. Fixed from then on.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Place the opening tile.
    ///
    /// The lowest tile in any hand goes flat at the origin, and play passes to
    /// the seat after its owner. Ties keep the earlier seat, then the earlier
    /// tile in that hand.
    #[instrument(skip(self))]
    pub fn open(&mut self) -> Result<(PlayerId, Turn), RulesError> {
        self.ensure_live()?;
        if self.is_opened() {
            return Err(RulesError::AlreadyOpened);
        }
        let (owner, tile) = self.lowest_tile().ok_or(RulesError::GameOver)?;
        let turn = Turn::opening(tile);
        self.commit(owner, &turn)?;
        info!(player = %owner, tile = %turn.tile(), "opened");

        self.advance_turn(Some(owner));
        self.check_end();
        Ok((owner, turn))
    }

    /// Move play on. With `skip_to`, play jumps there first, so the player
    /// after `skip_to` is next.
    pub fn advance_turn(&mut self, skip_to: Option<PlayerId>) -> PlayerId {
        if let Some(player) = skip_to {
            self.current = player;
        }
        self.current = self.current.next(self.player_count());
        debug!(player = %self.current, "turn");
        self.current
    }

    /// The current player takes one tile from the pile. The turn does not move.
    ///
    /// Drawing is only allowed after `step` reported `NeedsTile`, or when the
    /// player has no legal move.
    #[instrument(skip(self))]
    pub fn draw_for(&mut self, player: PlayerId) -> Result<Tile, RulesError> {
        self.ensure_live()?;
        self.ensure_turn(player)?;
        if !self.is_opened() {
            return Err(RulesError::NotOpened);
        }
        if !self.needs_tile && has_legal_move(&self.hands[player], &self.layout) {
            return Err(RulesError::MoveAvailable);
        }
        let tile = self.pile.draw()?;
        self.hands[player].add_tile(tile);
        self.needs_tile = false;
        debug!(player = %player, tile = %tile, left = self.pile.len(), "drew");

        self.check_end();
        Ok(tile)
    }

    /// Advance the current player by one action.
    ///
    /// Automated players play the first move the search finds, draw when they
    /// have none, and pass when the pile is empty too. Interactive players are
    /// only told what they must do, except that a player who can neither move
    /// nor draw is passed.
    #[instrument(skip(self))]
    pub fn step(&mut self) -> Result<StepOutcome, RulesError> {
        if let Some(outcome) = &self.outcome {
            return Ok(StepOutcome::Finished(outcome.clone()));
        }
        if !self.is_opened() {
            return Err(RulesError::NotOpened);
        }

        let player = self.current;
        let kind = self.seats[player];
        let hand = &self.hands[player];

        if kind.is_interactive() {
            if has_legal_move(hand, &self.layout) {
                return Ok(StepOutcome::AwaitingInput { player });
            }
            if self.pile.is_empty() {
                return Ok(self.pass(player));
            }
            self.needs_tile = true;
            return Ok(StepOutcome::NeedsTile { player });
        }

        match kind.produce_turn(hand, &self.layout) {
            Some(turn) => {
                self.apply_turn(player, turn)?;
                Ok(StepOutcome::Played { player, turn })
            }
            None if !self.pile.is_empty() => {
                let tile = self.draw_for(player)?;
                Ok(StepOutcome::Drew { player, tile })
            }
            None => Ok(self.pass(player)),
        }
    }

    /// Play the current player's selected tile at the highlighted site.
    ///
    /// Only interactive seats play by selection.
    #[instrument(skip(self))]
    pub fn submit_selection(&mut self) -> Result<Turn, RulesError> {
        self.ensure_live()?;
        if !self.is_opened() {
            return Err(RulesError::NotOpened);
        }
        let player = self.current;
        if !self.seats[player].is_interactive() {
            return Err(RulesError::NotInteractive(player));
        }
        let turn = selected_turn(&self.hands[player], &self.layout)?;
        self.apply_turn(player, turn)?;
        Ok(turn)
    }

    /// Place `turn` for `player` and pass play on.
    ///
    /// The placement is validated again against the live layout, and the
    /// tile lands where validation puts it.
    #[instrument(skip(self, turn), fields(tile = %turn.tile()))]
    pub fn apply_turn(&mut self, player: PlayerId, turn: Turn) -> Result<PlacedId, RulesError> {
        self.ensure_live()?;
        if !self.is_opened() {
            return Err(RulesError::NotOpened);
        }
        self.ensure_turn(player)?;

        let site = turn.anchor().ok_or(RulesError::MissingAnchor)?;
        let footprint = self.layout.is_valid_move(turn.tile(), site)?;
        let turn = Turn::anchored(*turn.tile(), *site, footprint, *turn.source());
        let id = self.commit(player, &turn)?;
        self.needs_tile = false;
        debug!(player = %player, id = %id, left = self.hands[player].len(), "played");

        self.advance_turn(None);
        self.check_end();
        Ok(id)
    }

    /// Toggle selection of one of `player`'s tiles.
    pub fn select_tile(&mut self, player: PlayerId, key: TileKey) -> Result<(), RulesError> {
        self.ensure_seat(player)?;
        self.hands[player].select_tile(key)
    }

    /// Toggle selection of the tile drawn under `point` in `player`'s hand.
    pub fn select_tile_at(&mut self, player: PlayerId, point: Point) -> Option<TileKey> {
        self.ensure_seat(player).ok()?;
        let key = self.hands[player].tile_at(point)?.key();
        self.hands[player].select_tile(key).ok()?;
        Some(key)
    }

    /// Quarter-turn `player`'s selected tile.
    pub fn rotate_selected(&mut self, player: PlayerId) -> Option<Tile> {
        self.ensure_seat(player).ok()?;
        self.hands[player].rotate_selected().copied()
    }

    /// Highlight an open layout site.
    pub fn select_site(&mut self, anchor: PlacedId, direction: Direction) -> Result<(), RulesError> {
        self.layout.select_site(anchor, direction)
    }

    /// Highlight the open site under `point`.
    pub fn select_site_at(&mut self, point: Point) -> Option<PlacementSite> {
        let site = *self.layout.site_at(point)?;
        self.layout.select_site(site.anchor, site.direction).ok()?;
        Some(site)
    }

    fn lowest_tile(&self) -> Option<(PlayerId, Tile)> {
        let mut best: Option<(PlayerId, Tile)> = None;
        for (player, hand) in self.hands.iter() {
            for tile in hand.iter() {
                let lower = match &best {
                    Some((_, b)) => tile.opening_cmp(b) == Ordering::Less,
                    None => true,
                };
                if lower {
                    best = Some((player, *tile));
                }
            }
        }
        best
    }

    fn commit(&mut self, player: PlayerId, turn: &Turn) -> Result<PlacedId, RulesError> {
        let key = turn.source().key();
        if turn.tile().key() != key || !self.hands[player].contains(key) {
            return Err(RulesError::TileNotInHand(turn.tile().key()));
        }
        let anchor = turn.anchor().map(|s| (s.anchor, s.direction));
        let id = self.layout.place_tile(*turn.tile(), anchor, turn.position())?;
        self.hands[player].remove_tile(turn.source())?;
        Ok(id)
    }

    fn pass(&mut self, player: PlayerId) -> StepOutcome {
        debug!(player = %player, "passed");
        self.needs_tile = false;
        self.advance_turn(None);
        self.check_end();
        StepOutcome::Passed { player }
    }

    fn check_end(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        if let Some(outcome) = evaluate_end(&self.hands, self.pile.is_empty(), &self.layout) {
            info!(result = ?outcome.result, reason = ?outcome.reason, "game over");
            self.outcome = Some(outcome);
        }
    }

    fn ensure_live(&self) -> Result<(), RulesError> {
        if self.outcome.is_some() {
            return Err(RulesError::GameOver);
        }
        Ok(())
    }

    fn ensure_seat(&self, player: PlayerId) -> Result<(), RulesError> {
        if player.index() >= self.player_count() {
            return Err(RulesError::UnknownPlayer(player));
        }
        Ok(())
    }

    fn ensure_turn(&self, player: PlayerId) -> Result<(), RulesError> {
        if player != self.current {
            return Err(RulesError::NotPlayersTurn {
                expected: self.current,
                actual: player,
            });
        }
        Ok(())
    }
}
