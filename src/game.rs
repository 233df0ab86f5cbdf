//! Turn order, the mill-removal sub-protocol and the session controller
//!
//! The free functions take a `&GameState` and return a new state on
//! success, so a rejected request never changes anything. [`GameController`]
//! wraps them with one owned session state, an engine and a move history.
//!
//! Stage transitions:
//!
//! - a move that forms a mill leaves the mover in `AwaitingRemoval`
//! - any other move advances the turn
//! - a removal that leaves the victim fewer than three pieces in play ends
//!   the game, otherwise it advances the turn
//! - advancing the turn to a player who is done placing and has no legal
//!   move ends the game in favour of the other player

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{Occupant, Player, Pos};
use crate::engine::AIEngine;
use crate::error::{Error, IllegalMove, IllegalRemoval};
use crate::rules::{self, forms_mill, has_any_legal_move, is_removable, Move};
use crate::state::{GameState, PieceCounts, Phase};

/// Where the game stands, derived from the state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Pieces remain in someone's hand; the player is the one to act
    Placing(Player),
    ToMove(Player),
    /// The player formed a mill and must remove an opposing piece
    AwaitingRemoval(Player),
    /// Terminal; carries the winner
    GameOver(Player),
}

impl Stage {
    pub fn of(state: &GameState) -> Stage {
        if let Some(winner) = state.winner {
            Stage::GameOver(winner)
        } else if let Some(remover) = state.pending_removal {
            Stage::AwaitingRemoval(remover)
        } else if state.counts.iter().any(|c| c.phase() == Phase::Placing) {
            Stage::Placing(state.current)
        } else {
            Stage::ToMove(state.current)
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Placing(p) => write!(f, "{p} to place"),
            Stage::ToMove(p) => write!(f, "{p} to move"),
            Stage::AwaitingRemoval(p) => write!(f, "{p} to remove"),
            Stage::GameOver(p) => write!(f, "{p} wins"),
        }
    }
}

/// Snapshot for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub stage: Stage,
    pub current: Player,
    /// Phase of the current player
    pub phase: Phase,
    /// Indexed by `Player::index`
    pub counts: [PieceCounts; 2],
    pub pending_removal: Option<Player>,
    pub winner: Option<Player>,
}

/// Fresh game: empty board, nine pieces in hand each, A to place
pub fn new_game() -> GameState {
    GameState::new()
}

/// Apply a move for the side to act.
///
/// # Errors
///
/// Returns `IllegalMove` if the game is over, a removal is pending, or the
/// move breaks the rules for the mover's phase.
pub fn apply_player_move(state: &GameState, mv: Move) -> Result<GameState, IllegalMove> {
    if state.is_over() {
        return Err(IllegalMove::GameOver);
    }
    if state.pending_removal.is_some() {
        return Err(IllegalMove::RemovalPending);
    }

    let mover = state.current;
    let mut next = rules::apply_move(state, mover, mv)?;
    debug!(player = %mover, mv = %mv, "move applied");

    // Nothing to take if the opponent has no piece on the board
    if forms_mill(&next.board, mv.destination(), mover) && next.counts(mover.opponent()).on_board > 0
    {
        debug!(player = %mover, "mill formed");
        next.pending_removal = Some(mover);
    } else {
        advance_turn(&mut next);
    }
    Ok(next)
}

/// Opposing pieces `victim` could lose to a removal right now
pub fn removable_positions(state: &GameState, victim: Player) -> Vec<Pos> {
    rules::removable_positions(&state.board, victim)
}

/// Remove the opposing piece at `pos` for the player owed a removal.
///
/// # Errors
///
/// Returns `IllegalRemoval` if no removal is pending or `pos` is not an
/// eligible opposing piece.
pub fn apply_removal(state: &GameState, pos: Pos) -> Result<GameState, IllegalRemoval> {
    if state.is_over() {
        return Err(IllegalRemoval::GameOver);
    }
    let remover = state.pending_removal.ok_or(IllegalRemoval::NotPending)?;
    let victim = remover.opponent();

    match state.board.get(pos).player() {
        None => return Err(IllegalRemoval::Empty(pos)),
        Some(owner) if owner == remover => return Err(IllegalRemoval::NotOpponent(pos)),
        Some(_) => {}
    }
    if !is_removable(&state.board, pos, victim) {
        return Err(IllegalRemoval::MillProtected(pos));
    }

    let mut next = state.clone();
    next.board.set(pos, Occupant::Empty);
    next.counts_mut(victim).on_board -= 1;
    next.pending_removal = None;
    debug!(player = %remover, pos = %pos, "piece removed");

    if next.counts(victim).in_play() < 3 {
        info!(winner = %remover, "game over: opponent reduced below three pieces");
        next.winner = Some(remover);
    } else {
        advance_turn(&mut next);
    }
    Ok(next)
}

/// Hand the turn to the opponent and check whether they can still move
fn advance_turn(state: &mut GameState) {
    let previous = state.current;
    let next = previous.opponent();
    state.current = next;

    if state.phase(next) != Phase::Placing && !has_any_legal_move(state, next) {
        info!(winner = %previous, loser = %next, "game over: no legal move");
        state.winner = Some(previous);
    }
}

pub fn current_status(state: &GameState) -> Status {
    Status {
        stage: Stage::of(state),
        current: state.current,
        phase: state.phase(state.current),
        counts: state.counts,
        pending_removal: state.pending_removal,
        winner: state.winner,
    }
}

/// One recorded action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryEntry {
    Move { player: Player, mv: Move },
    Removal { player: Player, pos: Pos },
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryEntry::Move { player, mv } => write!(f, "{player}: {mv}"),
            HistoryEntry::Removal { player, pos } => write!(f, "{player}: x{pos}"),
        }
    }
}

/// What an automated turn did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutomatedTurn {
    pub mv: Option<Move>,
    pub removal: Option<Pos>,
}

/// Single authoritative session: create, apply moves and removals, finish.
#[derive(Debug, Default)]
pub struct GameController {
    state: GameState,
    engine: AIEngine,
    history: Vec<HistoryEntry>,
}

impl GameController {
    pub fn new(engine: AIEngine) -> Self {
        Self {
            state: new_game(),
            engine,
            history: Vec::new(),
        }
    }

    /// Restart with the same engine
    pub fn new_game(&mut self) {
        self.state = new_game();
        self.history.clear();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> Status {
        current_status(&self.state)
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Legal moves of the side to act; empty once the game is over
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.state.is_over() {
            return Vec::new();
        }
        rules::legal_moves(&self.state, self.state.current)
    }

    /// Pieces the pending remover may take; empty if nothing is pending
    pub fn removable_positions(&self) -> Vec<Pos> {
        match self.state.pending_removal {
            Some(remover) if !self.state.is_over() => {
                removable_positions(&self.state, remover.opponent())
            }
            _ => Vec::new(),
        }
    }

    #[instrument(skip(self), fields(player = %self.state.current))]
    pub fn apply_move(&mut self, mv: Move) -> Result<(), IllegalMove> {
        let player = self.state.current;
        self.state = apply_player_move(&self.state, mv)?;
        self.history.push(HistoryEntry::Move { player, mv });
        Ok(())
    }

    #[instrument(skip(self), fields(player = ?self.state.pending_removal))]
    pub fn apply_removal(&mut self, pos: Pos) -> Result<(), IllegalRemoval> {
        let next = apply_removal(&self.state, pos)?;
        if let Some(player) = self.state.pending_removal {
            self.history.push(HistoryEntry::Removal { player, pos });
        }
        self.state = next;
        Ok(())
    }

    /// Engine's move for `me`; `None` once the game is over or without a
    /// legal move
    pub fn choose_automated_move(&mut self, me: Player) -> Option<Move> {
        if self.state.is_over() {
            return None;
        }
        self.engine.choose_move(&self.state, me)
    }

    /// Engine's removal for `me`; `None` once the game is over or if the
    /// opponent has no piece on the board
    pub fn choose_automated_removal(&self, me: Player) -> Option<Pos> {
        if self.state.is_over() {
            return None;
        }
        self.engine.choose_removal(&self.state, me)
    }

    /// Play a full turn for the side to act: the engine's move and, if it
    /// forms a mill, the engine's removal. A removal left pending from an
    /// earlier move is resolved on its own.
    ///
    /// # Errors
    ///
    /// `Error::IllegalMove(GameOver)` once the game is over, `Error::NoAction`
    /// if the engine finds nothing to play.
    #[instrument(skip(self), fields(player = %self.state.current))]
    pub fn choose_and_apply_automated_move(&mut self) -> Result<AutomatedTurn, Error> {
        if self.state.is_over() {
            return Err(IllegalMove::GameOver.into());
        }
        let me = self.state.current;

        let mv = if self.state.pending_removal == Some(me) {
            None
        } else {
            let mv = self.choose_automated_move(me).ok_or(Error::NoAction)?;
            self.apply_move(mv)?;
            Some(mv)
        };

        let removal = if self.state.pending_removal == Some(me) {
            let pos = self.choose_automated_removal(me).ok_or(Error::NoAction)?;
            self.apply_removal(pos)?;
            Some(pos)
        } else {
            None
        };

        Ok(AutomatedTurn { mv, removal })
    }
}
