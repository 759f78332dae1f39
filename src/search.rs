//! Exhaustive minimax search with alpha-beta pruning
//!
//! Two mutually recursive procedures walk the game tree: one maximizes
//! for X, the other minimizes for O. Alpha and beta bounds travel through
//! the recursion as explicit parameters, and ties between equally good
//! moves always go to the first action in enumeration order. That
//! tie-break is what keeps pruning transparent: switching pruning off
//! changes how many nodes get explored, never which move comes back.

use tracing::{debug, trace};

use crate::{
    Result,
    board::{Action, Board, Player},
    trace::{NodeId, SearchTrace},
};

/// The center cell, the canonical opening on an untouched board.
const CENTER: Action = Action { row: 1, col: 1 };

/// Configuration for a [`Searcher`].
///
/// # Examples
///
/// ```
/// use oxo::SearchConfig;
///
/// let config = SearchConfig::new()
///     .with_pruning(false)
///     .with_opening_shortcut(false);
/// assert!(!config.pruning);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Answer the empty board with the center without searching.
    ///
    /// The first move is symmetric, so the full search buys nothing over
    /// the fixed reply. Purely a fast path; switching it off changes the
    /// returned opening to the first optimal action in enumeration order.
    pub opening_shortcut: bool,
    /// Stop exploring a node's remaining candidates once the opponent
    /// would never allow the line anyway
    pub pruning: bool,
}

impl SearchConfig {
    pub fn new() -> Self {
        SearchConfig {
            opening_shortcut: true,
            pruning: true,
        }
    }

    /// Enable or disable the fixed center reply on the empty board.
    pub fn with_opening_shortcut(mut self, enabled: bool) -> Self {
        self.opening_shortcut = enabled;
        self
    }

    /// Enable or disable alpha-beta pruning.
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a full search: the chosen action, the exact game value of
/// the position, and the explored tree.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The optimal action, `None` when the game is already decided
    pub action: Option<Action>,
    /// Backed-up value of the root: +1 X wins, -1 O wins, 0 draw
    pub value: i32,
    /// Every node the search visited
    pub trace: SearchTrace,
}

/// Compute the optimal action for the player to move.
///
/// Returns `None` when the board is already terminal. Uses the default
/// [`SearchConfig`], so the empty board gets the fixed center reply.
///
/// # Examples
///
/// ```
/// use oxo::{Action, Board, minimax};
///
/// let board = Board::from_string("X........").unwrap();
/// let action = minimax(&board).unwrap();
/// assert_eq!(action, Some(Action::new(1, 1)));
/// ```
pub fn minimax(board: &Board) -> Result<Option<Action>> {
    Searcher::default().best_action(board)
}

/// Game-tree searcher for a fixed configuration.
///
/// Stateless between calls: every search works on its own board value
/// and, when requested, its own trace, so independent searches never
/// interfere with each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Searcher { config }
    }

    /// Compute the optimal action without recording a trace.
    ///
    /// # Errors
    ///
    /// Propagates any rules error raised while expanding the tree. On
    /// well-formed boards the search itself cannot fail.
    pub fn best_action(&self, board: &Board) -> Result<Option<Action>> {
        if board.is_terminal() {
            return Ok(None);
        }

        if self.config.opening_shortcut && board.occupied_count() == 0 {
            debug!(action = %CENTER, "answering the empty board with the fixed opening");
            return Ok(Some(CENTER));
        }

        let (action, value) = self.dispatch(board, None)?;
        debug!(board = %board.encode(), ?action, value, "search complete");
        Ok(action)
    }

    /// Run a full search and return the action, the exact value, and the
    /// explored tree.
    ///
    /// The opening shortcut does not apply here: this entry point exists
    /// for introspection, so the tree is always searched for real.
    ///
    /// # Errors
    ///
    /// Propagates any rules error raised while expanding the tree.
    pub fn search(&self, board: &Board) -> Result<SearchOutcome> {
        let mut recorder = SearchTrace::new(*board);

        if board.is_terminal() {
            let value = board.utility();
            recorder.finalize(NodeId::ROOT, value);
            return Ok(SearchOutcome {
                action: None,
                value,
                trace: recorder,
            });
        }

        let (action, value) = self.dispatch(board, Some(&mut recorder))?;
        recorder.finalize(NodeId::ROOT, value);
        debug!(
            board = %board.encode(),
            ?action,
            value,
            nodes = recorder.len(),
            "search complete"
        );

        Ok(SearchOutcome {
            action,
            value,
            trace: recorder,
        })
    }

    fn dispatch(
        &self,
        board: &Board,
        recorder: Option<&mut SearchTrace>,
    ) -> Result<(Option<Action>, i32)> {
        match board.player()? {
            Player::X => self.max_value(board, i32::MIN, i32::MAX, recorder, NodeId::ROOT),
            Player::O => self.min_value(board, i32::MIN, i32::MAX, recorder, NodeId::ROOT),
        }
    }

    /// Best achievable outcome for X from `board`, with X to move.
    fn max_value(
        &self,
        board: &Board,
        mut alpha: i32,
        beta: i32,
        mut recorder: Option<&mut SearchTrace>,
        parent: NodeId,
    ) -> Result<(Option<Action>, i32)> {
        if board.is_terminal() {
            return Ok((None, board.utility()));
        }

        let mut best_action = None;
        let mut best_value = i32::MIN;

        for action in board.actions()? {
            let next = board.result(action)?;
            let node = recorder
                .as_deref_mut()
                .map(|r| r.record(parent, Player::X, action, next));

            let (_, value) = self.min_value(
                &next,
                alpha,
                beta,
                recorder.as_deref_mut(),
                node.unwrap_or(NodeId::ROOT),
            )?;

            if let (Some(r), Some(node)) = (recorder.as_deref_mut(), node) {
                r.finalize(node, value);
            }

            if value > best_value {
                best_value = value;
                best_action = Some(action);
                if let (Some(r), Some(node)) = (recorder.as_deref_mut(), node) {
                    r.select(node);
                }
            }

            if self.config.pruning {
                alpha = alpha.max(best_value);
                if best_value >= beta {
                    trace!(board = %board.encode(), %action, best_value, beta, "beta cutoff");
                    break;
                }
            }
        }

        Ok((best_action, best_value))
    }

    /// Best achievable outcome for O from `board`, with O to move.
    fn min_value(
        &self,
        board: &Board,
        alpha: i32,
        mut beta: i32,
        mut recorder: Option<&mut SearchTrace>,
        parent: NodeId,
    ) -> Result<(Option<Action>, i32)> {
        if board.is_terminal() {
            return Ok((None, board.utility()));
        }

        let mut best_action = None;
        let mut best_value = i32::MAX;

        for action in board.actions()? {
            let next = board.result(action)?;
            let node = recorder
                .as_deref_mut()
                .map(|r| r.record(parent, Player::O, action, next));

            let (_, value) = self.max_value(
                &next,
                alpha,
                beta,
                recorder.as_deref_mut(),
                node.unwrap_or(NodeId::ROOT),
            )?;

            if let (Some(r), Some(node)) = (recorder.as_deref_mut(), node) {
                r.finalize(node, value);
            }

            if value < best_value {
                best_value = value;
                best_action = Some(action);
                if let (Some(r), Some(node)) = (recorder.as_deref_mut(), node) {
                    r.select(node);
                }
            }

            if self.config.pruning {
                beta = beta.min(best_value);
                if best_value <= alpha {
                    trace!(board = %board.encode(), %action, best_value, alpha, "alpha cutoff");
                    break;
                }
            }
        }

        Ok((best_action, best_value))
    }
}
