use alloc::string::{String, ToString};

use crate::*;

#[derive(Clone, Debug, PartialEq)]
pub enum SessionPhase {
    Idle,
    Loading,
    Ready,
    Failed(GameError),
}

impl SessionPhase {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_playable(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl Default for SessionPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Handle for one board build, used to drop results of builds that are no
/// longer current.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BuildTicket(u32);

/// Display command produced by a clue activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellUpdate {
    pub coords: ClueCoords,
    pub text: String,
    pub style: CellStyle,
}

/// Owns the board of the current game and swaps in freshly built ones.
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    board: Option<Board>,
    phase: SessionPhase,
    generation: u32,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Board to display, only while the game is playable.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref().filter(|_| self.phase.is_playable())
    }

    pub fn begin_build(&mut self) -> Result<BuildTicket> {
        if self.phase.is_loading() {
            return Err(GameError::BuildInProgress);
        }
        self.generation = self.generation.wrapping_add(1);
        self.phase = SessionPhase::Loading;
        log::debug!("build #{} started", self.generation);
        Ok(BuildTicket(self.generation))
    }

    /// Installs the outcome of a build, returns whether the session changed.
    ///
    /// On failure the previous board is kept but not exposed until a later
    /// build succeeds.
    pub fn finish_build(&mut self, ticket: BuildTicket, result: Result<Board>) -> bool {
        if ticket != BuildTicket(self.generation) || !self.phase.is_loading() {
            log::debug!("ignoring stale build {:?}", ticket);
            return false;
        }

        match result {
            Ok(board) => {
                log::debug!(
                    "build #{} ready with {} categories",
                    ticket.0,
                    board.category_count()
                );
                self.board = Some(board);
                self.phase = SessionPhase::Ready;
            }
            Err(err) => {
                log::error!("build #{} failed: {}", ticket.0, err);
                self.phase = SessionPhase::Failed(err);
            }
        }
        true
    }

    /// Activates the clue at `coords`, returning what the display should show
    /// in that cell or `None` when nothing changes.
    pub fn activate(&mut self, coords: ClueCoords) -> Result<Option<CellUpdate>> {
        if !self.phase.is_playable() {
            return Ok(None);
        }
        let Some(board) = self.board.as_mut() else {
            return Ok(None);
        };

        let clue = board.clue_at_mut(coords)?;
        if !clue.activate().has_update() {
            return Ok(None);
        }

        let content = clue.content();
        Ok(Some(CellUpdate {
            coords,
            text: content.text.to_string(),
            style: content.style,
        }))
    }
}
