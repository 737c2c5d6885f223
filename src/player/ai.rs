use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use rand::rngs::SmallRng;

use crate::core::{Board, Coord, FleetSpec, GameError, GameResult, PlacementPolicy, Ship, Targeting};
use crate::render::{BoardRenderer, NullRenderer};

use super::{build_board, Player};

/// Name used when none is given.
pub const DEFAULT_NAME: &str = "I like ramen";

struct Engagement {
    board: Board,
    targeting: Targeting,
}

/// Hunt/target AI. Opens along a diagonal from the board centre, sweeps a
/// checkerboard at random, and chases every hit along its line.
pub struct SalvoAi {
    name: String,
    policy: PlacementPolicy,
    renderer: Box<dyn BoardRenderer>,
    engagement: Option<Engagement>,
}

impl SalvoAi {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.into(),
            policy: PlacementPolicy::default(),
            renderer: Box::new(NullRenderer),
            engagement: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_policy(mut self, policy: PlacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_renderer(mut self, renderer: Box<dyn BoardRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Shot selection state, once set up.
    pub fn targeting(&self) -> Option<&Targeting> {
        self.engagement.as_ref().map(|e| &e.targeting)
    }

    fn engagement_mut(&mut self) -> Result<&mut Engagement, GameError> {
        self.engagement.as_mut().ok_or(GameError::NotSetUp)
    }
}

impl Default for SalvoAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for SalvoAi {
    fn name(&self) -> &str {
        &self.name
    }

    fn setup(
        &mut self,
        rng: &mut SmallRng,
        height: usize,
        width: usize,
        spec: &FleetSpec,
    ) -> Result<Vec<Ship>, GameError> {
        self.engagement = None;
        let board = build_board(rng, height, width, spec, &self.policy)?;
        let fleet = board.ships().to_vec();
        self.renderer
            .display_board(&format!("{} fleet:", self.name), &board, true);
        self.engagement = Some(Engagement {
            board,
            targeting: Targeting::new(height, width),
        });
        Ok(fleet)
    }

    fn take_shots(&mut self, rng: &mut SmallRng) -> Result<Vec<Coord>, GameError> {
        let label = format!("{} board:", self.name);
        let Engagement { board, targeting } = self
            .engagement
            .as_mut()
            .ok_or(GameError::NotSetUp)?;
        self.renderer.display_board(&label, board, false);
        targeting.next_salvo(rng, board.standing_count())
    }

    fn report_damage(&mut self, opponent_shots: &[Coord]) -> Result<Vec<Coord>, GameError> {
        self.engagement_mut()?.board.report_damage(opponent_shots)
    }

    fn successful_hits(&mut self, hits: &[Coord]) -> Result<(), GameError> {
        self.engagement_mut()?.targeting.record_hits(hits)
    }

    fn end_game(&mut self, result: GameResult, reason: &str) {
        self.renderer.show_result(&self.name, result, reason);
    }

    fn board(&self) -> Option<&Board> {
        self.engagement.as_ref().map(|e| &e.board)
    }
}
