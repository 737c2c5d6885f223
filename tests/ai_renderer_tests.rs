use std::cell::RefCell;
use std::rc::Rc;

use battlesalvo::{Board, BoardRenderer, FleetSpec, GameResult, Player, SalvoAi, ShipType};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Board { label: String, reveal: bool, standing: usize },
    Result { player: String, result: GameResult, reason: String },
}

/// Renderer that keeps every call in a shared log.
#[derive(Clone, Default)]
struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
}

impl BoardRenderer for Recorder {
    fn display_board(&mut self, label: &str, board: &Board, reveal: bool) {
        self.events.borrow_mut().push(Event::Board {
            label: label.to_string(),
            reveal,
            standing: board.standing_count(),
        });
    }

    fn show_result(&mut self, player: &str, result: GameResult, reason: &str) {
        self.events.borrow_mut().push(Event::Result {
            player: player.to_string(),
            result,
            reason: reason.to_string(),
        });
    }
}

fn board_event(label: &str, reveal: bool, standing: usize) -> Event {
    Event::Board {
        label: label.to_string(),
        reveal,
        standing,
    }
}

#[test]
fn test_ai_forwards_to_renderer() {
    let recorder = Recorder::default();
    let mut ai = SalvoAi::new()
        .with_name("Nemo")
        .with_renderer(Box::new(recorder.clone()));
    let mut rng = SmallRng::seed_from_u64(9);
    let spec = FleetSpec::new()
        .with(ShipType::Battleship, 1)
        .with(ShipType::Submarine, 1);

    ai.setup(&mut rng, 10, 10, &spec).unwrap();
    assert_eq!(
        *recorder.events.borrow(),
        vec![board_event("Nemo fleet:", true, 2)]
    );

    ai.take_shots(&mut rng).unwrap();
    ai.take_shots(&mut rng).unwrap();
    ai.end_game(GameResult::Draw, "No shots left to fire");

    assert_eq!(
        *recorder.events.borrow(),
        vec![
            board_event("Nemo fleet:", true, 2),
            board_event("Nemo board:", false, 2),
            board_event("Nemo board:", false, 2),
            Event::Result {
                player: "Nemo".to_string(),
                result: GameResult::Draw,
                reason: "No shots left to fire".to_string(),
            },
        ]
    );
}

#[test]
fn test_failed_setup_renders_nothing() {
    let recorder = Recorder::default();
    let mut ai = SalvoAi::new().with_renderer(Box::new(recorder.clone()));
    let mut rng = SmallRng::seed_from_u64(0);

    assert!(ai.setup(&mut rng, 20, 10, &FleetSpec::new()).is_err());
    assert!(ai.take_shots(&mut rng).is_err());
    assert!(recorder.events.borrow().is_empty());
}
