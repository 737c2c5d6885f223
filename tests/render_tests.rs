use battlesalvo::{
    render_board, result_line, Board, BoardRenderer, ConsoleRenderer, Coord, GameResult,
    Orientation, Ship, ShipType,
};

fn board() -> Board {
    let fleet = vec![Ship::new(
        ShipType::Submarine,
        Coord::new(1, 1),
        Orientation::Horizontal,
    )];
    Board::new(6, 6, fleet).unwrap()
}

#[test]
fn test_render_reveals_ships_only_on_request() {
    let mut board = board();
    board
        .report_damage(&[Coord::new(1, 1), Coord::new(5, 5)])
        .unwrap();

    let shown = render_board(&board, true);
    let lines: Vec<_> = shown.lines().collect();
    assert_eq!(lines[0], "     A B C D E F");
    assert_eq!(lines[2], "   2 . X S S . .");
    assert_eq!(lines[6], "   6 . . . . . o");
    assert!(lines[7].contains("Legend"));

    let hidden = render_board(&board, false);
    assert!(!hidden.contains('S'));
    assert!(hidden.contains('X'));
    assert!(hidden.contains('o'));
}

#[test]
fn test_console_renderer_writes_to_sink() {
    let mut renderer = ConsoleRenderer::with_writer(Vec::new());
    renderer.display_board("Alice fleet:", &board(), true);
    renderer.show_result("Alice", GameResult::Win, "Alice sank every ship of Bob");

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(text.starts_with("Alice fleet:\n"));
    assert!(text.contains(" S S S"));
    assert!(text.contains("Alice wins the game!\nAlice sank every ship of Bob\n"));
}

#[test]
fn test_result_lines() {
    assert_eq!(result_line("Bob", GameResult::Lose), "Bob lost...");
    assert_eq!(result_line("Bob", GameResult::Draw), "Bob had a draw.");
}
