use serde::Deserialize;
use serde_with::{formats::SpaceSeparator, serde_as, DisplayFromStr, StringWithSeparator};
use teachess::{Board, Color, Square};

#[serde_as]
#[derive(Deserialize)]
struct Record {
    name: String,
    house_rules: bool,
    #[serde_as(as = "StringWithSeparator<SpaceSeparator, Square>")]
    squares: Vec<Square>,
    #[serde_as(as = "DisplayFromStr")]
    to_move: Color,
    outcome: String,
}

#[test]
fn test_games() {
    let mut reader = csv::Reader::from_path("tests/games.csv").expect("reader");

    for record in reader.deserialize() {
        let record: Record = record.expect("record");

        let mut board = if record.house_rules {
            Board::house_rules()
        } else {
            Board::new()
        };
        let mut to_move = Color::White;

        assert_eq!(record.squares.len() % 2, 0, "{}", record.name);
        for step in record.squares.chunks(2) {
            let (from, to) = (step[0], step[1]);
            assert_eq!(board.color_at(from), Some(to_move), "{}: {from}{to}", record.name);
            assert!(board.move_piece(from, to), "{}: {from}{to}", record.name);
            to_move = !to_move;
        }

        assert_eq!(to_move, record.to_move, "{}", record.name);
        assert_eq!(
            board
                .outcome(to_move)
                .map_or_else(|| "*".to_owned(), |outcome| outcome.to_string()),
            record.outcome,
            "{}",
            record.name
        );
        assert!(board.validate().is_ok(), "{}", record.name);
    }
}
