use rand::{rngs::StdRng, SeedableRng};
use word_hunt::{
    words, CheckOutcome, Error, Game, GameConfig, GridGenerator, Orientation, SelectionChange,
    BLANK,
};

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn every_placement_reads_back_after_fill() {
    for seed in 0..20 {
        let game = Game::with_rng(words::preset(), GameConfig::default(), &mut seeded(seed)).unwrap();

        assert_eq!(game.placements().len(), words::PRESET_WORDS.len());
        for placement in game.placements() {
            assert_eq!(
                game.grid().read_placement(placement).as_deref(),
                Some(placement.word.as_str()),
                "seed {seed}"
            );
        }

        assert!(game
            .grid()
            .rows()
            .flatten()
            .all(|ch| ch != BLANK && ch.is_ascii_uppercase()));
    }
}

#[test]
fn cat_in_three_by_three() {
    let config = GameConfig::default().with_initial_size(3);
    let mut generator = GridGenerator::with_rng(&config, seeded(11)).unwrap();
    generator.generate(&["CAT"]).unwrap();

    let grid = generator.grid();
    let across = (0..3).any(|row| grid.read(row, 0, 3, Orientation::Horizontal).as_deref() == Some("CAT"));
    let down = (0..3).any(|col| grid.read(0, col, 3, Orientation::Vertical).as_deref() == Some("CAT"));
    assert!(across || down);
    assert_eq!(grid.blank_count(), 6);

    generator.fill_blanks();
    let grid = generator.into_grid();
    assert_eq!(grid.size(), 3);
    assert!(grid.rows().flatten().all(|ch| ch.is_ascii_uppercase()));
}

#[test]
fn four_letters_in_two_by_two_expands() {
    let config = GameConfig::default().with_initial_size(2);
    let mut generator = GridGenerator::with_rng(&config, seeded(2)).unwrap();
    generator.generate(&["AAAA"]).unwrap();

    assert!(generator.expansions() >= 1);
    assert!(generator.grid().size() >= 4);
}

#[test]
fn pathological_word_reports_error() {
    let config = GameConfig::default().with_initial_size(5).with_max_size(20);
    let long = "A".repeat(30);

    let err = Game::with_rng(vec![long.clone()], config, &mut seeded(0)).unwrap_err();

    match err {
        Error::WordUnplaceable { word, max_size } => {
            assert_eq!(word, long);
            assert_eq!(max_size, 20);
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn play_through_to_a_win() {
    let words = words::normalize_words(["owl", "emu", "yak"]).unwrap();
    let mut game = Game::with_rng(words, GameConfig::default(), &mut seeded(8)).unwrap();
    let placements = game.placements().to_vec();

    for (i, placement) in placements.iter().enumerate() {
        for (row, col) in placement.cells() {
            assert_eq!(game.click(row, col).unwrap(), SelectionChange::Added);
        }

        let outcome = game.check_selection();
        if i + 1 == placements.len() {
            assert_eq!(
                outcome,
                CheckOutcome::GameWon {
                    word: placement.word.clone(),
                    score: 30
                }
            );
        } else {
            assert!(matches!(outcome, CheckOutcome::WordFound { points: 10, .. }));
        }
    }

    assert!(game.is_won());
    assert_eq!(game.original_words().len(), 3);
}

#[test]
fn non_adjacent_click_clears_selection() {
    let mut game = Game::with_rng(words::preset(), GameConfig::default(), &mut seeded(4)).unwrap();

    game.click(0, 0).unwrap();
    game.click(1, 1).unwrap();

    assert_eq!(game.click(5, 5).unwrap(), SelectionChange::Reset);
    assert!(game.selection().is_empty());
}

#[test]
fn invalid_config_is_rejected_before_generation() {
    let config = GameConfig::default().with_initial_size(0);

    assert!(matches!(
        Game::with_rng(words::preset(), config, &mut seeded(0)),
        Err(Error::InvalidSize { .. })
    ));
}
