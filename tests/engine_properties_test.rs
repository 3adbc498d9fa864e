use rand::SeedableRng;
use rand::rngs::StdRng;
use tapcalc::application::engine::{ExpressionEngine, MAX_ENTRY_LEN};
use tapcalc::domain::event::InputEvent;
use tapcalc::domain::history::HISTORY_CAPACITY;

mod common;

fn feed(engine: &mut ExpressionEngine, keys: &[String]) {
    for key in keys {
        engine.apply_event(key.parse().unwrap());
    }
}

#[test]
fn test_digit_sequences_display_verbatim() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let digits = common::random_digits(&mut rng, 16);
        let mut engine = ExpressionEngine::new();
        feed(&mut engine, &digits);

        // Leading zeros are swallowed, then at most MAX_ENTRY_LEN digits stick.
        let typed = digits.concat();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.chars().take(MAX_ENTRY_LEN).collect()
        };

        assert_eq!(engine.display_expression(), expected, "typed {typed}");
        assert_eq!(engine.current_entry(), expected);
    }
}

#[test]
fn test_sums_match_and_history_stays_bounded() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut engine = ExpressionEngine::new();
    for round in 0..50 {
        let lhs = common::random_digits(&mut rng, 6);
        let rhs = common::random_digits(&mut rng, 6);
        engine.apply_event(InputEvent::Clear);
        feed(&mut engine, &lhs);
        engine.apply_event("+".parse().unwrap());
        feed(&mut engine, &rhs);
        engine.apply_event(InputEvent::Equals);

        let expected: u64 =
            lhs.concat().parse::<u64>().unwrap() + rhs.concat().parse::<u64>().unwrap();
        assert_eq!(engine.display_expression(), expected.to_string());

        let history = engine.display_history();
        assert_eq!(history.len(), (round + 1).min(HISTORY_CAPACITY));
        assert!(history[0].ends_with(&format!("={expected}")));
    }
}
