use pretty_assertions::assert_eq;
use rstest::rstest;

use swipedeck::model::{
    deck::{Message, Settled},
    Deck, GestureSettings, Slide, SlidePosition,
};

fn deck(count: usize, initial: Option<usize>) -> Deck {
    let slides = (0..count)
        .map(|i| Slide::new(Some(format!("Slide {}", i + 1)), vec![]))
        .collect();
    Deck::new(slides, initial, GestureSettings::default()).expect("non-empty deck")
}

fn swipe(deck: &mut Deck, from: f64, to: f64) -> Option<Settled> {
    deck.update(Message::GestureStarted { y: from });
    deck.update(Message::GestureMoved { y: to });
    deck.update(Message::GestureEnded)
}

fn positions(deck: &Deck) -> Vec<SlidePosition> {
    deck.slides().iter().map(Slide::position).collect()
}

#[test]
fn test_swipe_up_moves_to_next_slide() {
    let mut deck = deck(3, None);

    let settled = swipe(&mut deck, 500.0, 350.0);

    assert_eq!(settled, Some(Settled { from: 0, to: 1 }));
    assert_eq!(deck.current_index(), 1);
    assert_eq!(deck.progress().label(), "2/3 66.7%");
    assert_eq!(
        positions(&deck),
        vec![
            SlidePosition::Elapsed,
            SlidePosition::Active,
            SlidePosition::Upcoming
        ]
    );
    assert!(deck.slides().iter().all(|slide| slide.transform().is_none()));
}

#[test]
fn test_swipe_down_moves_to_previous_slide() {
    let mut deck = deck(3, Some(2));

    swipe(&mut deck, 100.0, 300.0);

    assert_eq!(deck.current_index(), 1);
    assert_eq!(deck.progress().label(), "2/3 66.7%");
}

#[rstest]
#[case(500.0, 450.0)]
#[case(500.0, 400.0)]
#[case(400.0, 500.0)]
fn test_short_swipe_snaps_back(#[case] from: f64, #[case] to: f64) {
    let mut deck = deck(3, Some(1));

    let settled = swipe(&mut deck, from, to);

    assert_eq!(settled, Some(Settled { from: 1, to: 1 }));
    assert_eq!(deck.current_index(), 1);
    assert!(deck.slides().iter().all(|slide| slide.transform().is_none()));
}

#[test]
fn test_edges_do_not_wrap() {
    let mut deck = deck(2, None);
    swipe(&mut deck, 100.0, 400.0);
    assert_eq!(deck.current_index(), 0);

    swipe(&mut deck, 400.0, 100.0);
    assert_eq!(deck.current_index(), 1);

    swipe(&mut deck, 400.0, 100.0);
    assert_eq!(deck.current_index(), 1);
    assert_eq!(deck.progress().label(), "2/2 100.0%");
}

#[test]
fn test_single_slide_deck_never_moves() {
    let mut deck = deck(1, None);
    swipe(&mut deck, 400.0, 0.0);
    swipe(&mut deck, 0.0, 400.0);
    deck.update(Message::NextSlideRequested);

    assert_eq!(deck.current_index(), 0);
    assert_eq!(deck.progress().label(), "1/1 100.0%");
}

#[test]
fn test_live_drag_transforms_follow_pointer() {
    let mut deck = deck(3, Some(1));
    deck.update(Message::GestureStarted { y: 300.0 });
    deck.update(Message::GestureMoved { y: 200.0 });

    let leaving = deck.slides()[1].transform().expect("leaving slide transform");
    let entering = deck.slides()[2].transform().expect("entering slide transform");
    assert_eq!(leaving.scale, 0.95);
    assert_eq!(entering.scale, 1.0);
    assert!(deck.slides()[0].transform().is_none());

    // Reversing direction moves the transform to the other neighbour
    deck.update(Message::GestureMoved { y: 400.0 });
    assert!(deck.slides()[0].transform().is_some());
    assert!(deck.slides()[2].transform().is_none());
}

#[test]
fn test_empty_deck_is_rejected() {
    assert!(Deck::new(vec![], None, GestureSettings::default()).is_err());
}

#[test]
fn test_out_of_range_start_is_clamped() {
    let deck = deck(3, Some(7));
    assert_eq!(deck.current_index(), 2);
}

/// Small xorshift generator so every sweep case is reproducible
struct Xorshift(u64);

impl Xorshift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

fn random_message(rng: &mut Xorshift) -> Message {
    let y = rng.below(600) as f64;
    match rng.below(10) {
        0..=1 => Message::GestureStarted { y },
        2..=5 => Message::GestureMoved { y },
        6..=7 => Message::GestureEnded,
        8 => Message::NextSlideRequested,
        _ => Message::PreviousSlideRequested,
    }
}

fn assert_at_rest(deck: &Deck) {
    let current = deck.current_index();
    assert!(!deck.gesture().is_dragging());
    for (index, slide) in deck.slides().iter().enumerate() {
        let expected = if index == current {
            SlidePosition::Active
        } else if index > current {
            SlidePosition::Upcoming
        } else {
            SlidePosition::Elapsed
        };
        assert_eq!(slide.position(), expected, "slide {index} with cursor {current}");
        assert!(slide.transform().is_none());
    }
    assert_eq!(
        deck.slides()
            .iter()
            .filter(|slide| slide.position() == SlidePosition::Active)
            .count(),
        1
    );
}

#[rstest]
fn test_random_event_sequences_keep_deck_consistent(
    #[values(1, 2, 3, 7)] count: usize,
    #[values(0x9e37_79b9, 0x2545_f491, 0xdead_beef)] seed: u64,
) {
    let mut deck = deck(count, None);
    let mut rng = Xorshift(seed);
    let mut settles = 0;

    for _ in 0..2_000 {
        let message = random_message(&mut rng);
        let settled = deck.update(message);

        assert!(deck.current_index() < count);
        match settled {
            Some(Settled { from, to }) => {
                settles += 1;
                assert_eq!(to, deck.current_index());
                assert!(from.abs_diff(to) <= 1);
                assert_at_rest(&deck);
            }
            None => {
                // Only the active slide and one neighbour carry a transform mid-drag
                let transformed: Vec<usize> = deck
                    .slides()
                    .iter()
                    .enumerate()
                    .filter(|(_, slide)| slide.transform().is_some())
                    .map(|(index, _)| index)
                    .collect();
                assert!(matches!(transformed.len(), 0 | 2));
                assert!(transformed
                    .iter()
                    .all(|index| index.abs_diff(deck.current_index()) <= 1));
            }
        }
    }

    assert!(settles > 0);
}
