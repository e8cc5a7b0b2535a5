use pretty_assertions::assert_eq;
use slideshow::{
    input::{request_for_key, SwipeTracker},
    NavOutcome, NavPhase, SlideNavigator,
};

fn settle(nav: &mut SlideNavigator) {
    nav.complete_fade_out();
    nav.complete_settle();
}

#[test]
fn key_repeat_cannot_skip_ahead_of_the_animation() {
    let mut nav = SlideNavigator::new(10);
    let outcomes: Vec<NavOutcome> = (0..5)
        .filter_map(|_| request_for_key("ArrowRight"))
        .map(|request| nav.request(request))
        .collect();

    assert!(outcomes[0].started());
    assert!(outcomes[1..].iter().all(|o| *o == NavOutcome::Busy));
    settle(&mut nav);
    assert_eq!(nav.phase(), NavPhase::Idle { index: 1 });
}

#[test]
fn swipes_walk_the_deck_and_saturate_at_both_ends() {
    let mut nav = SlideNavigator::new(3);
    let mut swipe = SwipeTracker::default();
    let mut swipe_left = |nav: &mut SlideNavigator| {
        swipe.begin(300.0, 200.0);
        if let Some(request) = swipe.end(100.0, 205.0) {
            nav.request(request);
        }
        settle(nav);
    };

    for _ in 0..5 {
        swipe_left(&mut nav);
    }
    assert_eq!(nav.current_index(), 2);
    assert!(!nav.has_next());

    for _ in 0..5 {
        if let Some(request) = request_for_key("ArrowLeft") {
            nav.request(request);
        }
        settle(&mut nav);
    }
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn table_of_contents_jump_after_settle_wins_over_dropped_one() {
    let mut nav = SlideNavigator::new(8);
    nav.go_to(2);
    nav.go_to(5);
    settle(&mut nav);
    assert_eq!(nav.current_index(), 2);

    nav.go_to(5);
    settle(&mut nav);
    assert_eq!(nav.current_index(), 5);
}
