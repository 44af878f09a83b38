//! Literal evaluation vectors for the five-, six- and seven-card paths:
//! rank values, categories, descriptions, best-five and unused cards.

use cardrank_core::{
    parse_cards, rank_cactus, rank_of, rank_standard, Cards, HandRank, RankCategory, Variant,
};

struct EvalCase {
    hand: &'static str,
    rank: u16,
    category: RankCategory,
    /// `"{description} {best}"` followed by the unused cards, all in the
    /// Unicode card form.
    rendered: &'static str,
}

fn case(hand: &'static str, rank: u16, category: RankCategory, rendered: &'static str) -> EvalCase {
    EvalCase {
        hand,
        rank,
        category,
        rendered,
    }
}

fn five_card_cases() -> Vec<EvalCase> {
    vec![
        case("As Ks Jc 7h 5d", 0x186c, RankCategory::Nothing,
            "Nothing, Ace-high, kickers King, Jack, Seven, Five [A♠ K♠ J♣ 7♥ 5♦] []"),
        case("As Ac Jc 7h 5d", 0x0d78, RankCategory::Pair,
            "Pair, Aces, kickers Jack, Seven, Five [A♣ A♠ J♣ 7♥ 5♦] []"),
        case("Jd 6s 6c 5c 5d", 0x0c93, RankCategory::TwoPair,
            "Two Pair, Sixes over Fives, kicker Jack [6♣ 6♠ 5♣ 5♦ J♦] []"),
        case("6s 6c Jc Jd 5d", 0x0b42, RankCategory::TwoPair,
            "Two Pair, Jacks over Sixes, kicker Five [J♣ J♦ 6♣ 6♠ 5♦] []"),
        case("As Ac Jc Jd 5d", 0x09c1, RankCategory::TwoPair,
            "Two Pair, Aces over Jacks, kicker Five [A♣ A♠ J♣ J♦ 5♦] []"),
        case("As Ac Ad Jd 5d", 0x0664, RankCategory::ThreeOfAKind,
            "Three of a Kind, Aces, kickers Jack, Five [A♣ A♦ A♠ J♦ 5♦] []"),
        case("4s 5s 2d 3h Ac", 0x0649, RankCategory::Straight,
            "Straight, Five-high [5♠ 4♠ 3♥ 2♦ A♣] []"),
        case("9s Ks Qd Jh Td", 0x0641, RankCategory::Straight,
            "Straight, King-high [K♠ Q♦ J♥ T♦ 9♠] []"),
        case("As Ks Qd Jh Td", 0x0640, RankCategory::Straight,
            "Straight, Ace-high [A♠ K♠ Q♦ J♥ T♦] []"),
        case("Ts 7s 4s 3s 2s", 0x0606, RankCategory::Flush,
            "Flush, Ten-high [T♠ 7♠ 4♠ 3♠ 2♠] []"),
        case("4s 4c 4d 2s 2h", 0x012a, RankCategory::FullHouse,
            "Full House, Fours full of Twos [4♣ 4♦ 4♠ 2♥ 2♠] []"),
        case("5s 5c 5d 6s 6h", 0x011b, RankCategory::FullHouse,
            "Full House, Fives full of Sixes [5♣ 5♦ 5♠ 6♥ 6♠] []"),
        case("6s 6c 6d 5s 5h", 0x010f, RankCategory::FullHouse,
            "Full House, Sixes full of Fives [6♣ 6♦ 6♠ 5♥ 5♠] []"),
        case("As Ac Ad Ah 5h", 0x0013, RankCategory::FourOfAKind,
            "Four of a Kind, Aces, kicker Five [A♣ A♦ A♥ A♠ 5♥] []"),
        case("3d 5d 2d 4d Ad", 0x000a, RankCategory::StraightFlush,
            "Straight Flush, Five-high, Steel Wheel [5♦ 4♦ 3♦ 2♦ A♦] []"),
        case("6♦ 5♦ 4♦ 3♦ 2♦", 0x0009, RankCategory::StraightFlush,
            "Straight Flush, Six-high [6♦ 5♦ 4♦ 3♦ 2♦] []"),
        case("9♦ 6♦ 8♦ 5♦ 7♦", 0x0006, RankCategory::StraightFlush,
            "Straight Flush, Nine-high [9♦ 8♦ 7♦ 6♦ 5♦] []"),
        case("As Ks Qs Js Ts", 0x0001, RankCategory::StraightFlush,
            "Straight Flush, Ace-high, Royal [A♠ K♠ Q♠ J♠ T♠] []"),
    ]
}

fn six_card_cases() -> Vec<EvalCase> {
    vec![
        case("3d As Ks Jc 7h 5d", 0x186c, RankCategory::Nothing,
            "Nothing, Ace-high, kickers King, Jack, Seven, Five [A♠ K♠ J♣ 7♥ 5♦] [3♦]"),
        case("3d As Ac Jc 7h 5d", 0x0d78, RankCategory::Pair,
            "Pair, Aces, kickers Jack, Seven, Five [A♣ A♠ J♣ 7♥ 5♦] [3♦]"),
        case("9d Jd 6s 6c 5c 5d", 0x0c93, RankCategory::TwoPair,
            "Two Pair, Sixes over Fives, kicker Jack [6♣ 6♠ 5♣ 5♦ J♦] [9♦]"),
        case("3d 6s 6c Jc Jd 5d", 0x0b42, RankCategory::TwoPair,
            "Two Pair, Jacks over Sixes, kicker Five [J♣ J♦ 6♣ 6♠ 5♦] [3♦]"),
        case("3d As Ac Jc Jd 5d", 0x09c1, RankCategory::TwoPair,
            "Two Pair, Aces over Jacks, kicker Five [A♣ A♠ J♣ J♦ 5♦] [3♦]"),
        case("3d As Ac Ad Jd 5d", 0x0664, RankCategory::ThreeOfAKind,
            "Three of a Kind, Aces, kickers Jack, Five [A♣ A♦ A♠ J♦ 5♦] [3♦]"),
        case("4s 5s 2d 3h Ac Jd", 0x0649, RankCategory::Straight,
            "Straight, Five-high [5♠ 4♠ 3♥ 2♦ A♣] [J♦]"),
        case("3d 9s Ks Qd Jh Td", 0x0641, RankCategory::Straight,
            "Straight, King-high [K♠ Q♦ J♥ T♦ 9♠] [3♦]"),
        case("3d As Ks Qd Jh Td", 0x0640, RankCategory::Straight,
            "Straight, Ace-high [A♠ K♠ Q♦ J♥ T♦] [3♦]"),
        case("3d Ts 7s 4s 3s 2s", 0x0606, RankCategory::Flush,
            "Flush, Ten-high [T♠ 7♠ 4♠ 3♠ 2♠] [3♦]"),
        case("3d 4s 4c 4d 2s 2h", 0x012a, RankCategory::FullHouse,
            "Full House, Fours full of Twos [4♣ 4♦ 4♠ 2♥ 2♠] [3♦]"),
        case("3d 5s 5c 5d 6s 6h", 0x011b, RankCategory::FullHouse,
            "Full House, Fives full of Sixes [5♣ 5♦ 5♠ 6♥ 6♠] [3♦]"),
        case("3d 6s 6c 6d 5s 5h", 0x010f, RankCategory::FullHouse,
            "Full House, Sixes full of Fives [6♣ 6♦ 6♠ 5♥ 5♠] [3♦]"),
        case("3d As Ac Ad Ah 5h", 0x0013, RankCategory::FourOfAKind,
            "Four of a Kind, Aces, kicker Five [A♣ A♦ A♥ A♠ 5♥] [3♦]"),
        case("3d 5d 2d 4d Ad 3s", 0x000a, RankCategory::StraightFlush,
            "Straight Flush, Five-high, Steel Wheel [5♦ 4♦ 3♦ 2♦ A♦] [3♠]"),
        case("T♦ 6♦ 5♦ 4♦ 3♦ 2♦", 0x0009, RankCategory::StraightFlush,
            "Straight Flush, Six-high [6♦ 5♦ 4♦ 3♦ 2♦] [T♦]"),
        case("J♦ 9♦ 6♦ 8♦ 5♦ 7♦", 0x0006, RankCategory::StraightFlush,
            "Straight Flush, Nine-high [9♦ 8♦ 7♦ 6♦ 5♦] [J♦]"),
        case("7♦ J♦ 9♦ 6♦ 8♦ 5♦", 0x0006, RankCategory::StraightFlush,
            "Straight Flush, Nine-high [9♦ 8♦ 7♦ 6♦ 5♦] [J♦]"),
        case("3d As Ks Qs Js Ts", 0x0001, RankCategory::StraightFlush,
            "Straight Flush, Ace-high, Royal [A♠ K♠ Q♠ J♠ T♠] [3♦]"),
    ]
}

fn seven_card_cases() -> Vec<EvalCase> {
    vec![
        case("2d 3d As Ks Jc 7h 5d", 0x186c, RankCategory::Nothing,
            "Nothing, Ace-high, kickers King, Jack, Seven, Five [A♠ K♠ J♣ 7♥ 5♦] [3♦ 2♦]"),
        case("2d 3d As Ac Jc 7h 5d", 0x0d78, RankCategory::Pair,
            "Pair, Aces, kickers Jack, Seven, Five [A♣ A♠ J♣ 7♥ 5♦] [3♦ 2♦]"),
        case("9d Jd 6s 6c 5c 5d 4d", 0x0c93, RankCategory::TwoPair,
            "Two Pair, Sixes over Fives, kicker Jack [6♣ 6♠ 5♣ 5♦ J♦] [9♦ 4♦]"),
        case("2d 3d 6s 6c Jc Jd 5d", 0x0b42, RankCategory::TwoPair,
            "Two Pair, Jacks over Sixes, kicker Five [J♣ J♦ 6♣ 6♠ 5♦] [3♦ 2♦]"),
        case("2d 3d As Ac Jc Jd 5d", 0x09c1, RankCategory::TwoPair,
            "Two Pair, Aces over Jacks, kicker Five [A♣ A♠ J♣ J♦ 5♦] [3♦ 2♦]"),
        case("2c 3d As Ac Ad Jd 5d", 0x0664, RankCategory::ThreeOfAKind,
            "Three of a Kind, Aces, kickers Jack, Five [A♣ A♦ A♠ J♦ 5♦] [3♦ 2♣]"),
        case("4s 5s 2d 3h Ac Jd Qs", 0x0649, RankCategory::Straight,
            "Straight, Five-high [5♠ 4♠ 3♥ 2♦ A♣] [Q♠ J♦]"),
        case("2d 3d 9s Ks Qd Jh Td", 0x0641, RankCategory::Straight,
            "Straight, King-high [K♠ Q♦ J♥ T♦ 9♠] [3♦ 2♦]"),
        case("2d 3d As Ks Qd Jh Td", 0x0640, RankCategory::Straight,
            "Straight, Ace-high [A♠ K♠ Q♦ J♥ T♦] [3♦ 2♦]"),
        case("2d 3d Ts 7s 4s 3s 2s", 0x0606, RankCategory::Flush,
            "Flush, Ten-high [T♠ 7♠ 4♠ 3♠ 2♠] [3♦ 2♦]"),
        case("2d 3d 4s 4c 4d 2s 2h", 0x012a, RankCategory::FullHouse,
            "Full House, Fours full of Twos [4♣ 4♦ 4♠ 2♦ 2♥] [2♠ 3♦]"),
        case("4d 3d 5s 5c 5d 6s 6h", 0x011b, RankCategory::FullHouse,
            "Full House, Fives full of Sixes [5♣ 5♦ 5♠ 6♥ 6♠] [4♦ 3♦]"),
        case("4d 3d 6s 6c 6d 5s 5h", 0x010f, RankCategory::FullHouse,
            "Full House, Sixes full of Fives [6♣ 6♦ 6♠ 5♥ 5♠] [4♦ 3♦]"),
        case("2d 3d As Ac Ad Ah 5h", 0x0013, RankCategory::FourOfAKind,
            "Four of a Kind, Aces, kicker Five [A♣ A♦ A♥ A♠ 5♥] [3♦ 2♦]"),
        case("3d 5d 2d 4d Ad 3s 4s", 0x000a, RankCategory::StraightFlush,
            "Straight Flush, Five-high, Steel Wheel [5♦ 4♦ 3♦ 2♦ A♦] [4♠ 3♠]"),
        case("J♦ T♦ 6♦ 5♦ 4♦ 3♦ 2♦", 0x0009, RankCategory::StraightFlush,
            "Straight Flush, Six-high [6♦ 5♦ 4♦ 3♦ 2♦] [J♦ T♦]"),
        case("7♦ J♦ 9♦ 6♦ 8♦ 5♦ 2♦", 0x0006, RankCategory::StraightFlush,
            "Straight Flush, Nine-high [9♦ 8♦ 7♦ 6♦ 5♦] [J♦ 2♦]"),
        case("2d 3d As Ks Qs Js Ts", 0x0001, RankCategory::StraightFlush,
            "Straight Flush, Ace-high, Royal [A♠ K♠ Q♠ J♠ T♠] [3♦ 2♦]"),
    ]
}

fn check(cases: &[EvalCase]) {
    for c in cases {
        let cards = parse_cards(c.hand).unwrap();

        // The brute-force and registry paths agree on the rank.
        assert_eq!(rank_of(rank_cactus, &cards), HandRank(c.rank), "hand {}", c.hand);
        assert_eq!(rank_standard(&cards), HandRank(c.rank), "hand {}", c.hand);
        assert_eq!(HandRank(c.rank).category(), c.category, "hand {}", c.hand);

        // Full evaluation pins description, best five and unused.
        let pocket = cards[..5].to_vec();
        let board = cards[5..].to_vec();
        let hand = Variant::Holdem.rank_hand(&pocket, &board);
        assert_eq!(hand.hi_rank(), HandRank(c.rank), "hand {}", c.hand);
        let rendered = format!("{:#} {:#}", hand, Cards(hand.hi_unused()));
        assert_eq!(rendered, c.rendered, "hand {}", c.hand);
    }
}

#[test]
fn five_card_evaluation() {
    check(&five_card_cases());
}

#[test]
fn six_card_evaluation() {
    check(&six_card_cases());
}

#[test]
fn seven_card_evaluation() {
    check(&seven_card_cases());
}

#[test]
fn n_card_rankers_accept_low_functions() {
    use cardrank_core::{rank_eight_or_better, rank_razz};

    let hand = parse_cards("Kh Qh Jh Th 9h").unwrap();
    assert_eq!(rank_of(rank_razz, &hand), HandRank(7936));

    let hand = parse_cards("9h 7h 6h 5h 4h").unwrap();
    assert_eq!(rank_of(rank_eight_or_better, &hand), HandRank(33144));
}

#[test]
fn best_five_and_unused_partition_the_hand() {
    let cards = parse_cards("2d 3d 4s 4c 4d 2s 2h").unwrap();
    let hand = Variant::Holdem.rank_hand(&cards[..2], &cards[2..]);
    let mut recombined: Vec<_> = hand
        .hi_best()
        .iter()
        .chain(hand.hi_unused())
        .copied()
        .collect();
    recombined.sort();
    let mut original = cards.clone();
    original.sort();
    assert_eq!(recombined, original);
}
