use models::RawAttack;
use war_score::{score, validate, Attack, PlayerLevel, RuleTables};

fn attack(enemy_th: u8, stars: u8, destruction: f64) -> Attack {
    validate(&RawAttack::new(
        f64::from(enemy_th),
        f64::from(stars),
        destruction,
    ))
    .unwrap()
}

fn player(th: u8) -> PlayerLevel {
    PlayerLevel::new(th).unwrap()
}

fn every_valid_attack() -> Vec<Attack> {
    let mut out = Vec::new();
    for enemy_th in 7..=18u8 {
        for (stars, percents) in [
            (0u8, &[0.0, 12.5, 49.0][..]),
            (1, &[0.0, 30.0, 75.0, 99.0][..]),
            (2, &[50.0, 64.0, 99.9][..]),
            (3, &[100.0][..]),
        ] {
            for &destruction in percents {
                out.push(attack(enemy_th, stars, destruction));
            }
        }
    }
    out
}

#[test]
fn known_scenarios() {
    let rules = RuleTables::STANDARD;

    let s = score(&attack(10, 2, 60.0), player(10), &rules);
    assert_eq!(format!("{s:.2}"), "64.00");

    let s = score(&attack(13, 3, 100.0), player(10), &rules);
    assert_eq!(s, 100.0);

    let s = score(&attack(9, 1, 30.0), player(12), &rules);
    assert_eq!(format!("{s:.2}"), "28.80");

    // One level up: 40 + 30 = 70, times 1.1.
    let s = score(&attack(11, 2, 75.0), player(10), &rules);
    assert!((s - 77.0).abs() < 1e-9, "got {s}");

    // Two levels up: 20 + 20 = 40, times 1.2.
    let s = score(&attack(12, 1, 50.0), player(10), &rules);
    assert!((s - 48.0).abs() < 1e-9, "got {s}");
}

#[test]
fn score_always_within_bounds() {
    let rules = RuleTables::STANDARD;
    for th in 7..=18u8 {
        for a in every_valid_attack() {
            let s = score(&a, player(th), &rules);
            assert!((0.0..=100.0).contains(&s), "{a:?} vs TH {th} scored {s}");
        }
    }
}

#[test]
fn score_non_decreasing_in_destruction() {
    let rules = RuleTables::STANDARD;
    for (stars, lo, hi) in [(0u8, 0, 49), (1, 0, 99), (2, 50, 99)] {
        for enemy_th in [8u8, 12, 16] {
            let mut prev = f64::MIN;
            for pct in lo..=hi {
                let s = score(&attack(enemy_th, stars, f64::from(pct)), player(12), &rules);
                assert!(s >= prev, "stars={stars} enemy={enemy_th} pct={pct}");
                prev = s;
            }
        }
    }
}

#[test]
fn custom_rule_tables_change_results_without_engine_changes() {
    let rules = RuleTables {
        punch_down_multiplier: 0.5,
        ..RuleTables::STANDARD
    };
    let s = score(&attack(9, 1, 30.0), player(12), &rules);
    assert!((s - 16.0).abs() < 1e-9, "got {s}");
}
