use coinscan_challenges::coin_banks::*;
use serde_json::json;

const EXAMPLE: &str = "6 2 7\n1 2 3 6 5 4\n5 2 2\n0 1 2 3 4\n4 3 1\n3 2 5 0\n";

fn example() -> Challenge {
    Challenge::from_text(EXAMPLE).unwrap()
}

fn entry(bank_id: usize, coin_ids: &[usize]) -> ScheduleEntry {
    ScheduleEntry {
        bank_id,
        coin_ids: coin_ids.to_vec(),
    }
}

fn schedule(entries: Vec<ScheduleEntry>) -> Solution {
    Solution { entries }
}

#[test]
fn test_parse_instance() {
    let challenge = example();
    assert_eq!(challenge.num_days, 7);
    assert_eq!(challenge.coin_values, vec![1, 2, 3, 6, 5, 4]);
    assert_eq!(challenge.num_banks(), 2);
    assert_eq!(
        challenge.banks[1],
        Bank {
            activation_days: 3,
            scans_per_day: 1,
            coin_ids: vec![3, 2, 5, 0],
        }
    );
    assert_eq!(challenge.to_text(), EXAMPLE);
}

#[test]
fn test_parse_ignores_line_layout() {
    let challenge = Challenge::from_text("2 1 4 10 20\n2 1 1 1 0").unwrap();
    assert_eq!(challenge.coin_values, vec![10, 20]);
    assert_eq!(challenge.banks[0].coin_ids, vec![1, 0]);
}

#[test]
fn test_parse_rejects_malformed_instances() {
    let cases = [
        ("2 1 4\n1 1\n1 1 1\n2\n", "out of bounds"),
        ("2 1 4\n1 1\n2 1 1\n1 1\n", "twice"),
        ("2 1 4\n1 1\n1 0 1\n1\n", "activation of 0 days"),
        ("2 1 4\n1 1\n2 1 1\n1\n", "Unexpected end of input"),
        ("2 1 4\n1 1\n1 1 1\n1\n7\n", "trailing token"),
        ("2 1 4\n1 x\n1 1 1\n1\n", "not a valid coin value"),
        ("2 1 4\n1 -1\n1 1 1\n1\n", "not a valid coin value"),
        ("0 18446744073709551615 5\n", "Unexpected end of input"),
        ("0 100000000000 5\n", "Unexpected end of input"),
        ("1 1 4\n1\n18446744073709551615 1 1\n", "Unexpected end of input"),
    ];
    for (text, expected) in cases {
        let err = Challenge::from_text(text).unwrap_err().to_string();
        assert!(err.contains(expected), "{:?} gave '{}'", text, err);
    }
}

#[test]
fn test_scan_days_boundary() {
    let bank = Bank {
        activation_days: 3,
        scans_per_day: 1,
        coin_ids: vec![0],
    };
    assert_eq!(bank.scan_days_after(0, 7), Some(4));
    assert_eq!(bank.scan_days_after(3, 7), Some(1));
    // Activation finishing exactly on the last day leaves nothing to scan
    assert_eq!(bank.scan_days_after(4, 7), None);
    assert_eq!(bank.scan_days_after(6, 7), None);
    assert_eq!(bank.scan_days_after(u32::MAX, u32::MAX), None);
}

#[test]
fn test_scan_capacity_does_not_overflow() {
    let bank = Bank {
        activation_days: 1,
        scans_per_day: u32::MAX,
        coin_ids: (0..5).collect(),
    };
    assert_eq!(bank.scan_capacity(u32::MAX), 5);
    assert_eq!(bank.scan_capacity(0), 0);

    let bank = Bank {
        activation_days: 1,
        scans_per_day: 2,
        coin_ids: (0..5).collect(),
    };
    assert_eq!(bank.scan_capacity(2), 4);
}

#[test]
fn test_evaluate_total_value() {
    let challenge = example();
    let solution = schedule(vec![entry(0, &[3, 4, 2, 1, 0]), entry(1, &[5])]);
    assert_eq!(challenge.evaluate_total_value(&solution).unwrap(), 21);
    assert_eq!(challenge.evaluate_total_value(&Solution::new()).unwrap(), 0);
}

#[test]
fn test_evaluate_rejects_invalid_schedules() {
    let challenge = example();
    let cases = [
        (
            vec![entry(0, &[3]), entry(1, &[3])],
            "collected more than once",
        ),
        (
            vec![entry(0, &[3]), entry(1, &[5, 2, 0])],
            "can only scan 2",
        ),
        (vec![entry(1, &[1])], "not offered by bank (1)"),
        (
            vec![entry(0, &[3]), entry(0, &[4])],
            "scheduled more than once",
        ),
        (vec![entry(5, &[])], "Bank (5) is out of bounds"),
        (vec![entry(0, &[9])], "Coin (9) is out of bounds"),
    ];
    for (entries, expected) in cases {
        let err = challenge
            .evaluate_total_value(&schedule(entries))
            .unwrap_err()
            .to_string();
        assert!(err.contains(expected), "expected '{}', got '{}'", expected, err);
    }
}

#[test]
fn test_evaluate_rejects_late_activation() {
    let challenge = Challenge::from_text("2 2 5\n1 1\n1 2 1\n0\n1 3 1\n1\n").unwrap();
    // Bank 0 is ready on day 2; bank 1 would be ready on day 5 with no scan day left
    let solution = schedule(vec![entry(0, &[0]), entry(1, &[1])]);
    let err = challenge
        .evaluate_total_value(&solution)
        .unwrap_err()
        .to_string();
    assert!(err.contains("finishes activation on day 5"), "{}", err);
}

#[test]
fn test_simulate_total_value_is_lenient() {
    let challenge = example();
    // Coin 3 is skipped in the second entry and the entry is cut to its capacity of 2
    let solution = schedule(vec![entry(0, &[3, 4]), entry(1, &[3, 5, 2, 0])]);
    assert_eq!(challenge.simulate_total_value(&solution).unwrap(), 6 + 5 + 4 + 3);

    let valid = schedule(vec![entry(0, &[3, 4, 2, 1, 0]), entry(1, &[5])]);
    assert_eq!(
        challenge.simulate_total_value(&valid).unwrap(),
        challenge.evaluate_total_value(&valid).unwrap()
    );
}

#[test]
fn test_simulate_stops_when_days_run_out() {
    let challenge = Challenge::from_text("2 2 5\n1 1\n1 2 1\n0\n1 3 1\n1\n").unwrap();
    let solution = schedule(vec![entry(0, &[0]), entry(1, &[1])]);
    assert_eq!(challenge.simulate_total_value(&solution).unwrap(), 1);
}

#[test]
fn test_solution_text_format() {
    let solution = schedule(vec![entry(2, &[5, 1, 0]), entry(0, &[4])]);
    let text = solution.to_text();
    assert_eq!(text, "2\n2 3\n5 1 0\n0 1\n4\n");
    assert_eq!(Solution::from_text(&text).unwrap(), solution);
    assert_eq!(Solution::from_text("0\n").unwrap(), Solution::new());
    assert!(Solution::from_text("1\n0 2\n4\n").is_err());
}

#[test]
fn test_solution_text_with_huge_counts() {
    for text in ["18446744073709551615\n", "1\n0 18446744073709551615\n3\n"] {
        let err = Solution::from_text(text).unwrap_err().to_string();
        assert!(err.contains("Unexpected end of input"), "{:?} gave '{}'", text, err);
    }
}

#[test]
fn test_solution_from_json_map() {
    let value = json!({
        "entries": [{ "bank_id": 1, "coin_ids": [5] }]
    });
    let map = value.as_object().unwrap().clone();
    let solution = Solution::try_from(map).unwrap();
    assert_eq!(solution, schedule(vec![entry(1, &[5])]));
    assert_eq!(solution.num_collected(), 1);
}

#[test]
fn test_generate_instance_is_reproducible() {
    let difficulty = Difficulty {
        num_coins: 200,
        num_banks: 30,
        num_days: 50,
    };
    let a = Challenge::generate_instance(&[7; 32], &difficulty).unwrap();
    let b = Challenge::generate_instance(&[7; 32], &difficulty).unwrap();
    let c = Challenge::generate_instance(&[8; 32], &difficulty).unwrap();

    assert_eq!(a.to_text(), b.to_text());
    assert_ne!(a.to_text(), c.to_text());
    assert_eq!(a.num_coins(), 200);
    assert_eq!(a.num_banks(), 30);
    assert!(a.validate().is_ok());
    assert!(a.coin_values.iter().all(|&v| (1..=1000).contains(&v)));
    for bank in &a.banks {
        assert!((1..=5).contains(&bank.activation_days));
        assert!((1..=10).contains(&bank.scans_per_day));
        assert!((1..=100).contains(&bank.coin_ids.len()));
    }
}

#[test]
fn test_generate_instance_without_coins() {
    let difficulty = Difficulty {
        num_coins: 0,
        num_banks: 3,
        num_days: 4,
    };
    let challenge = Challenge::generate_instance(&[0; 32], &difficulty).unwrap();
    assert!(challenge.banks.iter().all(|b| b.coin_ids.is_empty()));
}
