//! Luhn mod N over charset indices.

/// Contribution of one symbol value at its position weight. Doubled values
/// carry over in base N: (2v) div N + (2v) mod N.
fn contribution(value: usize, doubled: bool, base: usize) -> usize {
    if doubled {
        let twice = value * 2;
        twice / base + twice % base
    } else {
        value
    }
}

/// Check value that closes `payload` so the full token sums to zero.
///
/// The rightmost payload symbol will sit next to the check symbol, so it
/// takes weight 2, alternating towards the left.
pub fn check_value(payload: &[usize], base: usize) -> usize {
    let sum: usize = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(position, &value)| contribution(value, position % 2 == 0, base))
        .sum();
    (base - sum % base) % base
}

/// Verify a full token, check symbol included. Position 0 is the rightmost
/// symbol at weight 1, weights alternate moving left. Anything shorter than
/// a one-symbol payload plus its check symbol is never valid.
pub fn verify(indices: &[usize], base: usize) -> bool {
    if indices.len() < 2 {
        return false;
    }
    let sum: usize = indices
        .iter()
        .rev()
        .enumerate()
        .map(|(position, &value)| contribution(value, position % 2 == 1, base))
        .sum();
    sum % base == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn digits(s: &str) -> Vec<usize> {
        s.chars().map(|c| c.to_digit(10).unwrap() as usize).collect()
    }

    // ========== check_value tests ==========

    #[test]
    fn test_check_value_classic_luhn() {
        // Wikipedia's worked example: payload 7992739871 closes with 3
        assert_eq!(check_value(&digits("7992739871"), 10), 3);
    }

    #[test]
    fn test_check_value_zero_payload() {
        assert_eq!(check_value(&[0], 10), 0);
        assert_eq!(check_value(&[0, 0, 0], 10), 0);
    }

    #[test]
    fn test_check_value_single_symbol() {
        // payload [8] doubled: 16 -> 1 + 6 = 7, check = 10 - 7 = 3
        assert_eq!(check_value(&[8], 10), 3);
    }

    #[test]
    fn test_check_value_base_32() {
        // payload [17, 7]: 7 doubles to 14, plus 17 = 31, check = 1
        assert_eq!(check_value(&[17, 7], 32), 1);
    }

    // ========== verify tests ==========

    #[test]
    fn test_verify_classic_luhn() {
        assert!(verify(&digits("79927398713"), 10));
    }

    #[test]
    fn test_verify_rejects_corrupted_check() {
        assert!(!verify(&digits("79927398714"), 10));
        assert!(!verify(&digits("79927398712"), 10));
    }

    #[test]
    fn test_verify_too_short() {
        assert!(!verify(&[], 10));
        assert!(!verify(&[0], 10));
        assert!(!verify(&[7], 10));
    }

    #[test]
    fn test_verify_minimum_length() {
        assert!(verify(&[0, 0], 10));
    }

    #[test]
    fn test_verify_card_numbers() {
        // Standard test card numbers, all Luhn-valid
        assert!(verify(&digits("4242424242424242"), 10));
        assert!(verify(&digits("5555555555554444"), 10));
        assert!(verify(&digits("378282246310005"), 10));
        assert!(verify(&digits("6011111111111117"), 10));
    }

    #[test]
    fn test_verify_rejects_wrong_last_digit() {
        assert!(!verify(&digits("4242424242424241"), 10));
    }

    #[test]
    fn test_verify_detects_transposition() {
        assert!(verify(&digits("4242424242424242"), 10));
        assert!(!verify(&digits("2442424242424242"), 10));
    }

    #[test]
    fn test_verify_zero_nine_transposition_blind_spot() {
        // The classic Luhn weakness: adjacent 0 and 9 swap undetected
        assert!(verify(&digits("091"), 10));
        assert!(verify(&digits("901"), 10));
    }

    #[test]
    fn test_verify_base_32_round_trip() {
        let payload = vec![17, 7];
        let check = check_value(&payload, 32);
        let mut full = payload;
        full.push(check);
        assert!(verify(&full, 32));
    }

    #[test]
    fn test_single_digit_substitution_exhaustive() {
        // Every single-position substitution over base 10 breaks the sum
        for payload in 0..10 {
            let check = check_value(&[payload], 10);
            let full = [payload, check];
            for position in 0..2 {
                for replacement in 0..10 {
                    if replacement == full[position] {
                        continue;
                    }
                    let mut corrupted = full;
                    corrupted[position] = replacement;
                    assert!(
                        !verify(&corrupted, 10),
                        "substituting {} for {} at position {} went undetected",
                        replacement,
                        full[position],
                        position
                    );
                }
            }
        }
    }

    // ========== properties ==========

    proptest! {
        #[test]
        fn prop_check_value_closes_any_payload(
            (base, payload) in (2_usize..64).prop_flat_map(|base| {
                (Just(base), prop::collection::vec(0..base, 1..32))
            }),
        ) {
            let check = check_value(&payload, base);
            prop_assert!(check < base);
            let mut full = payload;
            full.push(check);
            prop_assert!(verify(&full, base));
        }

        #[test]
        fn prop_single_substitution_detected_in_even_base(
            (base, payload, position, bump) in (1_usize..32).prop_flat_map(|half| {
                let base = half * 2;
                (
                    Just(base),
                    prop::collection::vec(0..base, 1..24),
                    any::<prop::sample::Index>(),
                    1..base,
                )
            }),
        ) {
            let check = check_value(&payload, base);
            let mut full = payload;
            full.push(check);

            let target = position.index(full.len());
            full[target] = (full[target] + bump) % base;
            prop_assert!(!verify(&full, base));
        }
    }
}
