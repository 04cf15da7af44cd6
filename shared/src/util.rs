/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random lowercase base-36 string of `len` characters.
///
/// Seven characters give 36^7 (about 2^36) values, used as the
/// collision-avoiding suffix of uploaded image names.
pub fn random_base36(len: usize) -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_base36_has_requested_length_and_alphabet() {
        let s = random_base36(7);
        assert_eq!(s.len(), 7);
        assert!(s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn random_base36_differs_between_calls() {
        let a = random_base36(7);
        let b = random_base36(7);
        let c = random_base36(7);
        // three identical draws out of 36^7 would mean a broken generator
        assert!(!(a == b && b == c));
    }
}
