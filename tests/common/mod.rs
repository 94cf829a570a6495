use rand::Rng;

/// Flips the case of each letter of `s` at random.
pub fn random_case<R: Rng>(s: &str, rng: &mut R) -> String {
    s.chars()
        .flat_map(|c| {
            if rng.gen_bool(0.5) {
                c.to_uppercase().collect::<Vec<_>>()
            } else {
                c.to_lowercase().collect::<Vec<_>>()
            }
        })
        .collect()
}
