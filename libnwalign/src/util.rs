#[cfg(test)]
#[ctor::ctor]
fn init_backtrace() {
    color_backtrace::install();
}

#[cfg(test)]
pub const DNA_ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];

/// Draw a random DNA string of the given length.
#[cfg(test)]
pub fn random_dna(rng: &mut impl rand::Rng, length: usize) -> String {
    (0..length)
        .map(|_| DNA_ALPHABET[rng.gen_range(0..DNA_ALPHABET.len())])
        .collect()
}

/// A seeded generator so that randomized tests are reproducible.
#[cfg(test)]
pub fn seeded_rng(seed: u64) -> rand_pcg::Pcg64 {
    use rand::SeedableRng;
    rand_pcg::Pcg64::seed_from_u64(seed)
}
