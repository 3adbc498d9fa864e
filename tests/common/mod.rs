use rand::Rng;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes a tap script with the `key` header, one label per row.
pub fn tap_file(keys: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "key")?;
    for key in keys {
        writeln!(file, "{}", key)?;
    }
    file.flush()?;
    Ok(file)
}

/// A random run of digit labels, 1 to `max_len` long.
pub fn random_digits(rng: &mut impl Rng, max_len: usize) -> Vec<String> {
    let len = rng.gen_range(1..=max_len);
    (0..len)
        .map(|_| rng.gen_range(0..=9u8).to_string())
        .collect()
}
