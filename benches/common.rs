use fastrand::Rng;
use waymap::Record;

pub const RANDOM_SEED: u64 = 0x3a1d2f4b9c0e57;

/// Distance records over `place_count` places where every unordered pair gets
/// a road with probability `density`.
pub fn random_records(place_count: usize, density: f32, rng: &mut Rng) -> Vec<Record> {
    let mut records = Vec::new();

    for a in 0..place_count {
        for b in (a + 1)..place_count {
            if rng.f32() < density {
                records.push(Record::new(
                    format!("place-{a:04}"),
                    format!("place-{b:04}"),
                    rng.i64(1..=1_000),
                ));
            }
        }
    }

    records
}
