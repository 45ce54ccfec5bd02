use rustc_hash::FxHashMap;

/// Returns a frequency count of the input data. Symbols that never occur in
/// the input have no entry in the map.
pub fn freqs(data: &[u8]) -> FxHashMap<u8, u64> {
    let mut freqs = FxHashMap::default();
    data.iter().for_each(|&el| *freqs.entry(el).or_insert(0) += 1);
    freqs
}
