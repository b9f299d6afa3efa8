/// Returns a frequency count of the input data, one entry per byte value.
pub fn freqs(data: &[u8]) -> Vec<usize> {
    let mut freqs = vec![0_usize; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}
