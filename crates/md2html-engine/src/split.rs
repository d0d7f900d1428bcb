use std::num::NonZeroUsize;

/// Splits `content` into parts of at most `max_len` characters.
///
/// Lengths are counted in `char`s. Content that fits is returned whole
/// (including empty content, as a single empty part). Longer content is cut
/// into `ceil(len / max_len)` consecutive parts of equal width, the last
/// one possibly shorter, rather than filling each part to the limit.
pub fn split_message(content: &str, max_len: NonZeroUsize) -> Vec<String> {
    let chars: Vec<char> = content.chars().collect();
    let len = chars.len();
    let max_len = max_len.get();

    if len <= max_len {
        return vec![content.to_string()];
    }

    let parts = len.div_ceil(max_len);
    let width = len.div_ceil(parts);

    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
