//! Title to path-segment conversion.

/// Characters reserved in Windows file names.
const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
/// Longest segment produced, counted in `char`s.
pub const MAX_SEGMENT_CHARS: usize = 100;

/// Turn a suite title into a single directory name.
///
/// Reserved characters become `_`, surrounding whitespace is trimmed, and the
/// result is cut to [`MAX_SEGMENT_CHARS`] characters. A segment made only of
/// dots would name the current or parent directory, so its dots become `_`.
/// Every other character, including non-ASCII text, is kept as is. Distinct
/// titles may map to the same segment.
///
/// ```
/// use casetree::clean_segment;
///
/// assert_eq!(clean_segment("A/B:C"), "A_B_C");
/// assert_eq!(clean_segment("  ログイン  "), "ログイン");
/// ```
pub fn clean_segment(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| if RESERVED_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let trimmed = replaced.trim();
    let cut = match trimmed.char_indices().nth(MAX_SEGMENT_CHARS) {
        Some((end, _)) => &trimmed[..end],
        None => trimmed,
    };
    if !cut.is_empty() && cut.chars().all(|c| c == '.') {
        return "_".repeat(cut.chars().count());
    }
    cut.to_string()
}
