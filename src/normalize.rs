use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use crate::charset::Charset;
use crate::codec::MIN_TOKEN_SIZE;

/// Fitzpatrick skin-tone modifier codepoints.
pub(crate) const fn is_skin_tone(c: char) -> bool {
    matches!(c, '\u{1F3FB}'..='\u{1F3FF}')
}

/// Drop skin-tone modifiers from one grapheme cluster, borrowing when there
/// is nothing to drop. Other modifiers, like variation selectors, pass
/// through untouched.
pub(crate) fn strip_skin_tones(cluster: &str) -> Cow<'_, str> {
    if cluster.chars().any(is_skin_tone) {
        Cow::Owned(cluster.chars().filter(|&c| !is_skin_tone(c)).collect())
    } else {
        Cow::Borrowed(cluster)
    }
}

/// Reduce candidate input to a sequence of charset indices.
///
/// The input is uppercased, split into extended grapheme clusters, optionally
/// stripped of skin tones, and run through one alias-resolution step. Clusters
/// that still are not in the alphabet are dropped without complaint, which is
/// what lets a token survive surrounding whitespace, separators, and stray
/// punctuation. Returns `None` when fewer than two indices remain, since no
/// token that short can carry a check symbol.
pub fn normalize(input: &str, charset: &Charset) -> Option<Vec<usize>> {
    let folded = input.to_uppercase();
    let mut indices = Vec::new();

    for cluster in folded.graphemes(true) {
        let cluster = if charset.strips_skin_tones() {
            strip_skin_tones(cluster)
        } else {
            Cow::Borrowed(cluster)
        };
        if let Some(index) = charset.index_of(charset.resolve(&cluster)) {
            indices.push(index);
        }
    }

    (indices.len() >= MIN_TOKEN_SIZE).then_some(indices)
}
