use crate::fetch::{EMOTE_ASSET_PREFIX, EMPTY_ASSETS_MARKER};

/// Derives human-readable tags from an emote icon path.
///
/// The known asset root is stripped, the path is split into segments, the
/// trailing filename (anything containing `.png`) is dropped, and each
/// surviving segment becomes one space-joined tag of its word tokens.
/// Total over arbitrary input; the empty string and the empty-assets
/// marker yield no tags.
#[must_use]
pub fn derive_tags(icon_path: &str) -> Vec<String> {
    if icon_path.is_empty() || icon_path == EMPTY_ASSETS_MARKER {
        return Vec::new();
    }

    let trimmed = icon_path.strip_prefix(EMOTE_ASSET_PREFIX).unwrap_or(icon_path);

    trimmed
        .split('/')
        .filter(|segment| !segment.contains(".png"))
        .map(tokenize_segment)
        .collect()
}

/// Removes underscores, then splits the segment at word boundaries and
/// rejoins the tokens with single spaces (`AhriHeartEmote` becomes
/// `Ahri Heart Emote`).
fn tokenize_segment(segment: &str) -> String {
    let cleaned: String = segment.chars().filter(|c| *c != '_').collect();
    let chars: Vec<char> = cleaned.chars().collect();

    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    for (index, &c) in chars.iter().enumerate() {
        if index > 0 && is_boundary(&chars, index) {
            tokens.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens.join(" ")
}

/// True when a token boundary sits immediately before `index`:
/// an acronym ending (`AB|c`), a camelCase step (`a|B`), or a letter
/// running into a non-letter (`a|1`). Letter classes are ASCII.
fn is_boundary(chars: &[char], index: usize) -> bool {
    let prev = chars[index - 1];
    let cur = chars[index];

    if prev.is_ascii_uppercase()
        && cur.is_ascii_uppercase()
        && chars
            .get(index + 1)
            .is_some_and(|next| next.is_ascii_lowercase())
    {
        return true;
    }

    if !prev.is_ascii_uppercase() && cur.is_ascii_uppercase() {
        return true;
    }

    prev.is_ascii_alphabetic() && !cur.is_ascii_alphabetic()
}

#[cfg(test)]
mod tests {
    use super::derive_tags;
    use crate::fetch::EMPTY_ASSETS_MARKER;

    #[test]
    fn empty_assets_marker_yields_no_tags() {
        assert!(derive_tags(EMPTY_ASSETS_MARKER).is_empty());
    }

    #[test]
    fn empty_icon_path_yields_no_tags() {
        assert_eq!(derive_tags(""), Vec::<String>::new());
    }

    #[test]
    fn camel_case_segments_split_into_words() {
        let tags = derive_tags("SummonerEmotes");
        assert_eq!(tags, vec!["Summoner Emotes".to_string()]);
    }

    #[test]
    fn underscores_are_removed_before_splitting() {
        let tags = derive_tags("T1_Default");
        assert_eq!(tags, vec!["T 1 Default".to_string()]);
    }

    #[test]
    fn acronym_keeps_trailing_capital_with_next_word() {
        let tags = derive_tags("OKButton");
        assert_eq!(tags, vec!["OK Button".to_string()]);
    }

    #[test]
    fn asset_root_is_stripped_and_filename_dropped() {
        let tags =
            derive_tags("/lol-game-data/assets/ASSETS/Loadouts/SummonerEmotes/Ahri/Default.png");
        assert_eq!(tags, vec!["Ahri".to_string()]);
    }

    #[test]
    fn nested_directories_become_one_tag_each() {
        let tags = derive_tags(
            "/lol-game-data/assets/ASSETS/Loadouts/SummonerEmotes/Worlds2023/TeamSpirit/Emote_01.png",
        );
        assert_eq!(
            tags,
            vec!["Worlds 2023".to_string(), "Team Spirit".to_string()]
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let path = "/lol-game-data/assets/ASSETS/Loadouts/SummonerEmotes/StarGuardian/Ahri_01.png";
        assert_eq!(derive_tags(path), derive_tags(path));
    }

    #[test]
    fn unexpected_characters_do_not_panic() {
        let tags = derive_tags("日本語/éàç//Mixed日本Case");
        assert_eq!(tags.len(), 4);
        assert_eq!(tags[1], "éàç");
        assert_eq!(tags[2], "");
    }
}
