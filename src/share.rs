const INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// X/Twitter compose link pre-filled with `text`
pub fn build_share_link(text: &str) -> String {
    format!("{INTENT_URL}?text={}", urlencoding::encode(text))
}
