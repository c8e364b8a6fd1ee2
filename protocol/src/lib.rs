use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://jservice.io";

/// How many categories are requested to form the pool the board is drawn from.
pub const CATEGORY_POOL_SIZE: u32 = 100;

/// Entry of `GET /api/categories`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub clues_count: u32,
}

/// Body of `GET /api/category?id=<id>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub clues_count: u32,
    #[serde(default)]
    pub clues: Vec<ApiClue>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiClue {
    pub id: u64,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub value: Option<u32>,
    #[serde(default)]
    pub invalid_count: Option<u32>,
}

impl ApiClue {
    pub fn question_text(&self) -> String {
        plain_text(self.question.as_deref().unwrap_or_default())
    }

    pub fn answer_text(&self) -> String {
        plain_text(self.answer.as_deref().unwrap_or_default())
    }

    /// Whether the clue has both texts and was not reported as broken.
    pub fn is_playable(&self) -> bool {
        self.invalid_count.unwrap_or(0) == 0
            && !self.question_text().is_empty()
            && !self.answer_text().is_empty()
    }
}

pub fn categories_url(base: &str, count: u32) -> String {
    format!("{}/api/categories?count={}", base.trim_end_matches('/'), count)
}

pub fn category_url(base: &str, id: u64) -> String {
    format!("{}/api/category?id={}", base.trim_end_matches('/'), id)
}

const ENTITIES: &[(&str, char)] = &[
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
    ("&apos;", '\''),
];

/// Turns API text into display text: `<i>Hamlet</i>` becomes `Hamlet`,
/// `R&amp;B` becomes `R&B` and `\'` becomes `'`.
///
/// Only `<` followed by a letter or `/` opens a tag, so comparisons in clue
/// text survive. Backslashes are dropped only in front of a quote.
pub fn plain_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(ch) = rest.chars().next() {
        let tail = &rest[ch.len_utf8()..];
        match ch {
            '<' if opens_tag(tail) => {
                if let Some(end) = tail.find('>') {
                    rest = &tail[end + 1..];
                    continue;
                }
                out.push(ch);
            }
            '&' => match ENTITIES.iter().find(|(name, _)| rest.starts_with(name)) {
                Some((name, decoded)) => {
                    out.push(*decoded);
                    rest = &rest[name.len()..];
                    continue;
                }
                None => out.push(ch),
            },
            '\\' if tail.starts_with(['\'', '"']) => {}
            _ => out.push(ch),
        }
        rest = tail;
    }
    out.trim().to_string()
}

fn opens_tag(tail: &str) -> bool {
    tail.starts_with(|c: char| c.is_ascii_alphabetic() || c == '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_category_list() {
        let json = r#"[
            {"id": 11531, "title": "mixed bag", "clues_count": 5},
            {"id": 11532, "title": "let's \"ch\"at"}
        ]"#;

        let list: Vec<CategorySummary> = serde_json::from_str(json).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, 11531);
        assert_eq!(list[1].title, "let's \"ch\"at");
        assert_eq!(list[1].clues_count, 0);
    }

    #[test]
    fn decodes_category_detail_with_null_fields() {
        let json = r#"{
            "id": 21,
            "title": "wine",
            "clues_count": 2,
            "clues": [
                {"id": 1, "question": "Italian for 'bubbly'", "answer": "<i>spumante</i>", "value": 200, "invalid_count": null},
                {"id": 2, "question": "", "answer": "Chianti", "value": null, "invalid_count": 1}
            ]
        }"#;

        let detail: CategoryDetail = serde_json::from_str(json).unwrap();

        assert_eq!(detail.clues.len(), 2);
        assert_eq!(detail.clues[0].answer_text(), "spumante");
        assert!(detail.clues[0].is_playable());
        assert!(!detail.clues[1].is_playable());
    }

    #[test]
    fn plain_text_drops_markup_and_escapes() {
        assert_eq!(plain_text("<i>Hamlet</i>"), "Hamlet");
        assert_eq!(plain_text("Shakespeare\\'s play "), "Shakespeare's play");
        assert_eq!(plain_text("<br />"), "");
        assert_eq!(plain_text("<a href=\"x\">link</a> text"), "link text");
    }

    #[test]
    fn plain_text_keeps_comparisons() {
        assert_eq!(
            plain_text("If x < 5 and y > 2, the sum is at most this"),
            "If x < 5 and y > 2, the sum is at most this"
        );
        assert_eq!(plain_text("a <b"), "a <b");
        assert_eq!(plain_text("1<2"), "1<2");
    }

    #[test]
    fn plain_text_decodes_common_entities() {
        assert_eq!(plain_text("R&amp;B hits"), "R&B hits");
        assert_eq!(plain_text("&lt;i&gt; stays literal"), "<i> stays literal");
        assert_eq!(plain_text("&quot;Hi&quot; &#39;there&apos;"), "\"Hi\" 'there'");
        assert_eq!(plain_text("AT&T & co"), "AT&T & co");
    }

    #[test]
    fn plain_text_keeps_backslashes_not_escaping_quotes() {
        assert_eq!(plain_text("C:\\Windows"), "C:\\Windows");
        assert_eq!(plain_text("say \\\"cheese\\\""), "say \"cheese\"");
    }

    #[test]
    fn urls_tolerate_trailing_slash() {
        assert_eq!(
            categories_url("https://jservice.io/", CATEGORY_POOL_SIZE),
            "https://jservice.io/api/categories?count=100"
        );
        assert_eq!(
            category_url(DEFAULT_API_BASE, 42),
            "https://jservice.io/api/category?id=42"
        );
    }
}
