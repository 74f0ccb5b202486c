//! Presentation-only labels.
//!
//! Filtering never compares against these strings; they exist so the
//! display language can change without touching facet identity.

use serde::{Deserialize, Serialize};

use super::search::normalize_query;
use crate::domain::{ContentType, Difficulty, FilterState};

/// Display language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl std::str::FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Locale::En),
            "zh" | "zh-cn" | "chinese" => Ok(Locale::Zh),
            _ => anyhow::bail!("Unknown locale: {}", s),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Zh => write!(f, "zh"),
        }
    }
}

/// Sidebar/heading label for a content type
pub fn type_label(content_type: ContentType, locale: Locale) -> &'static str {
    match (locale, content_type) {
        (Locale::En, ContentType::Article) => "Articles",
        (Locale::En, ContentType::Podcast) => "Podcasts",
        (Locale::En, ContentType::Video) => "Videos",
        (Locale::Zh, ContentType::Article) => "文章",
        (Locale::Zh, ContentType::Podcast) => "播客",
        (Locale::Zh, ContentType::Video) => "视频",
    }
}

/// Badge label for a single item's content type
pub fn badge_label(content_type: ContentType, locale: Locale) -> &'static str {
    match locale {
        Locale::En => content_type.symbol(),
        Locale::Zh => type_label(content_type, locale),
    }
}

/// Label for a difficulty level
pub fn difficulty_label(difficulty: Difficulty, locale: Locale) -> &'static str {
    match (locale, difficulty) {
        (Locale::En, Difficulty::Beginner) => "Beginner",
        (Locale::En, Difficulty::Intermediate) => "Intermediate",
        (Locale::En, Difficulty::Advanced) => "Advanced",
        (Locale::Zh, Difficulty::Beginner) => "初级",
        (Locale::Zh, Difficulty::Intermediate) => "进阶",
        (Locale::Zh, Difficulty::Advanced) => "高级",
    }
}

/// Label for the unfiltered catalog
pub fn all_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "All Content",
        Locale::Zh => "全部内容",
    }
}

/// Heading of the browse view.
///
/// "Search Results" while a query is active, otherwise the category label
/// followed by " · <difficulty>" when a difficulty is selected.
pub fn view_heading(state: &FilterState, query: &str, locale: Locale) -> String {
    if normalize_query(query).is_some() {
        return match locale {
            Locale::En => "Search Results".to_string(),
            Locale::Zh => "搜索结果".to_string(),
        };
    }

    let type_text = state
        .content_type
        .map_or_else(|| all_label(locale), |ct| type_label(ct, locale));

    match state.difficulty {
        Some(d) => format!("{} · {}", type_text, difficulty_label(d, locale)),
        None => type_text.to_string(),
    }
}

/// One-line summary under the heading ("3 items found for \"gpt\"")
pub fn result_summary(count: usize, query: &str, locale: Locale) -> String {
    let query = query.trim();
    match (locale, query.is_empty()) {
        (Locale::En, true) => format!("{} items found", count),
        (Locale::En, false) => format!("{} items found for \"{}\"", count, query),
        (Locale::Zh, true) => format!("找到 {} 条内容", count),
        (Locale::Zh, false) => format!("找到 {} 条与“{}”相关的内容", count, query),
    }
}

/// First `limit` tags plus a "+k" marker for the rest
pub fn tag_preview(tags: &[String], limit: usize) -> Vec<String> {
    let mut preview: Vec<String> = tags.iter().take(limit).cloned().collect();
    if tags.len() > limit {
        preview.push(format!("+{}", tags.len() - limit));
    }
    preview
}
