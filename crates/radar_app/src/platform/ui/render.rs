use radar_core::{AppViewModel, LanguageFilter, RepoRowView, SortMode, ViewStatus};

use super::constants::*;

/// Renders the whole screen as lines of text.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![TITLE.to_string(), controls_line(view)];
    if !view.languages.is_empty() {
        lines.push(format!("Languages: {}", view.languages.join(", ")));
    }
    lines.push(String::new());

    match &view.status {
        ViewStatus::Loading => lines.push(LOADING_TEXT.to_string()),
        ViewStatus::Error(message) => lines.push(message.clone()),
        ViewStatus::Empty => lines.push(EMPTY_TEXT.to_string()),
        ViewStatus::Loaded => {
            for row in &view.rows {
                lines.extend(format_repo_row(row));
            }
            lines.push(format!("{} of {} shown", view.rows.len(), view.total));
        }
    }
    lines
}

fn controls_line(view: &AppViewModel) -> String {
    let language = match &view.language_filter {
        LanguageFilter::All => FILTER_ALL_LABEL.to_string(),
        LanguageFilter::NoLanguage => NO_LANGUAGE_LABEL.to_string(),
        LanguageFilter::Language(name) => name.clone(),
    };
    let starred = if view.starred_only { STAR_ON } else { STAR_OFF };
    format!(
        "[Name {}]  [{}]  [Starred Only {}]",
        sort_indicator(view.sort),
        language,
        starred
    )
}

pub fn sort_indicator(sort: SortMode) -> &'static str {
    match sort {
        SortMode::Unsorted => "↕",
        SortMode::Ascending => "↓",
        SortMode::Descending => "↑",
    }
}

fn format_repo_row(row: &RepoRowView) -> Vec<String> {
    let heading = match row.language.as_deref() {
        Some(language) if !language.is_empty() => {
            format!("#{} {} ({})", row.id, row.name, language)
        }
        _ => format!("#{} {}", row.id, row.name),
    };
    let mut lines = vec![heading];
    if let Some(description) = row.description.as_deref() {
        lines.push(format!("    {description}"));
    }
    let star = if row.starred { STAR_ON } else { STAR_OFF };
    lines.push(format!(
        "    {} {}  {}",
        format_with_commas(row.stars),
        star,
        row.url
    ));
    lines
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
