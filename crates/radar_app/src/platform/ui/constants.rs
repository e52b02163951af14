pub const TITLE: &str = "Popular Github Repositories";
pub const LOADING_TEXT: &str = "Loading Repos...";
pub const EMPTY_TEXT: &str = "No Repos found :(";
pub const FILTER_ALL_LABEL: &str = "Filter by language:";
pub const NO_LANGUAGE_LABEL: &str = "No Language";
pub const STAR_ON: &str = "★";
pub const STAR_OFF: &str = "☆";
pub const PROMPT: &str = "> ";

pub const HELP_LINES: &[&str] = &[
    "Commands:",
    "  sort          cycle name sort (none, ascending, descending)",
    "  lang <name>   show only repositories in <name> (exact match)",
    "  lang none     show only repositories without a language",
    "  lang all      clear the language filter",
    "  starred       toggle starred-only",
    "  star <id>     star or unstar a repository",
    "  help          show this help",
    "  quit          exit",
];
