use radar_core::{LanguageFilter, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Unknown(String),
}

/// Parses one line of user input. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "sort" | "s" => Command::Dispatch(Msg::SortClicked),
        "starred" | "o" => Command::Dispatch(Msg::StarredOnlyToggled),
        "lang" | "l" => Command::Dispatch(Msg::LanguageSelected(parse_language(rest))),
        "star" | "t" => match rest.parse() {
            Ok(id) => Command::Dispatch(Msg::StarToggled(id)),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Some(command)
}

fn parse_language(arg: &str) -> LanguageFilter {
    match arg {
        "" | "all" => LanguageFilter::All,
        "none" => LanguageFilter::NoLanguage,
        name => LanguageFilter::Language(name.to_string()),
    }
}
