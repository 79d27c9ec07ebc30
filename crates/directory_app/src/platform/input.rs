use directory_core::{Msg, SortKey, User};

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  <enter> | more     load the next page (end of list)
  /<text>            search names; `/` alone clears the search
  sort name|email|none
  <n> | open <n>     open entry n of the list
  back               close the detail view
  retry              reload after a failure
  help               show this help
  quit";

/// Parses `line` against the currently displayed `records`.
pub fn parse_command(line: &str, records: &[User]) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(text) = line.strip_prefix('/') {
        return Command::Dispatch(Msg::SearchTextChanged(text.to_string()));
    }

    let trimmed = line.trim();
    let mut words = trimmed.split_whitespace();
    let head = words.next().unwrap_or("").to_ascii_lowercase();
    let arg = words.next();

    match head.as_str() {
        "" | "more" | "m" => Command::Dispatch(Msg::ScrollEndReached),
        "sort" | "s" => match arg.map(str::to_ascii_lowercase).as_deref() {
            Some("name") => Command::Dispatch(Msg::SortPressed(SortKey::Name)),
            Some("email") => Command::Dispatch(Msg::SortPressed(SortKey::Email)),
            Some("none") | None => Command::Dispatch(Msg::SortPressed(SortKey::None)),
            Some(_) => Command::Unknown(trimmed.to_string()),
        },
        "open" | "o" => open(arg, records, trimmed),
        "back" | "b" => Command::Dispatch(Msg::BackPressed),
        "retry" | "r" => Command::Dispatch(Msg::RetryClicked),
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ if head.chars().all(|c| c.is_ascii_digit()) => open(Some(head.as_str()), records, trimmed),
        _ => Command::Unknown(trimmed.to_string()),
    }
}

fn open(arg: Option<&str>, records: &[User], raw: &str) -> Command {
    arg.and_then(|n| n.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| records.get(idx))
        .map(|user| Command::Dispatch(Msg::ItemSelected(user.id)))
        .unwrap_or_else(|| Command::Unknown(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory_core::{Address, Company};

    fn records() -> Vec<User> {
        [(7, "Ann"), (3, "Bob")]
            .into_iter()
            .map(|(id, name)| User {
                id,
                name: name.to_string(),
                email: String::new(),
                address: Address {
                    street: String::new(),
                    city: String::new(),
                    zipcode: String::new(),
                },
                company: Company {
                    name: String::new(),
                },
            })
            .collect()
    }

    #[test]
    fn empty_line_requests_next_page() {
        assert_eq!(
            parse_command("\n", &[]),
            Command::Dispatch(Msg::ScrollEndReached)
        );
    }

    #[test]
    fn slash_prefix_searches_verbatim() {
        assert_eq!(
            parse_command("/john d", &[]),
            Command::Dispatch(Msg::SearchTextChanged("john d".to_string()))
        );
        assert_eq!(
            parse_command("/", &[]),
            Command::Dispatch(Msg::SearchTextChanged(String::new()))
        );
    }

    #[test]
    fn sort_keys_parse() {
        assert_eq!(
            parse_command("sort Email", &[]),
            Command::Dispatch(Msg::SortPressed(SortKey::Email))
        );
        assert_eq!(
            parse_command("sort", &[]),
            Command::Dispatch(Msg::SortPressed(SortKey::None))
        );
        assert_eq!(
            parse_command("sort age", &[]),
            Command::Unknown("sort age".to_string())
        );
    }

    #[test]
    fn open_maps_display_position_to_id() {
        let records = records();
        assert_eq!(
            parse_command("2", &records),
            Command::Dispatch(Msg::ItemSelected(3))
        );
        assert_eq!(
            parse_command("open 1", &records),
            Command::Dispatch(Msg::ItemSelected(7))
        );
        assert_eq!(
            parse_command("open 3", &records),
            Command::Unknown("open 3".to_string())
        );
        assert_eq!(parse_command("0", &records), Command::Unknown("0".to_string()));
    }

    #[test]
    fn control_words() {
        assert_eq!(parse_command("q", &[]), Command::Quit);
        assert_eq!(parse_command("help", &[]), Command::Help);
        assert_eq!(
            parse_command("retry", &[]),
            Command::Dispatch(Msg::RetryClicked)
        );
        assert_eq!(
            parse_command("back", &[]),
            Command::Dispatch(Msg::BackPressed)
        );
    }
}
