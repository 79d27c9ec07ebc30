use directory_core::{DetailsView, ListBody, ListViewModel, LoadState, SortKey};

pub fn render(view: &ListViewModel) -> Vec<String> {
    if let Some(details) = &view.details {
        return render_details(details);
    }

    let sort_label = match view.sort_key {
        SortKey::None => "arrival",
        SortKey::Name => "name",
        SortKey::Email => "email",
    };
    let mut header = format!(
        "User Directory | Loaded: {} | Sort: {}",
        view.total_loaded, sort_label
    );
    if !view.search_text.is_empty() {
        header.push_str(&format!(" | Search: \"{}\"", view.search_text));
    }

    let mut lines = vec![header];
    match &view.body {
        ListBody::Loading => lines.push("Loading users...".to_string()),
        ListBody::Failed(message) => {
            lines.push(format!("Failed to load users: {message}"));
            lines.push("Type `retry` to try again.".to_string());
        }
        ListBody::Empty => {
            lines.push("No users found".to_string());
            if let LoadState::Error(message) = &view.load_state {
                lines.push(format!("Could not load more: {message} (`retry` reloads)"));
            }
        }
        ListBody::Records { trailing_indicator } => {
            let width = view.records.len().to_string().len();
            for (pos, user) in view.records.iter().enumerate() {
                lines.push(format!(
                    "{:>width$}. {} <{}>",
                    pos + 1,
                    user.name,
                    user.email
                ));
            }
            if *trailing_indicator {
                lines.push("Loading more...".to_string());
            } else if let LoadState::Error(message) = &view.load_state {
                lines.push(format!("Could not load more: {message} (`retry` reloads)"));
            } else if view.end_of_data {
                lines.push("(end of list)".to_string());
            }
        }
    }
    lines
}

fn render_details(details: &DetailsView) -> Vec<String> {
    vec![
        details.title.clone(),
        format!("Name:    {}", details.name),
        format!("Email:   {}", details.email),
        format!("Address: {}", details.address),
        format!("Company: {}", details.company),
        "Type `back` to return to the list.".to_string(),
    ]
}
