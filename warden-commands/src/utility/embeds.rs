use crate::CommandMeta;

/// Field heading used by `/help` for each command category.
pub fn category_heading(category: &str) -> String {
    match category {
        "moderation" => "🔨 Moderation Commands".to_owned(),
        "channels" => "🔒 Channel Management".to_owned(),
        "information" => "📊 Information Commands".to_owned(),
        "utility" => "💤 Utility Commands".to_owned(),
        other => display_category(other),
    }
}

/// Group commands into one `(heading, lines)` pair per category, keeping
/// the order categories first appear in.
pub fn grouped_help_fields(commands: &[CommandMeta]) -> Vec<(String, String)> {
    let mut groups: Vec<(&str, Vec<String>)> = Vec::new();

    for command in commands {
        let line = format!("`/{}` - {}", command.name, command.desc);
        match groups
            .iter_mut()
            .find(|(category, _)| *category == command.category)
        {
            Some((_, lines)) => lines.push(line),
            None => groups.push((command.category, vec![line])),
        }
    }

    groups
        .into_iter()
        .map(|(category, lines)| (category_heading(category), lines.join("\n")))
        .collect()
}

fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{category_heading, grouped_help_fields};
    use crate::{COMMANDS, CommandMeta};

    #[test]
    fn every_command_appears_once() {
        let fields = grouped_help_fields(COMMANDS);
        let listed: usize = fields.iter().map(|(_, lines)| lines.lines().count()).sum();

        assert_eq!(listed, COMMANDS.len());
        assert_eq!(fields[0].0, "🔨 Moderation Commands");
    }

    #[test]
    fn groups_follow_first_appearance() {
        let commands = [
            CommandMeta {
                name: "b",
                desc: "second",
                category: "zeta",
                usage: "!b",
            },
            CommandMeta {
                name: "a",
                desc: "first",
                category: "alpha",
                usage: "!a",
            },
            CommandMeta {
                name: "c",
                desc: "third",
                category: "zeta",
                usage: "!c",
            },
        ];

        let fields = grouped_help_fields(&commands);
        assert_eq!(
            fields,
            vec![
                ("Zeta".to_owned(), "`/b` - second\n`/c` - third".to_owned()),
                ("Alpha".to_owned(), "`/a` - first".to_owned()),
            ]
        );
    }

    #[test]
    fn known_categories_have_headings() {
        assert_eq!(category_heading("channels"), "🔒 Channel Management");
        assert_eq!(category_heading("utility"), "💤 Utility Commands");
    }
}
