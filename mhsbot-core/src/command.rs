//! Slash-command parsing: `/name[@bot] arg1 arg2 ...`.

/// A parsed bot command. `name` is lower-cased and has the leading `/` and any `@bot` suffix removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Parses `text` as a command; returns None when it does not start with `/` or the name is empty.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split_whitespace();
        let head = parts.next()?.strip_prefix('/')?;
        let name = head.split('@').next().unwrap_or_default();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_lowercase(),
            args: parts.map(str::to_string).collect(),
        })
    }

    /// Returns true if the command has the given name (without `/`).
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// All arguments joined by a single space.
    pub fn args_joined(&self) -> String {
        self.args.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_command() {
        let cmd = Command::parse("/start").unwrap();
        assert_eq!(cmd.name, "start");
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_parse_command_with_args_and_mention() {
        let cmd = Command::parse("/Add@admin_bot 42   alice").unwrap();
        assert!(cmd.is("add"));
        assert_eq!(cmd.args, vec!["42", "alice"]);
        assert_eq!(cmd.first_arg(), Some("42"));
    }

    #[test]
    fn test_args_joined_collapses_whitespace() {
        let cmd = Command::parse("/cari  Ahmad   Fauzi ").unwrap();
        assert_eq!(cmd.args_joined(), "Ahmad Fauzi");
    }

    #[test]
    fn test_parse_rejects_non_commands() {
        assert!(Command::parse("hello").is_none());
        assert!(Command::parse("").is_none());
        assert!(Command::parse("/").is_none());
        assert!(Command::parse("/@bot").is_none());
    }
}
