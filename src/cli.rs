use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "smed",
    version,
    about = "List, view, create and edit AWS Secrets Manager secrets in your editor"
)]
pub struct Cli {
    /// Create each named secret, starting from `{}` in the editor
    #[arg(short = 'c')]
    pub create: bool,

    /// List secret names, optionally filtered by the given terms
    #[arg(short = 'l')]
    pub list: bool,

    /// Print the values of the named secrets as indented JSON
    #[arg(short = 'v')]
    pub view: bool,

    /// AWS profile to use instead of the default chain
    #[arg(long)]
    pub profile: Option<String>,

    /// AWS region to use instead of the default chain
    #[arg(long)]
    pub region: Option<String>,

    /// Secret name to edit, or names/filters for -c, -l and -v
    pub args: Vec<String>,
}

/// The action selected by the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit { name: String },
    Create { names: Vec<String> },
    List { filters: Vec<String> },
    View { names: Vec<String> },
    Usage,
}

impl Cli {
    /// Resolve flags and arguments into a single command.
    ///
    /// Flags are mutually exclusive; combining them yields [`Command::Usage`]
    /// rather than letting one silently win.
    pub fn command(&self) -> Command {
        let flags = [self.create, self.list, self.view]
            .iter()
            .filter(|set| **set)
            .count();
        if flags > 1 {
            return Command::Usage;
        }

        let args = self.args.clone();
        match (self.create, self.list, self.view) {
            (true, _, _) if !args.is_empty() => Command::Create { names: args },
            (_, true, _) => Command::List { filters: args },
            (_, _, true) if !args.is_empty() => Command::View { names: args },
            (false, false, false) if args.len() == 1 => Command::Edit {
                name: args.into_iter().next().unwrap_or_default(),
            },
            _ => Command::Usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(argv: &[&str]) -> Command {
        let mut full = vec!["smed"];
        full.extend_from_slice(argv);
        Cli::try_parse_from(full).unwrap().command()
    }

    #[test]
    fn test_single_name_edits() {
        assert_eq!(
            resolve(&["prod/db"]),
            Command::Edit {
                name: "prod/db".to_string()
            }
        );
    }

    #[test]
    fn test_create_many() {
        assert_eq!(
            resolve(&["-c", "x", "y"]),
            Command::Create {
                names: vec!["x".to_string(), "y".to_string()]
            }
        );
    }

    #[test]
    fn test_list_with_and_without_filters() {
        assert_eq!(resolve(&["-l"]), Command::List { filters: vec![] });
        assert_eq!(
            resolve(&["-l", "prod"]),
            Command::List {
                filters: vec!["prod".to_string()]
            }
        );
    }

    #[test]
    fn test_view_many() {
        assert_eq!(
            resolve(&["-v", "a", "b"]),
            Command::View {
                names: vec!["a".to_string(), "b".to_string()]
            }
        );
    }

    #[test]
    fn test_usage_cases() {
        assert_eq!(resolve(&[]), Command::Usage);
        assert_eq!(resolve(&["a", "b"]), Command::Usage);
        assert_eq!(resolve(&["-c"]), Command::Usage);
        assert_eq!(resolve(&["-v"]), Command::Usage);
        assert_eq!(resolve(&["-c", "-l", "x"]), Command::Usage);
        assert_eq!(resolve(&["-lv", "x"]), Command::Usage);
    }

    #[test]
    fn test_connection_overrides() {
        let cli = Cli::try_parse_from(["smed", "--region", "eu-west-1", "-l"]).unwrap();
        assert_eq!(cli.region.as_deref(), Some("eu-west-1"));
        assert_eq!(cli.profile, None);
        assert_eq!(cli.command(), Command::List { filters: vec![] });
    }
}
