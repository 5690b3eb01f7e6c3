use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cartz")]
#[command(about = "A single-screen shopping list for the command line", long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}

/// One line of session input, parsed REPL-style (no binary name).
#[derive(Parser, Debug)]
#[command(name = "cartz", no_binary_name = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Add an item to the list
    #[command(alias = "a")]
    Add {
        /// Item name (quote it to include spaces)
        name: String,

        /// Quantity (whole number, 0 or more)
        quantity: String,
    },

    /// Edit an item: prompts for name and quantity, blank keeps current
    #[command(alias = "e")]
    Edit {
        /// Id of the item (first column of `ls`)
        id: u32,
    },

    /// Remove an item from the list
    #[command(alias = "rm")]
    Remove {
        /// Id of the item
        id: u32,
    },

    /// Show the list
    #[command(alias = "ls")]
    List {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// End the session
    #[command(aliases = ["q", "exit"])]
    Quit,
}

/// Splits a session line into tokens, honoring single and double quotes
/// so item names can contain spaces. A quoted empty string is kept as a
/// token; an unclosed quote runs to the end of the line.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut has_token = false;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    has_token = true;
                }
                c if c.is_whitespace() => {
                    if has_token {
                        tokens.push(std::mem::take(&mut current));
                        has_token = false;
                    }
                }
                c => {
                    current.push(c);
                    has_token = true;
                }
            },
        }
    }
    if has_token {
        tokens.push(current);
    }

    tokens
}
