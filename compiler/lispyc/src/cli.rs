//! Command-line parsing.
//!
//! `lispy [FILE...] [-e EXPR]... [-q]`

/// What the user asked the driver to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
    Version,
}

/// Settings for a normal run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Source files, loaded in order before anything else.
    pub files: Vec<String>,
    /// `-e` expressions, each evaluated as one line and printed.
    pub exprs: Vec<String>,
    /// `-q`: do not start the REPL.
    pub quiet: bool,
}

impl Options {
    /// The REPL runs only when nothing else was asked of the driver.
    pub fn wants_repl(&self) -> bool {
        !self.quiet && self.exprs.is_empty()
    }
}

/// A command line that could not be understood.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("option '{0}' requires an argument")]
    MissingValue(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

/// Parse the arguments after the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, UsageError> {
    let mut options = Options::default();
    let mut args = args.iter().map(AsRef::as_ref);

    while let Some(arg) = args.next() {
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-q" | "--quiet" => options.quiet = true,
            "-e" | "--eval" => {
                let Some(expr) = args.next() else {
                    return Err(UsageError::MissingValue(arg.to_string()));
                };
                options.exprs.push(expr.to_string());
            }
            // A lone `-` is not an option; treat it as a file name.
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(UsageError::UnknownOption(arg.to_string()));
            }
            _ => options.files.push(arg.to_string()),
        }
    }

    Ok(Command::Run(options))
}

pub fn print_usage() {
    println!("Lispy {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: lispy [FILE...] [-e EXPR]... [-q]");
    println!();
    println!("Options:");
    println!("  -e, --eval <EXPR>   Evaluate EXPR and print the result");
    println!("  -q, --quiet         Do not start the REPL");
    println!("  -h, --help          Print this message");
    println!("  -V, --version       Print the version");
    println!();
    println!("Files are loaded in order, then each EXPR is evaluated.");
    println!("The REPL starts when neither -e nor -q is given.");
    println!();
    println!("Set LISPY_LOG (e.g. LISPY_LOG=lispy_eval=trace) to enable logging.");
}
