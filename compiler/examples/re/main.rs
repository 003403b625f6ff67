use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use stepre_compiler::{create_regex, SyntaxFlag, SyntaxFlags, TokenSource};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Syntax {
    Basic,
    Extended,
    Grep,
    Egrep,
    Awk,
    Ecmascript,
}

impl From<Syntax> for SyntaxFlag {
    fn from(syntax: Syntax) -> Self {
        match syntax {
            Syntax::Basic => SyntaxFlag::Basic,
            Syntax::Extended => SyntaxFlag::Extended,
            Syntax::Grep => SyntaxFlag::Grep,
            Syntax::Egrep => SyntaxFlag::Egrep,
            Syntax::Awk => SyntaxFlag::Awk,
            Syntax::Ecmascript => SyntaxFlag::ECMAScript,
        }
    }
}

/// Prints every line of FILE, or stdin, that contains a match of PATTERN.
#[derive(Debug, Parser)]
#[command(name = "re", version)]
struct Args {
    pattern: String,

    file: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "ecmascript")]
    syntax: Syntax,

    /// Ignore case.
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Only print lines matched as a whole.
    #[arg(short = 'x', long)]
    line_regexp: bool,

    /// Dump the token stream of PATTERN before matching.
    #[arg(short = 'd', long)]
    debug: bool,
}

impl Args {
    fn flags(&self) -> SyntaxFlags {
        let mut flags = SyntaxFlags::from(SyntaxFlag::from(self.syntax));
        if self.ignore_case {
            flags.set(SyntaxFlag::ICase);
        }

        flags
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args = Args::parse();
    let flags = args.flags();

    if args.debug {
        println!("DEBUG\n--------");
        for token in TokenSource::new(&args.pattern, flags) {
            match token {
                Ok(token) => println!("{}", token),
                Err(e) => println!("{}", e),
            }
        }
        println!("--------");
    }

    let regex = create_regex(&args.pattern, flags).map_err(|e| e.to_string())?;

    let input: Box<dyn BufRead> = match &args.file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in input.lines() {
        let line = line.map_err(|e| e.to_string())?;

        let matched = if args.line_regexp {
            regex.is_match(&line)
        } else {
            regex.find(&line).is_some()
        };

        if matched {
            println!("{}", line);
        }
    }

    Ok(())
}
