use libft::args::*;
use libft::err::*;
use libft::os::*;
use libft::ws::*;

pub enum Cmd {
    Help,
    Print(PrintArgs),
}

impl Cmd {
    pub fn new(argv: Argv) -> Self {
        match parse_args(argv) {
            Ok(Args::Help) => Self::Help,
            Ok(Args::Print(args)) => Self::Print(args),
            Err(e) => e.abort(),
        }
    }

    pub fn run(self) -> ! {
        match self {
            Cmd::Help => cmd_help(),
            Cmd::Print(args) => cmd_print(args),
        }
    }
}

fn cmd_help() -> ! {
    println(
        r#"Usage: print_ws [OPTIONS] [--] COUNT [CHAR]

Writes CHAR to stdout COUNT times.  Nothing is written if COUNT is zero or
negative.  CHAR defaults to a single space.

CHAR must be a single byte or one of these escapes:
  \t  tab
  \n  newline
  \s  space
  \\  backslash

OPTIONS:
-s, --strict   Exit 1 with a diagnostic if a write fails
-b, --batch    Write the run in chunks rather than one byte at a time
-n, --newline  Follow the run with a newline
-h, --help     Print this message"#,
    );

    exit(0);
}

fn cmd_print(args: PrintArgs) -> ! {
    if args.strict {
        if let Err(e) = try_print_ws_with(&STDOUT, args.len, args.ws, args.strategy) {
            abort_write_error(e);
        }
    } else {
        print_ws_with(&STDOUT, args.len, args.ws, args.strategy);
    }

    if args.newline {
        if args.strict {
            if let Err(e) = STDOUT.write_all(b"\n") {
                abort_write_error(e);
            }
        } else {
            println("");
        }
    }

    exit(0);
}
