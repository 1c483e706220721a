use std::{
    collections::HashMap,
    error::Error,
    io::{self, BufRead, Write},
};

use clap::{Parser, ValueEnum};
use complexa::{
    collect_variable_names, evaluate,
    interpreter::value::complex::ComplexNumber,
    parse, to_lisp, to_visual_tree,
};
use log::{debug, info};

/// Words that end the interactive loop, compared case-insensitively.
const EXIT_COMMANDS: [&str; 3] = ["exit", "quit", "sair"];

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// complexa is a calculator for expressions over complex numbers.
///
/// Without an expression argument it starts an interactive loop; type
/// `exit` to leave.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Evaluate this expression once instead of starting the interactive
    /// loop.
    pub expression: Option<String>,

    /// Bind a variable up front, e.g. `--var z=3+4i`. May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    pub vars: Vec<(String, ComplexNumber)>,

    /// Do not print the LISP form and the visual tree.
    #[arg(long)]
    pub no_tree: bool,

    /// Decimal places shown in results.
    #[arg(short, long, default_value_t = 10)]
    pub precision: u32,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Parses a `NAME=VALUE` command-line binding.
fn parse_binding(raw: &str) -> Result<(String, ComplexNumber), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{raw}'"));
    }
    let value = value.parse::<ComplexNumber>().map_err(|e| e.to_string())?;
    Ok((name.to_string(), value))
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) {
    env_logger::Builder::from_default_env().filter_level(log_level.to_log_level_filter())
                                           .init();
}

/// Run the main application logic
pub fn run() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();
    init_logging(&args.log_level);

    let stdin = io::stdin();
    let mut session = Session { input:     stdin.lock(),
                                output:    io::stdout().lock(),
                                presets:   args.vars.into_iter().collect(),
                                show_tree: !args.no_tree,
                                precision: args.precision, };

    if let Some(expression) = args.expression {
        if !session.process(&expression)? {
            return Err("expression could not be evaluated".into());
        }
        return Ok(());
    }

    info!("starting interactive loop");
    session.run_loop()?;
    Ok(())
}

/// One interactive session over a pair of streams.
struct Session<R, W> {
    input:     R,
    output:    W,
    /// Values bound on the command line; never prompted for.
    presets:   HashMap<String, ComplexNumber>,
    show_tree: bool,
    precision: u32,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Reads and processes expressions until an exit command or end of input.
    fn run_loop(&mut self) -> io::Result<()> {
        while let Some(line) = self.prompt("expression> ")? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if EXIT_COMMANDS.iter().any(|cmd| line.eq_ignore_ascii_case(cmd)) {
                return Ok(());
            }
            self.process(line)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Parses, renders and evaluates one expression, printing the outcome.
    ///
    /// Returns `Ok(false)` if the expression failed; the error has already
    /// been printed.
    fn process(&mut self, source: &str) -> io::Result<bool> {
        let ast = match parse(source) {
            Ok(ast) => ast,
            Err(e) => {
                writeln!(self.output, "error: {e}")?;
                return Ok(false);
            },
        };

        if self.show_tree {
            writeln!(self.output, "\nTree (LISP):\n{}", to_lisp(&ast))?;
            writeln!(self.output, "\nTree (visual):\n{}", to_visual_tree(&ast))?;
        }

        let mut bindings = HashMap::new();
        for name in collect_variable_names(&ast) {
            let value = match self.presets.get(&name) {
                Some(value) => *value,
                None => match self.ask_value(&name)? {
                    Some(value) => value,
                    None => {
                        writeln!(self.output, "\nerror: input ended before '{name}' was given")?;
                        return Ok(false);
                    },
                },
            };
            debug!("binding {name} = {value}");
            bindings.insert(name, value);
        }

        match evaluate(&ast, &bindings) {
            Ok(value) => {
                writeln!(self.output, "\nResult:\n{}", value.rounded(self.precision))?;
                Ok(true)
            },
            Err(e) => {
                writeln!(self.output, "error: {e}")?;
                Ok(false)
            },
        }
    }

    /// Prompts until a valid complex value is typed for `name`.
    ///
    /// Returns `Ok(None)` on end of input.
    fn ask_value(&mut self, name: &str) -> io::Result<Option<ComplexNumber>> {
        loop {
            let Some(line) = self.prompt(&format!("value for {name} (a+bi): "))? else {
                return Ok(None);
            };
            match line.trim().parse::<ComplexNumber>() {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "invalid input: {e}")?,
            }
        }
    }

    /// Writes `text` and reads one line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session<'a>(input: &'a str,
                   presets: &[(&str, ComplexNumber)],
                   precision: u32)
                   -> Session<&'a [u8], Vec<u8>> {
        Session { input: input.as_bytes(),
                  output: Vec::new(),
                  presets: presets.iter()
                                  .map(|(name, value)| ((*name).to_string(), *value))
                                  .collect(),
                  show_tree: false,
                  precision }
    }

    fn transcript(session: Session<&[u8], Vec<u8>>) -> String {
        String::from_utf8(session.output).unwrap()
    }

    #[test]
    fn loop_skips_blank_lines_and_stops_at_exit_word() {
        let mut s = session("1+1\n\n  EXIT \n2+2\n", &[], 10);
        s.run_loop().unwrap();
        assert_eq!(transcript(s), "expression> \nResult:\n2\nexpression> expression> ");
    }

    #[test]
    fn every_exit_word_is_accepted() {
        for word in ["exit", "Quit", "SAIR"] {
            let input = format!("{word}\n1+1\n");
            let mut s = session(&input, &[], 10);
            s.run_loop().unwrap();
            assert_eq!(transcript(s), "expression> ", "'{word}' did not end the loop");
        }
    }

    #[test]
    fn loop_ends_at_end_of_input() {
        let mut s = session("2*3\n", &[], 10);
        s.run_loop().unwrap();
        assert_eq!(transcript(s), "expression> \nResult:\n6\nexpression> \n");
    }

    #[test]
    fn malformed_value_is_asked_again() {
        let mut s = session("x*2\nabc\n 1+i \nquit\n", &[], 10);
        s.run_loop().unwrap();

        let out = transcript(s);
        assert_eq!(out.matches("value for x (a+bi): ").count(), 2);
        assert!(out.contains("invalid input: Invalid complex number 'abc'."));
        assert!(out.contains("\nResult:\n2 + 2i\n"));
    }

    #[test]
    fn variables_are_asked_for_in_sorted_order() {
        let mut s = session("1\n2\n", &[], 10);
        assert!(s.process("b - a").unwrap());
        assert_eq!(transcript(s),
                   "value for a (a+bi): value for b (a+bi): \nResult:\n1\n");
    }

    #[test]
    fn preset_variables_are_not_asked_for() {
        let mut s = session("", &[("x", ComplexNumber::new(3.0, 0.0))], 10);
        assert!(s.process("x + 1").unwrap());
        assert_eq!(transcript(s), "\nResult:\n4\n");
    }

    #[test]
    fn end_of_input_while_asking_for_a_value() {
        let mut s = session("", &[], 10);
        assert!(!s.process("x + 1").unwrap());
        assert_eq!(transcript(s),
                   "value for x (a+bi): \nerror: input ended before 'x' was given\n");
    }

    #[test]
    fn result_is_rounded_to_precision() {
        let mut s = session("", &[], 3);
        assert!(s.process("1/3 + 2i/3").unwrap());
        assert_eq!(transcript(s), "\nResult:\n0.333 + 0.667i\n");
    }

    #[test]
    fn comparison_result_is_printed() {
        let mut s = session("", &[], 10);
        assert!(s.process("0.1 + 0.2 = 0.3").unwrap());
        assert_eq!(transcript(s), "\nResult:\ntrue\n");
    }

    #[test]
    fn errors_are_printed_and_reported() {
        let mut s = session("", &[], 10);
        assert!(!s.process("3/0").unwrap());
        assert!(!s.process("3+").unwrap());

        let out = transcript(s);
        assert!(out.starts_with("error: Error at column 1: Division by zero.\n"));
        assert!(out.contains("error: Syntax error at column 2"));
    }

    #[test]
    fn trees_are_printed_unless_disabled() {
        let mut s = session("", &[], 10);
        s.show_tree = true;
        assert!(s.process("1+2").unwrap());
        assert_eq!(transcript(s),
                   "\nTree (LISP):\n(+ 1 2)\n\
                    \nTree (visual):\n└── BinaryOp: +\n    └── Number: 1\n    └── Number: 2\n\
                    \nResult:\n3\n");
    }

    #[test]
    fn parses_command_line_bindings() {
        assert_eq!(parse_binding("z=3+4i").unwrap(),
                   ("z".to_string(), ComplexNumber::new(3.0, 4.0)));
        assert_eq!(parse_binding(" w = -i").unwrap(),
                   ("w".to_string(), ComplexNumber::new(0.0, -1.0)));

        assert!(parse_binding("z").unwrap_err().contains("NAME=VALUE"));
        assert!(parse_binding("=3").unwrap_err().contains("missing variable name"));
        assert!(parse_binding("z=abc").unwrap_err().contains("Invalid complex number"));
    }
}
