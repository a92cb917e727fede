use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use spanjson::{Document, FormatOptions, Indent, Node, ParseOptions};

#[derive(Parser, Debug)]
#[command(name = "spanjson", version, about = "Span-preserving JSON/JSONP pretty-printer")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Indentation width: 2 or 4.
    #[arg(long, value_name = "number", default_value_t = 2, value_parser = parse_indent)]
    indent: usize,

    /// Validate only; exits non-zero with the parse error on failure.
    #[arg(long)]
    check: bool,

    /// Print only the subtree at a pointer like /a/0/b.
    #[arg(long, value_name = "pointer")]
    path: Option<String>,

    /// Print a structural outline instead of formatted text.
    #[arg(long)]
    tree: bool,

    /// Minify to a single line instead of pretty-printing.
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("spanjson: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let raw = read_input(args.input.as_deref())?;
    let parse_options = ParseOptions::default();
    let format_options = FormatOptions::default().with_indent(Indent::spaces(args.indent));

    if args.check {
        spanjson::parse_document_with_options(&raw, &parse_options)?;
        return Ok(());
    }

    let output = if args.tree {
        let document = spanjson::parse_document_with_options(&raw, &parse_options)?;
        render_outline(&document)
    } else if let Some(pointer) = &args.path {
        let document = spanjson::parse_document_with_options(&raw, &parse_options)?;
        let node = document
            .root
            .pointer(pointer)
            .ok_or_else(|| format!("no value at {pointer}"))?;
        let mut text = spanjson::to_string_pretty(node, &format_options);
        text.push('\n');
        text
    } else if args.compact {
        let document = spanjson::parse_document_with_options(&raw, &parse_options)?;
        let body = serde_json::to_string(&document.root)?;
        let mut text = match &document.wrapper {
            Some(wrapper) => format!("{}{}{}", wrapper.prefix, body, wrapper.suffix),
            None => body,
        };
        text.push('\n');
        text
    } else {
        // Pretty-printing never fails: non-JSON input passes through as-is.
        let mut text = spanjson::pretty_with_options(&raw, &format_options);
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text
    };
    write_output(args.output.as_deref(), output.as_bytes())
}

fn render_outline(document: &Document<'_>) -> String {
    let mut out = String::new();
    if let Some(wrapper) = &document.wrapper {
        out.push_str("wrapper ");
        out.push_str(&wrapper.prefix);
        out.push_str(" ... ");
        out.push_str(&wrapper.suffix);
        out.push('\n');
    }
    outline_node(&mut out, None, &document.root, 0);
    out
}

fn outline_node(out: &mut String, key: Option<&str>, node: &Node<'_>, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    if let Some(key) = key {
        out.push('"');
        out.push_str(key);
        out.push_str("\": ");
    }
    out.push_str(node.kind().as_str());
    let span = node.span();
    match node {
        Node::Array(array) => {
            out.push_str(&format!(
                " // {} items @ {}..{}\n",
                array.items.len(),
                span.start,
                span.end
            ));
            for item in &array.items {
                outline_node(out, None, item, depth + 1);
            }
        }
        Node::Object(object) => {
            out.push_str(&format!(
                " // {} entries @ {}..{}\n",
                object.entries.len(),
                span.start,
                span.end
            ));
            for entry in &object.entries {
                outline_node(out, Some(entry.key.source), &entry.value, depth + 1);
            }
        }
        Node::String(string) => {
            out.push_str(&format!(" \"{}\" @ {}..{}\n", string.source, span.start, span.end));
        }
        Node::Number(number) => {
            out.push_str(&format!(" {} @ {}..{}\n", number.source, span.start, span.end));
        }
        Node::Bool(_) | Node::Null(_) => {
            out.push_str(&format!(" @ {}..{}\n", span.start, span.end));
        }
    }
}

fn parse_indent(raw: &str) -> Result<usize, String> {
    match raw {
        "2" => Ok(2),
        "4" => Ok(4),
        _ => Err(format!("invalid indent \"{raw}\"; use 2 or 4")),
    }
}

fn read_input(input: Option<&str>) -> Result<String, Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}

fn write_output(path: Option<&str>, data: &[u8]) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            file.write_all(data)?;
            Ok(())
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(data)?;
            Ok(())
        }
    }
}
