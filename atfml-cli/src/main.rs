use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use atfml_core::{AccessTransform, AccessTransformSet, ClassEntry};

#[derive(Parser)]
#[command(name = "fml-at", about = "FML access transformer reader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse access transformer files and report what they request
    Check {
        /// Access transformer files, merged in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Print the merged transforms of one or more files
    Inspect {
        /// Access transformer files, merged in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Yaml,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { inputs } => cmd_check(&inputs),
        Commands::Inspect { inputs, format } => cmd_inspect(&inputs, format),
    }
}

fn load(inputs: &[PathBuf]) -> AccessTransformSet {
    let mut set = AccessTransformSet::new();
    for path in inputs {
        log::info!("reading {}", path.display());
        if let Err(e) = atfml_reader::read_path(path, &mut set) {
            eprintln!("Error: {}: {e}", path.display());
            std::process::exit(1);
        }
    }
    set
}

fn cmd_check(inputs: &[PathBuf]) {
    let set = load(inputs);
    let (fields, methods) = set.classes().fold((0, 0), |(f, m), (_, entry)| {
        (f + entry.num_fields(), m + entry.num_methods())
    });
    println!("{} classes, {fields} fields, {methods} methods", set.len());
}

fn cmd_inspect(inputs: &[PathBuf], format: Format) {
    let report = Report::new(&load(inputs));
    match format {
        Format::Text => print_text(&report),
        Format::Yaml => match serde_yaml::to_string(&report) {
            Ok(yaml) => print!("{yaml}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
    }
}

fn print_text(report: &Report) {
    for class in &report.classes {
        println!("# {}", class.name);
        if let Some(transform) = &class.transform {
            println!("  class    {transform}");
        }
        for member in &class.fields {
            println!("  field    {} {}", member.transform, member.name);
        }
        for member in &class.methods {
            println!("  method   {} {}", member.transform, member.name);
        }
    }
}

// === Sorted snapshot of a set, for printing ===

#[derive(Serialize)]
struct Report {
    classes: Vec<ClassReport>,
}

#[derive(Serialize)]
struct ClassReport {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    transform: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<MemberReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    methods: Vec<MemberReport>,
}

#[derive(Serialize)]
struct MemberReport {
    name: String,
    transform: String,
}

impl Report {
    fn new(set: &AccessTransformSet) -> Self {
        let mut classes: Vec<ClassReport> = set
            .classes()
            .map(|(name, entry)| ClassReport::new(name, entry))
            .collect();
        classes.sort_by(|a, b| a.name.cmp(&b.name));
        Self { classes }
    }
}

impl ClassReport {
    fn new(name: &str, entry: &ClassEntry) -> Self {
        let class_transform = entry.class_transform();
        let mut fields: Vec<MemberReport> = entry
            .fields()
            .map(|(name, t)| MemberReport::new(name.to_owned(), t))
            .collect();
        fields.sort_by(|a, b| a.name.cmp(&b.name));
        let mut methods: Vec<_> = entry.methods().collect();
        methods.sort_by(|a, b| a.0.cmp(b.0));

        Self {
            name: name.to_owned(),
            transform: (!class_transform.is_empty()).then(|| class_transform.to_string()),
            fields,
            methods: methods
                .into_iter()
                .map(|(sig, t)| MemberReport::new(sig.to_string(), t))
                .collect(),
        }
    }
}

impl MemberReport {
    fn new(name: String, transform: AccessTransform) -> Self {
        Self {
            name,
            transform: transform.to_string(),
        }
    }
}
