use clap::{Parser, Subcommand, ValueEnum};
use medref_core::*;
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medref")]
#[command(about = "Medical education content reference", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search sexual-health entries (case-insensitive substring)
    Search {
        query: String,

        /// Also search educational content modules
        #[arg(long)]
        modules: bool,
    },

    /// List sexual-health entries in any of the given categories
    Filter {
        /// Category, e.g. sti-bacterial or hiv (repeatable)
        #[arg(long = "category", value_name = "CAT")]
        categories: Vec<SexualHealthCategory>,
    },

    /// Show one entry or module by id
    Show {
        id: String,

        /// Only show this level of a module (1-5)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        level: Option<u8>,
    },

    /// List module families, or the ordered modules of one family
    Manifest {
        #[arg(long)]
        family: Option<String>,
    },

    /// Run the corpus integrity checks and print every issue
    Check,

    /// Export the corpus
    Export {
        #[arg(long, value_enum)]
        format: ExportFormat,

        /// Output file (defaults to the configured export directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

fn main() -> Result<()> {
    medref_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let json = cli.json || config.output.format == OutputFormat::Json;

    let corpus = corpus()?;
    tracing::debug!(
        "Corpus ready: {} entries, {} modules",
        corpus.sexual_health().len(),
        corpus.registry().len()
    );
    let report = corpus.check(&config.integrity);

    if let Commands::Check = cli.command {
        return cmd_check(report, json);
    }

    if report.has_errors() {
        eprintln!("Corpus integrity errors:");
        for issue in report.errors() {
            eprintln!("  - {}", issue);
        }
        report.into_result()?;
    }

    match cli.command {
        Commands::Search { query, modules } => cmd_search(corpus, &query, modules, json),
        Commands::Filter { categories } => cmd_filter(&categories, json),
        Commands::Show { id, level } => cmd_show(corpus, &id, level, json),
        Commands::Manifest { family } => cmd_manifest(corpus, family.as_deref(), json),
        Commands::Export { format, out } => {
            let path = out.unwrap_or_else(|| config.export_path(format.extension()));
            cmd_export(corpus, format, path, json)
        }
        Commands::Check => Ok(()),
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_entry_rows(entries: &[&ContentEntry]) {
    for entry in entries {
        println!("{:<32} {:<20} {}", entry.id, entry.category.as_str(), entry.name);
    }
}

fn cmd_search(corpus: &Corpus, query: &str, include_modules: bool, json: bool) -> Result<()> {
    let entries = corpus.sexual_health().search(query);
    let modules = if include_modules {
        corpus.registry().search(query)
    } else {
        Vec::new()
    };

    if json {
        return if include_modules {
            print_json(&json!({ "entries": entries, "modules": modules }))
        } else {
            print_json(&entries)
        };
    }

    if entries.is_empty() && modules.is_empty() {
        println!("No matches for '{}'", query);
        return Ok(());
    }
    print_entry_rows(&entries);
    for module in &modules {
        println!("{:<32} {:<20} {}", module.id, "module", module.name);
    }
    Ok(())
}

fn cmd_filter(categories: &[SexualHealthCategory], json: bool) -> Result<()> {
    let entries = filter_by_category(categories);

    if json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        println!("No entries (pass one or more --category values)");
        return Ok(());
    }
    print_entry_rows(&entries);
    Ok(())
}

fn cmd_show(corpus: &Corpus, id: &str, level: Option<u8>, json: bool) -> Result<()> {
    let found = corpus
        .lookup(id)
        .ok_or_else(|| Error::NotFound(format!("No entry or module with id '{}'", id)))?;

    match found {
        ContentRef::Entry(entry) => {
            if level.is_some() {
                return Err(Error::Other(format!(
                    "'{}' is a database entry and has no levels",
                    id
                )));
            }
            if json {
                return print_json(&entry);
            }
            print_entry(entry);
        }
        ContentRef::Module(module) => {
            if let Some(n) = level {
                let content = module.level(n).ok_or_else(|| {
                    Error::NotFound(format!(
                        "Module '{}' has no level {} (authored: {:?})",
                        id,
                        n,
                        module.level_numbers()
                    ))
                })?;
                if json {
                    return print_json(&content);
                }
                println!("{} - level {}", module.name, n);
                print_level(content);
            } else {
                if json {
                    return print_json(&module);
                }
                print_module(module);
            }
        }
    }
    Ok(())
}

fn print_entry(entry: &ContentEntry) {
    println!("{} ({})", entry.name, entry.category);
    println!("id: {}", entry.id);
    for (field, text) in entry.prose_fields() {
        println!();
        println!("{}:", field);
        println!("  {}", text);
    }
    println!();
    println!("keyPearls:");
    for pearl in &entry.key_pearls {
        println!("  - {}", pearl);
    }
    println!();
    println!("references:");
    for reference in &entry.references {
        println!("  - {}", reference);
    }
}

fn print_module(module: &EducationalContent) {
    println!("{} ({:?})", module.name, module.content_type);
    println!("id: {}", module.id);
    if let Some(name_es) = &module.name_es {
        println!("es: {}", name_es);
    }
    if !module.alternate_names.is_empty() {
        let names: Vec<&str> = module.alternate_names.iter().map(String::as_str).collect();
        println!("also: {}", names.join(", "));
    }
    println!("levels: {:?}", module.level_numbers());
    for (n, level) in &module.levels {
        println!();
        println!("[level {}] {}", n, level.summary);
    }
    if !module.cross_references.is_empty() {
        println!();
        println!("see also:");
        for xref in &module.cross_references {
            println!("  - {} ({:?}, {:?})", xref.label, xref.relationship, xref.target_id);
        }
    }
}

fn print_level(level: &LevelContent) {
    println!();
    println!("{}", level.summary);
    println!();
    println!("{}", level.explanation);
    if !level.key_terms.is_empty() {
        println!();
        println!("key terms:");
        for term in &level.key_terms {
            println!("  {}: {}", term.term, term.definition);
        }
    }
    if let Some(notes) = &level.clinical_notes {
        println!();
        println!("clinical notes: {}", notes);
    }
}

fn cmd_manifest(corpus: &Corpus, family: Option<&str>, json: bool) -> Result<()> {
    let registry = corpus.registry();

    match family {
        Some(name) => {
            let slugs = registry
                .manifest(name)
                .ok_or_else(|| Error::NotFound(format!("Unknown module family '{}'", name)))?;
            if json {
                return print_json(&json!({
                    "family": name,
                    "totalModules": registry.total_modules(name),
                    "modules": slugs,
                }));
            }
            println!("{} ({} modules)", name, registry.total_modules(name));
            for slug in slugs {
                println!("  {}", slug);
            }
        }
        None => {
            let counts = registry.counts();
            if json {
                return print_json(&counts);
            }
            for name in registry.families() {
                println!("{:<24} {}", name, counts.get(name).copied().unwrap_or(0));
            }
        }
    }
    Ok(())
}

fn cmd_check(report: IntegrityReport, json: bool) -> Result<()> {
    if json {
        print_json(&report)?;
    } else if report.is_clean() {
        println!("✓ Corpus is clean");
    } else {
        for issue in &report.issues {
            println!("{}", issue);
        }
        println!(
            "{} error(s), {} warning(s)",
            report.errors().count(),
            report.warnings().count()
        );
    }

    report.into_result().map(|_| ())
}

fn cmd_export(corpus: &Corpus, format: ExportFormat, path: PathBuf, json: bool) -> Result<()> {
    let count = match format {
        ExportFormat::Csv => export_entries_csv(corpus.sexual_health(), &path)?,
        ExportFormat::Json => {
            export_json(corpus, &path)?;
            corpus.sexual_health().len() + corpus.registry().len()
        }
    };

    if json {
        return print_json(&json!({ "path": path, "records": count }));
    }
    println!("✓ Exported {} records", count);
    println!("  {}: {}", format.extension().to_uppercase(), path.display());
    Ok(())
}
