use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use sandhi_engine::translit::{self, Script};
use sandhi_engine::{NoFeatures, RuleFile, SandhiEngine, SentenceFeatures, WordFeatures};

#[derive(Parser)]
#[command(name = "sandhitool", about = "Sandhi engine diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply sandhi to a sentence in Czech-scientific romanization
    Apply {
        /// The sentence, words separated by spaces
        sentence: String,
        /// Path to a rule file (default: embedded rules)
        #[arg(long)]
        rules: Option<String>,
        /// Per-word grammatical features, one value per word in sentence
        /// order, each "key=value[,key=value]" or "-" for none
        #[arg(long = "features", value_name = "K=V[,K=V]")]
        features: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Convert text between scripts
    Translit {
        /// Source script (czech, iast, deva)
        #[arg(long)]
        from: String,
        /// Target script (czech, iast, deva, czech-phonetic, czech-literary)
        #[arg(long)]
        to: String,
        /// Text to convert
        text: String,
    },

    /// List the groups and rules of a rule file
    Rules {
        /// Path to a rule file (default: embedded rules)
        #[arg(long)]
        rules: Option<String>,
    },
}

/// JSON shape of one `apply` run.
#[derive(Debug, Serialize)]
struct ApplyReport {
    input: String,
    result: String,
    iast: String,
    devanagari: String,
    changes: Vec<ChangeReport>,
}

#[derive(Debug, Serialize)]
struct ChangeReport {
    position: usize,
    before: String,
    after: String,
    rule: String,
}

fn load_rules(path: &Option<String>) -> RuleFile {
    match path {
        Some(path) => RuleFile::load(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Failed to load rule file {}: {}", path, e);
            process::exit(1);
        }),
        None => RuleFile::default(),
    }
}

fn parse_script(name: &str) -> Script {
    name.parse().unwrap_or_else(|e: String| {
        eprintln!("{}", e);
        process::exit(1);
    })
}

/// Build per-word features from the repeated `--features` values. Entry i
/// belongs to word i; "-" leaves a word featureless.
fn parse_features(specs: &[String]) -> SentenceFeatures {
    let mut sentence = SentenceFeatures::new(Vec::new());
    for (position, spec) in specs.iter().enumerate() {
        if spec == "-" {
            continue;
        }
        let mut word = WordFeatures::new();
        for pair in spec.split(',') {
            let Some((key, value)) = pair.split_once('=') else {
                eprintln!("Bad feature {:?}: expected key=value", pair);
                process::exit(1);
            };
            word = word.with(key.trim(), value.trim());
        }
        sentence.set(position, word);
    }
    sentence
}

fn main() {
    // No-op unless built with the `trace` feature.
    sandhi_engine::trace_init::init_tracing(Path::new("."));

    let cli = Cli::parse();

    match cli.command {
        Command::Apply {
            sentence,
            rules,
            features,
            json,
        } => {
            let engine = SandhiEngine::new(load_rules(&rules));
            let out = if features.is_empty() {
                engine.apply_with_features(&sentence, &NoFeatures)
            } else {
                let lookup = parse_features(&features);
                engine.apply_with_features(&sentence, &lookup)
            };

            let iast = translit::czech_v_to_iast(&out.text);
            let devanagari = translit::czech_v_to_deva(&out.text);

            if json {
                let report = ApplyReport {
                    input: sentence,
                    result: out.text,
                    iast,
                    devanagari,
                    changes: out
                        .changes
                        .into_iter()
                        .map(|c| ChangeReport {
                            position: c.position,
                            before: c.before,
                            after: c.after,
                            rule: c.rule,
                        })
                        .collect(),
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("JSON serialization failed")
                );
            } else {
                println!("{}", out.text);
                println!("iast:       {}", iast);
                println!("devanagari: {}", devanagari);
                for c in &out.changes {
                    println!("  [{}] {} -> {}  ({})", c.position, c.before, c.after, c.rule);
                }
            }
        }

        Command::Translit { from, to, text } => {
            let from = parse_script(&from);
            let to = parse_script(&to);
            match translit::convert(&text, from, to) {
                Some(converted) => println!("{}", converted),
                None => {
                    eprintln!("No conversion path from {} to {}", from, to);
                    process::exit(1);
                }
            }
        }

        Command::Rules { rules } => {
            let file = load_rules(&rules);
            println!("groups:");
            for name in file.groups.names() {
                let members = file.groups.resolve(name).unwrap_or(&[]);
                println!("  {}: {}", name, members.join(" "));
            }
            println!("rules ({}):", file.rules.len());
            for rule in file.rules.rules() {
                println!("  {}", rule.kind);
            }
        }
    }
}
