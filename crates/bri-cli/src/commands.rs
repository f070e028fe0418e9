use std::path::Path;

use bri_diff::{
    has_errors, render_diff, render_tree, split_segments, CompareMap, DiffMode, Segment, Verdict,
};
use bri_tree::{Classifier, ParameterTree, TreeError};
use colored::Colorize;
use serde::Serialize;

use crate::cli::*;
use crate::loader::load_entries;
use crate::settings::Settings;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let Cli { command, format, config, .. } = cli;
    let settings = Settings::load(config.as_deref())?;
    match command {
        Command::Show(args) => cmd_show(&settings, &format, args),
        Command::Diff(args) => cmd_diff(&settings, &format, args),
        Command::Summary(args) => cmd_summary(&settings, &format, args),
    }
}

fn cmd_show(settings: &Settings, format: &OutputFormat, args: ShowArgs) -> anyhow::Result<()> {
    let classifier = Classifier::new(settings.classifier.clone());
    let Some(tree) = load_tree(&classifier, &args.preset)? else {
        return Ok(());
    };
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
        OutputFormat::Text => {
            println!("{}", args.preset.display().to_string().bold());
            print_report(&render_tree(tree.roots(), &settings.report));
        }
    }
    Ok(())
}

fn cmd_diff(settings: &Settings, format: &OutputFormat, args: DiffArgs) -> anyhow::Result<()> {
    let classifier = Classifier::new(settings.classifier.clone());
    let Some(first) = load_tree(&classifier, &args.first)? else {
        return Ok(());
    };
    let Some(second) = load_tree(&classifier, &args.second)? else {
        return Ok(());
    };
    let map = CompareMap::build(first.roots(), second.roots());

    match format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Difference {
                path: String,
                verdict: Verdict,
            }
            let differences: Vec<_> = map
                .differences(&settings.report)
                .into_iter()
                .map(|(path, verdict)| Difference { path, verdict })
                .collect();
            println!("{}", serde_json::to_string_pretty(&differences)?);
        }
        OutputFormat::Text => {
            let mode = if args.all { DiffMode::All } else { DiffMode::DifferencesOnly };
            println!("1: {}", args.first.display().to_string().bold());
            println!("2: {}", args.second.display().to_string().bold());
            let report = render_diff(&map, mode, &settings.report);
            if report.is_empty() {
                println!("{} No differences.", "✓".green().bold());
            } else {
                print_report(&report);
            }
        }
    }
    Ok(())
}

fn cmd_summary(settings: &Settings, format: &OutputFormat, args: SummaryArgs) -> anyhow::Result<()> {
    let classifier = Classifier::new(settings.classifier.clone());
    let Some(first) = load_tree(&classifier, &args.first)? else {
        return Ok(());
    };
    let Some(second) = load_tree(&classifier, &args.second)? else {
        return Ok(());
    };
    let summary = CompareMap::build(first.roots(), second.roots()).summary(&settings.report);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => {
            println!("Keys compared: {}", summary.total().to_string().bold());
            println!("  Same:             {}", summary.same.to_string().green());
            println!("  Different:        {}", summary.different.to_string().yellow());
            println!("  Nested different: {}", summary.nested_different.to_string().yellow());
            println!("  Only in 1:        {}", summary.left_only.to_string().red());
            println!("  Only in 2:        {}", summary.right_only.to_string().red());
        }
    }
    Ok(())
}

/// Build the tree of one preset. An empty dump is reported and yields `None`.
fn load_tree(classifier: &Classifier<'_>, path: &Path) -> anyhow::Result<Option<ParameterTree>> {
    let entries = load_entries(path)?;
    match ParameterTree::from_entries(classifier, &entries) {
        Ok(tree) => Ok(Some(tree)),
        Err(TreeError::NoParameters) => {
            println!("{} Did not get parameters for {}", "!".yellow().bold(), path.display());
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn print_report(text: &str) {
    if has_errors(text) {
        println!("{}\n", "!!! There are errors".red().bold());
    }
    for segment in split_segments(text) {
        match segment {
            Segment::Text(s) => print!("{s}"),
            Segment::Image(_) => match segment.decode_image() {
                Ok(bytes) => print!("{}", format!("<image: {} bytes>", bytes.len()).cyan()),
                Err(err) => print!("{} {err}", "!!! Error parsing image:".red()),
            },
        }
    }
}
