use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::io::list_io::{LoadError, load_config, load_list};
use crate::model::{FlatItem, ListConfig, TreeNode};
use crate::ops::tree::flatten;
use crate::seed::sample_tree;

#[derive(Parser)]
#[command(
    name = "sprig",
    about = concat!("[.] sprig v", env!("CARGO_PKG_VERSION"), " - a drag-sortable nested checklist"),
    version
)]
pub struct Cli {
    /// JSON file holding the checklist tree (defaults to the built-in sample)
    pub file: Option<PathBuf>,

    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum nesting depth (overrides config)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Pixels of indentation per depth level (overrides config)
    #[arg(long)]
    pub indent: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the flattened checklist without opening the TUI
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// JSON file holding the checklist tree
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Resolve the tree and config from CLI arguments: explicit file or the
/// built-in sample, config file plus flag overrides.
pub fn load_inputs(
    file: Option<&PathBuf>,
    cli: &Cli,
) -> Result<(Vec<TreeNode>, ListConfig), LoadError> {
    let tree = match file {
        Some(path) => load_list(path)?,
        None => sample_tree(),
    };
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ListConfig::default(),
    };
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    if let Some(indent) = cli.indent {
        config.indent_unit = indent;
    }
    Ok((tree, config))
}

// ---------------------------------------------------------------------------
// `show` output
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemJson<'a> {
    id: &'a str,
    label: &'a str,
    color: &'a str,
    is_checked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<&'a str>,
    depth: usize,
}

/// Render the flat sequence as indented text rows.
pub fn format_flat_items(items: &[FlatItem]) -> String {
    let mut out = String::new();
    for item in items {
        let checkbox = if item.is_checked { "[x]" } else { "[ ]" };
        out.push_str(&format!(
            "{}{} {}\n",
            "  ".repeat(item.depth),
            checkbox,
            item.label
        ));
    }
    out
}

pub fn cmd_show(args: &ShowArgs, cli: &Cli) -> Result<(), LoadError> {
    let (tree, _config) = load_inputs(args.file.as_ref().or(cli.file.as_ref()), cli)?;
    let items = flatten(&tree);

    if args.json {
        let rows: Vec<ItemJson> = items
            .iter()
            .map(|item| ItemJson {
                id: &item.id,
                label: &item.label,
                color: &item.color,
                is_checked: item.is_checked,
                parent_id: item.parent_id.as_deref(),
                depth: item.depth,
            })
            .collect();
        // Serializing plain data never fails
        println!("{}", serde_json::to_string_pretty(&rows).unwrap());
    } else {
        print!("{}", format_flat_items(&items));
    }
    Ok(())
}
