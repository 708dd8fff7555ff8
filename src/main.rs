use clap::{Parser, Subcommand};
use flexlayout::style::{EDITOR_STYLE_PROPERTIES, ValueKind};
use flexlayout::{
    CanvasSize, InterchangeBuilder, InterchangeError, NodeGraph, permalink_from_fragment,
    permalink_url, project_name_from_path, read_layout_file, write_layout_file,
};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Convert FlexLayout designs between editor graphs, layout files and permalinks.
#[derive(Parser, Debug)]
#[command(name = "flexlayout", version, about)]
struct Cli {
    /// JSON file describing the available component kinds
    #[arg(long, global = true)]
    components: Option<PathBuf>,

    /// Write markup on a single line
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Editor graph JSON to a layout file
    Export {
        /// Graph JSON file, or stdin when omitted
        input: Option<PathBuf>,
        /// Output file (".xml" is added if missing), or stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Layout file to editor graph JSON
    Import {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Layout file to a permalink URL
    Share {
        input: PathBuf,
        /// Project name; defaults to the file name
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value_t = 800)]
        width: u32,
        #[arg(long, default_value_t = 600)]
        height: u32,
        /// Page the link points at
        #[arg(long, default_value = "https://example.com/")]
        base: String,
        /// Deflate level, 0-9
        #[arg(long, default_value_t = 6)]
        level: u32,
    },
    /// Permalink URL or data to a layout file
    Open {
        link: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the editor's style properties
    Styles,
}

fn read_input(input: Option<&PathBuf>) -> Result<String, InterchangeError> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_markup(output: Option<&PathBuf>, xml: &str) -> Result<(), InterchangeError> {
    match output {
        Some(path) => {
            let written = write_layout_file(path, xml)?;
            eprintln!("Wrote {}", written.display());
        }
        None => println!("{}", xml),
    }
    Ok(())
}

fn print_styles() {
    for property in EDITOR_STYLE_PROPERTIES {
        let kind = match &property.kind {
            ValueKind::Enum { choices } => choices
                .iter()
                .map(|(value, _)| *value)
                .collect::<Vec<_>>()
                .join(" | "),
            ValueKind::Number { units, .. } => format!("<number> {}", units.join(" | ")),
            ValueKind::Ratio => "<ratio>".to_string(),
        };
        println!(
            "{:<22} {:<16} default {:<10} {}",
            property.name, property.display_name, property.default_value, kind
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), InterchangeError> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = InterchangeBuilder::new().with_pretty(!cli.compact);
    if let Some(path) = &cli.components {
        builder = builder.with_registry_file(path)?;
    }

    match cli.command {
        Command::Export { input, output } => {
            let graph = NodeGraph::from_json(&read_input(input.as_ref())?)?;
            let xml = builder.build()?.graph_to_markup(&graph)?;
            write_markup(output.as_ref(), &xml)?;
        }
        Command::Import { input, output } => {
            let graph = builder.build()?.markup_to_graph(&read_layout_file(&input)?)?;
            let json = graph.to_json()?;
            match output {
                Some(path) => fs::write(path, json)?,
                None => println!("{}", json),
            }
        }
        Command::Share {
            input,
            name,
            width,
            height,
            base,
            level,
        } => {
            let interchange = builder.with_compression(level).build()?;
            let size = CanvasSize::new(width, height);
            if !size.is_valid() {
                log::warn!(
                    "Canvas {}x{} is below the {}x{} minimum and will be enlarged",
                    width,
                    height,
                    CanvasSize::MINIMUM.width,
                    CanvasSize::MINIMUM.height
                );
            }
            let name = name.unwrap_or_else(|| project_name_from_path(&input));
            let data = interchange
                .share_markup(&name, size, &read_layout_file(&input)?)
                .await?;
            println!("{}", permalink_url(&base, &data));
        }
        Command::Open { link, output } => {
            let data = if link.contains('#') {
                permalink_from_fragment(&link).ok_or_else(|| {
                    InterchangeError::Config(format!("'{}' carries no #pj: permalink", link))
                })?
            } else {
                link.as_str()
            };
            let (project, xml) = builder.build()?.open_as_markup(data).await?;
            eprintln!(
                "{} ({}x{})",
                project.project_name, project.canvas_size.width, project.canvas_size.height
            );
            write_markup(output.as_ref(), &xml)?;
        }
        Command::Styles => print_styles(),
    }

    Ok(())
}
