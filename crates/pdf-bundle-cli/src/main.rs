use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfb", about = "Appendix bundle assembler", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle a main document with appendices into one numbered PDF
    Bundle {
        /// Main document (PDF or image)
        #[arg(short, long)]
        main: PathBuf,

        /// Appendix file(s), in bundle order
        #[arg(short, long, required = true, num_args = 1..)]
        appendix: Vec<PathBuf>,

        /// Appendix title(s), matched to appendices by position;
        /// unmatched appendices use their file name
        #[arg(short = 't', long)]
        appendix_title: Vec<String>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Output paper size
        #[arg(long, default_value = "a4", value_enum)]
        paper: PaperArg,

        /// Output orientation
        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Margin for generated sheets and image fitting, in mm
        #[arg(long, default_value = "20.0")]
        margin: f32,

        /// Appendix ordinal style
        #[arg(long, default_value = "arabic", value_enum)]
        numbering: NumberingArg,

        /// Cover sheet style
        #[arg(long, default_value = "classic", value_enum)]
        cover_style: CoverArg,

        /// Heading printed on TOC pages
        #[arg(long, default_value = "Table of Contents")]
        toc_heading: String,

        /// Stamp an "Appendix N" box on each appendix's first content page
        #[arg(long)]
        mark_openings: bool,

        /// Show the pagination plan only, don't generate a PDF
        #[arg(long)]
        plan_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum NumberingArg {
    Arabic,
    Roman,
    Letters,
}

#[derive(Clone, Copy, ValueEnum)]
enum CoverArg {
    Classic,
    Modern,
    Minimal,
}

impl From<PaperArg> for pdf_bundle::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl From<OrientationArg> for pdf_bundle::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<NumberingArg> for pdf_bundle::NumberingStyle {
    fn from(arg: NumberingArg) -> Self {
        match arg {
            NumberingArg::Arabic => Self::Arabic,
            NumberingArg::Roman => Self::Roman,
            NumberingArg::Letters => Self::Letters,
        }
    }
}

impl From<CoverArg> for pdf_bundle::CoverStyle {
    fn from(arg: CoverArg) -> Self {
        match arg {
            CoverArg::Classic => Self::Classic,
            CoverArg::Modern => Self::Modern,
            CoverArg::Minimal => Self::Minimal,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bundle {
            main,
            appendix,
            appendix_title,
            output,
            paper,
            orientation,
            margin,
            numbering,
            cover_style,
            toc_heading,
            mark_openings,
            plan_only,
        } => {
            let options = pdf_bundle::BundleOptions {
                paper_size: paper.into(),
                orientation: orientation.into(),
                margin_mm: margin,
                numbering: numbering.into(),
                cover_style: cover_style.into(),
                toc_heading,
                mark_openings,
            };

            let mut documents = Vec::with_capacity(1 + appendix.len());
            documents.push(pdf_bundle::load_source(&main, None, true).await?);
            for (i, path) in appendix.iter().enumerate() {
                let title = appendix_title.get(i).cloned();
                documents.push(pdf_bundle::load_source(path, title, false).await?);
            }

            // Show the pagination plan
            let plan = pdf_bundle::plan_bundle(&documents, &options)?;
            println!("Pagination plan:");
            println!("  Main document: pages 1-{}", plan.main_page_count);
            println!(
                "  Table of contents: {} page(s) from page {}",
                plan.toc_page_count,
                plan.main_page_count + 1
            );
            for entry in &plan.appendices {
                println!(
                    "  Appendix {}: '{}' cover on page {}, content on pages {}-{}",
                    options.numbering.label(entry.index),
                    entry.title,
                    entry.cover_page,
                    entry.content_start,
                    entry.content_end()
                );
            }
            println!("  Total pages: {}", plan.total_page_count);

            if plan_only {
                return Ok(());
            }

            let bytes = pdf_bundle::bundle(&documents, &options).await?;
            pdf_bundle::save_bundle(&bytes, &output).await?;
            println!("Bundled {} documents -> {}", documents.len(), output.display());
        }
    }

    Ok(())
}
