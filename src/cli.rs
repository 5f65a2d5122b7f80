use clap::{Args, Parser, Subcommand};

use crate::site;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a book and merge its chapters into one HTML document.
    Fetch(FetchArgs),
    /// List the chapter sub-pages linked from a book's main page.
    Chapters(ChaptersArgs),
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Page title of the book's main page.
    #[arg(long)]
    pub title: String,

    /// Output file for the merged document (`-` for stdout).
    #[arg(long, default_value = "-")]
    pub out: String,

    /// Wiki origin the API calls and link rewriting point at.
    #[arg(long, default_value = site::DEFAULT_ORIGIN)]
    pub origin: String,

    /// Overwrite the output file if it already exists.
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct ChaptersArgs {
    /// Page title of the book's main page.
    #[arg(long)]
    pub title: String,

    /// Wiki origin the API calls and link rewriting point at.
    #[arg(long, default_value = site::DEFAULT_ORIGIN)]
    pub origin: String,
}
