use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::model::StatCode;
use crate::mvu::dashboard::{PageLayout, View};
use crate::view::types::{ClockStyle, RenderOptions};

/// Which page of the site is being rendered, and so which containers exist on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageKind {
    Home,
    Leaders,
    Teams,
}

impl PageKind {
    #[must_use]
    pub fn layout(self) -> PageLayout {
        match self {
            PageKind::Home => PageLayout::home_page(),
            PageKind::Leaders => PageLayout::leaders_page(),
            PageKind::Teams => PageLayout::teams_page(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Home,
    Leaders,
}

impl From<ViewArg> for View {
    fn from(v: ViewArg) -> Self {
        match v {
            ViewArg::Home => View::Home,
            ViewArg::Leaders => View::Leaders,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "Render the GameTrack dashboard from a live api", long_about = None)]
pub struct Args {
    /// Origin hosting the /api endpoints.
    #[arg(
        short = 'a',
        long,
        value_name = "URL",
        default_value = crate::api::client::DEFAULT_API_BASE,
        value_parser = crate::args::validation::check_api_base
    )]
    pub api_base: String,
    #[arg(short = 'p', long, value_enum, default_value = "home")]
    pub page: PageKind,
    /// Navigation applied once startup loads have finished.
    #[arg(long, value_enum)]
    pub navigate: Option<ViewArg>,
    /// Stat the leaders page ranks by.
    #[arg(
        short = 's',
        long,
        value_name = "STAT",
        default_value = "PTS",
        value_parser = crate::args::validation::check_stat
    )]
    pub stat: StatCode,
    /// 12 or 24 hour start times.
    #[arg(
        long,
        value_name = "CLOCK",
        default_value = "12",
        value_parser = crate::args::validation::check_clock
    )]
    pub clock: ClockStyle,
    /// Write the page here instead of stdout.
    #[arg(
        short = 'o',
        long,
        value_name = "PATH",
        value_parser = crate::args::validation::check_writable_output
    )]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub api_base: String,
    pub layout: PageLayout,
    pub navigate: Option<View>,
    pub stat: StatCode,
    pub options: RenderOptions,
    pub output: Option<PathBuf>,
}
