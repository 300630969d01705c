use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs, PageKind, ViewArg};

use crate::view::types::RenderOptions;

/// Parses the command line. Field-level checks already ran as clap value parsers.
#[must_use]
pub fn args_checks() -> CleanArgs {
    CleanArgs::new(Args::parse())
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            api_base: args.api_base,
            layout: args.page.layout(),
            navigate: args.navigate.map(Into::into),
            stat: args.stat,
            options: RenderOptions::default().with_clock(args.clock),
            output: args.output,
        }
    }
}
