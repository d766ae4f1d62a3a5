use clap::Parser;
use fastglob::{Glob, Separators};

pub mod draw;
pub mod matches;

/// The pattern and separators shared by all commands.
#[derive(Debug, Parser)]
pub struct PatternOpt {
    /// The glob pattern
    pattern: String,

    /// Characters that `*` and `?` will not match, can be repeated
    #[clap(short, long = "separator")]
    separators: Vec<String>,
}

impl PatternOpt {
    /// Compiles the pattern with all the given separators.
    pub fn compile(&self) -> anyhow::Result<Glob> {
        let separators: Separators = self.separators.iter().flat_map(|s| s.chars()).collect();
        Ok(Glob::new(&self.pattern, separators)?)
    }
}
