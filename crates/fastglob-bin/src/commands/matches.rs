use std::io::BufRead;

use super::PatternOpt;

/// Test inputs against a pattern
#[derive(Debug, clap::Parser)]
pub struct Opt {
    #[clap(flatten)]
    pattern: PatternOpt,

    /// The inputs to test, read line by line from stdin when omitted
    texts: Vec<String>,
}

pub fn matches(opt: Opt) -> anyhow::Result<()> {
    let glob = opt.pattern.compile()?;
    tracing::info!("compiled '{glob}' into {}", glob.matcher());

    if !opt.texts.is_empty() {
        for text in &opt.texts {
            println!("{}\t{text}", glob.matches(text));
        }
        return Ok(());
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        println!("{}\t{line}", glob.matches(&line));
    }
    Ok(())
}
