use fastglob::Matcher;

use super::PatternOpt;

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum Format {
    /// The compact textual form of the matcher
    #[default]
    Text,
    /// A Graphviz digraph of the search tree
    Dot,
}

/// Show the matcher a pattern compiles to
#[derive(Debug, clap::Parser)]
pub struct Opt {
    #[clap(flatten)]
    pattern: PatternOpt,

    /// How to render the matcher
    #[clap(long, value_enum, default_value_t)]
    format: Format,
}

pub fn draw(opt: Opt) -> anyhow::Result<()> {
    let glob = opt.pattern.compile()?;
    match opt.format {
        Format::Text => println!("{}", glob.matcher()),
        Format::Dot => println!("{}", dot(glob.as_str(), glob.matcher())),
    }
    Ok(())
}

/// Renders the search tree of `matcher` as a Graphviz digraph labeled with `pattern`.
fn dot(pattern: &str, matcher: &Matcher) -> String {
    let mut graph = Graph::default();
    graph.lines.push(format!("  graph[label=\"{}\"];", escape(pattern)));
    graph.tree(matcher);

    let mut lines = vec![String::from("digraph G {")];
    lines.append(&mut graph.lines);
    lines.push(String::from("}"));
    lines.join("\n")
}

#[derive(Default)]
struct Graph {
    lines: Vec<String>,
    next_id: usize,
}

impl Graph {
    fn node(&mut self, label: &str) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.lines
            .push(format!("  \"{id}\"[label=\"{}\"];", escape(label)));
        id
    }

    fn edge(&mut self, from: usize, to: usize) {
        self.lines.push(format!("  \"{from}\"->\"{to}\";"));
    }

    /// Adds a node for `matcher`, expanding trees into their pivot and both sides.
    fn tree(&mut self, matcher: &Matcher) -> usize {
        let Matcher::BTree(tree) = matcher else {
            return self.node(&matcher.to_string());
        };

        let id = self.node(&tree.value().to_string());
        for side in [tree.left(), tree.right()] {
            let child = match side {
                Some(side) => self.tree(side),
                None => self.node("nil"),
            };
            self.edge(id, child);
        }
        id
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use fastglob::{compile, Separators};

    use super::dot;

    #[test]
    fn test_dot() {
        let glob = compile("a*{b,c}", Separators::none()).unwrap();
        insta::assert_snapshot!(dot(glob.as_str(), glob.matcher()), @r###"
        digraph G {
          graph[label="a*{b,c}"];
          "0"[label="<any_of:[<text:b>,<text:c>]>"];
          "1"[label="<prefix:a>"];
          "0"->"1";
          "2"[label="nil"];
          "0"->"2";
        }
        "###);
    }

    #[test]
    fn test_dot_without_tree() {
        let glob = compile(r#"say "hi"*"#, Separators::none()).unwrap();
        insta::assert_snapshot!(dot(glob.as_str(), glob.matcher()), @r###"
        digraph G {
          graph[label="say \"hi\"*"];
          "0"[label="<prefix:say \"hi\">"];
        }
        "###);
    }
}
