//! Line-oriented driver loop around the session controller.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use stepwise_engine::Variant;
use stepwise_session::{SessionController, UiEvent};

const HELP: &str = "\
Commands:
  vertex <value>        add a vertex
  edge <a> <b>          add an undirected edge between two vertices
  new                   clear the graph (asks for confirmation)
  dfs | bfs | tree      start a traversal run
  pick [value]          choose the start vertex (bare `pick` = no selection)
  next                  advance the run one step (empty line works too)
  show                  print the graph, marks and tree edges
  help                  this text
  quit                  exit";

const DEFAULT_MESSAGE: &str =
    "Use `vertex` and `edge` to build a graph, then start DFS, BFS or Tree.";

/// Interactive read-dispatch-print loop.
pub struct Repl {
    controller: SessionController,
    json_stats: bool,
}

impl Repl {
    /// Create a fresh REPL with an empty graph.
    pub fn new(json_stats: bool) -> Self {
        Self {
            controller: SessionController::new(),
            json_stats,
        }
    }

    /// Load the small demo graph: a ring of five vertices with one chord.
    pub fn seed_demo(&mut self) -> stepwise_core::Result<()> {
        let store = self.controller.store_mut();
        let ids: Vec<_> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|value| store.add_vertex(*value))
            .collect::<stepwise_core::Result<_>>()?;
        let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (1, 3)];
        for (i, j) in edges {
            if let (Some(u), Some(v)) = (ids.get(i), ids.get(j)) {
                store.add_edge(*u, *v)?;
            }
        }
        Ok(())
    }

    /// Run until `quit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        println!("{HELP}\n");
        println!("{DEFAULT_MESSAGE}");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if !self.handle_line(line.trim()) {
                break;
            }
        }
        Ok(())
    }

    /// Handle one input line; returns false to exit.
    fn handle_line(&mut self, line: &str) -> bool {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("next");
        match command {
            "quit" | "exit" => return false,
            "help" => println!("{HELP}"),
            "vertex" => self.add_vertex(words.next()),
            "edge" => self.add_edge(words.next(), words.next()),
            "new" => {
                self.dispatch(UiEvent::NewGraph);
                self.report();
            }
            "dfs" => self.start(Variant::Dfs),
            "bfs" => self.start(Variant::Bfs),
            "tree" => self.start(Variant::Tree),
            "pick" => self.pick(words.next()),
            "next" => {
                self.dispatch(UiEvent::Advance);
                self.report();
            }
            "show" => self.show(),
            other => println!("Unknown command '{other}'; try `help`"),
        }
        true
    }

    fn start(&mut self, variant: Variant) {
        self.dispatch(UiEvent::Run(variant));
        self.report();
    }

    fn pick(&mut self, value: Option<&str>) {
        let pick = match value {
            // A bare `pick` models clicking past the prompt without
            // choosing a vertex.
            None => None,
            Some(value) => match self.controller.store().vertex_by_value(value) {
                Some(vertex) => Some(vertex.id),
                None => {
                    println!("No vertex '{value}' in the graph");
                    return;
                }
            },
        };
        self.dispatch(UiEvent::SelectVertex(pick));
        self.report();
    }

    fn add_vertex(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            println!("Usage: vertex <value>");
            return;
        };
        match self.controller.store_mut().add_vertex(value) {
            Ok(_) => println!("Added vertex {value}"),
            Err(e) => println!("Cannot add vertex: {e}"),
        }
    }

    fn add_edge(&mut self, a: Option<&str>, b: Option<&str>) {
        let (Some(a), Some(b)) = (a, b) else {
            println!("Usage: edge <a> <b>");
            return;
        };
        let store = self.controller.store_mut();
        let u = store.vertex_by_value(a).map(|v| v.id);
        let v = store.vertex_by_value(b).map(|v| v.id);
        match (u, v) {
            (Some(u), Some(v)) => match store.add_edge(u, v) {
                Ok(()) => println!("Added edge {a}-{b}"),
                Err(e) => println!("Cannot add edge: {e}"),
            },
            _ => println!("Both endpoints must exist; try `show`"),
        }
    }

    fn dispatch(&mut self, event: UiEvent) {
        if let Err(e) = self.controller.dispatch(event) {
            println!("Run aborted: {e}");
        }
    }

    /// Print the latest narration and stats, the way the original page's
    /// two consoles showed them.
    fn report(&self) {
        match self.controller.narration() {
            Some(narration) => println!("> {narration}"),
            None => println!("> {DEFAULT_MESSAGE}"),
        }
        if let Some(stats) = self.controller.stats() {
            if self.json_stats {
                match serde_json::to_string(stats) {
                    Ok(json) => println!("  {json}"),
                    Err(e) => println!("  (stats unavailable: {e})"),
                }
            } else {
                println!("  {stats}");
            }
        }
    }

    /// Print the graph: vertices with marks, edges with tree highlights.
    fn show(&self) {
        let store = self.controller.store();
        if store.is_empty() {
            println!("(empty graph)");
            return;
        }
        let marks: Vec<String> = store
            .vertices()
            .map(|v| {
                if v.mark {
                    format!("[{}]", v.value)
                } else {
                    v.value.clone()
                }
            })
            .collect();
        println!("Vertices: {}", marks.join(" "));

        let tree = self.controller.discovery_tree();
        let highlight = self.controller.edge_marking_active();
        for (u, v) in store.edges() {
            let in_tree = tree.is_some_and(|t| t.contains_edge(u, v));
            let marker = if highlight && in_tree { " *" } else { "" };
            println!(
                "  {} - {}{marker}",
                store.value_of(u).unwrap_or("?"),
                store.value_of(v).unwrap_or("?")
            );
        }
    }
}
