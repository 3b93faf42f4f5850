pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "A digitization toolkit for scanned print dictionaries";
pub const BIN_NAME: &str = "dicta";

/// Declarative session configuration, read from the working directory.
pub const SHELL_FILE: &str = "shell.json";
/// Catalog file name, both in-project and under the user config dir.
pub const CATALOG_FILE: &str = "catalog.json";
pub const CONFIG_DIR: &str = "dicta";

pub const DEFAULT_GRAMMAR: &str = "entry";

/// Markers that open a continuation paragraph rather than a new entry.
pub const CONTINUATION_MARKERS: &[char] = &['♦', '●', '○'];
/// Paragraphs shorter than this terminate the current entry group.
pub const MIN_ENTRY_CHARS: usize = 3;

pub const COMMANDS: &[(&str, &str, &[&str])] = &[
    (
        "parse",
        "Parses dictionary entries from a document export",
        &["p"],
    ),
    (
        "env",
        "Composes the session environment from shell.json",
        &["shell"],
    ),
    ("list", "Lists packages available in the catalog", &["ls"]),
    ("init", "Initializes a new shell.json file", &["new"]),
    (
        "help",
        "Shows help information for dicta or a specific command",
        &[],
    ),
];

pub const EXAMPLES: &[(&str, &str)] = &[
    ("dicta parse scan.json", "Parse a document export to YAML"),
    (
        "dicta parse scan.json -o entries.yaml",
        "Write parsed entries to a file",
    ),
    ("dicta env", "Compose the environment from shell.json"),
    ("dicta env --json", "Print the composed environment as JSON"),
    ("dicta list", "List catalog packages"),
    ("dicta init -y", "Create shell.json with defaults"),
];
