use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqlexec_core::DocumentBuilder;
use gqlexec_core::ast;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for \
             executable documents within a directory.",
        long,
        value_delimiter = ',',
    )]
    query_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more executable-document files or directories \
             containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut failures: Vec<String> = vec![];

        // Normalize the set of file extensions to filter with
        let query_file_exts: HashSet<String> =
            self.query_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        // Find all document files recursively located at or under each path
        // passed as an arg.
        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if entry.file_type().is_file() {
                            log::trace!("Found file at {path:#?}.");
                            if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                                && query_file_exts.contains::<String>(&ext.into()) {
                                file_paths.push(path.to_path_buf());
                            }
                        } else {
                            log::trace!("Skipping non-file: {path:#?}.");
                        }
                    },

                    Err(e) => {
                        failures.push(format!(
                            "{}: {e}",
                            path.display(),
                        ));
                        continue
                    },
                }
            }
        }

        // If the user specifies a single file path as an argument, presume
        // the user explicitly wants that file checked -- even if its file
        // extension doesn't match one of the extensions specified in
        // `query_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --query-file-exts ({}).",
                query_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_path_buf());
        }

        log::debug!(
            "Found {} executable documents to be checked.",
            file_paths.len(),
        );

        let builder = DocumentBuilder::new();
        let mut num_operations = 0;
        let mut num_fragments = 0;
        for file_path in &file_paths {
            let content = match std::fs::read_to_string(file_path) {
                Ok(content) => content,
                Err(e) => {
                    failures.push(format!("{}: {e}", file_path.display()));
                    continue
                },
            };

            match builder.build(&content) {
                Ok(document) => {
                    for def in &document.definitions {
                        match def {
                            ast::Definition::Operation(_) => num_operations += 1,
                            ast::Definition::Fragment(_) => num_fragments += 1,
                        }
                    }
                },

                Err(syntax_error) => failures.push(format!(
                    "{}: {syntax_error}",
                    file_path.display(),
                )),
            }
        }

        if failures.is_empty() {
            CommandResult::stdout(format_args!(
                concat!(
                    "{} All executable documents parsed successfully:\n",
                    "  * Checked {} files.\n",
                    "  * Built {} operations.\n",
                    "  * Built {} fragment definitions.",
                ),
                output_utils::GREEN_CHECK,
                file_paths.len(),
                num_operations,
                num_fragments,
            ))
        } else {
            CommandResult::stderr(format_args!(
                "{} Some executable documents failed to parse:\n{}",
                output_utils::RED_X,
                failures.join("\n"),
            ))
        }
    }
}
