use crate::file_reader;
use crate::fragment_files;
use crate::fragment_resolver::FragmentResolver;
use crate::key_value_arg::parse_key_value;
use crate::output_utils;
use crate::template_source::TemplateSource;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use std::collections::HashMap;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ComposeCmd {
    #[arg(
        help="Paths to fragment template files or directories containing \
             them. Each fragment is referenced as `${<file stem>}`.",
        long="fragments",
        short='f',
    )]
    fragment_paths: Vec<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for \
             fragment files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Print the assembled document text without parsing and \
             re-printing it.",
        long,
    )]
    raw: bool,

    #[arg(
        help="Path to the query template file to compose.",
        name="TEMPLATE_FILE",
        required=true,
    )]
    template_path: PathBuf,

    #[arg(
        help="Plain value to splice in wherever `${KEY}` appears.",
        long="var",
        value_name="KEY=VALUE",
        value_parser=parse_key_value,
    )]
    vars: Vec<(String, String)>,
}

#[inherent::inherent]
impl RunnableCommand for ComposeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.compose() {
            Ok(document) => CommandResult::stdout(format_args!("{document}")),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to compose {:?}: {err:#}",
                output_utils::RED_X,
                self.template_path,
            )),
        }
    }
}

impl ComposeCmd {
    fn compose(&self) -> anyhow::Result<String> {
        let keyed_fragment_paths = self.find_fragment_files()?;
        log::debug!(
            "Found {} fragment template files.",
            keyed_fragment_paths.len(),
        );
        let fragment_sources = load_fragment_sources(&keyed_fragment_paths)?;

        let template_content = file_reader::read_content(&self.template_path)?;
        let template_source = TemplateSource::parse(&template_content)
            .with_context(|| format!("Invalid template {:?}", self.template_path))?;

        let vars: HashMap<String, String> = self.vars.iter().cloned().collect();
        let mut resolver = FragmentResolver::new(&fragment_sources, &vars)?;
        let template = resolver.resolve_template(&template_source)?;

        if self.raw {
            let mut text = libgraphql_compose::compose_query_text(template);
            if !text.ends_with('\n') {
                text.push('\n');
            }
            return Ok(text);
        }

        let document = libgraphql_compose::create_query(template)?;
        Ok(document.to_string())
    }

    fn find_fragment_files(&self) -> anyhow::Result<Vec<(String, PathBuf)>> {
        let graphql_file_exts = fragment_files::normalize_file_exts(
            &self.graphql_file_exts,
        );

        let mut file_paths = vec![];
        for path in &self.fragment_paths {
            let named_explicitly = path.is_file();
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!(
                    "Failed to scan fragment files at/under {path:?}",
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                if fragment_files::is_fragment_file(
                    entry_path,
                    named_explicitly,
                    &graphql_file_exts,
                ) {
                    log::trace!("Found fragment file at {entry_path:#?}.");
                    // Canonical paths let a file reached both by a walk and
                    // by name be recognized as the same file.
                    let canonical_path = std::fs::canonicalize(entry_path)
                        .with_context(|| format!("Failed to resolve {entry_path:?}"))?;
                    file_paths.push(canonical_path);
                } else {
                    log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                }
            }
        }

        Ok(fragment_files::key_fragment_files(file_paths)?)
    }
}

fn load_fragment_sources(
    keyed_paths: &[(String, PathBuf)],
) -> anyhow::Result<HashMap<String, TemplateSource>> {
    let mut sources = HashMap::new();
    for (key, file_path) in keyed_paths {
        let content = file_reader::read_content(file_path)?;
        let source = TemplateSource::parse(&content)
            .with_context(|| format!("Invalid fragment template {file_path:?}"))?;
        sources.insert(key.clone(), source);
    }
    Ok(sources)
}
