use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

/// Normalizes `--graphql-file-exts` values so that `graphql` and `.graphql`
/// both match `*.graphql`.
pub(crate) fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .collect()
}

/// Whether `path` is picked up as a fragment template. A file named
/// explicitly on the command line is loaded whatever its extension; files
/// found by walking a directory must match one of `file_exts`.
pub(crate) fn is_fragment_file(
    path: &Path,
    named_explicitly: bool,
    file_exts: &HashSet<String>,
) -> bool {
    if named_explicitly {
        return true;
    }
    path.extension()
        .map(|ext| file_exts.contains(&*ext.to_string_lossy()))
        .unwrap_or(false)
}

/// Keys each fragment file by its file stem, in input order.
///
/// The same path listed more than once is keyed once. Two distinct paths
/// with the same stem are an error.
pub(crate) fn key_fragment_files(
    file_paths: impl IntoIterator<Item = PathBuf>,
) -> Result<Vec<(String, PathBuf)>, FragmentFileError> {
    let mut key_paths: HashMap<String, PathBuf> = HashMap::new();
    let mut seen_paths: HashSet<PathBuf> = HashSet::new();
    let mut keyed = vec![];

    for file_path in file_paths {
        if !seen_paths.insert(file_path.clone()) {
            log::trace!("Skipping already-listed fragment file {file_path:#?}.");
            continue;
        }

        let key = file_path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| FragmentFileError::NoFileStem(file_path.clone()))?;

        if let Some(first_path) = key_paths.get(&key) {
            return Err(FragmentFileError::DuplicateFragmentKey {
                key,
                first_path: first_path.clone(),
                second_path: file_path,
            });
        }

        key_paths.insert(key.clone(), file_path.clone());
        keyed.push((key, file_path));
    }

    Ok(keyed)
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub(crate) enum FragmentFileError {
    #[error(
        "Fragment key `{key}` is defined by both {first_path:?} and \
        {second_path:?}"
    )]
    DuplicateFragmentKey {
        key: String,
        first_path: PathBuf,
        second_path: PathBuf,
    },

    #[error("No file stem to key fragment {0:?} by")]
    NoFileStem(PathBuf),
}
