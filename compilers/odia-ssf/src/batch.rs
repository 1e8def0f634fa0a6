use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use odia_translit::Transliterator;

use crate::analyzer::Analyzer;
use crate::driver::Annotator;
use crate::AnnotateError;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> AnnotateError + '_ {
    move |source| AnnotateError::Io { path: path.to_path_buf(), source }
}

/// `doc.txt` → `doc_mor.txt`, `doc` → `doc_mor`.
pub fn output_file_name(name: &str) -> String {
    match name.find(".txt") {
        Some(i) => format!("{}_mor.txt", &name[..i]),
        None => format!("{}_mor", name),
    }
}

pub fn read_lines(path: &Path) -> Result<Vec<String>, AnnotateError> {
    let content = fs::read_to_string(path).map_err(io_error(path))?;
    Ok(content.lines().map(str::to_string).collect())
}

pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), AnnotateError> {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).map_err(io_error(path))
}

/// Every regular file under `dir`, recursively, in path order.
pub fn collect_files(dir: &Path) -> Result<Vec<PathBuf>, AnnotateError> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current).map_err(io_error(&current))? {
            let path = entry.map_err(io_error(&current))?.path();
            if path.is_dir() {
                pending.push(path);
            } else {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Annotates one file, or every file under a directory into a flat output
/// directory. Returns the number of files written.
pub fn annotate_path<A: Analyzer, T: Transliterator>(
    annotator: &mut Annotator<'_, A, T>,
    input: &Path,
    output: &Path,
) -> Result<usize, AnnotateError> {
    if !input.is_dir() {
        let lines = read_lines(input)?;
        write_lines(output, &annotator.annotate_lines(&lines)?)?;
        info!("annotated {} -> {}", input.display(), output.display());
        return Ok(1);
    }

    fs::create_dir_all(output).map_err(io_error(output))?;
    let files = collect_files(input)?;
    for file in &files {
        let Some(name) = file.file_name() else { continue };
        let name = match name.to_str() {
            Some(name) => name.to_string(),
            None => {
                warn!("non UTF-8 file name {}, writing with lossy name", file.display());
                name.to_string_lossy().into_owned()
            }
        };

        let target = output.join(output_file_name(&name));
        let lines = read_lines(file)?;
        write_lines(&target, &annotator.annotate_lines(&lines)?)?;
        info!("annotated {} -> {}", file.display(), target.display());
    }
    Ok(files.len())
}
