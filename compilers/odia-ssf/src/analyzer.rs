use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

/// The external morphological analyzer. Given a token in the working
/// representation it returns the raw analysis line, which is the token echoed
/// back without any `<...>` field when nothing was found.
pub trait Analyzer {
    fn analyze(&mut self, working: &str) -> Result<String, AnalyzerError>;
}

impl<A: Analyzer + ?Sized> Analyzer for &mut A {
    fn analyze(&mut self, working: &str) -> Result<String, AnalyzerError> {
        (**self).analyze(working)
    }
}

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("analyzer automaton not found: {0}")]
    MissingDictionary(PathBuf),
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("analyzer I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("analyzer exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

/// Runs lttoolbox's `lt-proc` against a compiled automaton, one blocking call
/// per token.
#[derive(Debug, Clone)]
pub struct LtProcAnalyzer {
    program: PathBuf,
    dictionary: PathBuf,
}

impl LtProcAnalyzer {
    pub fn new(
        program: impl Into<PathBuf>,
        dictionary: impl Into<PathBuf>,
    ) -> Result<Self, AnalyzerError> {
        let dictionary = dictionary.into();
        if !dictionary.is_file() {
            return Err(AnalyzerError::MissingDictionary(dictionary));
        }
        Ok(Self { program: program.into(), dictionary })
    }
}

impl Analyzer for LtProcAnalyzer {
    fn analyze(&mut self, working: &str) -> Result<String, AnalyzerError> {
        let mut child = Command::new(&self.program)
            .arg(&self.dictionary)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| AnalyzerError::Spawn { program: self.program.clone(), source })?;

        {
            // Dropping stdin closes the pipe so lt-proc sees end of input.
            let mut stdin = child.stdin.take().ok_or_else(|| {
                io::Error::new(io::ErrorKind::BrokenPipe, "analyzer stdin unavailable")
            })?;
            writeln!(stdin, "{}", working)?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(AnalyzerError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dictionary_is_fatal() {
        let err = LtProcAnalyzer::new("lt-proc", "/nonexistent/odia.bin").unwrap_err();
        assert!(matches!(err, AnalyzerError::MissingDictionary(_)));
    }

    #[test]
    fn test_missing_program_is_fatal() {
        let dict = tempfile::NamedTempFile::new().unwrap();
        let mut analyzer = LtProcAnalyzer::new("/nonexistent/lt-proc", dict.path()).unwrap();
        assert!(matches!(analyzer.analyze("Gara"), Err(AnalyzerError::Spawn { .. })));
    }
}
