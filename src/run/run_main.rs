use crate::groups::{GroupDoc, InvalidGroups};
use crate::run::cli::OutputFormat;
use crate::run::RunOptions;
use crate::{output, sum};
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::{env, io};

/// The run's overall possible error.
#[derive(Debug)]
pub enum Error {
    /// The input failed to parse into groups of integers.
    ///
    /// This comes from [`GroupDoc::parse`].
    InputParse(InvalidGroups),

    /// Couldn't read an input file.
    FileReadError(Input, io::Error),
}

impl std::error::Error for Error {}

/// Stdin or an input file by path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Input {
    Stdin,
    FilePath(String),
}

impl Error {
    pub(crate) fn from_io_error(error: io::Error, file: Input) -> Self {
        Error::FileReadError(file, error)
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Stdin => f.write_str("stdin"),
            Input::FilePath(file) => write!(f, "file {file:?}"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InputParse(err) => {
                writeln!(f, "Input parse error:")?;
                writeln!(f, "{err}")
            }
            Error::FileReadError(file, err) => {
                if env::var("TAILSUM_PORTABLE_ERRORS").unwrap_or_default().is_empty() {
                    writeln!(f, "{err} while reading {file}")
                } else {
                    writeln!(f, "{} while reading {file}", err.kind())
                }
            }
        }
    }
}

/// A simple facade for handling I/O.
///
/// This trait lets you do "I/O-y stuff" like mocking out stdin or reading files. The [`run`] method
/// uses it.
pub trait OsFacade {
    /// Read stdin (or your mock of it) to a `String`.
    fn read_stdin(&self) -> io::Result<String>;

    /// Read a file path (or your mock of one) to a `String`.
    fn read_file(&self, path: &str) -> io::Result<String>;

    /// Get a writer for stdout (or your mock of it).
    fn stdout(&mut self) -> impl Write;

    /// Handle an error.
    fn write_error(&mut self, err: Error);

    /// Read a slice of file paths into a single, concatenated `String`.
    ///
    /// The default implementation (which you should feel free to use) treats the file path `"-"` as
    /// stdin. The first `"-"` reads all of stdin (via [`Self::read_stdin`]), and subsequent `"-"`s
    /// get silently ignored.
    fn read_all(&self, group_file_paths: &[String]) -> Result<String, Error> {
        if group_file_paths.is_empty() {
            return self.read_stdin().map_err(|err| Error::from_io_error(err, Input::Stdin));
        }
        let mut contents = String::new();
        let mut have_read_stdin = false;
        for path in group_file_paths {
            if path == "-" {
                if !have_read_stdin {
                    contents.push_str(
                        &self
                            .read_stdin()
                            .map_err(|err| Error::from_io_error(err, Input::Stdin))?,
                    );
                    have_read_stdin = true
                }
            } else {
                let path_contents = self
                    .read_file(path)
                    .map_err(|err| Error::from_io_error(err, Input::FilePath(path.to_string())))?;
                contents.push_str(&path_contents);
            }
            contents.push('\n');
        }
        Ok(contents)
    }
}

/// Runs tailsum end to end.
///
/// This uses the provided [RunOptions] and [OsFacade] to read input into a [`GroupDoc`], computes
/// one tail sum per group, and writes the sums to the given [`OsFacade`] in the format specified by
/// [`RunOptions::output`].
///
/// Returns `true` on success. Once the input has parsed, the computation itself cannot fail, so the
/// only `false` cases are read and parse errors; those get reported via [`OsFacade::write_error`].
pub fn run(cli: &RunOptions, os: &mut impl OsFacade) -> bool {
    match run_or_error(cli, os) {
        Ok(()) => true,
        Err(err) => {
            os.write_error(err);
            false
        }
    }
}

fn run_or_error(cli: &RunOptions, os: &mut impl OsFacade) -> Result<(), Error> {
    let contents_str = os.read_all(&cli.group_file_paths)?;
    let options = cli.into();
    let GroupDoc { groups } = GroupDoc::parse(&contents_str, &options).map_err(Error::InputParse)?;

    let sums = sum::sum_all_tails(&groups);

    if !cli.quiet {
        let mut stdout = os.stdout();
        match cli.output {
            OutputFormat::Plain => {
                output::write_plain(&mut stdout, &sums);
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut stdout, &output::SerializableSums::new(&sums)).unwrap();
            }
        }
    }

    Ok(())
}
