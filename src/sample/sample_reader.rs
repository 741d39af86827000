use std::path::Path;
use std::fs::File;
use std::io::BufReader;

use super::sample_struct::Sample;
use crate::{Error, Result};


/// A struct that returns [`Sample`].
/// Using this struct, one can read a tab-separated file to [`Sample`].
/// The last column of each row is the `yes`/`no` label.
/// # Example
/// The following code is a simple example to read a TSV file.
/// ```no_run
/// use miniclassifiers::SampleReader;
/// let filename = "/path/to/train.txt";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self { file: None, has_header: true, }
    }
}


impl<P> SampleReader<P> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `true.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns [`Sample`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .ok_or_else(|| {
                Error::InvalidParameter(
                    "the file name for the sample is not set".to_string()
                )
            })?;
        let file = File::open(file)?;
        Sample::from_reader(BufReader::new(file), self.has_header)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_without_file_is_an_error() {
        let result = SampleReader::<&str>::default().read();
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let result = SampleReader::default()
            .file("/nonexistent/miniclassifiers/train.txt")
            .read();
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
