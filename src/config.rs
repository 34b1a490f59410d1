use std::path::{Path, PathBuf};

use inflections::Inflect;

use crate::errors::Error;

/// Everything the pipeline needs to know besides the table itself.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path of the input CSV file, as given on the command line. Rendered
    /// verbatim into the banner and the trailing input echo.
    pub input: PathBuf,
    /// Validated project-name prefix.
    pub prefix: Prefix,
    /// Directory the generated files go into. Current directory when absent.
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// File name of the generated header, e.g. `zebra_gpio.h`.
    pub fn header_name(&self) -> String {
        format!("{}_gpio.h", self.prefix.lower())
    }

    /// File name of the generated source, e.g. `zebra_gpio.c`.
    pub fn source_name(&self) -> String {
        format!("{}_gpio.c", self.prefix.lower())
    }

    pub fn header_path(&self) -> PathBuf {
        self.out_dir().join(self.header_name())
    }

    pub fn source_path(&self) -> PathBuf {
        self.out_dir().join(self.source_name())
    }

    fn out_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(Path::new(""))
    }
}

/// A short ASCII project name, case-folded once at construction.
///
/// The lowercase form names the output files; the uppercase form prefixes
/// every generated symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefix {
    lower: String,
    upper: String,
}

impl Prefix {
    /// Validates and case-folds the prefix given on the command line.
    ///
    /// Every character must be printable ASCII; the first one that isn't
    /// fails the whole run, before any file is opened.
    pub fn new(s: &str) -> Result<Self, Error> {
        if !s.chars().all(|c| c.is_ascii() && !c.is_ascii_control()) {
            return Err(Error::InvalidPrefix(s.to_string()));
        }
        Ok(Self {
            lower: s.to_lower_case(),
            upper: s.to_upper_case(),
        })
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn upper(&self) -> &str {
        &self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(prefix: &str) -> Config {
        Config {
            input: PathBuf::from("pinout.csv"),
            prefix: Prefix::new(prefix).unwrap(),
            output_dir: None,
        }
    }

    #[test]
    fn prefix_case_folds() {
        let p = Prefix::new("Zebra").unwrap();
        assert_eq!(p.lower(), "zebra");
        assert_eq!(p.upper(), "ZEBRA");
    }

    #[test]
    fn prefix_rejects_non_printable() {
        assert_eq!(
            Prefix::new("ze\tbra"),
            Err(Error::InvalidPrefix("ze\tbra".to_string()))
        );
        assert!(Prefix::new("zèbre").is_err());
    }

    #[test]
    fn output_names_use_lowercase_prefix() {
        let c = config("ZEBRA");
        assert_eq!(c.header_name(), "zebra_gpio.h");
        assert_eq!(c.source_name(), "zebra_gpio.c");
        assert_eq!(c.source_path(), PathBuf::from("zebra_gpio.c"));
    }

    #[test]
    fn output_dir_prepends() {
        let mut c = config("zebra");
        c.output_dir = Some(PathBuf::from("out"));
        assert_eq!(c.header_path(), PathBuf::from("out/zebra_gpio.h"));
    }
}
