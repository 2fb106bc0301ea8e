use crate::groups;
use crate::groups::InputFormat;
use clap::{Parser, ValueEnum};
use derive_builder::Builder;
use std::fmt::{Display, Formatter};

macro_rules! create_options_structs {
    (
        $(
            $(#[$meta:meta])*
            clap $clap:tt
            pub $name:ident : $ty:ty
        ),* $(,)?
    ) => {
        #[derive(Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Parser)]
        #[command(version, about, long_about = None)]
        #[doc(hidden)]
        pub struct CliOptions {
            $(
            $(#[$meta])*
            #[arg$clap]
            pub(crate) $name: $ty,
            )*

            // clap-only stuff:

            /// An optional list of files to read groups from, by path. If not provided, standard
            /// input will be used.
            ///
            /// If these are provided, tailsum acts as if they were all concatenated into a single
            /// input, with the files' groups appearing in the order you list them.
            ///
            /// A path of "-" represents standard input. If you provide the same file twice, tailsum
            /// reads it twice, unless that file is "-"; all but the first "-" path are ignored.
            #[arg()]
            pub(crate) group_file_paths: Vec<String>,
        }

        /// Options analogous to the tailsum CLI's switches.
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Builder)]
        pub struct RunOptions {
            $(
            $(#[$meta])*
            pub $name: $ty,
            )*

            /// Files to read groups from; empty means stdin. This is analogous to the positional
            /// paths in the CLI arguments.
            pub group_file_paths: Vec<String>,
        }

        impl From<CliOptions> for RunOptions {
            fn from(value: CliOptions) -> Self {
                Self {
                    $($name: value.$name,)*
                    group_file_paths: value.group_file_paths,
                }
            }
        }
    };
}

create_options_structs! {
    /// The input format: lines of whitespace-separated integers, or JSON arrays of arrays.
    clap(long, short, value_enum, default_value_t = InputFormat::Text)
    pub input: InputFormat,

    /// The output format: one sum per line, or a JSON object.
    clap(long, short, value_enum, default_value_t = OutputFormat::Plain)
    pub output: OutputFormat,

    /// Quiet: do not print anything to stdout. The exit code still reports whether the input
    /// parsed.
    clap(long, short)
    pub quiet: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: InputFormat::Text,
            output: OutputFormat::Plain,
            quiet: false,
            group_file_paths: vec![],
        }
    }
}

impl From<&RunOptions> for groups::ParseOptions {
    fn from(cli: &RunOptions) -> Self {
        groups::ParseOptions { format: cli.input }
    }
}

/// Output formats, analogous to `--output` in the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, ValueEnum)]
pub enum OutputFormat {
    /// Output one sum per line, in the groups' order.
    #[default]
    Plain,

    /// Output the sums as a JSON object, like `{"sums":[0,0,9,-9]}`.
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let self_str = match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        };
        f.write_str(self_str)
    }
}
