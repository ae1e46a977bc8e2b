use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "nine-box calibration engine")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the calibration HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Force a population document onto a Gauss curve and print the report
    Force {
        /// JSON list of employee records
        #[arg(short, long)]
        input: PathBuf,
        /// Target mean (defaults to 2.5)
        #[arg(short, long)]
        mean: Option<f64>,
        /// Target standard deviation (defaults to 0.5)
        #[arg(short = 's', long = "std-dev")]
        std_dev: Option<f64>,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print descriptive statistics of a population document
    Stats {
        /// JSON list of employee records
        #[arg(short, long)]
        input: PathBuf,
        /// Print JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_force_with_target() {
        let cli = Cli::parse_from([
            "nine_box_calibration",
            "force",
            "--input",
            "people.json",
            "--mean",
            "3",
            "-s",
            "0.4",
        ]);

        assert_eq!(
            cli.command,
            Command::Force {
                input: PathBuf::from("people.json"),
                mean: Some(3.0),
                std_dev: Some(0.4),
                output: None,
            }
        );
    }

    #[test]
    fn test_serve_default_port() {
        let cli = Cli::parse_from(["nine_box_calibration", "serve"]);
        assert_eq!(cli.command, Command::Serve { port: 3000 });
    }

    #[test]
    fn test_stats_json_flag() {
        let cli = Cli::parse_from(["nine_box_calibration", "stats", "-i", "people.json", "--json"]);
        assert_eq!(
            cli.command,
            Command::Stats {
                input: PathBuf::from("people.json"),
                json: true,
            }
        );
    }
}
