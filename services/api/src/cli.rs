use crate::questionnaire::{print_faq, run_assessment, run_results, AssessArgs, ResultsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use diabeat::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Diabeat",
    about = "Anonymous diabetes risk screening from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Take the risk assessment in the terminal
    Assess(AssessArgs),
    /// Show the results view for a known score
    Results(ResultsArgs),
    /// Print the frequently asked questions
    Faq,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assessment(args),
        Command::Results(args) => run_results(args),
        Command::Faq => {
            print_faq();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["diabeat"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_results_score() {
        let cli = Cli::try_parse_from(["diabeat", "results", "--score", "64"]).expect("parses");
        match cli.command {
            Some(Command::Results(args)) => assert_eq!(args.score, 64),
            other => panic!("expected results command, got {other:?}"),
        }
    }

    #[test]
    fn parses_assess_flags() {
        let cli = Cli::try_parse_from(["diabeat", "assess", "--breakdown"]).expect("parses");
        match cli.command {
            Some(Command::Assess(args)) => {
                assert!(args.breakdown);
                assert!(args.answers.is_none());
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_scores() {
        assert!(Cli::try_parse_from(["diabeat", "results", "--score", "101"]).is_err());
    }
}
