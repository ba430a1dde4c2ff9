#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use restbudget::{
    io,
    model::AllocationInput,
    report::{ReportRenderer, TextReport},
    FeasibilityAnalyzer,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de faisabilité d'un budget de jours de repos
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Sans sous-commande : démonstration avec 336 travailleurs, 22 jours, 410 jours de repos
    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Args, Debug)]
struct Params {
    /// Nombre de travailleurs
    #[arg(long, default_value_t = AllocationInput::DEFAULT_WORKERS, allow_negative_numbers = true)]
    workers: i64,
    /// Nombre de jours de la période
    #[arg(long, default_value_t = AllocationInput::DEFAULT_DAYS, allow_negative_numbers = true)]
    days: i64,
    /// Budget total de jours de repos
    #[arg(long, default_value_t = AllocationInput::DEFAULT_MAX_REST, allow_negative_numbers = true)]
    max_rest: i64,
    /// Fichier JSON d'entrée (prioritaire sur les options)
    #[arg(long)]
    input: Option<String>,
}

impl Params {
    fn resolve(&self) -> Result<AllocationInput> {
        match &self.input {
            Some(path) => io::load_input_json(path),
            None => Ok(AllocationInput::new(self.workers, self.days, self.max_rest)?),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyser la faisabilité et afficher le rapport
    Analyze {
        #[command(flatten)]
        params: Params,
        /// Total de repos observé à comparer (optionnel)
        #[arg(long, allow_negative_numbers = true)]
        observed: Option<i64>,
        /// Export JSON du résultat
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Lister les objectifs travail/repos par travailleur
    Targets {
        #[command(flatten)]
        params: Params,
        /// Export CSV au lieu de l'affichage
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let result = match cli.cmd {
        None => {
            let result = FeasibilityAnalyzer::new(AllocationInput::default())?.analyze();
            print!("{}", TextReport.render(&result, None));
            result
        }
        Some(Commands::Analyze {
            params,
            observed,
            out_json,
        }) => {
            let result = FeasibilityAnalyzer::new(params.resolve()?)?.analyze();
            let comparison = observed.map(|o| result.compare(o)).transpose()?;
            print!("{}", TextReport.render(&result, comparison.as_ref()));
            if let Some(path) = out_json {
                io::export_result_json(path, &result)?;
            }
            result
        }
        Some(Commands::Targets { params, out_csv }) => {
            let result = FeasibilityAnalyzer::new(params.resolve()?)?.analyze();
            match out_csv {
                Some(path) => io::export_targets_csv(path, &result)?,
                None => {
                    for t in result.targets() {
                        println!("{} {} {}", t.worker, t.work_days, t.rest_days);
                    }
                }
            }
            result
        }
    };

    std::process::exit(result.exit_code());
}

