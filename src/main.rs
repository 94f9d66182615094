use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use tracing_subscriber::{EnvFilter, fmt};
use weblog_analyzer::{LogAnalyzer, ParseMode, Result, log, render};

#[derive(Parser)]
#[command(name = "weblog-analyzer")]
#[command(about = "Web server access log analyzer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args)]
struct LogArgs {
    /// Access log to analyze.
    #[arg(long, env = "WEBLOG_FILE")]
    log: String,

    /// Skip malformed lines instead of failing.
    #[arg(long)]
    lenient: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every count table followed by the summary.
    Report {
        #[command(flatten)]
        input: LogArgs,

        #[arg(long, value_enum, default_value = "text")]
        format: Format,

        /// Include the log lines (before the tables, or as `lines` in JSON).
        #[arg(long)]
        data: bool,
    },
    /// Accesses per hour of day.
    Hourly {
        #[command(flatten)]
        input: LogArgs,
    },
    /// Accesses per day.
    Daily {
        #[command(flatten)]
        input: LogArgs,
    },
    /// Accesses per month.
    Monthly {
        #[command(flatten)]
        input: LogArgs,
    },
    /// Accesses per year.
    Yearly {
        #[command(flatten)]
        input: LogArgs,
    },
    /// Busiest/quietest periods and averages.
    Summary {
        #[command(flatten)]
        input: LogArgs,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load(input: &LogArgs) -> Result<LogAnalyzer> {
    let mode = if input.lenient {
        ParseMode::Lenient
    } else {
        ParseMode::Strict
    };
    let log_file = log::parse_log_file(&input.log, mode)?;
    if log_file.skipped > 0 {
        tracing::info!(
            path = %input.log,
            skipped = log_file.skipped,
            "ignored malformed log lines"
        );
    }

    let mut analyzer = LogAnalyzer::new(log_file);
    analyzer.aggregate()?;
    Ok(analyzer)
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.cmd {
        Commands::Report {
            input,
            format,
            data,
        } => {
            let analyzer = load(&input)?;
            let counts = analyzer.counts()?;

            match format {
                Format::Json => {
                    let mut report = render::ReportData::new(counts, analyzer.log().skipped);
                    if data {
                        report = report.with_lines(&analyzer.log().lines);
                    }
                    render::write_json_report(&report, &mut out)?;
                }
                Format::Text => {
                    if data {
                        render::print_data(analyzer.log(), &mut out)?;
                        writeln!(out)?;
                    }
                    render::print_hourly_counts(counts, &mut out)?;
                    writeln!(out)?;
                    render::print_daily_counts(counts, &mut out)?;
                    writeln!(out)?;
                    render::print_monthly_counts(counts, &mut out)?;
                    writeln!(out)?;
                    render::print_yearly_counts(counts, &mut out)?;
                    writeln!(out)?;
                    render::print_summary(counts, &mut out)?;
                }
            }
        }
        Commands::Hourly { input } => {
            render::print_hourly_counts(load(&input)?.counts()?, &mut out)?;
        }
        Commands::Daily { input } => {
            render::print_daily_counts(load(&input)?.counts()?, &mut out)?;
        }
        Commands::Monthly { input } => {
            render::print_monthly_counts(load(&input)?.counts()?, &mut out)?;
        }
        Commands::Yearly { input } => {
            render::print_yearly_counts(load(&input)?.counts()?, &mut out)?;
        }
        Commands::Summary { input } => {
            render::print_summary(load(&input)?.counts()?, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
