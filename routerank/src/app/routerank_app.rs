use super::{analyze, report, AppError};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RouterankAppArguments {
    #[command(subcommand)]
    pub app: App,
}

#[derive(Subcommand)]
pub enum App {
    #[command(
        name = "analyze",
        about = "rank the candidate routes of a batch of origin/destination queries"
    )]
    Analyze {
        /// TOML or JSON engine configuration. defaults apply when omitted.
        #[arg(long)]
        config_file: Option<String>,
        /// JSON file with one query object or an array of queries
        #[arg(long)]
        query_file: String,
        /// JSON file to write the array of analysis results to
        #[arg(long)]
        output_file: String,
        /// CSV analysis history. read for rolling congestion inputs and appended with each result.
        #[arg(long)]
        history_file: Option<String>,
        /// CSV file to write the flat per-route export of every result to
        #[arg(long)]
        export_file: Option<String>,
        /// number of worker threads, all cores when omitted
        #[arg(long)]
        parallelism: Option<usize>,
    },
    #[command(
        name = "report",
        about = "summarize the analysis history of an origin/destination pair"
    )]
    Report {
        /// CSV analysis history written by the analyze command
        #[arg(long)]
        history_file: String,
        /// route id ("{origin}→{destination}") or route id prefix to report on
        #[arg(long)]
        route_id: String,
        /// history window in days for reliability and peak hours
        #[arg(long, default_value_t = report::DEFAULT_REPORT_DAYS)]
        days: u32,
        /// hours from now to forecast congestion for
        #[arg(long, default_value_t = report::DEFAULT_HOURS_AHEAD)]
        hours_ahead: u32,
        /// history window in days for traffic hotspots
        #[arg(long, default_value_t = report::DEFAULT_HOTSPOT_DAYS)]
        hotspot_days: u32,
    },
}

impl App {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            Self::Analyze {
                config_file,
                query_file,
                output_file,
                history_file,
                export_file,
                parallelism,
            } => analyze::run(
                config_file.as_ref(),
                query_file,
                output_file,
                history_file.as_ref(),
                export_file.as_ref(),
                *parallelism,
            ),
            Self::Report {
                history_file,
                route_id,
                days,
                hours_ahead,
                hotspot_days,
            } => {
                let report = report::run(history_file, route_id, *days, *hours_ahead, *hotspot_days)?;
                println!("{}", serde_json::to_string_pretty(&report)?);
                Ok(())
            }
        }
    }
}
