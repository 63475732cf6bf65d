use super::AnalysisQuery;
use crate::app::AppError;
use crate::model::analytics::rolling_congestion;
use crate::model::engine::{EngineConfig, RouteScoringEngine};
use crate::model::persistence::{
    write_results_csv, AnalysisRecord, AnalysisStore, CsvAnalysisStore,
};
use crate::model::prediction::PredictionContext;
use chrono::Utc;
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use routerank_core::model::AnalysisResult;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// runs every query of a query file and writes the results.
///
/// # Arguments
/// * `config_file` - optional TOML or JSON [`EngineConfig`]
/// * `query_file` - JSON file with one query or an array of queries
/// * `output_file` - destination of the JSON array of results. a query that
///   fails is written as an error object in its position.
/// * `history_file` - optional CSV history. it is read once before any query
///   runs, so every query of the batch sees the same rolling congestion
///   statistics. results are appended afterwards in query order.
/// * `export_file` - optional CSV export of every scored route
/// * `parallelism` - worker thread count, all cores when None
pub fn run(
    config_file: Option<&String>,
    query_file: &String,
    output_file: &String,
    history_file: Option<&String>,
    export_file: Option<&String>,
    parallelism: Option<usize>,
) -> Result<(), AppError> {
    let conf = match config_file {
        None => EngineConfig::default(),
        Some(f) => {
            log::info!("reading routerank configuration from {f}");
            EngineConfig::try_from(f).map_err(AppError::ConfigurationError)?
        }
    };
    let engine = RouteScoringEngine::try_from(&conf)?;
    let store = history_file.map(|f| CsvAnalysisStore::new(Path::new(f)));
    let history = match &store {
        Some(s) => s.read_all()?,
        None => vec![],
    };
    let queries = read_queries(query_file)?;
    log::info!("running {} route analyses", queries.len());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(parallelism.unwrap_or_default())
        .build()?;
    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .desc("route analysis")
            .total(queries.len())
            .build()
            .map_err(AppError::ProgressBarError)?,
    ));

    let outcomes = pool.install(|| {
        queries
            .into_par_iter()
            .enumerate()
            .map(|(idx, query)| {
                let outcome = run_query(query, &engine, &conf, &history);
                if let Ok(mut b) = bar.lock() {
                    let _ = b.update(1);
                }
                (idx, outcome)
            })
            .collect::<Vec<_>>()
    });
    eprintln!();

    let mut results = vec![];
    let mut output = Vec::with_capacity(outcomes.len());
    for (idx, outcome) in outcomes.into_iter() {
        match outcome {
            Ok(result) => {
                output.push(serde_json::to_value(&result)?);
                results.push(result);
            }
            Err(e) => {
                log::warn!("query {idx} failed: {e}");
                output.push(json!({ "query_index": idx, "error": e.to_string() }));
            }
        }
    }
    log::info!(
        "{} of {} analyses succeeded",
        results.len(),
        output.len()
    );

    if let Some(store) = &store {
        let mut stored = 0;
        for result in results.iter() {
            stored += store.save_result(result)?;
        }
        log::info!("appended {stored} records to {}", store.path().display());
    }

    let serialized = serde_json::to_string_pretty(&output)?;
    std::fs::write(output_file, serialized)
        .map_err(|e| AppError::OutputFileError(output_file.clone(), e))?;
    if let Some(f) = export_file {
        write_results_csv(&results, Path::new(f))?;
        log::info!("wrote route export to {f}");
    }
    Ok(())
}

/// reads a query file holding a single query object or an array of them.
/// entries are decoded one by one so that a malformed entry only fails
/// its own query.
pub fn read_queries(query_file: &String) -> Result<Vec<Value>, AppError> {
    let contents = std::fs::read_to_string(query_file)
        .map_err(|e| AppError::QueryFileError(query_file.clone(), e.to_string()))?;
    let value: Value = serde_json::from_str(&contents)
        .map_err(|e| AppError::QueryFileError(query_file.clone(), e.to_string()))?;
    match value {
        Value::Array(queries) => Ok(queries),
        Value::Object(_) => Ok(vec![value]),
        other => Err(AppError::QueryFileError(
            query_file.clone(),
            format!("expected a query object or an array of queries, found {other}"),
        )),
    }
}

/// runs a single query. the rolling congestion statistics of the
/// origin/destination pair in `history` feed the prediction context.
pub fn run_query(
    query: Value,
    engine: &RouteScoringEngine,
    conf: &EngineConfig,
    history: &[AnalysisRecord],
) -> Result<AnalysisResult, AppError> {
    let query: AnalysisQuery = serde_json::from_value(query)?;
    let request = &query.request;
    let candidates = query
        .candidates
        .candidates(&request.origin, &request.destination)?;
    let requested_at = query.requested_at.unwrap_or_else(Utc::now);
    let mut context = PredictionContext::new(requested_at);

    let route_id = AnalysisResult::derive_route_id(&request.origin, &request.destination);
    let pair_history = history
        .iter()
        .filter(|r| r.matches_route(&route_id))
        .cloned()
        .collect::<Vec<_>>();
    if let Some(rolling) = rolling_congestion(&pair_history, requested_at, conf.rolling_window_days)
    {
        log::debug!(
            "{route_id}: rolling congestion {:.3} ± {:.3} from {} analyses",
            rolling.mean,
            rolling.std,
            rolling.data_points
        );
        context = context.with_rolling_congestion(rolling.mean, rolling.std);
    }

    Ok(engine.analyze(request, &candidates, &context)?)
}
