use std::process::ExitCode;
use std::sync::Arc;

use tracker_client::{
    ApiSettings, CheckRunner, HttpTrackerApi, ReplyStatus, RunnerSettings, TrackerApi,
};
use tracker_logging::{tracker_error, tracker_info};

use super::display::ConsoleDisplay;
use super::logging::{initialize, LogDestination};

pub fn run_app() -> ExitCode {
    initialize(LogDestination::File);

    let mut args = std::env::args().skip(1);
    let Some(base_url) = args.next() else {
        eprintln!("usage: tracker_app <base-url> [check|export|cleanup]");
        return ExitCode::FAILURE;
    };
    let command = args.next().unwrap_or_else(|| "check".to_string());

    let api = match HttpTrackerApi::new(ApiSettings::new(base_url)) {
        Ok(api) => Arc::new(api),
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            tracker_error!("failed to start runtime: {}", err);
            eprintln!("error: failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match command.as_str() {
        "check" => run_check(&runtime, api),
        "export" => run_export(&runtime, api.as_ref()),
        "cleanup" => run_cleanup(&runtime, api.as_ref()),
        other => {
            eprintln!("unknown command: {other}");
            ExitCode::FAILURE
        }
    }
}

fn run_check(runtime: &tokio::runtime::Runtime, api: Arc<HttpTrackerApi>) -> ExitCode {
    let display = Arc::new(ConsoleDisplay::new());
    let runner = CheckRunner::new(api, display, RunnerSettings::default());

    match runtime.block_on(runner.run()) {
        Ok(summary) => {
            tracker_info!(
                "manual check finished with {} projects added",
                summary.total_projects_added
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_export(runtime: &tokio::runtime::Runtime, api: &HttpTrackerApi) -> ExitCode {
    match runtime.block_on(api.export_excel()) {
        Ok(reply) if reply.status == ReplyStatus::Success => {
            match reply.filename {
                Some(filename) => println!("Export successful! Download: {filename}"),
                None => println!("Export successful!"),
            }
            ExitCode::SUCCESS
        }
        Ok(reply) => {
            let message = reply
                .message
                .unwrap_or_else(|| "export failed".to_string());
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_cleanup(runtime: &tokio::runtime::Runtime, api: &HttpTrackerApi) -> ExitCode {
    match runtime.block_on(api.cleanup_data()) {
        Ok(reply) if reply.status == ReplyStatus::Success => {
            match reply.message {
                Some(message) => println!("{message}"),
                None => println!("Cleanup finished."),
            }
            ExitCode::SUCCESS
        }
        Ok(reply) => {
            let message = reply
                .message
                .unwrap_or_else(|| "cleanup failed".to_string());
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
