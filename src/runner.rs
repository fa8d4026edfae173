//! Sequential probe driver. Runs the fixed probe list once, records every
//! result in execution order and prints the summary.

use unicode_truncate::UnicodeTruncateStr;

use crate::probe::result::ProbeResult;
use crate::probe::{ApiClient, history, routing, upload};

/// Fixed execution order. Database reachability runs last so the history
/// endpoint has already been exercised once before it is inspected again.
pub const PROBE_ORDER: [Probe; 5] = [
    Probe::Connectivity,
    Probe::UploadAvailability,
    Probe::UploadMissingFile,
    Probe::UploadMissingService,
    Probe::DatabaseReachability,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Connectivity,
    UploadAvailability,
    UploadMissingFile,
    UploadMissingService,
    DatabaseReachability,
}

impl Probe {
    /// Name under which the result is recorded and reported.
    pub fn name(self) -> &'static str {
        match self {
            Probe::Connectivity => "history_endpoint",
            Probe::UploadAvailability => "upload_availability",
            Probe::UploadMissingFile => "file_validation",
            Probe::UploadMissingService => "service_validation",
            Probe::DatabaseReachability => "database_connectivity",
        }
    }

    pub async fn run(self, api: &ApiClient) -> ProbeResult {
        match self {
            Probe::Connectivity => history::connectivity(api).await,
            Probe::UploadAvailability => upload::availability(api).await,
            Probe::UploadMissingFile => upload::missing_file(api).await,
            Probe::UploadMissingService => upload::missing_service(api).await,
            Probe::DatabaseReachability => history::database_reachability(api).await,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Running,
    Completed,
}

pub struct Suite {
    api: ApiClient,
    state: RunState,
    results: Vec<(&'static str, ProbeResult)>,
}

impl Suite {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: RunState::NotStarted,
            results: Vec::new(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Recorded results, in execution order.
    pub fn results(&self) -> &[(&'static str, ProbeResult)] {
        &self.results
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.success).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Runs every probe exactly once in [`PROBE_ORDER`], prints the summary
    /// and returns whether all of them passed. One probe failing never stops
    /// the ones after it.
    pub async fn run(&mut self) -> bool {
        self.state = RunState::Running;
        self.results.clear();

        println!("Starting backend API probes");
        println!("Base URL: {}", self.api.base_url());
        println!("API root: {}", self.api.api_root());
        println!("Run time: {}", chrono::Local::now().to_rfc3339());
        println!();

        for probe in PROBE_ORDER {
            tracing::info!(probe = probe.name(), "running probe");
            let result = probe.run(&self.api).await;
            let icon = if result.success { "✅" } else { "❌" };
            println!("{icon} {}: {}", probe.name(), result.message);
            self.results.push((probe.name(), result));
        }

        self.state = RunState::Completed;
        self.print_summary();
        self.passed() == self.total()
    }

    fn print_summary(&self) {
        let name_width = self
            .results
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(10);

        println!();
        println!("{}", "=".repeat(60));
        println!("PROBE SUMMARY");
        println!("{}", "=".repeat(60));

        for (name, result) in &self.results {
            let verdict = if result.success { "✅ PASS" } else { "❌ FAIL" };
            println!(
                "{} {verdict} - {}",
                to_fixed_width(name, name_width),
                result.message
            );
        }

        println!();
        println!("Overall: {}/{} probes passed", self.passed(), self.total());
    }
}

fn to_fixed_width(input: &str, width: usize) -> String {
    let (truncated, _) = input.unicode_truncate(width);
    format!("{:<width$}", truncated, width = width)
}
