use crate::application::dto::{GraphRequest, GraphResponse};
use crate::graph_building::domain::{GraphView, PackageRecord, RawDescriptor};
use crate::graph_building::services::{PackageGraph, PackageNormalizer};
use crate::ports::inbound::PackageGraphPort;
use crate::ports::outbound::{InventoryReader, ProgressReporter};
use crate::shared::Result;

/// BuildPackageGraphUseCase - Core use case for building grouped package graphs
///
/// Orchestrates inventory acquisition, normalization, resolution and
/// aggregation using generic dependency injection for infrastructure.
///
/// # Type Parameters
/// * `IR` - InventoryReader implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildPackageGraphUseCase<IR, PR> {
    inventory_reader: IR,
    progress_reporter: PR,
}

impl<IR, PR> BuildPackageGraphUseCase<IR, PR>
where
    IR: InventoryReader,
    PR: ProgressReporter,
{
    /// Creates a new BuildPackageGraphUseCase with injected dependencies
    pub fn new(inventory_reader: IR, progress_reporter: PR) -> Self {
        Self {
            inventory_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// Dangling dependencies are reported as warnings and never abort the
    /// build; in strict mode the response is flagged instead.
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        // Step 1: Read and parse the inventory
        let descriptors = self.read_and_report_inventory(&request)?;

        // Step 2: Validate and canonicalize every descriptor
        let records = self.normalize_with_progress(&descriptors)?;
        let record_count = records.len();

        // Step 3: Resolve dependency references
        self.progress_reporter.report("🔗 Resolving dependencies...");
        let graph = PackageGraph::from_records(records)?;
        self.report_warnings(&graph);

        // Step 4: Aggregate into groups
        let view = graph.group_by(request.group_by);
        self.report_summary(&view, record_count, &request);

        let has_strict_violations = request.strict && !view.warnings().is_empty();
        Ok(GraphResponse::new(view, record_count, has_strict_violations))
    }

    fn read_and_report_inventory(&self, request: &GraphRequest) -> Result<Vec<RawDescriptor>> {
        self.progress_reporter.report(&format!(
            "📖 Loading package inventory from: {}",
            request.source.display_path().display()
        ));

        let descriptors = self
            .inventory_reader
            .read_and_parse_inventory(&request.source)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", descriptors.len()));

        Ok(descriptors)
    }

    fn normalize_with_progress(&self, descriptors: &[RawDescriptor]) -> Result<Vec<PackageRecord>> {
        let total = descriptors.len();
        let mut records = Vec::with_capacity(total);

        for (index, raw) in descriptors.iter().enumerate() {
            records.push(PackageNormalizer::normalize(index, raw)?);
            self.progress_reporter
                .report_progress(index + 1, total, raw.name.as_deref());
        }

        if total > 0 {
            self.progress_reporter
                .report_completion(&format!("✅ Validated {} package(s)", total));
        }

        Ok(records)
    }

    fn report_warnings(&self, graph: &PackageGraph) {
        for warning in graph.warnings() {
            self.progress_reporter.report_warning(&warning.to_string());
        }
    }

    fn report_summary(&self, view: &GraphView, record_count: usize, request: &GraphRequest) {
        self.progress_reporter.report(&format!(
            "📊 Grouped {} package(s) into {} group(s) by {}",
            record_count,
            view.len(),
            request.group_by
        ));

        let duplicated = view.duplicated_groups().count();
        if duplicated > 0 {
            self.progress_reporter.report(&format!(
                "   - Groups with duplicate installs: {}",
                duplicated
            ));
        }
        if !view.warnings().is_empty() {
            self.progress_reporter.report(&format!(
                "   - Dangling dependencies: {}",
                view.warnings().len()
            ));
        }
    }
}

impl<IR, PR> PackageGraphPort for BuildPackageGraphUseCase<IR, PR>
where
    IR: InventoryReader,
    PR: ProgressReporter,
{
    fn build_graph(&self, request: GraphRequest) -> Result<GraphResponse> {
        self.execute(request)
    }
}
