/// Constants used by performance classification.
pub mod classify {
    /// Default average threshold separating the two performance labels.
    pub const DEFAULT_THRESHOLD: f64 = 75.0;
    /// Label emitted when the average meets or exceeds the threshold.
    pub const LABEL_HIGH_PERFORMANCE: &str = "High Performance";
    /// Label emitted when the average falls below the threshold.
    pub const LABEL_NEEDS_IMPROVEMENT: &str = "Needs Improvement";
}

/// Constants used by ingestion when dispatching on file format.
pub mod ingestion {
    /// File extension treated as comma-separated tabular data
    /// (case-insensitive); everything else reads one token per line.
    pub const TABULAR_EXTENSION: &str = "csv";
}

/// Constants used by report rendering and persistence.
pub mod report {
    /// Default filename for the persisted report.
    pub const DEFAULT_REPORT_FILENAME: &str = "analysis_report.txt";
    /// Title line of the persisted report.
    pub const REPORT_TITLE: &str = "DATASET ANALYSIS REPORT";
    /// Title line of the console rendering.
    pub const CONSOLE_TITLE: &str = "DATASET ANALYSIS RESULTS";
    /// Section header for the numeric block.
    pub const NUMERIC_HEADER: &str = "NUMERICAL DATA STATISTICS:";
    /// Section header for the categorical block.
    pub const CATEGORICAL_HEADER: &str = "CATEGORICAL DATA ANALYSIS:";
    /// Width of the `=` banner rules.
    pub const BANNER_WIDTH: usize = 50;
    /// Width of the `-` section rules.
    pub const SECTION_RULE_WIDTH: usize = 30;
    /// Closing attribution line of the persisted report.
    pub const ATTRIBUTION_LINE: &str = "Report generated by Dataset Management System";
    /// Placeholder rendered on the console for values that were not computed.
    pub const NOT_AVAILABLE: &str = "N/A";
}

/// Constants used by the sample-input bootstrap in the CLI runner.
pub mod bootstrap {
    /// Default numeric input path checked (and created) by the runner.
    pub const DEFAULT_NUMERICAL_FILE: &str = "sample_data.csv";
    /// Default categorical input path checked (and created) by the runner.
    pub const DEFAULT_CATEGORICAL_FILE: &str = "categories.txt";
    /// Default report path used by the runner.
    pub const DEFAULT_REPORT_FILE: &str = "dataset_analysis_report.txt";
    /// Sample numeric content: twenty integer scores over two CSV rows.
    pub const SAMPLE_NUMERICAL_DATA: &str =
        "85,92,78,65,88,91,76,82,95,70\n73,89,81,67,94,79,86,90,68,84\n";
    /// Sample categorical content: twelve subject labels, five distinct.
    pub const SAMPLE_CATEGORICAL_DATA: &str = "Mathematics\nPhysics\nChemistry\nBiology\nMathematics\nPhysics\nComputer Science\nMathematics\nBiology\nChemistry\nPhysics\nMathematics\n";
}
