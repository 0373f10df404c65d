//! Static "data lake vs. gateway" comparison shown in the comparison view.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Argument {
    pub headline: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Criterion {
    pub name: &'static str,
    pub data_lake: &'static str,
    pub gateway: &'static str,
}

pub const DATA_LAKE_DRAWBACKS: &[Argument] = &[
    Argument { headline: "24hr latency", detail: "Snowflake runs behind" },
    Argument { headline: "Replication burden", detail: "Sync failures = support load" },
    Argument { headline: "Multiple truths", detail: "Data drift from golden sources" },
    Argument { headline: "Read-only", detail: "Can't support transactions" },
    Argument { headline: "Per-platform work", detail: "Each AI needs custom integration" },
];

pub const GATEWAY_BENEFITS: &[Argument] = &[
    Argument { headline: "Real-time", detail: "Direct API access to sources" },
    Argument { headline: "No replication", detail: "Uses existing MuleSoft APIs" },
    Argument { headline: "Golden sources", detail: "VCG, Billers stay authoritative" },
    Argument { headline: "Read + Write", detail: "Transactional capabilities" },
    Argument { headline: "Build once", detail: "All platforms share same gateway" },
];

pub const HEAD_TO_HEAD: &[Criterion] = &[
    Criterion { name: "Data Freshness", data_lake: "24-hour lag", gateway: "Real-time" },
    Criterion { name: "Maintenance", data_lake: "Ongoing sync", gateway: "None" },
    Criterion { name: "Source of Truth", data_lake: "Creates alternate", gateway: "Preserves golden" },
    Criterion { name: "Transactions", data_lake: "Read-only", gateway: "Read + Write" },
    Criterion { name: "Multi-Platform", data_lake: "Separate per platform", gateway: "Single gateway" },
    Criterion { name: "Time to Value", data_lake: "Long", gateway: "Fast" },
];

pub const STAKEHOLDER_QUOTE: &str = "\"We want to minimize any alternate truth for the data\" — Miles";
