use dioxus::prelude::*;

use crate::catalog::comparison::{DATA_LAKE_DRAWBACKS, GATEWAY_BENEFITS, HEAD_TO_HEAD, STAKEHOLDER_QUOTE};

/// "Why not a data lake?" side-by-side and head-to-head table
#[component]
pub fn ComparisonView() -> Element {
    rsx! {
        div { class: "comparison",
            div { class: "section-caption", "WHY NOT DATA LAKE?" }
            div { class: "comparison-columns",
                div { class: "comparison-card drawbacks",
                    div { class: "comparison-title", "❌ Data Lake Approach" }
                    for argument in DATA_LAKE_DRAWBACKS.iter() {
                        div { key: "{argument.headline}", class: "comparison-point",
                            "• "
                            strong { "{argument.headline}" }
                            " — {argument.detail}"
                        }
                    }
                }
                div { class: "comparison-card benefits",
                    div { class: "comparison-title", "✓ MCP Gateway Approach" }
                    for argument in GATEWAY_BENEFITS.iter() {
                        div { key: "{argument.headline}", class: "comparison-point",
                            "• "
                            strong { "{argument.headline}" }
                            " — {argument.detail}"
                        }
                    }
                }
            }
            div { class: "comparison-quote", "{STAKEHOLDER_QUOTE}" }

            div { class: "section-caption", "HEAD-TO-HEAD COMPARISON" }
            table { class: "comparison-table",
                thead {
                    tr {
                        th { class: "criterion", "Criterion" }
                        th { class: "data-lake", "Data Lake" }
                        th { class: "gateway", "MCP" }
                    }
                }
                tbody {
                    for criterion in HEAD_TO_HEAD.iter() {
                        tr { key: "{criterion.name}",
                            td { class: "criterion", "{criterion.name}" }
                            td { class: "data-lake", "{criterion.data_lake}" }
                            td { class: "gateway", "{criterion.gateway}" }
                        }
                    }
                }
            }
        }
    }
}
