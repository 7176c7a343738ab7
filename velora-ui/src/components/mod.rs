//! Dioxus RSX components for the Velora chat panel and dashboard.

mod chart_card;
mod chat_panel;
mod data_table;
mod empty_result;
mod hero;
mod insight_card;
mod loading_card;
mod parsed_badge;
mod risk_card;
mod stats_row;
mod status_badge;

pub use chart_card::ChartCard;
pub use chat_panel::ChatPanel;
pub use data_table::DataTable;
pub use empty_result::EmptyResult;
pub use hero::Hero;
pub use insight_card::InsightCard;
pub use loading_card::LoadingCard;
pub use parsed_badge::ParsedBadge;
pub use risk_card::RiskCard;
pub use stats_row::StatsRow;
pub use status_badge::StatusBadge;
