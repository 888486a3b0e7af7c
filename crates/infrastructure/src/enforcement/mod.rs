pub mod rule_table;

pub use rule_table::DynamicRuleTable;
