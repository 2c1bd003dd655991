use crate::config::TimeUnit;
use crate::schema::{Operation, Variant};

pub struct PlotFmt;

impl PlotFmt {
    pub fn report_title() -> &'static str {
        "Node Trees vs Leaf Trees: performance comparison"
    }

    pub fn x_label() -> &'static str {
        "tree size (n)"
    }

    pub fn variant_name(variant: Variant) -> &'static str {
        match variant {
            Variant::NodeTree => "Node Tree",
            Variant::LeafTree => "Leaf Tree",
        }
    }

    pub fn operation_name(operation: Operation) -> &'static str {
        match operation {
            Operation::Insert => "insertion",
            Operation::SuccessfulSearch => "successful search",
            Operation::FailedSearch => "failed search",
            Operation::Delete => "deletion",
        }
    }

    /// Panel title, prefixed by its position in the report: `a)`, `b)`, ...
    pub fn panel_title(index: usize, operation: Operation) -> String {
        let letter = (b'a' + (index % 26) as u8) as char;
        let mut name = Self::operation_name(operation).to_string();
        if let Some(first) = name.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        format!("{}) {} time", letter, name)
    }

    pub fn y_label(operation: Operation, unit: TimeUnit) -> String {
        format!(
            "median {} time ({})",
            Self::operation_name(operation),
            unit.symbol()
        )
    }
}
