use crate::table::BenchmarkTable;
use serde::{Deserialize, Serialize};

/// Name of the independent variable column in every schema.
pub const SIZE_COLUMN: &str = "n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    NodeTree,
    LeafTree,
}

impl Variant {
    pub fn all() -> [Variant; 2] {
        [Variant::NodeTree, Variant::LeafTree]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Insert,
    SuccessfulSearch,
    FailedSearch,
    Delete,
}

impl Operation {
    pub fn all() -> [Operation; 4] {
        [
            Operation::Insert,
            Operation::SuccessfulSearch,
            Operation::FailedSearch,
            Operation::Delete,
        ]
    }
}

/// The role a column plays in a benchmark table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    /// the tree size `n`
    Size,
    /// median duration (in nanoseconds) of an operation on a variant
    Median(Variant, Operation),
}

/// Column naming used by the upstream benchmark.
///
/// - `Median`: `nodeTree_insert_median`, `leafTree_delete_median`, ...
/// - `Short`: `ins_node`, `find_fail_leaf`, ... (older benchmark output)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schema {
    Median,
    Short,
}

impl Schema {
    pub fn column(&self, role: ColumnRole) -> String {
        match role {
            ColumnRole::Size => SIZE_COLUMN.to_string(),
            ColumnRole::Median(variant, operation) => match self {
                Schema::Median => {
                    let variant = match variant {
                        Variant::NodeTree => "nodeTree",
                        Variant::LeafTree => "leafTree",
                    };
                    let operation = match operation {
                        Operation::Insert => "insert",
                        Operation::SuccessfulSearch => "successful_search",
                        Operation::FailedSearch => "unsuccessful_search",
                        Operation::Delete => "delete",
                    };
                    format!("{}_{}_median", variant, operation)
                }
                Schema::Short => {
                    let variant = match variant {
                        Variant::NodeTree => "node",
                        Variant::LeafTree => "leaf",
                    };
                    let operation = match operation {
                        Operation::Insert => "ins",
                        Operation::SuccessfulSearch => "find_ok",
                        Operation::FailedSearch => "find_fail",
                        Operation::Delete => "del",
                    };
                    format!("{}_{}", operation, variant)
                }
            },
        }
    }

    /// Returns all median columns of this schema, grouped by operation.
    pub fn duration_columns(&self) -> Vec<String> {
        Operation::all()
            .into_iter()
            .flat_map(|operation| {
                Variant::all().into_iter().map(move |variant| {
                    self.column(ColumnRole::Median(variant, operation))
                })
            })
            .collect()
    }

    /// Picks the schema with the most median columns present in `table`.
    /// Ties (including no match at all) go to `Schema::Median`.
    pub fn detect(table: &BenchmarkTable) -> Schema {
        let present = |schema: Schema| {
            schema
                .duration_columns()
                .iter()
                .filter(|column| table.column(column).is_some())
                .count()
        };
        if present(Schema::Short) > present(Schema::Median) {
            Schema::Short
        } else {
            Schema::Median
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names() {
        let role = ColumnRole::Median(Variant::NodeTree, Operation::Insert);
        assert_eq!(Schema::Median.column(role), "nodeTree_insert_median");
        assert_eq!(Schema::Short.column(role), "ins_node");

        let role =
            ColumnRole::Median(Variant::LeafTree, Operation::FailedSearch);
        assert_eq!(
            Schema::Median.column(role),
            "leafTree_unsuccessful_search_median"
        );
        assert_eq!(Schema::Short.column(role), "find_fail_leaf");

        assert_eq!(Schema::Short.column(ColumnRole::Size), "n");
    }

    #[test]
    fn duration_columns() {
        let columns = Schema::Short.duration_columns();
        assert_eq!(
            columns,
            vec![
                "ins_node",
                "ins_leaf",
                "find_ok_node",
                "find_ok_leaf",
                "find_fail_node",
                "find_fail_leaf",
                "del_node",
                "del_leaf",
            ]
        );
        assert!(Schema::Median
            .duration_columns()
            .iter()
            .all(|column| column.ends_with("_median")));
    }

    #[test]
    fn detect() {
        let csv = "n,ins_node,ins_leaf\n10,1,2\n";
        let table = BenchmarkTable::from_reader(csv.as_bytes(), "short.csv")
            .expect("table should parse");
        assert_eq!(Schema::detect(&table), Schema::Short);

        let csv = "n,nodeTree_insert_median,leafTree_insert_median\n10,1,2\n";
        let table = BenchmarkTable::from_reader(csv.as_bytes(), "median.csv")
            .expect("table should parse");
        assert_eq!(Schema::detect(&table), Schema::Median);

        let csv = "n,other\n10,1\n";
        let table = BenchmarkTable::from_reader(csv.as_bytes(), "other.csv")
            .expect("table should parse");
        assert_eq!(Schema::detect(&table), Schema::Median);
    }
}
