/// Read-only access to named, row-ordered string columns.
pub trait ColumnSource {
    fn column_names(&self) -> Vec<String>;

    /// Values of the named column in row order, or `None` if absent.
    fn column(&self, name: &str) -> Option<&[String]>;
}

/// A table that accepts new named columns.
pub trait ColumnSink: ColumnSource {
    /// Appends a named column. Replaces the values in place if a column
    /// of that name already exists.
    fn append_column(&mut self, name: &str, values: Vec<String>);
}

/// Insertion-ordered, column-major string table.
///
/// A minimal concrete container so the pipeline is usable without an
/// external dataframe; any type implementing the capability traits can
/// stand in for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<(String, Vec<String>)>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column<N, I, V>(mut self, name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.append_column(&name.into(), values);
        self
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|(n, _)| n == name)
    }
}

impl ColumnSource for Table {
    fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|(n, _)| n.clone()).collect()
    }

    fn column(&self, name: &str) -> Option<&[String]> {
        self.position(name)
            .map(|i| self.columns[i].1.as_slice())
    }
}

impl ColumnSink for Table {
    fn append_column(&mut self, name: &str, values: Vec<String>) {
        match self.position(name) {
            Some(i) => self.columns[i].1 = values,
            None => self.columns.push((name.to_owned(), values)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_returns_row_ordered_values() {
        let table = Table::new().with_column("name", ["a", "b", "c"]);
        assert_eq!(table.column("name").unwrap(), &["a", "b", "c"]);
    }

    #[test]
    fn test_column_absent_is_none() {
        let table = Table::new().with_column("name", ["a"]);
        assert!(table.column("other").is_none());
    }

    #[test]
    fn test_column_names_keep_insertion_order() {
        let table = Table::new()
            .with_column("b", ["1"])
            .with_column("a", ["2"]);
        assert_eq!(table.column_names(), vec!["b", "a"]);
    }

    #[test]
    fn test_append_column_replaces_existing() {
        let mut table = Table::new().with_column("x", ["old"]);
        table.append_column("x", vec!["new".to_owned()]);
        assert_eq!(table.column_names(), vec!["x"]);
        assert_eq!(table.column("x").unwrap(), &["new"]);
    }
}
