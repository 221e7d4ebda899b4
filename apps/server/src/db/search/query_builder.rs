//! SQL query builder for certificate searches.
//!
//! Builds the data and count queries for a `SearchCriteria`:
//! - substring filters on name/description (case-insensitive, LIKE-escaped)
//! - all-of tag matching via join + group-by + distinct-count
//! - multi-key ordering with a deterministic tie-break
//! - the pagination window (LIMIT/OFFSET)
//!
//! Both queries share the same filter clauses so the total count can never
//! drift from the predicate used for the page of rows.

use super::criteria::SearchCriteria;

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    TextArray(Vec<String>),
    Int(i64),
}

fn push_text(bind_params: &mut Vec<BindValue>, value: String) -> usize {
    bind_params.push(BindValue::Text(value));
    bind_params.len()
}

fn push_text_array(bind_params: &mut Vec<BindValue>, values: Vec<String>) -> usize {
    bind_params.push(BindValue::TextArray(values));
    bind_params.len()
}

fn push_int(bind_params: &mut Vec<BindValue>, value: i64) -> usize {
    bind_params.push(BindValue::Int(value));
    bind_params.len()
}

const SELECT_COLUMNS: &str = "SELECT c.id, c.name, c.description, c.price, c.duration, \
     c.create_date, c.last_update_date FROM gift_certificate c WHERE 1=1";

const COUNT_COLUMNS: &str = "SELECT COUNT(*) FROM gift_certificate c WHERE 1=1";

/// Query builder for certificate searches.
#[derive(Debug)]
pub struct CertificateQuery<'a> {
    criteria: &'a SearchCriteria,
}

impl<'a> CertificateQuery<'a> {
    pub fn new(criteria: &'a SearchCriteria) -> Self {
        Self { criteria }
    }

    /// Build the data query: filters + ordering + page window.
    pub fn build_sql(&self) -> (String, Vec<BindValue>) {
        let mut sql = String::from(SELECT_COLUMNS);
        let mut bind_params = Vec::new();

        self.push_filters(&mut sql, &mut bind_params);
        self.push_order_by(&mut sql);

        sql.push_str(&format!(
            " LIMIT {} OFFSET {}",
            self.criteria.page.limit(),
            self.criteria.page.offset()
        ));

        (sql, bind_params)
    }

    /// Build the count query: same filters, no ordering or window.
    pub fn build_count_sql(&self) -> (String, Vec<BindValue>) {
        let mut sql = String::from(COUNT_COLUMNS);
        let mut bind_params = Vec::new();

        self.push_filters(&mut sql, &mut bind_params);

        (sql, bind_params)
    }

    fn push_filters(&self, sql: &mut String, bind_params: &mut Vec<BindValue>) {
        if let Some(name) = &self.criteria.name {
            let idx = push_text(bind_params, format!("%{}%", escape_like_pattern(name)));
            sql.push_str(&format!(" AND c.name ILIKE ${} ESCAPE E'\\\\'", idx));
        }

        if let Some(description) = &self.criteria.description {
            let idx = push_text(
                bind_params,
                format!("%{}%", escape_like_pattern(description)),
            );
            sql.push_str(&format!(" AND c.description ILIKE ${} ESCAPE E'\\\\'", idx));
        }

        // All-of tag matching: a certificate qualifies only when the number
        // of distinct requested tags attached to it equals the size of the
        // (deduplicated) requested set. A name with no matching tag makes the
        // subquery unsatisfiable, which yields zero rows rather than an error.
        if !self.criteria.tags.is_empty() {
            let names: Vec<String> = self.criteria.tags.iter().cloned().collect();
            let cardinality = names.len() as i64;
            let names_idx = push_text_array(bind_params, names);
            let count_idx = push_int(bind_params, cardinality);
            sql.push_str(&format!(
                " AND c.id IN (SELECT ct.certificate_id FROM certificate_tag ct \
                 JOIN tag t ON t.id = ct.tag_id WHERE t.name = ANY(${}) \
                 GROUP BY ct.certificate_id HAVING COUNT(DISTINCT t.id) = ${})",
                names_idx, count_idx
            ));
        }
    }

    fn push_order_by(&self, sql: &mut String) {
        let mut order_by = Vec::new();

        // Fixed precedence: name before create date when both are requested.
        if let Some(direction) = self.criteria.order_by_name {
            order_by.push(format!("c.name {}", direction.as_sql()));
        }
        if let Some(direction) = self.criteria.order_by_create_date {
            order_by.push(format!("c.create_date {}", direction.as_sql()));
        }

        // Ensure deterministic ordering for pagination.
        order_by.push("c.id ASC".to_string());

        sql.push_str(" ORDER BY ");
        sql.push_str(&order_by.join(", "));
    }
}

fn escape_like_pattern(s: &str) -> String {
    // Escape SQL LIKE meta-characters so user input is treated literally.
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '%' | '_' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
